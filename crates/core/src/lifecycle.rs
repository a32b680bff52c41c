//! Registration bookkeeping for host callbacks.
//!
//! Every listener, observer or pending frame request a component asks the
//! host for is recorded here and must be released on teardown. Hosts pair
//! each [`Subscription`] with the real handle (a closure, an observer, a
//! `requestAnimationFrame` id) and drop both together.

use std::collections::BTreeMap;

/// What kind of host callback a subscription stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerKind {
    AnimationFrame,
    Resize,
    PointerMove,
    Intersection,
    Click,
    Scroll,
}

/// Proof of one live registration. Not `Clone`: releasing consumes it.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a subscription must be released on teardown"]
pub struct Subscription {
    id: u64,
    kind: ListenerKind,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

/// Ledger of live registrations.
#[derive(Debug, Default)]
pub struct Listeners {
    next_id: u64,
    active: BTreeMap<u64, ListenerKind>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: ListenerKind) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.active.insert(id, kind);
        log::trace!("register {kind:?} #{id}");
        Subscription { id, kind }
    }

    pub fn release(&mut self, subscription: Subscription) {
        if self.active.remove(&subscription.id).is_none() {
            log::warn!(
                "released unknown {:?} #{}",
                subscription.kind,
                subscription.id
            );
        }
    }

    /// Total live registrations.
    pub fn active(&self) -> usize {
        self.active.len()
    }

    pub fn count(&self, kind: ListenerKind) -> usize {
        self.active.values().filter(|k| **k == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// A self re-arming per-frame task with an explicit cancel.
///
/// `start` arms the first frame request. The host calls [`FrameLoop::fire`]
/// when that frame arrives; it consumes the request and re-arms the next
/// one. [`FrameLoop::cancel`] releases whatever request is pending, after
/// which `fire` is a no-op.
#[derive(Debug)]
pub struct FrameLoop {
    pending: Option<Subscription>,
    frames: u64,
}

impl FrameLoop {
    pub fn start(listeners: &mut Listeners) -> Self {
        Self {
            pending: Some(listeners.register(ListenerKind::AnimationFrame)),
            frames: 0,
        }
    }

    /// A frame arrived. Returns `false` if the loop was cancelled, in which
    /// case the caller must not draw.
    pub fn fire(&mut self, listeners: &mut Listeners) -> bool {
        let Some(request) = self.pending.take() else {
            return false;
        };
        listeners.release(request);
        self.frames += 1;
        self.pending = Some(listeners.register(ListenerKind::AnimationFrame));
        true
    }

    pub fn cancel(&mut self, listeners: &mut Listeners) {
        if let Some(request) = self.pending.take() {
            listeners.release(request);
            log::debug!("frame loop cancelled after {} frames", self.frames);
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of frames fired so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Id of the pending request, for hosts that key real handles by it.
    pub fn pending_id(&self) -> Option<u64> {
        self.pending.as_ref().map(Subscription::id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_release() {
        let mut listeners = Listeners::new();
        let a = listeners.register(ListenerKind::Resize);
        let b = listeners.register(ListenerKind::PointerMove);
        assert_ne!(a.id(), b.id());
        assert_eq!(listeners.active(), 2);
        listeners.release(a);
        assert_eq!(listeners.count(ListenerKind::Resize), 0);
        listeners.release(b);
        assert!(listeners.is_empty());
    }

    #[test]
    fn frame_loop_keeps_exactly_one_request_pending() {
        let mut listeners = Listeners::new();
        let mut frames = FrameLoop::start(&mut listeners);
        for _ in 0..5 {
            assert!(frames.fire(&mut listeners));
            assert_eq!(listeners.count(ListenerKind::AnimationFrame), 1);
        }
        assert_eq!(frames.frames(), 5);
    }

    #[test]
    fn cancel_releases_pending_request() {
        let mut listeners = Listeners::new();
        let mut frames = FrameLoop::start(&mut listeners);
        frames.fire(&mut listeners);
        frames.cancel(&mut listeners);
        assert!(listeners.is_empty());
        assert!(!frames.is_running());
        assert!(!frames.fire(&mut listeners));
        assert!(listeners.is_empty());
    }

    #[test]
    fn cancel_twice_is_harmless() {
        let mut listeners = Listeners::new();
        let mut frames = FrameLoop::start(&mut listeners);
        frames.cancel(&mut listeners);
        frames.cancel(&mut listeners);
        assert!(listeners.is_empty());
    }
}
