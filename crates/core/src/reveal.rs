//! One-way "reveal on scroll" tracking.

use std::collections::BTreeSet;

use folio_protocol::Rect;

use crate::lifecycle::{ListenerKind, Listeners, Subscription};

/// Fraction of `element` inside `viewport`, in `[0, 1]`.
///
/// Degenerate (zero-area) elements count as fully visible when their
/// origin lies inside the viewport, as an intersection observer reports.
pub fn visible_fraction(element: Rect, viewport: Rect) -> f64 {
    let area = element.area();
    if area <= 0.0 {
        let origin = folio_protocol::Point::new(element.x, element.y);
        return if viewport.contains(origin) { 1.0 } else { 0.0 };
    }
    element
        .intersect(&viewport)
        .map(|overlap| (overlap.area() / area).min(1.0))
        .unwrap_or(0.0)
}

/// Which observed elements have been revealed.
///
/// Revealing is permanent: nothing here ever clears a revealed key.
#[derive(Debug, Clone)]
pub struct RevealTracker<K: Ord> {
    threshold: f64,
    observed: BTreeSet<K>,
    revealed: BTreeSet<K>,
}

impl<K: Ord + Clone> RevealTracker<K> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            observed: BTreeSet::new(),
            revealed: BTreeSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn observe(&mut self, key: K) {
        self.observed.insert(key);
    }

    pub fn is_observed(&self, key: &K) -> bool {
        self.observed.contains(key)
    }

    /// Stop watching everything. Revealed keys stay revealed.
    pub fn disconnect(&mut self) {
        self.observed.clear();
    }

    /// An observed element crossed into view with `ratio` visible. Returns
    /// `true` only on the transition to revealed.
    pub fn on_intersection(&mut self, key: &K, ratio: f64) -> bool {
        if !self.observed.contains(key) || ratio <= 0.0 || ratio < self.threshold {
            return false;
        }
        self.revealed.insert(key.clone())
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

/// A mounted reveal watcher: the tracker plus its intersection
/// registration.
#[derive(Debug)]
pub struct RevealObserver<K: Ord> {
    tracker: RevealTracker<K>,
    subscription: Option<Subscription>,
}

impl<K: Ord + Clone> RevealObserver<K> {
    pub fn mount(
        listeners: &mut Listeners,
        threshold: f64,
        keys: impl IntoIterator<Item = K>,
    ) -> Self {
        let mut tracker = RevealTracker::new(threshold);
        keys.into_iter().for_each(|key| tracker.observe(key));
        Self {
            tracker,
            subscription: Some(listeners.register(ListenerKind::Intersection)),
        }
    }

    /// Content re-rendered (e.g. language switch): drop the old watcher and
    /// observe the new set of elements. Revealed state carries over.
    pub fn remount(&mut self, listeners: &mut Listeners, keys: impl IntoIterator<Item = K>) {
        self.unmount(listeners);
        keys.into_iter().for_each(|key| self.tracker.observe(key));
        self.subscription = Some(listeners.register(ListenerKind::Intersection));
    }

    pub fn is_connected(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn on_intersection(&mut self, key: &K, ratio: f64) -> bool {
        self.is_connected() && self.tracker.on_intersection(key, ratio)
    }

    /// Polling fallback for hosts without a native watcher: check every
    /// element rect against the viewport and return the newly revealed keys.
    pub fn poll(&mut self, elements: &[(K, Rect)], viewport: Rect) -> Vec<K> {
        elements
            .iter()
            .filter(|(key, rect)| self.on_intersection(key, visible_fraction(*rect, viewport)))
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.tracker.is_revealed(key)
    }

    pub fn tracker(&self) -> &RevealTracker<K> {
        &self.tracker
    }

    pub fn unmount(&mut self, listeners: &mut Listeners) {
        self.tracker.disconnect();
        if let Some(subscription) = self.subscription.take() {
            listeners.release(subscription);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect {
        x: 0.0,
        y: 0.0,
        w: 1000.0,
        h: 800.0,
    };

    #[test]
    fn fraction_of_partially_visible_element() {
        let element = Rect::new(0.0, 700.0, 1000.0, 400.0);
        assert!((visible_fraction(element, VIEWPORT) - 0.25).abs() < 1e-12);
        assert_eq!(visible_fraction(Rect::new(0.0, 900.0, 10.0, 10.0), VIEWPORT), 0.0);
        assert_eq!(visible_fraction(Rect::new(10.0, 10.0, 10.0, 10.0), VIEWPORT), 1.0);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut tracker = RevealTracker::new(0.1);
        tracker.observe("a");
        assert!(!tracker.on_intersection(&"a", 0.09));
        assert!(tracker.on_intersection(&"a", 0.1));
        assert!(!tracker.on_intersection(&"a", 0.5));
    }

    #[test]
    fn revealed_stays_revealed_after_leaving() {
        let mut listeners = Listeners::new();
        let mut observer = RevealObserver::mount(&mut listeners, 0.1, ["hero", "skills"]);
        let in_view = Rect::new(0.0, 100.0, 1000.0, 500.0);
        assert_eq!(observer.poll(&[("hero", in_view)], VIEWPORT), vec!["hero"]);
        let scrolled_away = Rect::new(0.0, -2000.0, 1000.0, 500.0);
        assert!(observer.poll(&[("hero", scrolled_away)], VIEWPORT).is_empty());
        assert!(observer.is_revealed(&"hero"));
        assert!(!observer.is_revealed(&"skills"));
    }

    #[test]
    fn unobserved_elements_are_ignored() {
        let mut listeners = Listeners::new();
        let mut observer = RevealObserver::mount(&mut listeners, 0.1, ["hero"]);
        assert!(!observer.on_intersection(&"footer", 1.0));
    }

    #[test]
    fn remount_keeps_revealed_and_one_registration() {
        let mut listeners = Listeners::new();
        let mut observer = RevealObserver::mount(&mut listeners, 0.1, ["a", "b"]);
        observer.on_intersection(&"a", 1.0);
        observer.remount(&mut listeners, ["a", "b"]);
        assert_eq!(listeners.count(ListenerKind::Intersection), 1);
        assert!(observer.is_revealed(&"a"));
        assert!(observer.on_intersection(&"b", 0.2));
    }

    #[test]
    fn unmount_disconnects() {
        let mut listeners = Listeners::new();
        let mut observer = RevealObserver::mount(&mut listeners, 0.1, ["a"]);
        observer.unmount(&mut listeners);
        assert!(listeners.is_empty());
        assert!(!observer.on_intersection(&"a", 1.0));
        assert!(!observer.is_revealed(&"a"));
    }
}
