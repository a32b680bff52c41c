use folio_protocol::{Point, RenderCommand, ThemeToken};

use crate::config::EffectsConfig;
use crate::lifecycle::{ListenerKind, Listeners, Subscription};

/// Linear move of the outline indicator that holds its end value.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Glide {
    from: Point,
    to: Point,
    start_ms: f64,
    duration_ms: f64,
}

impl Glide {
    fn at(&self, now_ms: f64) -> Point {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        Point::new(
            self.from.x + (self.to.x - self.from.x) * t,
            self.from.y + (self.to.y - self.from.y) * t,
        )
    }

    fn is_settled(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }
}

/// Custom cursor: a dot pinned to the pointer and an outline that glides
/// after it.
#[derive(Debug)]
pub struct CursorTracker {
    listener: Option<Subscription>,
    dot: Option<Point>,
    outline: Option<Glide>,
    lag_ms: f64,
    dot_radius: f64,
    outline_radius: f64,
}

impl CursorTracker {
    /// Mount for a viewport of `viewport_width`. Narrow viewports (at or
    /// below the breakpoint) get a disabled tracker with no listener.
    pub fn mount(listeners: &mut Listeners, config: &EffectsConfig, viewport_width: f64) -> Self {
        let enabled = viewport_width > config.cursor_breakpoint;
        if !enabled {
            log::debug!(
                "viewport {viewport_width}px <= {}px, cursor follower disabled",
                config.cursor_breakpoint
            );
        }
        Self {
            listener: enabled.then(|| listeners.register(ListenerKind::PointerMove)),
            dot: None,
            outline: None,
            lag_ms: config.cursor_lag_ms,
            dot_radius: config.cursor_dot_radius,
            outline_radius: config.cursor_outline_radius,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.listener.is_some()
    }

    /// Pointer moved to `position` at time `now_ms`.
    pub fn on_pointer_move(&mut self, position: Point, now_ms: f64) {
        if !self.is_enabled() {
            return;
        }
        self.dot = Some(position);
        let from = self
            .outline
            .map(|glide| glide.at(now_ms))
            .unwrap_or(position);
        self.outline = Some(Glide {
            from,
            to: position,
            start_ms: now_ms,
            duration_ms: self.lag_ms,
        });
    }

    pub fn dot(&self) -> Option<Point> {
        self.dot
    }

    pub fn outline_at(&self, now_ms: f64) -> Option<Point> {
        self.outline.map(|glide| glide.at(now_ms))
    }

    /// Whether the outline is still gliding, i.e. the host should keep
    /// repainting.
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.outline.is_some_and(|glide| !glide.is_settled(now_ms))
    }

    pub fn render(&self, now_ms: f64) -> Vec<RenderCommand> {
        let mut commands = Vec::with_capacity(4);
        if !self.is_enabled() {
            return commands;
        }
        commands.push(RenderCommand::BeginGroup { id: "cursor".into() });
        if let Some(center) = self.outline_at(now_ms) {
            commands.push(RenderCommand::StrokeCircle {
                center,
                radius: self.outline_radius,
                color: ThemeToken::CursorOutline,
                width: 2.0,
                alpha: 1.0,
            });
        }
        if let Some(center) = self.dot {
            commands.push(RenderCommand::FillCircle {
                center,
                radius: self.dot_radius,
                color: ThemeToken::CursorDot,
                alpha: 1.0,
            });
        }
        commands.push(RenderCommand::EndGroup);
        commands
    }

    /// Remove the pointer listener.
    pub fn unmount(&mut self, listeners: &mut Listeners) {
        if let Some(listener) = self.listener.take() {
            listeners.release(listener);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted(width: f64) -> (Listeners, CursorTracker) {
        let mut listeners = Listeners::new();
        let tracker = CursorTracker::mount(&mut listeners, &EffectsConfig::default(), width);
        (listeners, tracker)
    }

    #[test]
    fn narrow_viewport_disables_follower() {
        let (listeners, mut tracker) = mounted(768.0);
        assert!(!tracker.is_enabled());
        assert!(listeners.is_empty());
        tracker.on_pointer_move(Point::new(5.0, 5.0), 0.0);
        assert_eq!(tracker.dot(), None);
        assert!(tracker.render(0.0).is_empty());
    }

    #[test]
    fn dot_follows_immediately_outline_lags() {
        let (_, mut tracker) = mounted(1280.0);
        tracker.on_pointer_move(Point::new(0.0, 0.0), 0.0);
        tracker.on_pointer_move(Point::new(100.0, 50.0), 1000.0);
        assert_eq!(tracker.dot(), Some(Point::new(100.0, 50.0)));
        assert_eq!(tracker.outline_at(1000.0), Some(Point::new(0.0, 0.0)));
        assert_eq!(tracker.outline_at(1250.0), Some(Point::new(50.0, 25.0)));
        assert_eq!(tracker.outline_at(1500.0), Some(Point::new(100.0, 50.0)));
        assert_eq!(tracker.outline_at(9000.0), Some(Point::new(100.0, 50.0)));
        assert!(tracker.is_animating(1250.0));
        assert!(!tracker.is_animating(1500.0));
    }

    #[test]
    fn retarget_starts_from_current_outline_position() {
        let (_, mut tracker) = mounted(1280.0);
        tracker.on_pointer_move(Point::new(0.0, 0.0), 0.0);
        tracker.on_pointer_move(Point::new(100.0, 0.0), 0.0);
        tracker.on_pointer_move(Point::new(100.0, 100.0), 250.0);
        assert_eq!(tracker.outline_at(250.0), Some(Point::new(50.0, 0.0)));
        assert_eq!(tracker.outline_at(750.0), Some(Point::new(100.0, 100.0)));
    }

    #[test]
    fn unmount_removes_listener() {
        let (mut listeners, mut tracker) = mounted(1280.0);
        assert_eq!(listeners.count(ListenerKind::PointerMove), 1);
        tracker.unmount(&mut listeners);
        assert!(listeners.is_empty());
        assert!(!tracker.is_enabled());
    }
}
