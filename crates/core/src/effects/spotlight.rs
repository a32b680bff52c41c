use folio_protocol::{Point, Rect, RenderCommand, ThemeToken};

use crate::config::EffectsConfig;

/// Pointer-relative radial highlight on a hovered card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spotlight {
    /// Pointer position relative to the card's top-left corner.
    pub position: Point,
    pub opacity: f64,
}

impl Spotlight {
    /// Pointer moved over the card occupying `card`.
    pub fn on_pointer_move(&mut self, card: Rect, pointer: Point) {
        self.position = Point::new(pointer.x - card.x, pointer.y - card.y);
        self.opacity = 1.0;
    }

    pub fn on_pointer_leave(&mut self) {
        self.opacity = 0.0;
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// CSS `background` value for a DOM overlay.
    pub fn css_background(&self, config: &EffectsConfig) -> String {
        format!(
            "radial-gradient({radius}px circle at {x}px {y}px, rgba(57, 255, 20, {alpha}), transparent {stop}%)",
            radius = config.spotlight_radius,
            x = self.position.x,
            y = self.position.y,
            alpha = config.spotlight_alpha,
            stop = config.spotlight_stop * 100.0,
        )
    }

    /// Glow clipped to `card`, in the same coordinate space as `card`.
    pub fn render(&self, card: Rect, config: &EffectsConfig) -> Vec<RenderCommand> {
        if !self.is_visible() {
            return Vec::new();
        }
        vec![
            RenderCommand::SetClip { rect: card },
            RenderCommand::RadialGlow {
                center: Point::new(card.x + self.position.x, card.y + self.position.y),
                radius: config.spotlight_radius,
                stop: config.spotlight_stop,
                color: ThemeToken::Neon,
                alpha: config.spotlight_alpha * self.opacity,
            },
            RenderCommand::ClearClip,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_card_relative() {
        let mut spot = Spotlight::default();
        spot.on_pointer_move(Rect::new(100.0, 200.0, 300.0, 300.0), Point::new(150.0, 260.0));
        assert_eq!(spot.position, Point::new(50.0, 60.0));
        assert!(spot.is_visible());
    }

    #[test]
    fn leave_hides_glow() {
        let mut spot = Spotlight::default();
        let card = Rect::new(0.0, 0.0, 10.0, 10.0);
        spot.on_pointer_move(card, Point::new(1.0, 1.0));
        spot.on_pointer_leave();
        assert!(spot.render(card, &EffectsConfig::default()).is_empty());
    }

    #[test]
    fn glow_is_clipped_to_card() {
        let mut spot = Spotlight::default();
        let card = Rect::new(10.0, 10.0, 100.0, 100.0);
        spot.on_pointer_move(card, Point::new(20.0, 30.0));
        let commands = spot.render(card, &EffectsConfig::default());
        assert_eq!(commands.first(), Some(&RenderCommand::SetClip { rect: card }));
        assert_eq!(commands.last(), Some(&RenderCommand::ClearClip));
    }

    #[test]
    fn css_matches_page_gradient() {
        let mut spot = Spotlight::default();
        spot.on_pointer_move(Rect::new(0.0, 0.0, 10.0, 10.0), Point::new(4.0, 5.0));
        assert_eq!(
            spot.css_background(&EffectsConfig::default()),
            "radial-gradient(600px circle at 4px 5px, rgba(57, 255, 20, 0.15), transparent 40%)"
        );
    }
}
