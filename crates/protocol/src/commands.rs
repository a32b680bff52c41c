use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// A single, stateless render instruction.
///
/// Effects emit a `Vec<RenderCommand>` per frame. Renderers consume the list
/// sequentially; each command carries all the data it needs, including its
/// own opacity, so no global alpha state leaks between commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Erase a region back to transparent.
    Clear { rect: Rect },

    /// Fill a circle.
    FillCircle {
        center: Point,
        radius: f64,
        color: ThemeToken,
        alpha: f64,
    },

    /// Outline a circle.
    StrokeCircle {
        center: Point,
        radius: f64,
        color: ThemeToken,
        width: f64,
        alpha: f64,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
        alpha: f64,
    },

    /// Radial gradient from `color` at `alpha` in the center to fully
    /// transparent at `radius * stop`.
    RadialGlow {
        center: Point,
        radius: f64,
        stop: f64,
        color: ThemeToken,
        alpha: f64,
    },

    /// Restrict subsequent drawing to a rectangular region.
    SetClip { rect: Rect },

    /// Remove the active clip region.
    ClearClip,

    /// Begin a logical group (particles, links, cursor). Renderers may use
    /// this for layering; it has no visual effect on its own.
    BeginGroup { id: String },

    /// End the current group.
    EndGroup,
}

impl RenderCommand {
    /// Opacity carried by a drawing command, `None` for state commands.
    pub fn alpha(&self) -> Option<f64> {
        match self {
            Self::FillCircle { alpha, .. }
            | Self::StrokeCircle { alpha, .. }
            | Self::DrawLine { alpha, .. }
            | Self::RadialGlow { alpha, .. } => Some(*alpha),
            Self::Clear { .. }
            | Self::SetClip { .. }
            | Self::ClearClip
            | Self::BeginGroup { .. }
            | Self::EndGroup => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_only_on_drawing_commands() {
        let line = RenderCommand::DrawLine {
            from: Point::new(0.0, 0.0),
            to: Point::new(1.0, 1.0),
            color: ThemeToken::Neon,
            width: 0.3,
            alpha: 0.05,
        };
        assert_eq!(line.alpha(), Some(0.05));
        assert_eq!(RenderCommand::ClearClip.alpha(), None);
    }

    #[test]
    fn serializes_with_variant_tag() {
        let cmd = RenderCommand::FillCircle {
            center: Point::new(3.0, 4.0),
            radius: 1.5,
            color: ThemeToken::Neon,
            alpha: 0.5,
        };
        let json = serde_json::to_string(&cmd).unwrap_or_default();
        assert!(json.starts_with("{\"FillCircle\""));
        assert!(json.contains("\"Neon\""));
    }
}
