use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by each renderer's palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    /// Accent green used by particles, links, cursor and highlights.
    Neon,
    NeonDim,

    Background,
    Surface,
    SurfaceRaised,
    Border,

    TextPrimary,
    TextSecondary,
    TextMuted,

    CursorDot,
    CursorOutline,
}

impl ThemeToken {
    /// CSS color for canvas and SVG renderers.
    pub fn css(self) -> &'static str {
        match self {
            Self::Neon => "#39ff14",
            Self::NeonDim => "rgba(57, 255, 20, 0.1)",
            Self::Background => "#050505",
            Self::Surface => "#111111",
            Self::SurfaceRaised => "#0f0f0f",
            Self::Border => "rgba(255, 255, 255, 0.1)",
            Self::TextPrimary => "#ffffff",
            Self::TextSecondary => "#9ca3af",
            Self::TextMuted => "#6b7280",
            Self::CursorDot => "#39ff14",
            Self::CursorOutline => "rgba(57, 255, 20, 0.5)",
        }
    }

    /// Opaque RGB triple, used where alpha is supplied separately.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::Neon | Self::NeonDim | Self::CursorDot | Self::CursorOutline => [0x39, 0xff, 0x14],
            Self::Background => [0x05, 0x05, 0x05],
            Self::Surface => [0x11, 0x11, 0x11],
            Self::SurfaceRaised => [0x0f, 0x0f, 0x0f],
            Self::Border => [0xff, 0xff, 0xff],
            Self::TextPrimary => [0xff, 0xff, 0xff],
            Self::TextSecondary => [0x9c, 0xa3, 0xaf],
            Self::TextMuted => [0x6b, 0x72, 0x80],
        }
    }
}
