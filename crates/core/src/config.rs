use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::nav::NavMode;

/// Upper bound on `particle_count`; links are checked pairwise every frame.
pub const MAX_PARTICLES: usize = 1000;

/// Tunables for the decorative effects.
///
/// Every field has a default matching the shipped page, so a partial JSON
/// object only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Number of particles allocated on mount.
    pub particle_count: usize,
    /// Velocity components are drawn from `[-max_speed, max_speed)` px/frame.
    pub max_speed: f64,
    /// Radii are drawn from `[0, max_radius)`.
    pub max_radius: f64,
    /// Particle opacity band `[min, max)`.
    pub opacity_min: f64,
    pub opacity_max: f64,
    /// Pairs closer than this (px) get a connecting line.
    pub link_distance: f64,
    /// Opacity of a link between two coincident particles.
    pub link_alpha: f64,
    pub link_width: f64,
    /// Opacity of the whole background layer the particles are drawn on.
    pub layer_opacity: f64,

    /// Viewports at or below this width (px) disable the cursor follower.
    pub cursor_breakpoint: f64,
    /// Time the outline takes to reach the pointer.
    pub cursor_lag_ms: f64,
    pub cursor_dot_radius: f64,
    pub cursor_outline_radius: f64,

    /// Visible fraction at which a region is revealed.
    pub reveal_threshold: f64,

    pub spotlight_radius: f64,
    pub spotlight_alpha: f64,
    /// Gradient stop (fraction of the radius) where the glow fades out.
    pub spotlight_stop: f64,

    pub nav_mode: NavMode,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            particle_count: 40,
            max_speed: 0.15,
            max_radius: 2.0,
            opacity_min: 0.1,
            opacity_max: 0.6,
            link_distance: 80.0,
            link_alpha: 0.1,
            link_width: 0.3,
            layer_opacity: 0.3,
            cursor_breakpoint: 768.0,
            cursor_lag_ms: 500.0,
            cursor_dot_radius: 4.0,
            cursor_outline_radius: 20.0,
            reveal_threshold: 0.1,
            spotlight_radius: 600.0,
            spotlight_alpha: 0.15,
            spotlight_stop: 0.4,
            nav_mode: NavMode::ClickOnly,
        }
    }
}

impl EffectsConfig {
    /// Parse and validate a JSON configuration object.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.particle_count > MAX_PARTICLES {
            return Err(Error::InvalidConfig(format!(
                "particle_count must be at most {MAX_PARTICLES}, got {}",
                self.particle_count
            )));
        }

        let non_negative = [
            ("max_speed", self.max_speed),
            ("max_radius", self.max_radius),
            ("link_distance", self.link_distance),
            ("link_width", self.link_width),
            ("cursor_breakpoint", self.cursor_breakpoint),
            ("cursor_lag_ms", self.cursor_lag_ms),
            ("cursor_dot_radius", self.cursor_dot_radius),
            ("cursor_outline_radius", self.cursor_outline_radius),
            ("spotlight_radius", self.spotlight_radius),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let unit = [
            ("opacity_min", self.opacity_min),
            ("opacity_max", self.opacity_max),
            ("link_alpha", self.link_alpha),
            ("layer_opacity", self.layer_opacity),
            ("spotlight_alpha", self.spotlight_alpha),
            ("spotlight_stop", self.spotlight_stop),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        if self.opacity_min > self.opacity_max {
            return Err(Error::InvalidConfig(format!(
                "opacity band is inverted: {} > {}",
                self.opacity_min, self.opacity_max
            )));
        }
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "reveal_threshold must be within (0, 1], got {}",
                self.reveal_threshold
            )));
        }
        Ok(())
    }
}
