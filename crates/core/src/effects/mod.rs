//! Decorative effects. Each one is pure state plus a `RenderCommand`
//! emitter; hosts feed it events and paint what it returns.

pub mod cursor;
pub mod particles;
pub mod spotlight;

pub use cursor::CursorTracker;
pub use particles::{Link, Particle, ParticleField, ParticleLayer};
pub use spotlight::Spotlight;
