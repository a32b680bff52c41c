pub mod config;
pub mod content;
pub mod effects;
pub mod error;
pub mod html;
pub mod i18n;
pub mod lifecycle;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod svg;

pub use config::EffectsConfig;
pub use error::{Error, Result};
pub use i18n::{Direction, DocumentAttrs, Language, LanguageState};
pub use lifecycle::{FrameLoop, ListenerKind, Listeners, Subscription};
pub use nav::{NavMode, NavState, ScrollRequest, Section};
pub use page::Page;
pub use reveal::{RevealObserver, RevealTracker};
