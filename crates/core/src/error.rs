/// Errors from the parsing entry points of the core crate.
///
/// Rendering and effects never fail; only user-supplied strings (language
/// tags, section ids, JSON configuration) can be rejected.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown language tag: {0}")]
    UnknownLanguage(String),
    #[error("unknown section id: {0}")]
    UnknownSection(String),
    #[error("invalid effects config: {0}")]
    InvalidConfig(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
