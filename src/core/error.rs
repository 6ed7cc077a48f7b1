use thiserror::Error;

/// Errors raised at the edges of the particle core.
///
/// The per-frame step itself never fails; these only come from building a
/// field, decoding landmark arrays handed in from JS, or parsing a color.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("unknown variant '{0}' (expected classic, glyphs or words)")]
    UnknownVariant(String),

    #[error("invalid field config: {0}")]
    InvalidConfig(&'static str),

    #[error("expected {expected} landmark values, got {got}")]
    LandmarkCount { expected: usize, got: usize },

    #[error("invalid color '{0}'")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, FieldError>;
