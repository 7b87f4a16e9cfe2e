// File: src/error.rs
use thiserror::Error;

/// Errors raised at the edges of the calculator (argument decoding, scheme
/// selection, report encoding). The letter-value computations themselves
/// never fail.
#[derive(Debug, Error)]
pub enum GematriaError {
    /// The scheme selector is neither Hebrew nor English.
    #[error("unknown scheme '{0}', expected 'hebrew' or 'english'")]
    UnknownScheme(String),

    /// A C string argument was a null pointer.
    #[error("null pointer passed for '{0}'")]
    NullArgument(&'static str),

    /// A C string argument was not valid UTF-8.
    #[error("argument '{0}' is not valid UTF-8")]
    InvalidUtf8(&'static str),

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GematriaError>;
