use thiserror::Error;

/// Errors raised by the country table library.
#[derive(Debug, Error)]
pub enum Error {
    /// A country was projected into a language that is neither supported nor
    /// present in the country's names.
    #[error("Unrecognized language name: '{0}'")]
    UnrecognizedLanguage(String),

    /// A flag image was requested in a size the flag service doesn't provide.
    #[error("Invalid flag size {0}, expected one of 16, 24, 32, 48, 64")]
    InvalidFlagSize(u32),

    /// A dataset record broke one of the dataset invariants.
    #[error("Invalid country record '{code}': {reason}")]
    InvalidRecord { code: String, reason: String },

    #[error("Failed to read countries data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse countries data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
