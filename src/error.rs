use thiserror::Error;

/// Errors raised by the fallible surfaces around the core.
///
/// Tokenizing, case conversion and substitution never fail; this type only
/// covers configuration loading, override parsing and CLI plumbing.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Invalid override `{input}`: {message}")]
    Override { input: String, message: String },
    #[error("Unknown case `{0}`")]
    UnknownCase(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }
}
