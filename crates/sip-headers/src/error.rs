use std::fmt;
use std::io;
use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing, rendering or transporting headers
#[derive(Error, Debug)]
pub enum Error {
    /// Header value did not match the header's grammar
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid SIP header syntax
    #[error("Invalid SIP header: {0}")]
    InvalidHeader(String),

    /// Invalid SIP URI
    #[error("Invalid SIP URI: {0}")]
    InvalidUri(String),

    /// JSON envelope names a different header than the one requested
    #[error("Header name mismatch: expected {expected}, found {found}")]
    HeaderNameMismatch {
        /// Canonical name of the requested header kind
        expected: String,
        /// Name carried by the envelope
        found: String,
    },

    /// Raw header bytes were not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Input/output error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Formatting error while rendering
    #[error("Formatting error")]
    Fmt(#[from] fmt::Error),

    /// JSON encoding error
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<nom::Err<nom::error::Error<&str>>> for Error {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Self {
        Error::ParseError(format!("Parsing failed: {err}"))
    }
}
