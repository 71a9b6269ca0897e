//! Client error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong talking to the server or reading its payloads.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ClientErrorKind {
    /// The request could not be sent or the response could not be read.
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// The response body was not the expected JSON shape.
    #[display("Decode error: {}", _0)]
    Decode(String),
    /// A string that does not name one of the 64 squares.
    #[display("Invalid square identifier: {:?}", _0)]
    InvalidSquare(String),
    /// Terminal or file I/O failed.
    #[display("I/O error: {}", _0)]
    Io(String),
}

/// Client error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct ClientError {
    /// Error category and detail.
    pub kind: ClientErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ClientError {
    /// Creates a new client error with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: ClientErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error category.
    pub fn kind(&self) -> &ClientErrorKind {
        &self.kind
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::new(ClientErrorKind::Decode(err.to_string()))
        } else {
            Self::new(ClientErrorKind::Http(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(ClientErrorKind::Decode(err.to_string()))
    }
}

impl From<std::io::Error> for ClientError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(ClientErrorKind::Io(err.to_string()))
    }
}
