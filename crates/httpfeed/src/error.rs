use std::io;

use thiserror::Error;

/// Failed to parse a request from the given bytes.
///
/// Every variant is fatal for the request being parsed, reading more bytes will not recover it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request-line does not split into method, target, and version.
    #[error("malformed request-line: {0:?}")]
    MalformedRequestLine(String),

    /// Method contains something other than uppercase ASCII letters.
    #[error("invalid method: {0:?}")]
    InvalidMethod(String),

    /// Version token does not start with `HTTP`.
    #[error("unsupported protocol: {0:?}")]
    UnsupportedProtocol(String),

    /// Version token is not `1.1`.
    #[error("unsupported HTTP version: {0:?}")]
    UnsupportedVersion(String),

    /// Header line has no colon.
    #[error("malformed header line, missing ':'")]
    MalformedHeaderLine,

    /// Header name before the colon is empty.
    #[error("malformed header line, empty name")]
    EmptyHeaderName,

    /// Whitespace between the header name and the colon.
    #[error("malformed header line, whitespace before ':'")]
    WhitespaceBeforeColon,

    /// Header name contains a character outside of the token set.
    #[error("invalid character in header name: {0:?}")]
    InvalidHeaderNameChar(char),

    /// Parser was fed after it already completed.
    #[error("parser already complete")]
    ParserAlreadyComplete,
}

/// Failed to read a request from a source.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The received bytes are not a valid request.
    #[error("failed to parse request")]
    Parse(#[from] ParseError),

    /// Source ended before the request was complete.
    #[error("source ended before request was complete")]
    Truncated,

    /// Request head does not fit in the configured maximum buffer size.
    #[error("request head exceeds {limit} bytes")]
    TooLarge { limit: usize },

    /// Reading from the source failed.
    #[error("reading from source failed")]
    Io(#[from] io::Error),
}
