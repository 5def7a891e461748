//! Incremental HTTP/1.1 request head parsing.
//!
//! [`RequestParser`] consumes whole lines from whatever bytes are available and reports how many
//! it used, so input can arrive in chunks of any size. [`RequestReader`] drives it from any
//! [`std::io::Read`] source.

mod buffer;
mod error;
mod headers;
mod reader;
mod request;

pub use self::{
    buffer::ReadBuffer,
    error::{ParseError, ReadError},
    headers::Headers,
    reader::{request_from_reader, ReaderOptions, RequestReader},
    request::{ParserState, Request, RequestParser},
};

const CRLF: &[u8] = b"\r\n";

/// Find the offset of the first CRLF in `buf`.
fn find_crlf(buf: &[u8]) -> Option<usize> {
    buf.windows(CRLF.len()).position(|window| window == CRLF)
}
