use crate::{find_crlf, Headers, ParseError};

/// A parsed request head.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub target: String,
    /// Protocol version without the `HTTP/` prefix, always `1.1`.
    pub version: String,
    pub headers: Headers,
}

/// Progress of a [`RequestParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    AwaitingRequestLine,
    AwaitingHeaders,
    Done,
}

/// Resumable request head parser.
///
/// The parser never reads from a source itself. The caller gives it whatever bytes it has so far
/// and removes the amount the parser reports as consumed, keeping the rest for the next call.
#[derive(Debug)]
pub struct RequestParser {
    state: ParserState,
    request: Request,
}

impl Default for RequestParser {
    fn default() -> Self {
        Self {
            state: ParserState::AwaitingRequestLine,
            request: Request::default(),
        }
    }
}

impl RequestParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == ParserState::Done
    }

    /// Parse a single line from the start of `buf`.
    ///
    /// Returns the number of bytes consumed, which is always either 0 or the length of a whole
    /// CRLF-terminated line. On error the parser is left as is, and should be discarded.
    pub fn feed(&mut self, buf: &[u8]) -> Result<usize, ParseError> {
        match self.state {
            ParserState::AwaitingRequestLine => {
                let Some(end) = find_crlf(buf) else {
                    return Ok(0);
                };

                let line = String::from_utf8_lossy(&buf[..end]);
                let (method, target, version) = parse_request_line(&line)?;

                self.request.method = method.to_string();
                self.request.target = target.to_string();
                self.request.version = version.to_string();
                self.state = ParserState::AwaitingHeaders;

                Ok(end + 2)
            }
            ParserState::AwaitingHeaders => {
                let (consumed, done) = self.request.headers.parse(buf)?;

                if done {
                    self.state = ParserState::Done;
                }

                Ok(consumed)
            }
            ParserState::Done => Err(ParseError::ParserAlreadyComplete),
        }
    }

    /// Parse as many whole lines from `buf` as are available.
    ///
    /// Stops when the parser is done or no further complete line is available, returning the
    /// total number of bytes consumed.
    pub fn parse(&mut self, buf: &[u8]) -> Result<usize, ParseError> {
        let mut total = 0;

        while !self.is_done() {
            let consumed = self.feed(&buf[total..])?;
            if consumed == 0 {
                break;
            }

            total += consumed;
        }

        Ok(total)
    }

    /// Get the parsed request, if parsing is done.
    pub fn request(&self) -> Option<&Request> {
        self.is_done().then_some(&self.request)
    }

    /// Take the parsed request, if parsing is done.
    pub fn into_request(self) -> Option<Request> {
        self.is_done().then_some(self.request)
    }
}

fn parse_request_line(line: &str) -> Result<(&str, &str, &str), ParseError> {
    let malformed = || ParseError::MalformedRequestLine(line.to_string());

    let parts: Vec<&str> = line.split(' ').collect();
    let &[method, target, version] = parts.as_slice() else {
        return Err(malformed());
    };

    if method.is_empty() || !method.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(ParseError::InvalidMethod(method.to_string()));
    }

    // Target is opaque, but must be present
    if target.is_empty() {
        return Err(malformed());
    }

    let (protocol, version) = version.split_once('/').ok_or_else(malformed)?;
    if version.contains('/') {
        return Err(malformed());
    }

    if protocol != "HTTP" {
        return Err(ParseError::UnsupportedProtocol(protocol.to_string()));
    }

    if version != "1.1" {
        return Err(ParseError::UnsupportedVersion(version.to_string()));
    }

    Ok((method, target, version))
}
