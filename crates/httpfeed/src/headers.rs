use std::collections::HashMap;

use crate::{find_crlf, ParseError};

/// Header fields of a request.
///
/// Names are case-insensitive, they're normalized to lowercase on every write and lookup.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Headers {
    fields: HashMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a single header line from the start of `buf`.
    ///
    /// Returns the number of bytes consumed, and if the empty line ending the header section was
    /// found. Consumes nothing if `buf` doesn't contain a full line yet.
    pub fn parse(&mut self, buf: &[u8]) -> Result<(usize, bool), ParseError> {
        let Some(end) = find_crlf(buf) else {
            return Ok((0, false));
        };

        // Empty line ends the header section
        if end == 0 {
            return Ok((2, true));
        }

        let line = String::from_utf8_lossy(&buf[..end]);
        let (name, value) = split_field(line.trim())?;
        validate_name(name)?;

        self.set(name, value);

        Ok((end + 2, false))
    }

    /// Get the value of a field, ignoring case of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Set the value of a field, replacing any previous value for the same name.
    pub fn set(&mut self, name: &str, value: &str) {
        self.fields
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields as normalized name and value pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn split_field(line: &str) -> Result<(&str, &str), ParseError> {
    let (name, value) = line
        .split_once(':')
        .ok_or(ParseError::MalformedHeaderLine)?;

    if name.is_empty() {
        return Err(ParseError::EmptyHeaderName);
    }

    // Obsolete framing, RFC 9112 requires rejecting this
    if name.ends_with(|c: char| c.is_whitespace()) {
        return Err(ParseError::WhitespaceBeforeColon);
    }

    Ok((name, value.trim()))
}

fn validate_name(name: &str) -> Result<(), ParseError> {
    match name.chars().find(|c| !is_token_char(*c)) {
        Some(c) => Err(ParseError::InvalidHeaderNameChar(c)),
        None => Ok(()),
    }
}

/// Characters allowed in a header name, see RFC 9110 section 5.6.2.
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~'
        )
}
