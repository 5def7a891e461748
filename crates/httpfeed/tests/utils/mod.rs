#![allow(dead_code)]

use std::io::{self, Read};

use anyhow::{bail, Error};
use httpfeed::{ParseError, Request, RequestParser};

pub const COFFEE_REQUEST: &[u8] =
    b"GET /coffee HTTP/1.1\r\nHost: localhost:42069\r\nUser-Agent: curl/7.81.0\r\n\r\n";

/// Source that returns at most `chunk_size` bytes per read.
pub struct ChunkReader {
    data: Vec<u8>,
    position: usize,
    chunk_size: usize,
}

impl ChunkReader {
    pub fn new(data: impl Into<Vec<u8>>, chunk_size: usize) -> Self {
        Self {
            data: data.into(),
            position: 0,
            chunk_size,
        }
    }
}

impl Read for ChunkReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = self.data.len() - self.position;
        let count = remaining.min(self.chunk_size).min(buf.len());

        buf[..count].copy_from_slice(&self.data[self.position..self.position + count]);
        self.position += count;

        Ok(count)
    }
}

/// Source that fails every read after handing out its data.
pub struct FailingReader {
    data: Option<Vec<u8>>,
}

impl FailingReader {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Some(data.into()),
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(data) = self.data.take() else {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
        };

        // Keep it simple, tests give less data than the initial buffer
        let count = data.len().min(buf.len());
        buf[..count].copy_from_slice(&data[..count]);

        Ok(count)
    }
}

/// Feed `data` to a fresh parser the way a driver would, `chunk_size` bytes at a time.
pub fn when_fed_in_chunks(data: &[u8], chunk_size: usize) -> Result<Request, Error> {
    let mut parser = RequestParser::new();
    let mut pending = Vec::new();

    for chunk in data.chunks(chunk_size) {
        pending.extend_from_slice(chunk);

        let consumed = parser.parse(&pending)?;
        then_consumed_whole_lines(&pending, consumed)?;
        pending.drain(..consumed);

        if parser.is_done() {
            break;
        }
    }

    match parser.into_request() {
        Some(request) => Ok(request),
        None => bail!("parser did not complete"),
    }
}

/// Feed `data` all at once, returning the first error.
pub fn when_fed(data: &[u8]) -> Result<usize, ParseError> {
    RequestParser::new().parse(data)
}

pub fn then_consumed_whole_lines(data: &[u8], consumed: usize) -> Result<(), Error> {
    if consumed > data.len() {
        bail!("consumed {} of {} bytes", consumed, data.len());
    }

    if consumed != 0 && !data[..consumed].ends_with(b"\r\n") {
        bail!("consumed a partial line");
    }

    Ok(())
}

pub fn then_is_coffee_request(request: &Request) {
    assert_eq!(request.method, "GET");
    assert_eq!(request.target, "/coffee");
    assert_eq!(request.version, "1.1");
    assert_eq!(request.headers.len(), 2);
    assert_eq!(request.headers.get("host"), Some("localhost:42069"));
    assert_eq!(request.headers.get("user-agent"), Some("curl/7.81.0"));
}
