use std::io::{ErrorKind, Read};

use bytes::Bytes;
use tracing::{event, Level};

use crate::{ReadBuffer, ReadError, Request, RequestParser};

/// Options for a [`RequestReader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Size of the buffer before the first read.
    pub initial_capacity: usize,
    /// Largest size the buffer may grow to.
    pub max_capacity: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            initial_capacity: 8,
            max_capacity: 64 * 1024,
        }
    }
}

/// Read a request head from `source`.
pub fn request_from_reader<R: Read>(source: R) -> Result<Request, ReadError> {
    let mut reader = RequestReader::new(source);
    reader.read_request()?;

    let (request, _) = reader.into_parts()?;
    Ok(request)
}

/// Drives a [`RequestParser`] from a blocking byte source.
pub struct RequestReader<R> {
    source: R,
    options: ReaderOptions,
    buffer: ReadBuffer,
    parser: RequestParser,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        Self::with_options(source, ReaderOptions::default())
    }

    pub fn with_options(source: R, options: ReaderOptions) -> Self {
        Self {
            source,
            options,
            buffer: ReadBuffer::with_capacity(options.initial_capacity),
            parser: RequestParser::new(),
        }
    }

    pub fn parser(&self) -> &RequestParser {
        &self.parser
    }

    /// Read from the source until the request head is complete.
    ///
    /// Bytes following the head are left unconsumed, see [`Self::into_parts`].
    pub fn read_request(&mut self) -> Result<&Request, ReadError> {
        while !self.parser.is_done() {
            self.read_chunk()?;
        }

        event!(
            Level::DEBUG,
            remaining = self.buffer.len(),
            "request head complete"
        );

        self.parser.request().ok_or(ReadError::Truncated)
    }

    /// Split into the parsed request and any bytes read past the end of its head.
    pub fn into_parts(self) -> Result<(Request, Bytes), ReadError> {
        let request = self.parser.into_request().ok_or(ReadError::Truncated)?;
        Ok((request, self.buffer.into_filled()))
    }

    fn read_chunk(&mut self) -> Result<(), ReadError> {
        if self.buffer.is_full() {
            self.grow_buffer()?;
        }

        let read = match self.source.read(self.buffer.unfilled_mut()) {
            Ok(read) => read,
            Err(error) if error.kind() == ErrorKind::Interrupted => return Ok(()),
            Err(error) => {
                event!(Level::DEBUG, ?error, "failed to read from source");
                return Err(error.into());
            }
        };

        // Read of zero means the source has ended
        if read == 0 {
            event!(
                Level::DEBUG,
                state = ?self.parser.state(),
                pending = self.buffer.len(),
                "source ended before request was complete"
            );
            return Err(ReadError::Truncated);
        }

        event!(Level::TRACE, bytes = read, "received data");
        self.buffer.advance(read);

        let consumed = self.parser.parse(self.buffer.filled())?;
        self.buffer.consume(consumed);

        event!(
            Level::TRACE,
            consumed,
            state = ?self.parser.state(),
            "parsed data"
        );

        Ok(())
    }

    fn grow_buffer(&mut self) -> Result<(), ReadError> {
        let current = self.buffer.capacity();
        let limit = self.options.max_capacity;
        let capacity = current.saturating_mul(2).min(limit);

        if capacity <= current {
            event!(Level::DEBUG, limit, "request head too large");
            return Err(ReadError::TooLarge { limit });
        }

        event!(Level::TRACE, from = current, to = capacity, "growing buffer");
        self.buffer.grow(capacity);

        Ok(())
    }
}
