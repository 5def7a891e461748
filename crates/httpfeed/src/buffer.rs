use bytes::{Bytes, BytesMut};

/// Growable buffer of bytes read from a source but not yet consumed.
///
/// The full length of the inner storage is the capacity, `filled` tracks how much of it holds
/// read data. Unconsumed data always starts at offset 0.
#[derive(Debug)]
pub struct ReadBuffer {
    data: BytesMut,
    filled: usize,
}

impl ReadBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: BytesMut::zeroed(capacity.max(1)),
            filled: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    pub fn is_full(&self) -> bool {
        self.filled == self.data.len()
    }

    /// Bytes read but not yet consumed.
    pub fn filled(&self) -> &[u8] {
        &self.data[..self.filled]
    }

    /// Space available for the next read.
    pub fn unfilled_mut(&mut self) -> &mut [u8] {
        &mut self.data[self.filled..]
    }

    /// Grow the capacity to `capacity`, keeping the filled bytes in place.
    pub fn grow(&mut self, capacity: usize) {
        if capacity > self.data.len() {
            self.data.resize(capacity, 0);
        }
    }

    /// Mark `count` bytes of the unfilled space as read.
    pub fn advance(&mut self, count: usize) {
        assert!(
            count <= self.data.len() - self.filled,
            "advanced past end of buffer"
        );
        self.filled += count;
    }

    /// Remove `count` bytes from the front, shifting the remainder to offset 0.
    pub fn consume(&mut self, count: usize) {
        assert!(count <= self.filled, "consumed more than was filled");

        self.data.copy_within(count..self.filled, 0);
        self.filled -= count;
    }

    /// Take the unconsumed bytes.
    pub fn into_filled(mut self) -> Bytes {
        self.data.truncate(self.filled);
        self.data.freeze()
    }
}
