use crate::error::{FailureKind, ParseError, ParseFailure};
use std::fmt;

/// Immutable positioned view over a byte buffer
///
/// A cursor represents the unread tail of `data` starting at `position` and
/// bounded by `limit`. Advancing returns a new cursor; the buffer is never
/// touched, so saved cursors stay valid and can be used to backtrack.
///
/// The `limit` lets a cursor act as a window over a fixed-size field (see
/// [`crate::length`]). Positions are always absolute offsets into `data`, even
/// inside a window, so diagnostics and checksum spans refer to the original buffer.
#[derive(Debug, Copy, Clone)]
pub struct ByteCursor<'code> {
    data: &'code [u8],
    /// Absolute byte offset of the next unread byte
    position: usize,
    /// Exclusive upper bound for reads, never beyond `data.len()`
    limit: usize,
}

impl<'code> ByteCursor<'code> {
    pub fn new(data: &'code [u8]) -> Self {
        ByteCursor {
            data,
            position: 0,
            limit: data.len(),
        }
    }

    /// Create a cursor over `len` bytes of `data` starting at `offset`
    ///
    /// Returns [`ParseError::InvalidArgument`] when the range does not fit in
    /// the buffer.
    pub fn with_range(data: &'code [u8], offset: usize, len: usize) -> Result<Self, ParseError> {
        if offset > data.len() {
            return Err(ParseError::InvalidArgument {
                name: "offset",
                reason: format!("offset {} outside of buffer of {} bytes", offset, data.len()).into(),
            });
        }
        match offset.checked_add(len) {
            Some(end) if end <= data.len() => Ok(ByteCursor {
                data,
                position: offset,
                limit: end,
            }),
            _ => Err(ParseError::InvalidArgument {
                name: "len",
                reason: format!(
                    "range {}+{} outside of buffer of {} bytes",
                    offset,
                    len,
                    data.len()
                )
                .into(),
            }),
        }
    }

    /// Get the byte at the current position
    ///
    /// Fails with [`FailureKind::EndOfInput`] at the limit.
    pub fn value(&self) -> Result<u8, ParseFailure<'code>> {
        if self.is_eos() {
            return Err(ParseFailure::new(
                FailureKind::EndOfInput,
                "Unexpected end of input reached",
                *self,
            ));
        }
        Ok(self.data[self.position])
    }

    /// Advance by one byte. At the end of input the cursor stays where it is.
    pub fn next(self) -> Self {
        if self.is_eos() {
            return self;
        }
        ByteCursor {
            position: self.position + 1,
            ..self
        }
    }

    /// Advance by `count` bytes, stopping at the limit
    pub fn skip(self, count: usize) -> Self {
        ByteCursor {
            position: self.position.saturating_add(count).min(self.limit),
            ..self
        }
    }

    /// Restrict reads to the next `len` bytes
    ///
    /// The window never extends past the current limit. Reading past it
    /// reports end of input, just like the end of the buffer.
    pub fn windowed(self, len: usize) -> Self {
        ByteCursor {
            limit: self.position.saturating_add(len).min(self.limit),
            ..self
        }
    }

    pub fn is_eos(&self) -> bool {
        self.position >= self.limit
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of bytes left before the limit
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    /// The whole underlying buffer, independent of position and window
    pub fn source(&self) -> &'code [u8] {
        self.data
    }

    /// Consume the cursor and return the buffer and current position
    pub fn inner(self) -> (&'code [u8], usize) {
        (self.data, self.position)
    }
}

// The limit is deliberately not compared: a window and its parent at the same
// offset are the same place in the input.
impl PartialEq for ByteCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.data, other.data) && self.position == other.position
    }
}

impl Eq for ByteCursor<'_> {}

impl fmt::Display for ByteCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position {}", self.position)
    }
}
