use crate::cursor::ByteCursor;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Category of a grammar-level failure
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A byte did not satisfy the matcher's predicate
    UnexpectedByte,
    /// The cursor reached its limit while a byte was required
    EndOfInput,
    /// A parser inside a `length` window tried to read past the window
    WindowOverrun,
    /// The guard of an `except` matched
    NegativeLookaheadViolation,
    /// A trailing digest did not match the computed checksum
    ChecksumMismatch,
    /// A `validate` predicate rejected the parsed value
    ValidationFailed,
    /// A `repeat` matched fewer times than its minimum
    BoundedCountUnmet,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::UnexpectedByte => "unexpected byte",
            FailureKind::EndOfInput => "end of input",
            FailureKind::WindowOverrun => "window overrun",
            FailureKind::NegativeLookaheadViolation => "negative lookahead violation",
            FailureKind::ChecksumMismatch => "checksum mismatch",
            FailureKind::ValidationFailed => "validation failed",
            FailureKind::BoundedCountUnmet => "bounded count unmet",
        };
        f.write_str(name)
    }
}

/// Failure outcome of a parser
///
/// Carries a human readable message, the set of things that would have been
/// accepted instead, and the furthest cursor reached. Alternation combinators
/// compare failures by [`ParseFailure::position`] to pick the most useful one.
#[derive(Debug, Clone)]
pub struct ParseFailure<'code> {
    kind: FailureKind,
    message: Cow<'static, str>,
    /// Ordered, without duplicates
    expectations: Vec<Cow<'static, str>>,
    remainder: ByteCursor<'code>,
}

impl<'code> ParseFailure<'code> {
    pub fn new(
        kind: FailureKind,
        message: impl Into<Cow<'static, str>>,
        remainder: ByteCursor<'code>,
    ) -> Self {
        ParseFailure {
            kind,
            message: message.into(),
            expectations: Vec::new(),
            remainder,
        }
    }

    /// Add an expectation unless it is already present
    pub fn with_expectation(mut self, expectation: impl Into<Cow<'static, str>>) -> Self {
        let expectation = expectation.into();
        if !self.expectations.contains(&expectation) {
            self.expectations.push(expectation);
        }
        self
    }

    pub fn with_expectations<I, E>(self, expectations: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Cow<'static, str>>,
    {
        expectations
            .into_iter()
            .fold(self, |failure, expectation| failure.with_expectation(expectation))
    }

    pub fn with_kind(self, kind: FailureKind) -> Self {
        ParseFailure { kind, ..self }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn expectations(&self) -> &[Cow<'static, str>] {
        &self.expectations
    }

    /// Cursor at the furthest position this failure reached
    pub fn remainder(&self) -> ByteCursor<'code> {
        self.remainder
    }

    pub fn position(&self) -> usize {
        self.remainder.position()
    }

    /// Pick the failure that progressed furthest into the input
    ///
    /// On a tie the expectations of both are merged under `self`'s message and
    /// kind, so the diagnostic lists every alternative tried at that position.
    pub fn furthest(self, other: ParseFailure<'code>) -> ParseFailure<'code> {
        if other.position() > self.position() {
            other
        } else if other.position() == self.position() {
            self.with_expectations(other.expectations)
        } else {
            self
        }
    }

    /// Hex dump of up to 8 bytes either side of the failure, with the failing
    /// byte bracketed
    pub fn hex_context(&self) -> String {
        let (data, position) = self.remainder.inner();
        let start = position.saturating_sub(8);
        let end = (position + 9).min(data.len());

        let mut out = format!("{:08X} |", start);
        for (offset, byte) in data[start..end].iter().enumerate() {
            if start + offset == position {
                out.push_str(&format!(" [{:02X}]", byte));
            } else {
                out.push_str(&format!(" {:02X}", byte));
            }
        }
        if position >= data.len() {
            out.push_str(" [EOF]");
        }
        out
    }
}

impl fmt::Display for ParseFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parsing failure: {}", self.message)?;
        if !self.expectations.is_empty() {
            write!(f, "; expected {}", self.expectations.join(" or "))?;
        }
        write!(f, " ({})", self.remainder)
    }
}

impl Error for ParseFailure<'_> {}

/// Errors surfaced outside of grammar evaluation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The grammar did not match; the text is the fully rendered diagnostic
    #[error("{diagnostic}")]
    Failed { position: usize, diagnostic: String },
    /// A value was requested from a failed result
    #[error("No value was parsed")]
    InvalidState,
    /// An entry point was called with arguments it cannot work with
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: Cow<'static, str>,
    },
}

impl From<ParseFailure<'_>> for ParseError {
    fn from(failure: ParseFailure<'_>) -> Self {
        ParseError::Failed {
            position: failure.position(),
            diagnostic: failure.to_string(),
        }
    }
}
