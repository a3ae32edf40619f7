use crate::cursor::ByteCursor;
use crate::error::{ParseError, ParseFailure};

/// Outcome of running a parser: the value and the cursor just past it, or a failure
pub type ParseResult<'code, T> = Result<(T, ByteCursor<'code>), ParseFailure<'code>>;

/// Accessors shared by both outcomes of a [`ParseResult`]
pub trait ParseResultExt<'code, T> {
    fn was_successful(&self) -> bool;

    /// Cursor after the value on success, furthest position reached on failure
    fn remainder(&self) -> ByteCursor<'code>;

    /// The parsed value, or [`ParseError::InvalidState`] on a failure
    fn value(&self) -> Result<&T, ParseError>;
}

impl<'code, T> ParseResultExt<'code, T> for ParseResult<'code, T> {
    fn was_successful(&self) -> bool {
        self.is_ok()
    }

    fn remainder(&self) -> ByteCursor<'code> {
        match self {
            Ok((_, remainder)) => *remainder,
            Err(failure) => failure.remainder(),
        }
    }

    fn value(&self) -> Result<&T, ParseError> {
        match self {
            Ok((value, _)) => Ok(value),
            Err(_) => Err(ParseError::InvalidState),
        }
    }
}
