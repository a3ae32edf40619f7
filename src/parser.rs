use crate::cursor::ByteCursor;
use crate::result::ParseResult;

/// Core parser trait for parser combinators
///
/// A parser consumes a cursor and either produces a value together with the
/// cursor just past it, or a [`crate::ParseFailure`]. Parsers never mutate
/// shared state, so running the same parser twice on the same cursor yields
/// the same outcome.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output>;
}

/// Any function from a cursor to a result is a parser
impl<'code, F, T> Parser<'code> for F
where
    F: Fn(ByteCursor<'code>) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, T> {
        self(cursor)
    }
}
