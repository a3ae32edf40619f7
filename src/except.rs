use crate::cursor::ByteCursor;
use crate::error::{FailureKind, ParseFailure};
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that performs negative lookahead before running a parser
///
/// If `guard` matches at the current position the combinator fails without
/// consuming any input. Otherwise `parser` runs from the same position and its
/// outcome is returned. The guard's value is discarded either way.
pub struct Except<P, G> {
    parser: P,
    guard: G,
}

impl<P, G> Except<P, G> {
    pub fn new(parser: P, guard: G) -> Self {
        Except { parser, guard }
    }
}

impl<'code, P, G> Parser<'code> for Except<P, G>
where
    P: Parser<'code>,
    G: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, P::Output> {
        if self.guard.parse(cursor).is_ok() {
            return Err(ParseFailure::new(
                FailureKind::NegativeLookaheadViolation,
                "Excepted parser succeeded",
                cursor,
            )
            .with_expectation("other than the excepted input"));
        }
        self.parser.parse(cursor)
    }
}

/// Convenience function to create an Except parser
pub fn except<'code, P, G>(parser: P, guard: G) -> Except<P, G>
where
    P: Parser<'code>,
    G: Parser<'code>,
{
    Except::new(parser, guard)
}

/// Extension trait to add .except() method support for parsers
pub trait ExceptExt<'code>: Parser<'code> + Sized {
    fn except<G>(self, guard: G) -> Except<Self, G>
    where
        G: Parser<'code>,
    {
        Except::new(self, guard)
    }
}

/// Implement ExceptExt for all parsers
impl<'code, P> ExceptExt<'code> for P where P: Parser<'code> {}
