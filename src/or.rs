use crate::cursor::ByteCursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser also runs when the first succeeds without consuming
/// anything; if the second then fails, the first's empty match is kept. When
/// both fail the failure that got further into the input wins, and failures at
/// the same position have their expectations merged.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, O> {
        choose(&self.parser1, &self.parser2, cursor, false)
    }
}

/// Commit choice: like [`Or`], but never backtracks over consumed input
///
/// If the first parser fails after advancing the cursor, its failure is
/// returned and the second parser is not attempted.
pub struct XOr<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> XOr<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        XOr { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for XOr<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, O> {
        choose(&self.parser1, &self.parser2, cursor, true)
    }
}

fn choose<'code, P1, P2, O>(
    parser1: &P1,
    parser2: &P2,
    cursor: ByteCursor<'code>,
    commit: bool,
) -> ParseResult<'code, O>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    match parser1.parse(cursor) {
        Err(first) if commit && first.remainder() != cursor => Err(first),
        Err(first) => parser2
            .parse(cursor)
            .map_err(|second| first.furthest(second)),
        // Zero-width success: give the second parser a chance to consume
        Ok((value, remainder)) if remainder == cursor => {
            parser2.parse(cursor).or(Ok((value, remainder)))
        }
        success => success,
    }
}

/// Extension trait to add .or() and .xor() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }

    fn xor<P>(self, other: P) -> XOr<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        XOr::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

/// Convenience function to create an XOr parser
pub fn xor<'code, P1, P2, O>(parser1: P1, parser2: P2) -> XOr<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    XOr::new(parser1, parser2)
}
