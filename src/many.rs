use crate::cursor::ByteCursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Apply `parser` until it fails or stops making progress
fn collect<'code, P>(parser: &P, cursor: ByteCursor<'code>) -> (Vec<P::Output>, ByteCursor<'code>)
where
    P: Parser<'code>,
{
    let mut results = Vec::new();
    let mut remainder = cursor;

    while let Ok((value, next)) = parser.parse(remainder) {
        // A zero-width match would repeat forever
        if next == remainder {
            break;
        }
        results.push(value);
        remainder = next;
    }

    (results, remainder)
}

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. Stops at the first failure, or at the first success that did
/// not advance the cursor.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(collect(&self.parser, cursor))
    }
}

/// Exclusive variant of [`Many`]
///
/// Behaves like `many`, except that when the attempt that ended the repetition
/// consumed input before failing, that failure is returned instead of being
/// swallowed. This is `many(p)` followed by a commit choice between one more
/// `p` and the items already collected.
pub struct XMany<P> {
    parser: P,
}

impl<P> XMany<P> {
    pub fn new(parser: P) -> Self {
        XMany { parser }
    }
}

impl<'code, P> Parser<'code> for XMany<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (results, remainder) = collect(&self.parser, cursor);

        match self.parser.parse(remainder) {
            Err(failure) if failure.remainder() != remainder => Err(failure),
            _ => Ok((results, remainder)),
        }
    }
}

/// Extension trait to add .many() and .x_many() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }

    fn x_many(self) -> XMany<Self> {
        XMany::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Convenience function to create an XMany parser
pub fn x_many<'code, P>(parser: P) -> XMany<P>
where
    P: Parser<'code>,
{
    XMany::new(parser)
}
