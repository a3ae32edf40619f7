use crate::cursor::ByteCursor;
use crate::except::Except;
use crate::many::Many;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser that collects items until a terminator matches, consuming the terminator
///
/// Equivalent to `many(except(parser, terminator))` followed by `terminator`.
/// The terminator's value is dropped. If the terminator never appears the
/// failure of the terminator at the stop position is returned.
pub struct Until<P, T> {
    items: Many<Except<P, T>>,
    terminator: T,
}

impl<P, T: Clone> Until<P, T> {
    pub fn new(parser: P, terminator: T) -> Self {
        Until {
            items: Many::new(Except::new(parser, terminator.clone())),
            terminator,
        }
    }
}

impl<'code, P, T> Parser<'code> for Until<P, T>
where
    P: Parser<'code>,
    T: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (items, cursor) = self.items.parse(cursor)?;
        let (_, cursor) = self.terminator.parse(cursor)?;
        Ok((items, cursor))
    }
}

/// Convenience function to create an Until parser
pub fn until<'code, P, T>(parser: P, terminator: T) -> Until<P, T>
where
    P: Parser<'code>,
    T: Parser<'code> + Clone,
{
    Until::new(parser, terminator)
}

/// Extension trait to add .until() method support for parsers
pub trait UntilExt<'code>: Parser<'code> + Sized {
    fn until<T>(self, terminator: T) -> Until<Self, T>
    where
        T: Parser<'code> + Clone,
    {
        Until::new(self, terminator)
    }
}

/// Implement UntilExt for all parsers
impl<'code, P> UntilExt<'code> for P where P: Parser<'code> {}
