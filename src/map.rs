use crate::cursor::ByteCursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, U> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Parser combinator that replaces the output of a parser with a constant
pub struct To<P, T> {
    parser: P,
    value: T,
}

impl<P, T> To<P, T> {
    pub fn new(parser: P, value: T) -> Self {
        To { parser, value }
    }
}

impl<'code, P, T> Parser<'code> for To<P, T>
where
    P: Parser<'code>,
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, T> {
        let (_, cursor) = self.parser.parse(cursor)?;
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() and .to() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    /// Discard the parsed value and return `value` instead
    fn to<T: Clone>(self, value: T) -> To<Self, T> {
        To::new(self, value)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
