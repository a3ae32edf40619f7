use crate::cursor::ByteCursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that runs two sequence parsers and joins their outputs in order
pub struct Concat<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Concat<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Concat { parser1, parser2 }
    }
}

impl<'code, P1, P2, T> Parser<'code> for Concat<P1, P2>
where
    P1: Parser<'code, Output = Vec<T>>,
    P2: Parser<'code, Output = Vec<T>>,
{
    type Output = Vec<T>;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Vec<T>> {
        let (mut first, cursor) = self.parser1.parse(cursor)?;
        let (second, cursor) = self.parser2.parse(cursor)?;
        first.extend(second);
        Ok((first, cursor))
    }
}

/// Extension trait to add .concat() method support for sequence parsers
pub trait ConcatExt<'code, T>: Parser<'code, Output = Vec<T>> + Sized {
    fn concat<P>(self, other: P) -> Concat<Self, P>
    where
        P: Parser<'code, Output = Vec<T>>,
    {
        Concat::new(self, other)
    }
}

/// Implement ConcatExt for all sequence parsers
impl<'code, T, P> ConcatExt<'code, T> for P where P: Parser<'code, Output = Vec<T>> {}

/// Convenience function to create a Concat parser
pub fn concat<'code, P1, P2, T>(parser1: P1, parser2: P2) -> Concat<P1, P2>
where
    P1: Parser<'code, Output = Vec<T>>,
    P2: Parser<'code, Output = Vec<T>>,
{
    Concat::new(parser1, parser2)
}
