use crate::cursor::ByteCursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that wraps a single result into a one-element `Vec`
///
/// Bridges scalar parsers into grammars built from sequence parsers such as
/// [`crate::concat::Concat`].
pub struct Once<P> {
    parser: P,
}

impl<P> Once<P> {
    pub fn new(parser: P) -> Self {
        Once { parser }
    }
}

impl<'code, P> Parser<'code> for Once<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok((vec![value], cursor))
    }
}

/// Extension trait to add .once() method support for parsers
pub trait OnceExt<'code>: Parser<'code> + Sized {
    fn once(self) -> Once<Self> {
        Once::new(self)
    }
}

/// Implement OnceExt for all parsers
impl<'code, P> OnceExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Once parser
pub fn once<'code, P>(parser: P) -> Once<P>
where
    P: Parser<'code>,
{
    Once::new(parser)
}
