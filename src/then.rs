use crate::cursor::ByteCursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Monadic sequencing: run a parser, then the parser built from its value
///
/// This is the primitive every ordered grammar is built on. On failure the
/// continuation is never called and the failure is returned unchanged.
///
/// Example:
/// ```
/// use bincomb::byte::{byte, bytes};
/// use bincomb::then::ThenExt;
/// use bincomb::{ByteCursor, Parser};
///
/// // A length-prefixed field
/// let data = [0x02, 0xAA, 0xBB, 0xCC];
/// let (field, cursor) = byte()
///     .then(|len| bytes(len as usize))
///     .parse(ByteCursor::new(&data))
///     .unwrap();
/// assert_eq!(field, vec![0xAA, 0xBB]);
/// assert_eq!(cursor.position(), 3);
/// ```
pub struct Then<P, F> {
    parser: P,
    next: F,
}

impl<P, F> Then<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        Then { parser, next }
    }
}

impl<'code, P, F, Q> Parser<'code> for Then<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Q::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.next)(value).parse(cursor)
    }
}

/// Extension trait to add .then() method support for parsers
pub trait ThenExt<'code>: Parser<'code> + Sized {
    fn then<F, Q>(self, next: F) -> Then<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        Then::new(self, next)
    }
}

/// Implement ThenExt for all parsers
impl<'code, P> ThenExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Then parser
pub fn bind<'code, P, F, Q>(parser: P, next: F) -> Then<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    Then::new(parser, next)
}
