use crate::cursor::ByteCursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. Use
/// [`crate::then::Then`] when the second parser depends on the first value.
///
/// Example:
/// ```
/// use bincomb::and::AndExt;
/// use bincomb::byte::is_byte;
/// use bincomb::number::u16;
/// use bincomb::{ByteCursor, Parser};
/// use byteorder::BigEndian;
///
/// let data = [0x7E, 0x01, 0x02];
/// let ((start, length), cursor) = is_byte(0x7E)
///     .and(u16::<BigEndian>())
///     .parse(ByteCursor::new(&data))
///     .unwrap();
/// assert_eq!(start, 0x7E);
/// assert_eq!(length, 0x0102);
/// assert!(cursor.is_eos());
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
