use crate::cursor::ByteCursor;
use crate::error::{FailureKind, ParseFailure};
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that requires the input to be exhausted after the inner parser
///
/// "Exhausted" means the cursor reached its limit, so inside a
/// [`crate::length::Length`] window it checks the end of the window.
pub struct End<P> {
    parser: P,
}

impl<P> End<P> {
    pub fn new(parser: P) -> Self {
        End { parser }
    }
}

impl<'code, P> Parser<'code> for End<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, P::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        match cursor.value() {
            Err(_) => Ok((value, cursor)),
            Ok(byte) => Err(ParseFailure::new(
                FailureKind::UnexpectedByte,
                format!("unexpected '{:02X}'", byte),
                cursor,
            )
            .with_expectation("end of input")),
        }
    }
}

/// Convenience function to create an End parser
pub fn end<'code, P>(parser: P) -> End<P>
where
    P: Parser<'code>,
{
    End::new(parser)
}

/// Extension trait to add .end() method support for parsers
pub trait EndExt<'code>: Parser<'code> + Sized {
    fn end(self) -> End<Self> {
        End::new(self)
    }
}

/// Implement EndExt for all parsers
impl<'code, P> EndExt<'code> for P where P: Parser<'code> {}
