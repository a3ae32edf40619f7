use crate::cursor::ByteCursor;
use crate::error::{FailureKind, ParseFailure};
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that runs a parser inside a window of exactly `len` bytes
///
/// The inner parser sees a cursor limited to the window and may consume any
/// part of it. On success the outer cursor always advances by `len`, so
/// unread padding inside the window is skipped. Reading past the window
/// fails with [`FailureKind::WindowOverrun`] at the window boundary.
///
/// Example:
/// ```
/// use bincomb::byte::{bytes, is_byte};
/// use bincomb::length::LengthExt;
/// use bincomb::and::AndExt;
/// use bincomb::{ByteCursor, Parser};
///
/// // A 4-byte slot holding a 1-byte value and padding
/// let data = [0x07, 0x00, 0x00, 0x00, 0xFF];
/// let ((value, trailer), cursor) = is_byte(0x07)
///     .length(4)
///     .and(bytes(1))
///     .parse(ByteCursor::new(&data))
///     .unwrap();
/// assert_eq!(value, 0x07);
/// assert_eq!(trailer, vec![0xFF]);
/// assert!(cursor.is_eos());
/// ```
pub struct Length<P> {
    parser: P,
    len: usize,
}

impl<P> Length<P> {
    pub fn new(parser: P, len: usize) -> Self {
        Length { parser, len }
    }
}

impl<'code, P> Parser<'code> for Length<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, P::Output> {
        let window = cursor.windowed(self.len);

        let value = match self.parser.parse(window) {
            Ok((value, _)) => value,
            Err(failure)
                if failure.kind() == FailureKind::EndOfInput
                    && failure.position() == window.limit()
                    && window.limit() < cursor.limit() =>
            {
                return Err(failure.with_kind(FailureKind::WindowOverrun));
            }
            Err(failure) => return Err(failure),
        };

        if cursor.remaining() < self.len {
            return Err(ParseFailure::new(
                FailureKind::EndOfInput,
                "Unexpected end of input reached",
                cursor.skip(self.len),
            )
            .with_expectation(format!("{} bytes", self.len)));
        }

        Ok((value, cursor.skip(self.len)))
    }
}

/// Convenience function to create a Length parser
pub fn length<'code, P>(parser: P, len: usize) -> Length<P>
where
    P: Parser<'code>,
{
    Length::new(parser, len)
}

/// Extension trait to add .length() method support for parsers
pub trait LengthExt<'code>: Parser<'code> + Sized {
    fn length(self, len: usize) -> Length<Self> {
        Length::new(self, len)
    }
}

/// Implement LengthExt for all parsers
impl<'code, P> LengthExt<'code> for P where P: Parser<'code> {}
