use crate::cursor::ByteCursor;
use crate::parser::Parser;
use crate::result::ParseResult;

/// A parsed value together with the raw bytes that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source<'code, T> {
    pub value: T,
    /// Exact span of the underlying buffer consumed by the parser
    pub bytes: &'code [u8],
    /// Absolute offset of the first byte of `bytes`
    pub start: usize,
}

impl<'code, T> Source<'code, T> {
    /// Absolute offset one past the last consumed byte
    pub fn end(&self) -> usize {
        self.start + self.bytes.len()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Source<'code, U> {
        Source {
            value: f(self.value),
            bytes: self.bytes,
            start: self.start,
        }
    }
}

/// Parser combinator that tags a parser's value with its source span
pub struct WithSource<P> {
    parser: P,
}

impl<P> WithSource<P> {
    pub fn new(parser: P) -> Self {
        WithSource { parser }
    }
}

impl<'code, P> Parser<'code> for WithSource<P>
where
    P: Parser<'code>,
{
    type Output = Source<'code, P::Output>;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, remainder) = self.parser.parse(cursor)?;
        let start = cursor.position();
        let bytes = &cursor.source()[start..remainder.position()];
        Ok((
            Source {
                value,
                bytes,
                start,
            },
            remainder,
        ))
    }
}

/// Convenience function to create a WithSource parser
pub fn with_source<'code, P>(parser: P) -> WithSource<P>
where
    P: Parser<'code>,
{
    WithSource::new(parser)
}

/// Extension trait to add .with_source() method support for parsers
pub trait SourceExt<'code>: Parser<'code> + Sized {
    fn with_source(self) -> WithSource<Self> {
        WithSource::new(self)
    }
}

/// Implement SourceExt for all parsers
impl<'code, P> SourceExt<'code> for P where P: Parser<'code> {}
