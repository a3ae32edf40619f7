use crate::cursor::ByteCursor;
use crate::error::{FailureKind, ParseFailure};
use crate::parser::Parser;
use crate::repeat::Repeat;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Match one byte against `accept`, describing the expectation only on failure
fn match_byte<'code>(
    cursor: ByteCursor<'code>,
    accept: impl FnOnce(u8) -> bool,
    describe: impl FnOnce() -> Cow<'static, str>,
) -> ParseResult<'code, u8> {
    match cursor.value() {
        Ok(byte) if accept(byte) => Ok((byte, cursor.next())),
        Ok(byte) => Err(ParseFailure::new(
            FailureKind::UnexpectedByte,
            format!("unexpected '{:02X}'", byte),
            cursor,
        )
        .with_expectation(describe())),
        Err(eof) => Err(eof.with_expectation(describe())),
    }
}

/// Parser that consumes and returns a single byte
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteParser;

impl ByteParser {
    pub fn new() -> Self {
        ByteParser
    }
}

/// Convenience function to create a ByteParser
pub fn byte() -> ByteParser {
    ByteParser::new()
}

/// Alias of [`byte`]
pub fn any_byte() -> ByteParser {
    ByteParser::new()
}

impl<'code> Parser<'code> for ByteParser {
    type Output = u8;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, u8> {
        match_byte(cursor, |_| true, || Cow::Borrowed("any byte"))
    }
}

/// Parser that accepts a byte satisfying a predicate
pub struct ByteWhere<F> {
    predicate: F,
    description: Cow<'static, str>,
}

impl<F> ByteWhere<F> {
    pub fn new(predicate: F, description: Cow<'static, str>) -> Self {
        ByteWhere {
            predicate,
            description,
        }
    }
}

impl<'code, F> Parser<'code> for ByteWhere<F>
where
    F: Fn(u8) -> bool,
{
    type Output = u8;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, u8> {
        match_byte(cursor, &self.predicate, || self.description.clone())
    }
}

/// Convenience function to create a ByteWhere parser
///
/// `description` names what the predicate accepts and ends up in the
/// expectations of the failure.
pub fn byte_where<F>(predicate: F, description: impl Into<Cow<'static, str>>) -> ByteWhere<F>
where
    F: Fn(u8) -> bool,
{
    ByteWhere::new(predicate, description.into())
}

/// Parser that matches a specific byte
#[derive(Debug, Clone, Copy)]
pub struct IsByteParser {
    expected: u8,
}

impl IsByteParser {
    pub fn new(expected: u8) -> Self {
        IsByteParser { expected }
    }
}

impl<'code> Parser<'code> for IsByteParser {
    type Output = u8;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, u8> {
        match_byte(
            cursor,
            |byte| byte == self.expected,
            || format!("{:02X}", self.expected).into(),
        )
    }
}

/// Convenience function to create an IsByteParser
pub fn is_byte(expected: u8) -> IsByteParser {
    IsByteParser::new(expected)
}

/// Parser that matches a byte within a range (inclusive)
#[derive(Debug, Clone, Copy)]
pub struct BetweenBytesParser {
    start: u8,
    end: u8,
}

impl BetweenBytesParser {
    pub fn new(start: u8, end: u8) -> Self {
        BetweenBytesParser { start, end }
    }
}

impl<'code> Parser<'code> for BetweenBytesParser {
    type Output = u8;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, u8> {
        match_byte(
            cursor,
            |byte| (self.start..=self.end).contains(&byte),
            || format!("between {:02X} and {:02X}", self.start, self.end).into(),
        )
    }
}

/// Convenience function to create a BetweenBytesParser
pub fn between_bytes(start: u8, end: u8) -> BetweenBytesParser {
    BetweenBytesParser::new(start, end)
}

/// Parser that matches any byte of a set
#[derive(Debug, Clone)]
pub struct AnyOfParser {
    set: Vec<u8>,
}

impl AnyOfParser {
    pub fn new(set: &[u8]) -> Self {
        AnyOfParser { set: set.to_vec() }
    }
}

impl<'code> Parser<'code> for AnyOfParser {
    type Output = u8;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, u8> {
        match_byte(
            cursor,
            |byte| self.set.contains(&byte),
            || {
                self.set
                    .iter()
                    .map(|byte| format!("{:02X}", byte))
                    .collect::<Vec<_>>()
                    .join("|")
                    .into()
            },
        )
    }
}

/// Convenience function to create an AnyOfParser
pub fn any_of(set: &[u8]) -> AnyOfParser {
    AnyOfParser::new(set)
}

/// Parser that matches an exact sequence of bytes and returns them
#[derive(Debug, Clone)]
pub struct SequenceParser {
    expected: Vec<u8>,
}

impl SequenceParser {
    pub fn new(expected: &[u8]) -> Self {
        SequenceParser {
            expected: expected.to_vec(),
        }
    }
}

impl<'code> Parser<'code> for SequenceParser {
    type Output = Vec<u8>;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Vec<u8>> {
        let mut matched = Vec::with_capacity(self.expected.len());
        let mut cursor = cursor;

        for &expected in &self.expected {
            let (byte, next) = is_byte(expected).parse(cursor)?;
            matched.push(byte);
            cursor = next;
        }

        Ok((matched, cursor))
    }
}

/// Convenience function to create a SequenceParser
pub fn sequence(expected: &[u8]) -> SequenceParser {
    SequenceParser::new(expected)
}

/// Parser that takes exactly `count` bytes of any value
pub fn bytes(count: usize) -> Repeat<ByteParser> {
    Repeat::new(ByteParser, count, count)
}
