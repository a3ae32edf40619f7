use crate::cursor::ByteCursor;
use crate::error::{FailureKind, ParseFailure};
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;
use std::fmt::Display;

/// Parser that applies a predicate to the output of another parser
///
/// A rejected value fails at the position where the inner parser started,
/// with `description` as the expectation.
pub struct Validate<P, F> {
    parser: P,
    predicate: F,
    description: Cow<'static, str>,
}

impl<P, F> Validate<P, F> {
    pub fn new(parser: P, predicate: F, description: Cow<'static, str>) -> Self {
        Validate {
            parser,
            predicate,
            description,
        }
    }
}

impl<'code, P, F> Parser<'code> for Validate<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, P::Output> {
        let (value, remainder) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, remainder))
        } else {
            Err(
                ParseFailure::new(FailureKind::ValidationFailed, "not valid", cursor)
                    .with_expectation(self.description.clone()),
            )
        }
    }
}

/// Convenience function to create a Validate parser
pub fn validate<'code, P, F>(
    parser: P,
    predicate: F,
    description: impl Into<Cow<'static, str>>,
) -> Validate<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    Validate::new(parser, predicate, description.into())
}

/// Convenience function to create a parser accepting values in `min..=max`
pub fn range<'code, P>(
    parser: P,
    min: P::Output,
    max: P::Output,
) -> Validate<P, impl Fn(&P::Output) -> bool>
where
    P: Parser<'code>,
    P::Output: PartialOrd + Display,
{
    let description = format!("between {} and {}", min, max);
    Validate::new(
        parser,
        move |value: &P::Output| *value >= min && *value <= max,
        description.into(),
    )
}

/// Extension trait to add .validate() and .range() method support for parsers
pub trait ValidateExt<'code>: Parser<'code> + Sized {
    fn validate<F>(self, predicate: F, description: impl Into<Cow<'static, str>>) -> Validate<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Validate::new(self, predicate, description.into())
    }

    fn range(
        self,
        min: Self::Output,
        max: Self::Output,
    ) -> Validate<Self, impl Fn(&Self::Output) -> bool>
    where
        Self::Output: PartialOrd + Display,
    {
        range(self, min, max)
    }
}

/// Implement ValidateExt for all parsers
impl<'code, P> ValidateExt<'code> for P where P: Parser<'code> {}
