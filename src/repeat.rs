use crate::cursor::ByteCursor;
use crate::error::{FailureKind, ParseFailure};
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that applies a parser between `min` and `max` times
///
/// Applications that succeed without advancing the cursor count towards `max`
/// but add nothing to the output. A failure before `min` applications fails
/// the whole repetition, reported at the position where the repetition
/// started rather than where the inner parser diverged.
pub struct Repeat<P> {
    parser: P,
    min: usize,
    max: usize,
}

impl<P> Repeat<P> {
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn new(parser: P, min: usize, max: usize) -> Self {
        assert!(min <= max, "repeat bounds inverted: min {} > max {}", min, max);
        Repeat { parser, min, max }
    }

    fn count_unmet<'code>(
        &self,
        start: ByteCursor<'code>,
        failure: ParseFailure<'code>,
        count: usize,
    ) -> ParseFailure<'code> {
        let found = match failure.remainder().value() {
            Ok(byte) => format!("{:02X}", byte),
            Err(_) => "end of input".to_string(),
        };
        let expectation = format!(
            "'{}' between {} and {} times, but found {}",
            failure.expectations().join(", "),
            self.min,
            self.max,
            count
        );

        ParseFailure::new(
            FailureKind::BoundedCountUnmet,
            format!("Unexpected '{}'", found),
            start,
        )
        .with_expectation(expectation)
    }
}

impl<'code, P> Parser<'code> for Repeat<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let mut remainder = cursor;

        for count in 0..self.max {
            match self.parser.parse(remainder) {
                Ok((value, next)) => {
                    if next != remainder {
                        results.push(value);
                    }
                    remainder = next;
                }
                Err(failure) if count < self.min => {
                    return Err(self.count_unmet(cursor, failure, count));
                }
                Err(_) => break,
            }
        }

        Ok((results, remainder))
    }
}

/// Extension trait to add .repeat() and .repeat_range() method support for parsers
pub trait RepeatExt<'code>: Parser<'code> + Sized {
    /// Apply the parser exactly `count` times
    fn repeat(self, count: usize) -> Repeat<Self> {
        Repeat::new(self, count, count)
    }

    fn repeat_range(self, min: usize, max: usize) -> Repeat<Self> {
        Repeat::new(self, min, max)
    }
}

/// Implement RepeatExt for all parsers
impl<'code, P> RepeatExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Repeat parser
pub fn repeat<'code, P>(parser: P, min: usize, max: usize) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(parser, min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::{byte, is_byte};
    use crate::pure::pure;

    #[test]
    fn test_repeat_exact() {
        let data = [0x01, 0x01, 0x02];
        let cursor = ByteCursor::new(&data);

        let (results, cursor) = is_byte(0x01).repeat(2).parse(cursor).unwrap();
        assert_eq!(results, vec![0x01, 0x01]);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_repeat_stops_at_max() {
        let data = [0x01, 0x01, 0x01, 0x01];
        let cursor = ByteCursor::new(&data);

        let (results, cursor) = is_byte(0x01).repeat_range(1, 3).parse(cursor).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_repeat_accepts_between_min_and_max() {
        let data = [0x01, 0x01, 0x02];
        let cursor = ByteCursor::new(&data);

        let (results, cursor) = is_byte(0x01).repeat_range(1, 4).parse(cursor).unwrap();
        assert_eq!(results, vec![0x01, 0x01]);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_repeat_below_min_reports_start_position() {
        let data = [0xFF, 0x01, 0xFF, 0x02];
        let cursor = ByteCursor::new(&data).next();

        let error = is_byte(0x01).repeat(2).parse(cursor).unwrap_err();
        assert_eq!(error.kind(), FailureKind::BoundedCountUnmet);
        // The inner parser diverged at 2, the repetition started at 1
        assert_eq!(error.position(), 1);
        assert_eq!(error.message(), "Unexpected 'FF'");
        assert_eq!(
            error.expectations(),
            &["'01' between 2 and 2 times, but found 1"]
        );
    }

    #[test]
    fn test_repeat_below_min_at_end_of_input() {
        let data = [0xAA];
        let cursor = ByteCursor::new(&data);

        let error = byte().repeat(4).parse(cursor).unwrap_err();
        assert_eq!(error.position(), 0);
        assert_eq!(error.message(), "Unexpected 'end of input'");
        assert_eq!(
            error.expectations(),
            &["'any byte' between 4 and 4 times, but found 1"]
        );
    }

    #[test]
    fn test_repeat_zero_width_not_recorded() {
        let data = [0x01];
        let cursor = ByteCursor::new(&data);

        let (results, cursor) = pure(7u8).repeat(3).parse(cursor).unwrap();
        assert!(results.is_empty());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_repeat_zero_times() {
        let data = [0x01];
        let (results, cursor) = is_byte(0x02).repeat(0).parse(ByteCursor::new(&data)).unwrap();
        assert!(results.is_empty());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    #[should_panic(expected = "repeat bounds inverted")]
    fn test_repeat_inverted_bounds_panics() {
        let _ = repeat(is_byte(0x01), 3, 1);
    }
}
