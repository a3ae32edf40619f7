//! Entry points that run a grammar over a whole buffer

use crate::cursor::ByteCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;
use tracing::{debug, trace};

/// Run `parser` from the start of `data`
///
/// Grammar failures come back as the `Err` side of the result; this never
/// panics on malformed input.
pub fn try_parse<'code, P>(parser: &P, data: &'code [u8]) -> ParseResult<'code, P::Output>
where
    P: Parser<'code>,
{
    trace!(len = data.len(), "parsing buffer");
    let result = parser.parse(ByteCursor::new(data));

    if let Err(failure) = &result {
        debug!(
            position = failure.position(),
            kind = %failure.kind(),
            context = %failure.hex_context(),
            "parse failed: {}",
            failure
        );
    }
    result
}

/// Run `parser` from the start of `data` and return only the value
///
/// Failures are converted into [`ParseError::Failed`] carrying the rendered
/// diagnostic. Bytes left after the value are not an error; wrap the grammar
/// in [`crate::end::End`] to require full consumption.
pub fn parse<'code, P>(parser: &P, data: &'code [u8]) -> Result<P::Output, ParseError>
where
    P: Parser<'code>,
{
    let (value, _) = try_parse(parser, data)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::{byte, is_byte};
    use crate::end::EndExt;
    use crate::many::ManyExt;
    use crate::or::OrExt;
    use crate::result::ParseResultExt;

    #[test]
    fn test_parse_value() {
        let data = [0x01, 0x02, 0x03];
        let value = parse(&byte().many(), &data).unwrap();
        assert_eq!(value, vec![0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_parse_failure_diagnostic() {
        let data = [0x03];
        let error = parse(&is_byte(0x01).or(is_byte(0x02)), &data).unwrap_err();

        assert_eq!(
            error,
            ParseError::Failed {
                position: 0,
                diagnostic: "Parsing failure: unexpected '03'; expected 01 or 02 (position 0)"
                    .to_string(),
            }
        );
    }

    #[test]
    fn test_parse_ignores_trailing_bytes() {
        let data = [0x01, 0xFF];
        assert_eq!(parse(&is_byte(0x01), &data), Ok(0x01));
        assert!(parse(&is_byte(0x01).end(), &data).is_err());
    }

    #[test]
    fn test_try_parse_is_repeatable() {
        let data = [0x01, 0x01, 0x02];
        let parser = is_byte(0x01).many().end();

        let first = try_parse(&parser, &data);
        let second = try_parse(&parser, &data);
        assert!(!first.was_successful());
        assert_eq!(first.remainder(), second.remainder());
        assert_eq!(
            first.unwrap_err().to_string(),
            second.unwrap_err().to_string()
        );
    }

    #[test]
    fn test_try_parse_empty_buffer() {
        let result = try_parse(&byte(), &[]);
        assert_eq!(result.remainder().position(), 0);
        assert_eq!(result.value(), Err(ParseError::InvalidState));
    }
}
