use crate::byte::bytes;
use crate::checksum::Checksum;
use crate::cursor::ByteCursor;
use crate::error::{FailureKind, ParseFailure};
use crate::parser::Parser;
use crate::result::ParseResult;
use tracing::debug;

/// Parser combinator that verifies a digest trailing the bytes consumed by a parser
///
/// Runs `parser`, then reads `checksum.length()` digest bytes and compares
/// them with the digest of the exact span the parser consumed. The span is
/// taken from the underlying buffer, so it is correct inside windows too. On
/// success the value is returned and the cursor sits after the digest.
///
/// Example:
/// ```
/// use bincomb::byte::bytes;
/// use bincomb::checksum::Crc16Ccitt;
/// use bincomb::with_checksum::WithChecksumExt;
/// use bincomb::{ByteCursor, Parser};
///
/// let frame = b"123456789\xB1\x29";
/// let (payload, cursor) = bytes(9)
///     .with_checksum(Crc16Ccitt::NON_ZERO_1)
///     .parse(ByteCursor::new(frame))
///     .unwrap();
/// assert_eq!(payload, b"123456789".to_vec());
/// assert!(cursor.is_eos());
/// ```
pub struct WithChecksum<P, C> {
    parser: P,
    checksum: C,
}

impl<P, C> WithChecksum<P, C> {
    pub fn new(parser: P, checksum: C) -> Self {
        WithChecksum { parser, checksum }
    }
}

impl<'code, P, C> Parser<'code> for WithChecksum<P, C>
where
    P: Parser<'code>,
    C: Checksum,
{
    type Output = P::Output;

    fn parse(&self, cursor: ByteCursor<'code>) -> ParseResult<'code, P::Output> {
        let (value, digest_start) = self.parser.parse(cursor)?;
        let span = &cursor.source()[cursor.position()..digest_start.position()];

        let (found, remainder) = bytes(self.checksum.length()).parse(digest_start)?;
        let expected = self.checksum.calculate(span);

        if found != expected {
            let expected = hex_digest(&expected);
            let found = hex_digest(&found);
            debug!(
                start = cursor.position(),
                digest_at = digest_start.position(),
                %expected,
                %found,
                "checksum mismatch"
            );
            return Err(ParseFailure::new(
                FailureKind::ChecksumMismatch,
                format!("invalid checksum: expected {} but was {}", expected, found),
                digest_start,
            ));
        }

        Ok((value, remainder))
    }
}

fn hex_digest(digest: &[u8]) -> String {
    digest
        .iter()
        .map(|byte| format!("{:02X}", byte))
        .collect::<Vec<_>>()
        .join("-")
}

/// Convenience function to create a WithChecksum parser
pub fn with_checksum<'code, P, C>(parser: P, checksum: C) -> WithChecksum<P, C>
where
    P: Parser<'code>,
    C: Checksum,
{
    WithChecksum::new(parser, checksum)
}

/// Extension trait to add .with_checksum() method support for parsers
pub trait WithChecksumExt<'code>: Parser<'code> + Sized {
    fn with_checksum<C>(self, checksum: C) -> WithChecksum<Self, C>
    where
        C: Checksum,
    {
        WithChecksum::new(self, checksum)
    }
}

/// Implement WithChecksumExt for all parsers
impl<'code, P> WithChecksumExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::{byte, is_byte, sequence};
    use crate::checksum::Crc16Ccitt;
    use crate::length::LengthExt;
    use crate::many::many;
    use crate::then::ThenExt;

    fn frame(payload: &[u8]) -> Vec<u8> {
        let mut frame = payload.to_vec();
        frame.extend(Crc16Ccitt::NON_ZERO_1.calculate(payload));
        frame
    }

    #[test]
    fn test_round_trip() {
        let data = frame(&[0x03, 0xAA, 0xBB, 0xCC]);
        let parser = byte()
            .then(|len| bytes(len as usize))
            .with_checksum(Crc16Ccitt::NON_ZERO_1);

        let (payload, cursor) = parser.parse(ByteCursor::new(&data)).unwrap();
        assert_eq!(payload, vec![0xAA, 0xBB, 0xCC]);
        assert!(cursor.is_eos());
    }

    #[test]
    fn test_flipped_digest_byte() {
        let mut data = frame(b"123456789");
        data[10] ^= 0xFF;

        let error = bytes(9)
            .with_checksum(Crc16Ccitt::NON_ZERO_1)
            .parse(ByteCursor::new(&data))
            .unwrap_err();
        assert_eq!(error.kind(), FailureKind::ChecksumMismatch);
        assert_eq!(error.position(), 9);
        assert_eq!(
            error.message(),
            "invalid checksum: expected B1-29 but was B1-D6"
        );
    }

    #[test]
    fn test_zeroed_digest_message() {
        let data = b"123456789\x00\x00";
        let error = with_checksum(bytes(9), Crc16Ccitt::NON_ZERO_1)
            .parse(ByteCursor::new(data))
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Parsing failure: invalid checksum: expected B1-29 but was 00-00 (position 9)"
        );
    }

    #[test]
    fn test_span_starts_at_parser_start() {
        // The sync byte is outside the checksummed span
        let mut data = vec![0x7E];
        data.extend(frame(&[0x10, 0x20]));
        let cursor = ByteCursor::new(&data);

        let (_, cursor) = is_byte(0x7E).parse(cursor).unwrap();
        let (payload, cursor) = bytes(2)
            .with_checksum(Crc16Ccitt::NON_ZERO_1)
            .parse(cursor)
            .unwrap();
        assert_eq!(payload, vec![0x10, 0x20]);
        assert!(cursor.is_eos());
    }

    #[test]
    fn test_inside_window() {
        let mut data = vec![0x01, 0x01];
        data.extend(Crc16Ccitt::NON_ZERO_2.calculate(&data));
        data.push(0xEE);

        let (payload, cursor) = many(is_byte(0x01))
            .with_checksum(Crc16Ccitt::NON_ZERO_2)
            .length(4)
            .parse(ByteCursor::new(&data))
            .unwrap();
        assert_eq!(payload, vec![0x01, 0x01]);
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.value().unwrap(), 0xEE);
    }

    #[test]
    fn test_missing_digest() {
        let data = [0x01, 0x02, 0x03];
        let error = sequence(&[0x01, 0x02, 0x03])
            .with_checksum(Crc16Ccitt::NON_ZERO_1)
            .parse(ByteCursor::new(&data))
            .unwrap_err();
        assert_eq!(error.kind(), FailureKind::BoundedCountUnmet);
        assert_eq!(error.position(), 3);
    }
}
