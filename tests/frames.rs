//! End-to-end grammar for a small checksummed record protocol
//!
//! ```text
//! frame  := AA 55 | id:u16be (1..=0FFF) | len:u8 | fields[len] | crc16 (over id, len, fields)
//! field  := 01 counter:u16le
//!         | 02 name:bytes 00
//! ```

use bincomb::and::AndExt;
use bincomb::byte::{byte, is_byte, sequence};
use bincomb::checksum::{Checksum, Crc16Ccitt};
use bincomb::end::EndExt;
use bincomb::length::LengthExt;
use bincomb::many::ManyExt;
use bincomb::map::MapExt;
use bincomb::number::u16;
use bincomb::or::OrExt;
use bincomb::source::SourceExt;
use bincomb::then::ThenExt;
use bincomb::until::UntilExt;
use bincomb::validate::ValidateExt;
use bincomb::with_checksum::WithChecksumExt;
use bincomb::{FailureKind, ParseError, Parser, parse, try_parse};
use byteorder::{BigEndian, LittleEndian};

const CRC: Crc16Ccitt = Crc16Ccitt::NON_ZERO_2;

#[derive(Debug, Clone, PartialEq)]
enum Field {
    Counter(u16),
    Name(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq)]
struct Frame {
    id: u16,
    fields: Vec<Field>,
}

fn field<'code>() -> impl Parser<'code, Output = Field> {
    let counter = is_byte(0x01)
        .and(u16::<LittleEndian>())
        .map(|(_, value)| Field::Counter(value));
    let name = is_byte(0x02)
        .and(byte().until(is_byte(0x00)))
        .map(|(_, name)| Field::Name(name));

    counter.xor(name)
}

fn frame_body<'code>() -> impl Parser<'code, Output = Frame> {
    let header_and_fields = u16::<BigEndian>()
        .range(1, 0x0FFF)
        .and(byte().then(|len| field().x_many().end().length(usize::from(len))))
        .with_checksum(CRC);

    sequence(&[0xAA, 0x55])
        .and(header_and_fields)
        .map(|(_, (id, fields))| Frame { id, fields })
}

fn frame<'code>() -> impl Parser<'code, Output = Frame> {
    frame_body().end()
}

fn encode(id: u16, body: &[u8]) -> Vec<u8> {
    let mut covered = id.to_be_bytes().to_vec();
    covered.push(body.len() as u8);
    covered.extend_from_slice(body);

    let mut out = vec![0xAA, 0x55];
    out.extend_from_slice(&covered);
    out.extend(CRC.calculate(&covered));
    out
}

#[test]
fn parses_frame_with_fields() {
    let data = encode(0x0102, &[0x01, 0x34, 0x12, 0x02, b'o', b'k', 0x00]);

    let frame = parse(&frame(), &data).unwrap();
    assert_eq!(
        frame,
        Frame {
            id: 0x0102,
            fields: vec![Field::Counter(0x1234), Field::Name(b"ok".to_vec())],
        }
    );
}

#[test]
fn parses_frame_without_fields() {
    let data = encode(7, &[]);
    let frame = parse(&frame(), &data).unwrap();
    assert_eq!(frame.id, 7);
    assert!(frame.fields.is_empty());
}

#[test]
fn rejects_corrupted_digest() {
    let mut data = encode(0x0102, &[0x01, 0x34, 0x12]);
    let last = data.len() - 1;
    data[last] ^= 0x01;

    let failure = try_parse(&frame(), &data).unwrap_err();
    assert_eq!(failure.kind(), FailureKind::ChecksumMismatch);
    assert_eq!(failure.position(), 8);
    assert!(failure.message().starts_with("invalid checksum: expected "));
}

#[test]
fn rejects_corrupted_payload() {
    let mut data = encode(0x0102, &[0x01, 0x34, 0x12]);
    data[6] = 0x35;

    let failure = try_parse(&frame(), &data).unwrap_err();
    assert_eq!(failure.kind(), FailureKind::ChecksumMismatch);
}

#[test]
fn rejects_out_of_range_id() {
    let data = encode(0, &[]);

    let failure = try_parse(&frame(), &data).unwrap_err();
    assert_eq!(failure.kind(), FailureKind::ValidationFailed);
    assert_eq!(failure.position(), 2);
    assert_eq!(failure.expectations(), &["between 1 and 4095"]);
}

#[test]
fn truncated_field_is_reported_inside_window() {
    // Counter tag with only one of its two value bytes in the window
    let data = encode(1, &[0x01, 0x34]);

    let failure = try_parse(&frame(), &data).unwrap_err();
    assert_eq!(failure.kind(), FailureKind::BoundedCountUnmet);
    assert_eq!(failure.position(), 6);
}

#[test]
fn unterminated_name_overruns_window() {
    let data = encode(1, &[0x02, b'a']);

    let failure = try_parse(&frame(), &data).unwrap_err();
    assert_eq!(failure.kind(), FailureKind::WindowOverrun);
    assert_eq!(failure.position(), 7);
    assert_eq!(failure.expectations(), &["00"]);
}

#[test]
fn unknown_tag_fails_at_tag() {
    let data = encode(1, &[0x03]);

    let error = parse(&frame(), &data).unwrap_err();
    match error {
        ParseError::Failed { position, diagnostic } => {
            assert_eq!(position, 5);
            assert_eq!(
                diagnostic,
                "Parsing failure: unexpected '03'; expected end of input (position 5)"
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn parses_stream_of_frames() {
    let mut data = encode(1, &[0x01, 0x01, 0x00]);
    data.extend(encode(2, &[]));
    data.extend(encode(3, &[0x02, 0x00]));

    let frames = parse(&frame_body().many().end(), &data).unwrap();
    let ids: Vec<u16> = frames.iter().map(|frame| frame.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(frames[2].fields, vec![Field::Name(Vec::new())]);
}

#[test]
fn stream_with_trailing_garbage_fails_at_garbage() {
    let mut data = encode(1, &[]);
    let garbage_at = data.len();
    data.push(0xFF);

    let failure = try_parse(&frame_body().many().end(), &data).unwrap_err();
    assert_eq!(failure.position(), garbage_at);
}

#[test]
fn source_span_covers_whole_frame() {
    let data = encode(9, &[0x01, 0x00, 0x00]);

    let (tagged, cursor) = try_parse(&frame_body().with_source(), &data).unwrap();
    assert_eq!(tagged.value.id, 9);
    assert_eq!(tagged.bytes, data.as_slice());
    assert_eq!(tagged.start, 0);
    assert!(cursor.is_eos());
}
