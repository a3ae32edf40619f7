use bincomb::and::AndExt;
use bincomb::byte::{byte, bytes, is_byte};
use bincomb::checksum::{Checksum, Crc16Ccitt};
use bincomb::many::ManyExt;
use bincomb::map::MapExt;
use bincomb::then::ThenExt;
use bincomb::with_checksum::WithChecksumExt;
use bincomb::{Parser, parse};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn frame<'code>() -> impl Parser<'code, Output = Vec<u8>> {
    is_byte(0x7E)
        .and(
            byte()
                .then(|len| bytes(usize::from(len)))
                .with_checksum(Crc16Ccitt::NON_ZERO_1),
        )
        .map(|(_, payload)| payload)
}

fn encode(payload: &[u8]) -> Vec<u8> {
    let mut covered = vec![payload.len() as u8];
    covered.extend_from_slice(payload);

    let mut out = vec![0x7E];
    out.extend_from_slice(&covered);
    out.extend(Crc16Ccitt::NON_ZERO_1.calculate(&covered));
    out
}

fn bench_crc(c: &mut Criterion) {
    let data: Vec<u8> = (0..4096u32).map(|i| i as u8).collect();
    c.bench_function("crc16_ccitt_4k", |b| {
        b.iter(|| Crc16Ccitt::NON_ZERO_1.crc(black_box(&data)))
    });
}

fn bench_frames(c: &mut Criterion) {
    let payload: Vec<u8> = (0..200u8).collect();
    let stream: Vec<u8> = (0..64).flat_map(|_| encode(&payload)).collect();
    let parser = frame().many();

    c.bench_function("parse_64_frames", |b| {
        b.iter(|| parse(&parser, black_box(&stream)))
    });
}

criterion_group!(benches, bench_crc, bench_frames);
criterion_main!(benches);
