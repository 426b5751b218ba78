//! Criterion benchmarks for Reed-Solomon encode/decode throughput

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use rsecc::{GaloisField, RsCodec};

fn bench_codec(c: &mut Criterion) {
    let field = Arc::new(GaloisField::new(8, 0x11D).unwrap());
    // classic RS(255, 239): 239 data bytes, 16 ECC bytes, corrects 8 errors
    let codec = RsCodec::new(field, 16).unwrap();
    let message: Vec<u8> = (0..239u32).map(|i| (i * 7 + 13) as u8).collect();
    let ecc = codec.compute_ecc(&message).unwrap();

    c.bench_function("encode_rs_255_239", |b| {
        b.iter(|| codec.compute_ecc(black_box(&message)).unwrap())
    });

    c.bench_function("decode_clean_rs_255_239", |b| {
        b.iter(|| {
            let mut received = message.clone();
            codec.decode(black_box(&mut received), &ecc).unwrap()
        })
    });

    let mut corrupted = message.clone();
    for i in 0..8 {
        corrupted[i * 29] ^= 0xA5;
    }
    c.bench_function("decode_8_errors_rs_255_239", |b| {
        b.iter(|| {
            let mut received = corrupted.clone();
            codec.decode(black_box(&mut received), &ecc).unwrap()
        })
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
