//! Benchmarks covering every public operation, using the shared known-answer
//! fixtures so results stay comparable across runs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use tokenveil::{checksum, transform, validate, JsonCodec, TokenFormat};

const KEY: &[u8] = b"PassKey";
const PLAINTEXT: &[u8] = b"[i] PlainText";
const CIPHERTEXT: &[u8] = &[91, 105, 153, 222, 78, 98, 65, 105, 136, 146, 81, 118, 116];
const PAYLOAD: &str = "W2mZ3k5iQWmIklF2dA";
const SALT: &[u8] = b"salt";
const DIGEST_PREFIX: &str = "624b9023";
const TOKEN: &str = "[80,97,115,115,75,101,121]:624b9023:W2mZ3k5iQWmIklF2dA";

fn bench_transform(c: &mut Criterion) {
    c.bench_function("encrypt", |b| {
        b.iter(|| transform::encrypt(black_box(PLAINTEXT), black_box(KEY)))
    });
    c.bench_function("decrypt", |b| {
        b.iter(|| transform::decrypt(black_box(CIPHERTEXT), black_box(KEY)))
    });
    c.bench_function("encrypt_to_b64", |b| {
        b.iter(|| transform::encrypt_to_b64(black_box(PLAINTEXT), black_box(KEY)))
    });
    c.bench_function("decrypt_from_b64", |b| {
        b.iter(|| transform::decrypt_from_b64(black_box(PAYLOAD), black_box(KEY)))
    });
}

fn bench_checksum(c: &mut Criterion) {
    c.bench_function("checksum", |b| {
        b.iter(|| checksum(black_box(&[KEY, PAYLOAD.as_bytes(), SALT])))
    });
    c.bench_function("validate", |b| {
        b.iter(|| {
            validate(
                black_box(DIGEST_PREFIX),
                black_box(&[KEY, PAYLOAD.as_bytes(), SALT]),
            )
        })
    });
}

fn bench_token(c: &mut Criterion) {
    let tokens = TokenFormat::new(JsonCodec::new());
    c.bench_function("serialize_to_string", |b| {
        b.iter(|| tokens.serialize_to_string(black_box(PAYLOAD), black_box(KEY), black_box(SALT)))
    });
    c.bench_function("validate_serialized", |b| {
        b.iter(|| tokens.validate_serialized(black_box(TOKEN), black_box(SALT)))
    });
}

criterion_group!(benches, bench_transform, bench_checksum, bench_token);
criterion_main!(benches);
