//! Keyed reversible byte transform and its base64 helpers.
//!
//! This is NOT real encryption. The transform is a cheap XOR-with-offset
//! substitution meant to keep small payloads (session blobs, short tokens)
//! out of casual sight; anyone holding the key can reverse it, and tokens
//! embed their own key.
//!
//! # Key schedule
//!
//! The key cursor cycles over indices `0..key.len()-1`, so for a multi-byte
//! key the **last key byte is never used**. A single-byte key degenerates to
//! repeating `key[0]`. This boundary is part of the wire-compatible
//! behaviour: ciphertexts and tokens already in circulation were produced
//! with it, and changing it would orphan them all. Do not "fix" it.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

/// Encrypt `input` with the cycling-key byte substitution.
///
/// Each output byte is `(in - key[i]) ^ key[i]` with 8-bit wraparound
/// subtraction. Returns an empty vector when `input` or `key` is empty; this
/// is a silent no-op, not a failure.
pub fn encrypt(input: &[u8], key: &[u8]) -> Vec<u8> {
    if input.is_empty() || key.is_empty() {
        return Vec::new();
    }
    let limit = key.len() - 1;
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    for &b in input {
        if i >= limit {
            i = 0;
        }
        let k = key[i];
        out.push(b.wrapping_sub(k) ^ k);
        i += 1;
    }
    out
}

/// Decrypt `input` with the cycling-key byte substitution.
///
/// Each output byte is `(in ^ key[i]) + key[i]` with 8-bit wraparound
/// addition — the exact algebraic inverse of [`encrypt`] for any key byte.
/// Returns an empty vector when `input` or `key` is empty.
pub fn decrypt(input: &[u8], key: &[u8]) -> Vec<u8> {
    if input.is_empty() || key.is_empty() {
        return Vec::new();
    }
    let limit = key.len() - 1;
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    for &b in input {
        if i >= limit {
            i = 0;
        }
        let k = key[i];
        out.push((b ^ k).wrapping_add(k));
        i += 1;
    }
    out
}

/// Encrypt `input` and encode the result as base64 (URL-safe alphabet, no
/// padding).
///
/// Returns an empty string when encryption yields no output (empty `input`
/// or empty `key`).
pub fn encrypt_to_b64(input: &[u8], key: &[u8]) -> String {
    let v = encrypt(input, key);
    if v.is_empty() {
        return String::new();
    }
    URL_SAFE_NO_PAD.encode(v)
}

/// Decode `input` from base64 (URL-safe alphabet, no padding) and decrypt it.
///
/// Returns an empty vector when `input` is not valid base64; the transform
/// is not applied in that case. Callers needing a hard failure signal must
/// check for empty output themselves.
pub fn decrypt_from_b64(input: &str, key: &[u8]) -> Vec<u8> {
    match URL_SAFE_NO_PAD.decode(input) {
        Ok(v) => decrypt(&v, key),
        Err(_) => Vec::new(),
    }
}
