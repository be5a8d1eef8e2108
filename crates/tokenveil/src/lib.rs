//! Keyed byte obfuscation, CRC-64 digests, and sealed string tokens.
//!
//! `tokenveil` cheaply obfuscates and tamper-tags small payloads (session
//! blobs, short-lived tokens), binding a key, a truncated digest, and a
//! ciphertext payload into one compact string:
//!
//! ```text
//! <json key bytes>:<digest prefix>:<base64url-no-pad payload>
//! ```
//!
//! This is **not** cryptographically strong confidentiality or integrity:
//! the token embeds its own key, and anyone able to compute checksums can
//! forge one. Use it to keep payloads out of casual sight and to detect
//! accidental corruption, nothing more.
//!
//! # Example
//!
//! ```
//! use tokenveil::{transform, JsonCodec, TokenFormat};
//!
//! let key = b"PassKey";
//! let salt = b"salt";
//!
//! let payload = transform::encrypt_to_b64(b"[i] PlainText", key);
//! let tokens = TokenFormat::new(JsonCodec::new());
//! let token = tokens.serialize_to_string(&payload, key, salt)?;
//!
//! tokens.validate_serialized(&token, salt)?;
//! assert_eq!(transform::decrypt_from_b64(&payload, key), b"[i] PlainText");
//! # Ok::<(), tokenveil::Error>(())
//! ```

pub mod checksum;
pub mod codec;
pub mod error;
pub mod token;
pub mod transform;

pub use checksum::{checksum, validate};
pub use codec::JsonCodec;
pub use error::{Error, Result};
pub use token::{TokenFormat, DIGEST_PREFIX_LEN};
