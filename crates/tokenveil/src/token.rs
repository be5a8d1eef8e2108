//! Build and validate the three-field serialised token string.
//!
//! # Token format
//!
//! ```text
//! <json int array of key bytes>:<digest prefix>:<base64url-no-pad payload>
//! ```
//!
//! e.g. `[80,97,115,115,75,101,121]:624b9023:W2mZ3k5iQWmIklF2dA`
//!
//! Exactly two `:` separators are structurally significant. The payload
//! field uses the base64 URL-safe alphabet without padding, which contains
//! no `:`, so splitting stops after the second separator and any further
//! characters belong to the payload verbatim.

use tracing::debug;

use crate::checksum;
use crate::codec::JsonCodec;
use crate::error::{Error, Result};

/// Number of leading digest characters embedded in a token. Digests shorter
/// than this are embedded whole.
pub const DIGEST_PREFIX_LEN: usize = 8;

/// Separator between the three token fields.
pub const FIELD_SEPARATOR: char = ':';

/// The three raw fields of a token, split but not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TokenFields<'a> {
    /// JSON integer-array rendering of the key bytes.
    key_json: &'a str,
    /// Embedded digest prefix.
    digest_prefix: &'a str,
    /// Base64 payload, kept verbatim.
    payload: &'a str,
}

impl<'a> TokenFields<'a> {
    /// Split a token on its first two separators.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the token is empty or does not
    /// have exactly three fields.
    fn split(token: &'a str) -> Result<Self> {
        if token.is_empty() {
            return Err(Error::InvalidInput("validate_serialized"));
        }
        let mut pieces = token.splitn(3, FIELD_SEPARATOR);
        match (pieces.next(), pieces.next(), pieces.next()) {
            (Some(key_json), Some(digest_prefix), Some(payload)) => Ok(Self {
                key_json,
                digest_prefix,
                payload,
            }),
            _ => {
                debug!(token_len = token.len(), "token does not have three fields");
                Err(Error::InvalidInput("validate_serialized"))
            }
        }
    }
}

/// Builder/validator for serialised tokens.
///
/// Holds the [`JsonCodec`] used to render and recover the key field, threaded
/// in explicitly so that independently configured instances can coexist.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenFormat {
    codec: JsonCodec,
}

impl TokenFormat {
    /// Create a token format around the given codec.
    pub fn new(codec: JsonCodec) -> Self {
        Self { codec }
    }

    /// Serialise an already-encrypted base64 payload into a token string.
    ///
    /// The digest covers `key`, `payload`, and `salt` in that exact order;
    /// its first [`DIGEST_PREFIX_LEN`] characters are embedded. The payload
    /// is copied verbatim, not re-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `payload`, `key`, or `salt` is
    /// empty, and [`Error::Codec`] if the key fails to serialise.
    pub fn serialize_to_string(&self, payload: &str, key: &[u8], salt: &[u8]) -> Result<String> {
        if payload.is_empty() || key.is_empty() || salt.is_empty() {
            return Err(Error::InvalidInput("serialize_to_string"));
        }

        let digest = checksum::checksum(&[key, payload.as_bytes(), salt])?;
        let prefix = &digest[..digest.len().min(DIGEST_PREFIX_LEN)];

        // Key bytes render as a compact integer array: `[80,97,...]`.
        let key_json = self.codec.serialize_to_text(&key.to_vec())?;

        Ok(format!(
            "{key_json}{FIELD_SEPARATOR}{prefix}{FIELD_SEPARATOR}{payload}"
        ))
    }

    /// Validate a token produced by [`TokenFormat::serialize_to_string`].
    ///
    /// Recovers the key from the first field, re-derives the digest over the
    /// key, the literal payload bytes, and `salt`, and checks it against the
    /// embedded prefix under the checksum prefix-match rule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the token is empty, is not made of
    /// three fields, or fails the digest check; [`Error::Codec`] if the key
    /// field does not deserialise as a byte array.
    pub fn validate_serialized(&self, token: &str, salt: &[u8]) -> Result<()> {
        let fields = TokenFields::split(token)?;
        let key: Vec<u8> = self.codec.deserialize(fields.key_json.as_bytes())?;

        checksum::validate(
            fields.digest_prefix,
            &[key.as_slice(), fields.payload.as_bytes(), salt],
        )
        .map_err(|e| {
            debug!(digest_prefix = fields.digest_prefix, "token digest mismatch");
            e
        })
    }
}
