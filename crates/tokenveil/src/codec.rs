//! JSON codec collaborator and the sealed-value adapter built on it.
//!
//! [`JsonCodec`] is an explicit value the caller constructs and threads into
//! every operation that needs object serialisation. There is no process-wide
//! codec configuration anywhere in this crate, so independent instances can
//! coexist in one process.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::transform;

/// JSON object codec.
///
/// Wraps `serde_json` behind the two operations the rest of the crate
/// relies on: serialise a value to bytes and deserialise bytes back into a
/// value. Output is deterministic and round-trip-compatible with itself; it
/// is not assumed compatible with any other codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Create a codec instance.
    pub fn new() -> Self {
        Self
    }

    /// Serialise `value` to its compact JSON byte representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Codec`] with the underlying serialiser error.
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(value)?)
    }

    /// Serialise `value` to its compact JSON text representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Codec`] with the underlying serialiser error.
    pub fn serialize_to_text<T: Serialize>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string(value)?)
    }

    /// Deserialise JSON `bytes` into a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Codec`] with the underlying deserialiser error.
    pub fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Serialise `value` and encrypt the resulting bytes with `key`.
    ///
    /// Serialisation of a valid value always yields at least one byte, so
    /// the transform only degenerates to empty output when `key` is empty;
    /// that case is the transform's documented silent no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Codec`] if `value` cannot be serialised.
    pub fn encrypt_value<T: Serialize>(&self, value: &T, key: &[u8]) -> Result<Vec<u8>> {
        let data = self.serialize(value)?;
        Ok(transform::encrypt(&data, key))
    }

    /// Decrypt `input` with `key` and deserialise the plaintext into a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `input` or `key` is empty, and
    /// [`Error::Codec`] when the decrypted bytes do not deserialise.
    pub fn decrypt_value<T: DeserializeOwned>(&self, input: &[u8], key: &[u8]) -> Result<T> {
        if input.is_empty() || key.is_empty() {
            return Err(Error::InvalidInput("decrypt_value"));
        }
        let data = transform::decrypt(input, key);
        self.deserialize(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    const KEY: &[u8] = b"PassKey";

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Session {
        user: String,
        admin: bool,
    }

    fn sample() -> Session {
        Session {
            user: "alice".into(),
            admin: false,
        }
    }

    #[test]
    fn value_round_trip() {
        let codec = JsonCodec::new();
        let sealed = codec.encrypt_value(&sample(), KEY).unwrap();
        assert_ne!(sealed, codec.serialize(&sample()).unwrap());
        let opened: Session = codec.decrypt_value(&sealed, KEY).unwrap();
        assert_eq!(opened, sample());
    }

    #[test]
    fn empty_key_yields_empty_ciphertext() {
        let codec = JsonCodec::new();
        let sealed = codec.encrypt_value(&sample(), b"").unwrap();
        assert!(sealed.is_empty());
    }

    #[test]
    fn decrypt_value_rejects_empty_arguments() {
        let codec = JsonCodec::new();
        let sealed = codec.encrypt_value(&sample(), KEY).unwrap();
        let empty_input = codec.decrypt_value::<Session>(b"", KEY).unwrap_err();
        assert!(empty_input.is_invalid_input());
        let empty_key = codec.decrypt_value::<Session>(&sealed, b"").unwrap_err();
        assert!(empty_key.is_invalid_input());
    }

    #[test]
    fn wrong_key_surfaces_codec_error() {
        let codec = JsonCodec::new();
        let sealed = codec.encrypt_value(&sample(), KEY).unwrap();
        let err = codec
            .decrypt_value::<Session>(&sealed, b"WrongKey")
            .unwrap_err();
        assert!(matches!(err, Error::Codec(_)));
    }

    #[test]
    fn key_array_renders_compact() {
        // The token layer depends on this exact rendering of key bytes.
        let codec = JsonCodec::new();
        let text = codec.serialize_to_text(&b"PassKey".to_vec()).unwrap();
        assert_eq!(text, "[80,97,115,115,75,101,121]");
        assert_eq!(codec.serialize(&b"PassKey".to_vec()).unwrap(), text.as_bytes());
    }
}
