//! CRC-64 digests over ordered byte sequences, with prefix validation.
//!
//! Every digest in this crate comes from one fixed polynomial (CRC-64/XZ).
//! Changing the polynomial invalidates every previously issued digest and
//! token, so any future change must ship as a new, versioned mode.

use crc::{Crc, CRC_64_XZ};

use crate::error::{Error, Result};

/// The one CRC instance (and table) shared by every digest computation.
const CRC64: Crc<u64> = Crc::<u64>::new(&CRC_64_XZ);

/// Compute the digest of one or more byte sequences.
///
/// All parts feed a single running accumulator in argument order, so
/// `checksum(&[a, b])` and `checksum(&[b, a])` differ in general. The final
/// value is rendered as lowercase hexadecimal without leading-zero padding,
/// so the digest is 1–16 characters long.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when `parts` is empty.
pub fn checksum(parts: &[&[u8]]) -> Result<String> {
    if parts.is_empty() {
        return Err(Error::InvalidInput("checksum"));
    }
    let mut digest = CRC64.digest();
    for part in parts {
        digest.update(part);
    }
    Ok(format!("{:x}", digest.finalize()))
}

/// Recompute the digest of `parts` and check it against `expected_prefix`.
///
/// Succeeds iff the recomputed digest **starts with** `expected_prefix`.
/// This prefix-match policy is what lets tokens carry a truncated 8-character
/// digest, but it also means a short prefix matches many digests, and the
/// empty prefix matches every digest. Callers wanting full-strength
/// comparison must pass the complete digest as the prefix.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when `parts` is empty or the prefix does
/// not match.
pub fn validate(expected_prefix: &str, parts: &[&[u8]]) -> Result<()> {
    let digest = checksum(parts)?;
    if !digest.starts_with(expected_prefix) {
        return Err(Error::InvalidInput("validate"));
    }
    Ok(())
}
