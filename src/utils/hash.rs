//! Content hashing using blake3.
//!
//! # Usage
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let fp = hash::fingerprint("some content"); // -> "a1b2c3d4"
//! ```

/// Full blake3 digest as lowercase hex.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> String {
    hex::encode(blake3::hash(data.as_ref()).as_bytes())
}

/// Compute hash and return as 8-char hex fingerprint.
///
/// Useful for cache-busting filenames (e.g. `starfolio.a1b2c3d4.css`).
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(value: &T) -> String {
    let mut hex = compute(value);
    hex.truncate(8);
    hex
}
