//! Fast hashing utilities using xxHash3.
//!
//! Fingerprints identify the literal shape of a rendered template: two
//! renders with equal static fragments hash to the same value no matter
//! what their dynamic slots hold.

use xxhash_rust::xxh3::Xxh3;

/// Separator fed between fragments so `["ab", "c"]` and `["a", "bc"]` differ.
const FRAGMENT_SEPARATOR: &[u8] = &[0];

/// Convert a hash to a hex string (16 characters).
#[inline]
pub fn hash_to_hex(hash: u64) -> String {
    format!("{:016x}", hash)
}

/// Fingerprint an ordered sequence of static fragments.
///
/// The fragment count is mixed in first, so a template with a trailing
/// empty fragment never collides with the same template without it.
pub fn fingerprint<S: AsRef<str>>(statics: &[S]) -> u64 {
    let mut hasher = Xxh3::new();
    hasher.update(&(statics.len() as u64).to_le_bytes());
    for fragment in statics {
        hasher.update(fragment.as_ref().as_bytes());
        hasher.update(FRAGMENT_SEPARATOR);
    }
    hasher.digest()
}
