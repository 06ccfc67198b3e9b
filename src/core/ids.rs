//! core::ids
//!
//! Short random identifiers for repositories created by the fake source.
//!
//! Identifiers are lowercase base-36 tokens of [`ID_LEN`] characters. They
//! are drawn independently per call and never checked for collisions; a
//! real backend assigns the authoritative identifier.

use rand::Rng;

/// Length of a generated identifier.
pub const ID_LEN: usize = 7;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Draw a fresh identifier from `rng`.
pub fn random_id<R: Rng>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect()
}
