//! Atbash cipher: mirror the alphabet, 'a' <-> 'z', 'b' <-> 'y', ...
//!
//! The mapping is its own inverse, so [`encode`] and [`decode`] are the
//! same operation.

use crate::alphabet;

/// Lower-case `message` and mirror every letter. Other characters pass through.
pub fn transform(message: &str) -> String {
    message
        .to_lowercase()
        .chars()
        .map(|c| match alphabet::index_of(c) {
            Some(i) => alphabet::ALPHABET[alphabet::LEN - 1 - i],
            None => c,
        })
        .collect()
}

pub fn encode(message: &str) -> String {
    transform(message)
}

pub fn decode(message: &str) -> String {
    transform(message)
}
