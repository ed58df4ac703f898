//! Caesar cipher: rotate every letter by a fixed shift.
//!
//! Input is lower-cased first. Characters outside `a..=z` are copied
//! through unchanged. Any shift is accepted and reduced modulo 26.

use crate::alphabet::{self, Direction};

/// Encode `message` by rotating each letter forward by `shift`.
pub fn encode(message: &str, shift: i64) -> String {
    rotate(message, shift, Direction::Encode)
}

/// Decode `message` by rotating each letter back by `shift`.
pub fn decode(message: &str, shift: i64) -> String {
    rotate(message, shift, Direction::Decode)
}

fn rotate(message: &str, shift: i64, direction: Direction) -> String {
    // Reduce before applying the sign so that i64::MIN cannot overflow.
    let offset = shift.rem_euclid(alphabet::LEN as i64) * direction.sign();
    message
        .to_lowercase()
        .chars()
        .map(|c| match alphabet::index_of(c) {
            Some(i) => alphabet::letter_at(i as i64 + offset),
            None => c,
        })
        .collect()
}
