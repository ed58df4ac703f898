//! Vigenère cipher: a repeating keyword selects the shift for each letter.
//!
//! The keyword cursor advances only when a letter of the message is
//! consumed, so spaces and punctuation neither use up nor skip key letters.

use crate::alphabet::{self, Direction};
use crate::error::{CipherError, Result};

/// Encode `message` with `keyword`.
///
/// Fails with `InvalidArgument` if `keyword` is empty or contains anything
/// other than ASCII letters.
pub fn encode(message: &str, keyword: &str) -> Result<String> {
    transform(message, keyword, Direction::Encode)
}

/// Decode `message` with `keyword`. Same argument rules as [`encode`].
pub fn decode(message: &str, keyword: &str) -> Result<String> {
    transform(message, keyword, Direction::Decode)
}

fn transform(message: &str, keyword: &str, direction: Direction) -> Result<String> {
    let shifts = key_shifts(keyword)?;
    let sign = direction.sign();
    let mut cursor = 0;

    let result = message
        .to_lowercase()
        .chars()
        .map(|c| match alphabet::index_of(c) {
            Some(i) => {
                let shift = shifts[cursor % shifts.len()];
                cursor += 1;
                alphabet::letter_at(i as i64 + sign * shift)
            }
            None => c,
        })
        .collect();
    Ok(result)
}

fn key_shifts(keyword: &str) -> Result<Vec<i64>> {
    if keyword.is_empty() {
        return Err(CipherError::invalid_argument("keyword must not be empty"));
    }
    keyword
        .to_lowercase()
        .chars()
        .map(|c| {
            alphabet::index_of(c).map(|i| i as i64).ok_or_else(|| {
                CipherError::invalid_argument(format!(
                    "keyword may only contain letters a-z, found {:?}",
                    c
                ))
            })
        })
        .collect()
}
