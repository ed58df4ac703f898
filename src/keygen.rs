//! Random key generation for the keyed ciphers.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::alphabet::ALPHABET;
use crate::error::{CipherError, Result};

/// Number of distinct letters in a Playfair key square.
pub const PLAYFAIR_LETTERS: usize = 25;

/// Random Vigenère keyword of `length` letters, drawn from the thread RNG.
pub fn generate_vigenere_key(length: usize) -> Result<String> {
    generate_vigenere_key_with_rng(length, &mut rand::thread_rng())
}

/// Random Vigenère keyword of `length` letters drawn independently and
/// uniformly from `rng`. Letters may repeat.
pub fn generate_vigenere_key_with_rng<R: Rng + ?Sized>(
    length: usize,
    rng: &mut R,
) -> Result<String> {
    if length == 0 {
        return Err(CipherError::invalid_argument(
            "key length must be at least 1",
        ));
    }
    Ok((0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect())
}

/// Random Playfair key, drawn from the thread RNG. See
/// [`generate_playfair_key_with_rng`].
pub fn generate_playfair_key(length: usize) -> Result<String> {
    generate_playfair_key_with_rng(length, &mut rand::thread_rng())
}

/// Playfair key whose first `length` letters are distinct and drawn at
/// random, followed by every other letter in alphabetical order.
///
/// The result always has exactly 25 letters, no repeats and no 'j'.
/// `length` must be between 1 and 25.
pub fn generate_playfair_key_with_rng<R: Rng + ?Sized>(
    length: usize,
    rng: &mut R,
) -> Result<String> {
    if length == 0 || length > PLAYFAIR_LETTERS {
        return Err(CipherError::invalid_argument(format!(
            "unique key length must be between 1 and {}, got {}",
            PLAYFAIR_LETTERS, length
        )));
    }

    let mut letters: Vec<char> = ALPHABET.iter().copied().filter(|&c| c != 'j').collect();
    let (chosen, _) = letters.partial_shuffle(rng, length);
    let mut key: String = chosen.iter().collect();

    let rest: Vec<char> = ALPHABET
        .iter()
        .copied()
        .filter(|&c| c != 'j' && !key.contains(c))
        .collect();
    key.extend(rest);
    Ok(key)
}
