//! The 26-letter lowercase Latin alphabet shared by every cipher.

/// The alphabet in order; position in this array is the letter's index.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Number of letters in [`ALPHABET`].
pub const LEN: usize = ALPHABET.len();

/// Which way a cipher runs.
///
/// Every cipher with distinct encode and decode paths has one private
/// implementation taking a `Direction`; the public `encode`/`decode` pair
/// only picks the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

impl Direction {
    /// +1 for encoding, -1 for decoding.
    pub fn sign(self) -> i64 {
        match self {
            Direction::Encode => 1,
            Direction::Decode => -1,
        }
    }
}

/// Index of `c` in the alphabet, or `None` if `c` is not a lowercase
/// ASCII letter.
pub fn index_of(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Letter at `index` after reducing it modulo 26. Negative indices wrap.
pub fn letter_at(index: i64) -> char {
    ALPHABET[index.rem_euclid(LEN as i64) as usize]
}
