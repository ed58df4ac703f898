//! Caesar cryptanalysis by exhaustion: decode with every shift and rank
//! the candidates by how English they look.

use std::collections::HashSet;

use crate::alphabet;
use crate::caesar;

/// Words whose presence marks a candidate as likely English.
pub const COMMON_WORDS: [&str; 8] = ["the", "be", "to", "of", "and", "in", "that", "have"];

/// One decoding attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Shift passed to [`caesar::decode`], 0 to 25.
    pub shift: u8,
    pub plaintext: String,
    /// Number of whitespace-separated words found in [`COMMON_WORDS`].
    pub score: usize,
}

/// Decode `message` with all 26 shifts and return the candidates,
/// best score first.
///
/// Candidates with equal scores stay in ascending shift order.
pub fn brute_force(message: &str) -> Vec<Candidate> {
    let common: HashSet<&str> = COMMON_WORDS.into_iter().collect();

    let mut candidates: Vec<Candidate> = (0..alphabet::LEN as u8)
        .map(|shift| {
            let plaintext = caesar::decode(message, i64::from(shift));
            let score = score_with(&common, &plaintext);
            Candidate {
                shift,
                plaintext,
                score,
            }
        })
        .collect();

    // Vec::sort_by_key is stable.
    candidates.sort_by_key(|c| std::cmp::Reverse(c.score));
    candidates
}

/// Count the words of `text` that exactly match one of [`COMMON_WORDS`].
///
/// Punctuation stays attached to words, so "the," does not count.
pub fn english_score(text: &str) -> usize {
    let common: HashSet<&str> = COMMON_WORDS.into_iter().collect();
    score_with(&common, text)
}

fn score_with(common: &HashSet<&str>, text: &str) -> usize {
    text.to_lowercase()
        .split_whitespace()
        .filter(|word| common.contains(word))
        .count()
}
