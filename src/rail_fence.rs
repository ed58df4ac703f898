//! Rail Fence cipher: write the message in a zigzag over `rails` rows,
//! then read it off row by row.
//!
//! Characters are moved, never changed: case, spaces and punctuation all
//! travel with the text.

use crate::error::{CipherError, Result};

/// Encode `message` over `rails` rails.
///
/// Fails with `InvalidArgument` if `rails` is zero. One rail, or more
/// rails than characters, leaves the message as it is.
pub fn encode(message: &str, rails: usize) -> Result<String> {
    let pattern = zigzag(message.chars().count(), rails)?;
    let chars: Vec<char> = message.chars().collect();

    let mut result = String::with_capacity(message.len());
    for rail in 0..rails {
        result.extend(
            pattern
                .iter()
                .zip(&chars)
                .filter(|&(&r, _)| r == rail)
                .map(|(_, &c)| c),
        );
    }
    Ok(result)
}

/// Decode `message` that was encoded over `rails` rails.
pub fn decode(message: &str, rails: usize) -> Result<String> {
    let pattern = zigzag(message.chars().count(), rails)?;

    // Row-major order of the occupied cells: rail first, then column.
    let mut cells: Vec<usize> = (0..pattern.len()).collect();
    cells.sort_by_key(|&col| (pattern[col], col));

    let mut plain = vec!['\0'; pattern.len()];
    for (&col, c) in cells.iter().zip(message.chars()) {
        plain[col] = c;
    }
    Ok(plain.into_iter().collect())
}

/// Rail visited by each of `len` consecutive characters.
///
/// Starts on rail 0 heading down and turns around at the top and bottom rails.
fn zigzag(len: usize, rails: usize) -> Result<Vec<usize>> {
    if rails == 0 {
        return Err(CipherError::invalid_argument(
            "number of rails must be at least 1",
        ));
    }

    let mut pattern = Vec::with_capacity(len);
    let mut rail = 0;
    let mut down = true;
    for _ in 0..len {
        pattern.push(rail);
        if rails == 1 {
            continue;
        }
        if down {
            rail += 1;
        } else {
            rail -= 1;
        }
        if rail == 0 || rail == rails - 1 {
            down = !down;
        }
    }
    Ok(pattern)
}
