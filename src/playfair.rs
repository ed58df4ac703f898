//! Playfair cipher: digraph substitution over a 5x5 key square.
//!
//! The square holds the 25 letters other than 'j', ordered by first
//! appearance in the keyword followed by the rest of the alphabet.
//!
//! Message preparation lower-cases, maps 'j' to 'i', strips everything
//! that is not a letter, then pads an odd-length result with a trailing
//! 'x'. Pairs of identical letters are NOT split with a filler; a doubled
//! letter shares a row and is shifted along it like any other same-row pair.

use std::fmt;

use crate::alphabet::{self, Direction};

/// Side length of the key square.
pub const SIZE: usize = 5;

const PAD: char = 'x';

/// The 5x5 unique-letter grid derived from a keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    cells: [[char; SIZE]; SIZE],
    /// (row, col) of each letter, indexed by alphabet position. 'j' is absent.
    positions: [Option<(usize, usize)>; alphabet::LEN],
}

impl KeySquare {
    /// Builds the square for `keyword`.
    ///
    /// The keyword is lower-cased and everything but the letters other
    /// than 'j' is dropped ('j' is removed, not turned into 'i'), so any
    /// keyword, including an empty one, yields a square with each of the
    /// 25 letters exactly once.
    pub fn new(keyword: &str) -> Self {
        let mut cells = [[' '; SIZE]; SIZE];
        let mut positions = [None; alphabet::LEN];
        let mut filled = 0;

        let seed = keyword
            .chars()
            .flat_map(char::to_lowercase)
            .chain(alphabet::ALPHABET.iter().copied())
            .filter(|&c| c != 'j');
        for c in seed {
            let Some(i) = alphabet::index_of(c) else {
                continue;
            };
            if positions[i].is_some() {
                continue;
            }
            let (row, col) = (filled / SIZE, filled % SIZE);
            cells[row][col] = c;
            positions[i] = Some((row, col));
            filled += 1;
        }

        Self { cells, positions }
    }

    /// Letter at (`row`, `col`).
    pub fn letter(&self, row: usize, col: usize) -> char {
        self.cells[row][col]
    }

    /// Position of `letter` in the square, or `None` for 'j' and non-letters.
    pub fn position(&self, letter: char) -> Option<(usize, usize)> {
        alphabet::index_of(letter).and_then(|i| self.positions[i])
    }

    /// The square's rows, top to bottom.
    pub fn rows(&self) -> &[[char; SIZE]; SIZE] {
        &self.cells
    }

    fn substitute(&self, a: (usize, usize), b: (usize, usize), direction: Direction) -> [char; 2] {
        let step = |n: usize| match direction {
            Direction::Encode => (n + 1) % SIZE,
            Direction::Decode => (n + SIZE - 1) % SIZE,
        };
        let ((row1, col1), (row2, col2)) = (a, b);

        if row1 == row2 {
            [self.letter(row1, step(col1)), self.letter(row2, step(col2))]
        } else if col1 == col2 {
            [self.letter(step(row1), col1), self.letter(step(row2), col2)]
        } else {
            // Rectangle: swap columns. Self-inverse, so direction is irrelevant.
            [self.letter(row1, col2), self.letter(row2, col1)]
        }
    }
}

impl fmt::Display for KeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Encode `message` with the key square built from `keyword`.
pub fn encode(message: &str, keyword: &str) -> String {
    transform(message, keyword, Direction::Encode)
}

/// Decode `message` with the key square built from `keyword`.
pub fn decode(message: &str, keyword: &str) -> String {
    transform(message, keyword, Direction::Decode)
}

/// Lower-cases, maps 'j' to 'i', drops non-letters and pads to even length.
pub fn prepare(message: &str) -> Vec<char> {
    let mut letters: Vec<char> = normalize(message).collect();
    if letters.len() % 2 != 0 {
        letters.push(PAD);
    }
    letters
}

fn normalize(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .map(|c| if c == 'j' { 'i' } else { c })
}

fn transform(message: &str, keyword: &str, direction: Direction) -> String {
    let square = KeySquare::new(keyword);
    let letters = prepare(message);

    let mut result = String::with_capacity(letters.len());
    for pair in letters.chunks_exact(2) {
        // prepare() leaves only letters other than 'j', all of which are in the square.
        let (Some(a), Some(b)) = (square.position(pair[0]), square.position(pair[1])) else {
            unreachable!("prepared letter missing from key square");
        };
        result.extend(square.substitute(a, b, direction));
    }
    result
}
