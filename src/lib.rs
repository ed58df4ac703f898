//! Classicrypt - classical cipher toolkit
//!
//! Caesar, Vigenère, Playfair, Rail Fence and Atbash encode/decode, a
//! brute-force Caesar breaker, and random key generation. Every cipher
//! works on the 26-letter Latin alphabet and is a pure function of its
//! arguments.
//!
//! These are historical ciphers. They offer no security whatsoever.
//!
//! ```
//! use classicrypt::{caesar, vigenere};
//!
//! assert_eq!(caesar::encode("hello world", 3), "khoor zruog");
//! assert_eq!(vigenere::encode("attackatdawn", "lemon").unwrap(), "lxfopvefrnhr");
//! ```

#![forbid(unsafe_code)]

pub mod alphabet;
pub mod atbash;
pub mod brute_force;
pub mod caesar;
pub mod error;
pub mod file_ops;
pub mod keygen;
pub mod keyword;
pub mod menu;
pub mod playfair;
pub mod rail_fence;
pub mod selftest;
pub mod vigenere;

pub use alphabet::Direction;
pub use error::{CipherError, ErrorCategory, ErrorKind, Result};
