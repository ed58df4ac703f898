//! Known-answer checks that can be run from the interactive menu.

use std::collections::HashSet;

use crate::brute_force::{self, Candidate};
use crate::error::Result;
use crate::{atbash, caesar, keygen, playfair, rail_fence, vigenere};

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub name: &'static str,
    pub passed: bool,
}

/// Runs every known-answer check and reports each outcome in a fixed order.
pub fn run() -> Vec<Check> {
    let checks: [(&'static str, fn() -> Result<bool>); 7] = [
        ("caesar", caesar_check),
        ("vigenere", vigenere_check),
        ("playfair", playfair_check),
        ("rail fence", rail_fence_check),
        ("atbash", atbash_check),
        ("caesar brute force", brute_force_check),
        ("key generation", keygen_check),
    ];

    checks
        .into_iter()
        .map(|(name, check)| Check {
            name,
            // An unexpected error is a failed check, not a failed run.
            passed: check().unwrap_or(false),
        })
        .collect()
}

/// True when every check in `checks` passed.
pub fn all_passed(checks: &[Check]) -> bool {
    checks.iter().all(|c| c.passed)
}

fn caesar_check() -> Result<bool> {
    let encoded = caesar::encode("hello world", 3);
    Ok(encoded == "khoor zruog" && caesar::decode(&encoded, 3) == "hello world")
}

fn vigenere_check() -> Result<bool> {
    let encoded = vigenere::encode("attackatdawn", "lemon")?;
    Ok(encoded == "lxfopvefrnhr" && vigenere::decode(&encoded, "lemon")? == "attackatdawn")
}

fn playfair_check() -> Result<bool> {
    let encoded = playfair::encode("hello world", "keyword");
    Ok(playfair::decode(&encoded, "keyword") == "helloworld")
}

fn rail_fence_check() -> Result<bool> {
    let message = "defendtheeastwallofthecastle";
    let encoded = rail_fence::encode(message, 3)?;
    Ok(encoded == "dnetlhseedheswloteateftaafcl" && rail_fence::decode(&encoded, 3)? == message)
}

fn atbash_check() -> Result<bool> {
    let encoded = atbash::encode("abcdefghijklmnopqrstuvwxyz");
    Ok(encoded == "zyxwvutsrqponmlkjihgfedcba"
        && atbash::decode(&encoded) == "abcdefghijklmnopqrstuvwxyz")
}

fn brute_force_check() -> Result<bool> {
    let expected = Candidate {
        shift: 3,
        plaintext: "hello world".to_string(),
        score: 0,
    };
    Ok(brute_force::brute_force("khoor zruog").contains(&expected))
}

fn keygen_check() -> Result<bool> {
    let vigenere_key = keygen::generate_vigenere_key(10)?;
    let playfair_key = keygen::generate_playfair_key(10)?;
    let distinct: HashSet<char> = playfair_key.chars().collect();
    Ok(vigenere_key.len() == 10
        && vigenere_key.chars().all(|c| c.is_ascii_lowercase())
        && playfair_key.len() == 25
        && distinct.len() == 25
        && !playfair_key.contains('j'))
}
