//! Keyword sources for the keyed ciphers

use crate::error::{CipherError, ErrorCategory, ErrorKind, Result};
use std::io::{self, IsTerminal, Write};
use zeroize::Zeroizing;

/// Trait for obtaining a cipher keyword
pub trait KeywordReader {
    /// Read a keyword.
    ///
    /// Returns the keyword wrapped in `Zeroizing` so it is wiped from
    /// memory when dropped.
    fn read_keyword(&mut self) -> Result<Zeroizing<String>>;
}

/// Returns a fixed keyword (from the command line, or for testing)
pub struct ConstantKeywordReader {
    keyword: Zeroizing<String>,
}

impl ConstantKeywordReader {
    pub fn new(keyword: String) -> Self {
        Self {
            keyword: Zeroizing::new(keyword),
        }
    }
}

impl KeywordReader for ConstantKeywordReader {
    fn read_keyword(&mut self) -> Result<Zeroizing<String>> {
        Ok(Zeroizing::new((*self.keyword).clone()))
    }
}

/// Reads the keyword from the terminal with no echo
pub struct TerminalKeywordReader;

impl TerminalKeywordReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalKeywordReader {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordReader for TerminalKeywordReader {
    fn read_keyword(&mut self) -> Result<Zeroizing<String>> {
        if !io::stdin().is_terminal() {
            return Err(CipherError::with_kind(
                ErrorCategory::User,
                ErrorKind::ResourceUnavailable,
                "cannot read keyword from terminal - stdin is not a terminal; pass --keyword",
            ));
        }

        io::stderr().write_all(b"Keyword: ").map_err(|e| {
            CipherError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::ResourceUnavailable,
                format!("failed to write prompt: {}", e),
                e,
            )
        })?;
        io::stderr().flush().map_err(|e| {
            CipherError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::ResourceUnavailable,
                format!("failed to flush prompt: {}", e),
                e,
            )
        })?;

        let keyword = rpassword::read_password().map_err(|e| {
            CipherError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::ResourceUnavailable,
                format!("failure reading keyword: {}", e),
                e,
            )
        })?;

        Ok(Zeroizing::new(keyword))
    }
}
