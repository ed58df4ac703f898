use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// Any failure that cannot be confidently attributed to the caller.
    ///
    /// Internal is never a guarantee that the caller did nothing wrong,
    /// only that the code could not tell.
    Internal,

    /// The caller supplied an argument the ciphers cannot work with, or
    /// asked for something impossible (a file that does not exist, a key
    /// longer than the key square).
    User,
}

/// Fine-grained condition flags for consumers that want to branch on error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A cipher parameter is outside its domain: empty or non-alphabetic
    /// keyword, zero rails, key length of zero or above 25.
    InvalidArgument,
    /// The requested file does not exist.
    NotFound,
    /// A file or terminal could not be read or written.
    ResourceUnavailable,
    /// File content is not valid UTF-8.
    InvalidEncoding,
    /// Unexpected state reached within classicrypt logic.
    InternalInvariant,
}

#[derive(Debug, Error)]
#[error("{msg}")]
pub struct CipherError {
    /// Broad error category, always provided.
    pub category: ErrorCategory,
    /// Optional specific condition tag. Code consuming errors MUST handle
    /// the absence of a defined kind.
    pub kind: Option<ErrorKind>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    msg: String,
}

impl CipherError {
    /// Creates a new error that also tags the failure with a kind.
    pub fn with_kind(category: ErrorCategory, kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            category,
            kind: Some(kind),
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that carries both a kind tag and the originating source error.
    pub fn with_kind_and_source(
        category: ErrorCategory,
        kind: ErrorKind,
        msg: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            category,
            kind: Some(kind),
            source: Some(Box::new(source)),
            msg: msg.into(),
        }
    }

    /// Shorthand for the argument-validation failures raised by the ciphers
    /// and key generators.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::with_kind(ErrorCategory::User, ErrorKind::InvalidArgument, msg)
    }

    /// The user-facing message carried by the error.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Returns the preserved source error if present.
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Wraps the current error with a higher-level message while preserving the original as source.
    pub fn with_context(self, msg: impl Into<String>) -> Self {
        let category = self.category;
        let kind = self.kind;
        Self {
            category,
            kind,
            source: Some(Box::new(self)),
            msg: msg.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_invalid_argument_shape() {
        let err = CipherError::invalid_argument("keyword must not be empty");
        assert_eq!(err.category, ErrorCategory::User);
        assert_eq!(err.kind, Some(ErrorKind::InvalidArgument));
        assert_eq!(err.to_string(), "keyword must not be empty");
        assert!(err.source_error().is_none());
    }

    #[test]
    fn test_with_context_keeps_category_and_kind() {
        let inner = CipherError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::ResourceUnavailable,
            "failed to read from msg.txt",
            io::Error::other("disk on fire"),
        );
        let outer = inner.with_context("could not load message");

        assert_eq!(outer.category, ErrorCategory::Internal);
        assert_eq!(outer.kind, Some(ErrorKind::ResourceUnavailable));
        assert_eq!(outer.message(), "could not load message");
        let source = outer.source_error().expect("context must keep the source");
        assert_eq!(source.to_string(), "failed to read from msg.txt");
    }

    #[test]
    fn test_with_kind_has_no_source() {
        let err = CipherError::with_kind(
            ErrorCategory::Internal,
            ErrorKind::InternalInvariant,
            "boom",
        );
        assert_eq!(err.kind, Some(ErrorKind::InternalInvariant));
        assert_eq!(err.message(), "boom");
        assert!(err.source_error().is_none());
    }
}
