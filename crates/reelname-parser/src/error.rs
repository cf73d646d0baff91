//! Error type for the few fallible edges of the crate.
//!
//! Parsing a name never fails; these errors only come from converting
//! strings into enums and from rendering the debug dump.

/// Error type for reelname-parser.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A string did not name a known value of an enum.
    #[error("invalid {kind}: {value}")]
    InvalidValue {
        /// Which kind of value was being parsed (e.g. "media type").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// The debug dump could not be serialized.
    #[error("failed to serialize parsed name: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Create a new InvalidValue error.
    pub fn invalid_value<S: Into<String>>(kind: &'static str, value: S) -> Self {
        Self::InvalidValue {
            kind,
            value: value.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
