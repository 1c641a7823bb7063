//! Error types for building formatters.
//!
//! Every check happens while a [crate::Formatter] is compiled; rendering never fails.

use thiserror::Error;

use crate::{endian::Endianness, word::OutputFormat, word::WordSize};

/// Result type for memformat operations
pub type Result<T> = std::result::Result<T, FormatterError>;

/// Errors produced when compiling a [crate::FormatterConfig] into a [crate::Formatter].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatterError {
    /// Address string does not follow the address grammar for the word size.
    #[error("invalid address '{input}': {reason}")]
    InvalidFormat { input: String, reason: &'static str },

    /// Bit index of a 1-bit address is greater than 7.
    #[error("bit index {index} out of range (0..7)")]
    OutOfRange { index: u64 },

    /// Endianness or output format is not defined for the word size.
    #[error("{setting} is not allowed for {word_size} values")]
    UnsupportedCombination {
        word_size: WordSize,
        setting: Setting,
    },

    /// The formatter would read past the end of the memory region.
    #[error("extent {extent} is outside of the memory region ({len} bytes)")]
    OutOfBounds { extent: usize, len: usize },

    /// A word size, endianness or format name was not recognized.
    #[error("unknown {kind} '{name}'")]
    UnknownName { kind: &'static str, name: String },
}

/// The half of a rejected pairing that is not the word size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Endianness(Endianness),
    Format(OutputFormat),
}

impl std::fmt::Display for Setting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Setting::Endianness(e) => write!(f, "endianness {e}"),
            Setting::Format(format) => write!(f, "format {format}"),
        }
    }
}

impl FormatterError {
    pub(crate) fn invalid_format(input: &str, reason: &'static str) -> Self {
        FormatterError::InvalidFormat {
            input: input.to_string(),
            reason,
        }
    }

    pub(crate) fn unknown_name(kind: &'static str, name: &str) -> Self {
        FormatterError::UnknownName {
            kind,
            name: name.to_string(),
        }
    }

    pub(crate) fn unsupported(word_size: WordSize, setting: Setting) -> Self {
        FormatterError::UnsupportedCombination { word_size, setting }
    }
}
