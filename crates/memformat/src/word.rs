//! Word sizes and output formats a [crate::Formatter] can be built for.

use std::{fmt, str::FromStr};

use crate::errors::FormatterError;

/// Number of bits read and interpreted as one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordSize {
    /// A single bit inside the addressed byte.
    Bit1,
    Bit8,
    Bit16,
    Bit32,
    Bit64,
}

impl WordSize {
    pub const ALL: [WordSize; 5] = [
        WordSize::Bit1,
        WordSize::Bit8,
        WordSize::Bit16,
        WordSize::Bit32,
        WordSize::Bit64,
    ];

    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            WordSize::Bit1 => 1,
            WordSize::Bit8 => 8,
            WordSize::Bit16 => 16,
            WordSize::Bit32 => 32,
            WordSize::Bit64 => 64,
        }
    }

    /// Number of bytes touched by one read. A single bit still reads its whole byte.
    pub const fn bytes(self) -> usize {
        match self {
            WordSize::Bit1 | WordSize::Bit8 => 1,
            WordSize::Bit16 => 2,
            WordSize::Bit32 => 4,
            WordSize::Bit64 => 8,
        }
    }
}

impl fmt::Display for WordSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bit", self.bits())
    }
}

impl FromStr for WordSize {
    type Err = FormatterError;

    /// Accepts the bit count with an optional `bit`/`bits` suffix, e.g. `"16"`, `"32bit"`, `"64 bits"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let digits = normalized
            .trim_end_matches("bits")
            .trim_end_matches("bit")
            .trim_end_matches(['-', '_', ' ']);

        match digits {
            "1" => Ok(WordSize::Bit1),
            "8" => Ok(WordSize::Bit8),
            "16" => Ok(WordSize::Bit16),
            "32" => Ok(WordSize::Bit32),
            "64" => Ok(WordSize::Bit64),
            _ => Err(FormatterError::unknown_name("word size", s)),
        }
    }
}

/// Numeral representation of a rendered word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Zero-padded binary digits, one per bit.
    #[default]
    Binary,
    Octal,
    Hex,
    /// Two's-complement decimal.
    Signed,
    Unsigned,
    /// IEEE 754 single or double precision. Only for 32 and 64 bit words.
    Float,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 6] = [
        OutputFormat::Binary,
        OutputFormat::Octal,
        OutputFormat::Hex,
        OutputFormat::Signed,
        OutputFormat::Unsigned,
        OutputFormat::Float,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Binary => "bin",
            OutputFormat::Octal => "oct",
            OutputFormat::Hex => "hex",
            OutputFormat::Signed => "signed",
            OutputFormat::Unsigned => "unsigned",
            OutputFormat::Float => "float",
        }
    }

    /// Whether this format can be rendered for `word_size`.
    pub fn supports(self, word_size: WordSize) -> bool {
        match self {
            OutputFormat::Float => matches!(word_size, WordSize::Bit32 | WordSize::Bit64),
            _ => true,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bin" | "binary" => Ok(OutputFormat::Binary),
            "oct" | "octal" => Ok(OutputFormat::Octal),
            "hex" | "hexadecimal" => Ok(OutputFormat::Hex),
            "signed" | "int" | "dec" => Ok(OutputFormat::Signed),
            "unsigned" | "uint" | "udec" => Ok(OutputFormat::Unsigned),
            "float" | "double" | "real" => Ok(OutputFormat::Float),
            _ => Err(FormatterError::unknown_name("format", s)),
        }
    }
}
