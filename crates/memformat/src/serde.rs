//! Deserializable formatter descriptions.
//!
//! These types mirror [crate::FormatterConfig] so formatters can be described in
//! configuration files (JSON, TOML, ...) and converted into core `memformat` types.
//!
//! ```json
//! { "address": "0x10", "word_size": "Bit32", "format": "Float", "endianness": "BigSwap16" }
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    config::FormatterConfig,
    endian::Endianness,
    word::{OutputFormat, WordSize},
};

/// Number of bits read as one value.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum WordSizeDef {
    Bit1,
    Bit8,
    Bit16,
    Bit32,
    Bit64,
}

/// Numeral representation of the rendered value.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormatDef {
    #[default]
    Binary,
    Octal,
    Hex,
    Signed,
    Unsigned,
    /// Only valid for 32 and 64 bit words.
    Float,
}

/// Byte and word order of the value in memory.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
pub enum EndiannessDef {
    #[default]
    Host,
    Big,
    Little,
    BigSwap16,
    LittleSwap16,
    BigSwap32,
    LittleSwap32,
}

/// Description of a single formatter.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FormatterDef {
    /// `"<offset>"`, or `"<offset>.<bit index>"` for 1 bit words.
    pub address: String,
    pub word_size: WordSizeDef,
    /// Defaults to binary.
    #[serde(default)]
    pub format: FormatDef,
    /// Defaults to host endianness.
    #[serde(default)]
    pub endianness: EndiannessDef,
}

impl From<WordSizeDef> for WordSize {
    fn from(value: WordSizeDef) -> Self {
        match value {
            WordSizeDef::Bit1 => WordSize::Bit1,
            WordSizeDef::Bit8 => WordSize::Bit8,
            WordSizeDef::Bit16 => WordSize::Bit16,
            WordSizeDef::Bit32 => WordSize::Bit32,
            WordSizeDef::Bit64 => WordSize::Bit64,
        }
    }
}

impl From<FormatDef> for OutputFormat {
    fn from(value: FormatDef) -> Self {
        match value {
            FormatDef::Binary => OutputFormat::Binary,
            FormatDef::Octal => OutputFormat::Octal,
            FormatDef::Hex => OutputFormat::Hex,
            FormatDef::Signed => OutputFormat::Signed,
            FormatDef::Unsigned => OutputFormat::Unsigned,
            FormatDef::Float => OutputFormat::Float,
        }
    }
}

impl From<EndiannessDef> for Endianness {
    fn from(value: EndiannessDef) -> Self {
        match value {
            EndiannessDef::Host => Endianness::Host,
            EndiannessDef::Big => Endianness::Big,
            EndiannessDef::Little => Endianness::Little,
            EndiannessDef::BigSwap16 => Endianness::BigSwap16,
            EndiannessDef::LittleSwap16 => Endianness::LittleSwap16,
            EndiannessDef::BigSwap32 => Endianness::BigSwap32,
            EndiannessDef::LittleSwap32 => Endianness::LittleSwap32,
        }
    }
}

impl From<FormatterDef> for FormatterConfig {
    fn from(value: FormatterDef) -> Self {
        FormatterConfig {
            address: value.address,
            word_size: value.word_size.into(),
            format: value.format.into(),
            endianness: value.endianness.into(),
        }
    }
}
