//! Byte and word order of multi-byte values.
//!
//! A raw word is read from memory in host byte order. [Endianness::normalizer] picks the
//! function that turns such a raw word into the value it encodes.
//!
//! Using ABCD notation (A = most significant byte), a 32-bit value `0xAABBCCDD` is stored as:
//! - `Big`: `AA BB CC DD`
//! - `Little`: `DD CC BB AA`
//! - `BigSwap16`: `CC DD AA BB`
//! - `LittleSwap16`: `BB AA DD CC`
//!
//! and a 64-bit value `ABCDEFGH` under the 32-bit swaps as:
//! - `BigSwap32`: `E F G H A B C D`
//! - `LittleSwap32`: `D C B A H G F E`

use std::{fmt, str::FromStr};

use crate::{
    errors::{FormatterError, Setting},
    word::WordSize,
};

/// Converts a raw host-order word (in the low bits of a `u64`) into its value.
pub type Normalize = fn(u64) -> u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endianness {
    /// Use host endianness, the raw word is the value.
    #[default]
    Host,
    /// Big endian (ABCD).
    Big,
    /// Little endian (DCBA).
    Little,
    /// Big endian with swapped 16-bit words (CDAB). Only for 32 and 64 bit words.
    BigSwap16,
    /// Little endian with swapped 16-bit words (BADC). Only for 32 and 64 bit words.
    LittleSwap16,
    /// Big endian with swapped 32-bit halves (EFGHABCD). Only for 64 bit words.
    BigSwap32,
    /// Little endian with swapped 32-bit halves (DCBAHGFE). Only for 64 bit words.
    LittleSwap32,
}

impl Endianness {
    pub const ALL: [Endianness; 7] = [
        Endianness::Host,
        Endianness::Big,
        Endianness::Little,
        Endianness::BigSwap16,
        Endianness::LittleSwap16,
        Endianness::BigSwap32,
        Endianness::LittleSwap32,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Endianness::Host => "host",
            Endianness::Big => "big",
            Endianness::Little => "little",
            Endianness::BigSwap16 => "big_swap16",
            Endianness::LittleSwap16 => "little_swap16",
            Endianness::BigSwap32 => "big_swap32",
            Endianness::LittleSwap32 => "little_swap32",
        }
    }

    /// Selects the conversion for `word_size`.
    ///
    /// 1 and 8 bit words have no byte order, every endianness maps to the identity.
    /// Swapped variants need at least two units to swap, so they are rejected for
    /// words that are too narrow.
    pub fn normalizer(self, word_size: WordSize) -> Result<Normalize, FormatterError> {
        use Endianness::*;

        let normalize: Option<Normalize> = match (word_size, self) {
            (WordSize::Bit1 | WordSize::Bit8, _) | (_, Host) => Some(identity),

            (WordSize::Bit16, Big) => Some(big_16),
            (WordSize::Bit16, Little) => Some(little_16),
            (WordSize::Bit16, _) => None,

            (WordSize::Bit32, Big) => Some(big_32),
            (WordSize::Bit32, Little) => Some(little_32),
            (WordSize::Bit32, BigSwap16) => Some(big_32_swap16),
            (WordSize::Bit32, LittleSwap16) => Some(little_32_swap16),
            (WordSize::Bit32, _) => None,

            (WordSize::Bit64, Big) => Some(big_64),
            (WordSize::Bit64, Little) => Some(little_64),
            (WordSize::Bit64, BigSwap16) => Some(big_64_swap16),
            (WordSize::Bit64, LittleSwap16) => Some(little_64_swap16),
            (WordSize::Bit64, BigSwap32) => Some(big_64_swap32),
            (WordSize::Bit64, LittleSwap32) => Some(little_64_swap32),
        };

        normalize.ok_or_else(|| FormatterError::unsupported(word_size, Setting::Endianness(self)))
    }

    /// Whether [Endianness::normalizer] accepts `word_size`.
    pub fn supports(self, word_size: WordSize) -> bool {
        self.normalizer(word_size).is_ok()
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endianness {
    type Err = FormatterError;

    /// Accepts the names printed by [Display](fmt::Display) plus the ABCD aliases used by
    /// register maps ("ABCD", "DCBA", "CDAB", "BADC", "EFGHABCD", "DCBAHGFE").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "host" | "native" => Ok(Endianness::Host),
            "big" | "be" | "big_endian" | "abcd" => Ok(Endianness::Big),
            "little" | "le" | "little_endian" | "dcba" => Ok(Endianness::Little),
            "big_swap16" | "cdab" => Ok(Endianness::BigSwap16),
            "little_swap16" | "badc" => Ok(Endianness::LittleSwap16),
            "big_swap32" | "efghabcd" => Ok(Endianness::BigSwap32),
            "little_swap32" | "dcbahgfe" => Ok(Endianness::LittleSwap32),
            _ => Err(FormatterError::unknown_name("endianness", s)),
        }
    }
}

fn identity(raw: u64) -> u64 {
    raw
}

fn big_16(raw: u64) -> u64 {
    u16::from_be(raw as u16) as u64
}

fn little_16(raw: u64) -> u64 {
    u16::from_le(raw as u16) as u64
}

fn big_32(raw: u64) -> u64 {
    u32::from_be(raw as u32) as u64
}

fn little_32(raw: u64) -> u64 {
    u32::from_le(raw as u32) as u64
}

fn big_32_swap16(raw: u64) -> u64 {
    u32::from_be(raw as u32).rotate_left(16) as u64
}

fn little_32_swap16(raw: u64) -> u64 {
    u32::from_le(raw as u32).rotate_left(16) as u64
}

fn big_64(raw: u64) -> u64 {
    u64::from_be(raw)
}

fn little_64(raw: u64) -> u64 {
    u64::from_le(raw)
}

fn big_64_swap16(raw: u64) -> u64 {
    swap_16bit_pairs(u64::from_be(raw))
}

fn little_64_swap16(raw: u64) -> u64 {
    swap_16bit_pairs(u64::from_le(raw))
}

fn big_64_swap32(raw: u64) -> u64 {
    u64::from_be(raw).rotate_left(32)
}

fn little_64_swap32(raw: u64) -> u64 {
    u64::from_le(raw).rotate_left(32)
}

/// Swaps 16-bit quarters 0 <-> 1 and 2 <-> 3.
fn swap_16bit_pairs(value: u64) -> u64 {
    const LOW: u64 = 0x0000_FFFF_0000_FFFF;
    ((value & LOW) << 16) | ((value >> 16) & LOW)
}
