//! Address strings: where inside a memory region a formatter reads.
//!
//! Grammar:
//! - 1 bit words: `<offset>.<bit index>`, e.g. `"0x10.3"`
//! - other words: `<offset>`, e.g. `"0x10"`, `"16"`, `"020"`
//!
//! Offsets follow integer literal rules: a `0x` prefix is hexadecimal, a leading `0` is octal,
//! everything else is decimal.

use crate::{
    errors::{FormatterError, Result},
    word::WordSize,
};

/// Highest valid bit index inside a byte.
pub const MAX_BIT_INDEX: u8 = 7;

/// A parsed address: byte offset plus a bit index for 1 bit words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressSpec {
    pub byte_offset: usize,
    /// Present iff the address was parsed for [WordSize::Bit1].
    pub bit_index: Option<u8>,
}

impl AddressSpec {
    /// Parses `input` according to the address grammar of `word_size`.
    pub fn parse(input: &str, word_size: WordSize) -> Result<Self> {
        match word_size {
            WordSize::Bit1 => {
                let (offset, index) = input.split_once('.').ok_or_else(|| {
                    FormatterError::invalid_format(input, "expected \"<offset>.<bit index>\"")
                })?;

                if index.contains('.') {
                    return Err(FormatterError::invalid_format(
                        input,
                        "expected exactly one '.' separator",
                    ));
                }

                let byte_offset = parse_offset(offset)?;
                let bit_index = parse_bit_index(index)?;

                Ok(AddressSpec {
                    byte_offset,
                    bit_index: Some(bit_index),
                })
            }
            _ => Ok(AddressSpec {
                byte_offset: parse_offset(input)?,
                bit_index: None,
            }),
        }
    }
}

/// Parses an offset literal, consuming all of `input`.
pub fn parse_offset(input: &str) -> Result<usize> {
    let (digits, radix) = if let Some(hex) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        (hex, 16)
    } else if input.len() > 1 && input.starts_with('0') {
        (&input[1..], 8)
    } else {
        (input, 10)
    };

    if digits.is_empty() {
        return Err(FormatterError::invalid_format(input, "missing digits"));
    }

    // from_str_radix would accept a leading sign
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(FormatterError::invalid_format(
            input,
            "not a valid offset literal",
        ));
    }

    usize::from_str_radix(digits, radix)
        .map_err(|_| FormatterError::invalid_format(input, "offset does not fit the address width"))
}

fn parse_bit_index(input: &str) -> Result<u8> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(FormatterError::invalid_format(input, "bit index is not a number"));
    }

    // Overlong digit strings are out of range, not malformed.
    let index = input.parse::<u64>().unwrap_or(u64::MAX);
    if index > MAX_BIT_INDEX as u64 {
        return Err(FormatterError::OutOfRange { index });
    }

    Ok(index as u8)
}
