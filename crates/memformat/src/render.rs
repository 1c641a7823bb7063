//! Rendering of normalized words as text.
//!
//! - **Binary**: zero-padded to the word width, no prefix.
//! - **Octal / Hex**: lowercase, minimal digits, no prefix.
//! - **Signed**: two's-complement decimal of the word width.
//! - **Unsigned**: decimal.
//! - **Float**: IEEE 754 single (32 bit) or double (64 bit) precision, printed in fixed
//!   notation with six fractional digits.

use crate::word::{OutputFormat, WordSize};

/// Renders the low `word_size.bits()` bits of `word` in `format`.
///
/// 1 bit words always render as `"0"` or `"1"` whatever the format. Float is only
/// meaningful for 32 and 64 bit words; narrower words are rendered as an unsigned value,
/// which never happens for a compiled [crate::Formatter].
pub fn render_word(word: u64, word_size: WordSize, format: OutputFormat) -> String {
    let bits = word_size.bits();
    let word = truncate(word, bits);

    if word_size == WordSize::Bit1 {
        return if word == 0 { "0" } else { "1" }.to_string();
    }

    match format {
        OutputFormat::Binary => format!("{:0width$b}", word, width = bits as usize),
        OutputFormat::Octal => format!("{word:o}"),
        OutputFormat::Hex => format!("{word:x}"),
        OutputFormat::Signed => sign_extend(word, bits).to_string(),
        OutputFormat::Unsigned => word.to_string(),
        OutputFormat::Float => match word_size {
            WordSize::Bit32 => render_f32(f32::from_bits(word as u32)),
            WordSize::Bit64 => render_f64(f64::from_bits(word)),
            _ => word.to_string(),
        },
    }
}

/// Sign-extends the low `bits` of `value` to a full `i64`.
pub fn sign_extend(value: u64, bits: u32) -> i64 {
    let shift = 64 - bits;
    ((value << shift) as i64) >> shift
}

fn truncate(value: u64, bits: u32) -> u64 {
    if bits >= 64 {
        value
    } else {
        value & ((1u64 << bits) - 1)
    }
}

/// Single precision values are widened exactly, so both widths print the same text for
/// equal values. NaN is checked first since widening does not keep its sign.
fn render_f32(value: f32) -> String {
    if value.is_nan() {
        return render_nan(value.is_sign_negative());
    }

    render_f64(f64::from(value))
}

/// Fixed notation with six fractional digits, like C's `%f`.
fn render_f64(value: f64) -> String {
    if value.is_nan() {
        return render_nan(value.is_sign_negative());
    }

    // Display of infinities is already "inf" / "-inf"
    format!("{value:.6}")
}

fn render_nan(negative: bool) -> String {
    if negative { "-nan" } else { "nan" }.to_string()
}
