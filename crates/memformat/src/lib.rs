//! # memformat
//!
//! Decode raw memory and register words at a given address and render them as text.
//!
//! A formatter is described by an address string, a word size (1, 8, 16, 32 or 64 bits),
//! an endianness (including the word-swapped layouts used by many register maps) and an
//! output format (binary, octal, hex, signed, unsigned, float). Compiling the description
//! against a [MemoryRegion] validates everything once; the resulting [Formatter] re-reads
//! memory on every [Formatter::render] and never fails afterwards.
//!
//! ## Example
//!
//! ```
//! use memformat::{build_formatter, Endianness, MemoryRegion, OutputFormat, WordSize};
//!
//! let data = [0x00, 0x00, 0xff, 0xfb];
//! let region = MemoryRegion::new(&data);
//!
//! let formatter =
//!     build_formatter(region, "2", WordSize::Bit16, OutputFormat::Signed, Endianness::Big).unwrap();
//! assert_eq!(formatter.render(), "-5");
//! assert_eq!(formatter.extent(), 3);
//!
//! let bit = build_formatter(region, "3.0", WordSize::Bit1, OutputFormat::Binary, Endianness::Host)
//!     .unwrap();
//! assert_eq!(bit.render(), "1");
//! ```

pub mod address;
pub mod config;
pub mod endian;
pub mod errors;
pub mod formatter;
pub mod memory;
pub mod render;
#[cfg(feature = "serde")]
pub mod serde;
pub mod word;

pub use address::AddressSpec;
pub use config::FormatterConfig;
pub use endian::Endianness;
pub use errors::{FormatterError, Result, Setting};
pub use formatter::Formatter;
pub use memory::MemoryRegion;
pub use word::{OutputFormat, WordSize};

/// Builds a formatter for the value at `address` inside `region`.
///
/// Shorthand for [FormatterConfig::compile]; use [FormatterConfig::new] to get the
/// defaults ([OutputFormat::Binary], [Endianness::Host]).
pub fn build_formatter<'a>(
    region: MemoryRegion<'a>,
    address: &str,
    word_size: WordSize,
    format: OutputFormat,
    endianness: Endianness,
) -> Result<Formatter<'a>> {
    let mut config = FormatterConfig::new(address, word_size);
    config.set_format(format).set_endianness(endianness);
    Formatter::compile(region, &config)
}
