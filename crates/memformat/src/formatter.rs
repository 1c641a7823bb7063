//! Compiled formatters: a validated [FormatterConfig] bound to a [MemoryRegion].

use std::fmt;

use tracing::{debug, trace};

use crate::{
    address::AddressSpec,
    config::FormatterConfig,
    endian::{Endianness, Normalize},
    errors::{FormatterError, Result, Setting},
    memory::MemoryRegion,
    render::render_word,
    word::{OutputFormat, WordSize},
};

#[derive(Debug, Clone, Copy)]
enum FormatterKind {
    /// One bit of the byte at the offset.
    Bit { index: u8 },
    /// A whole word, converted to host order by `normalize`.
    Word { normalize: Normalize },
}

/// An immutable, validated formatter.
///
/// Every check happens in [Formatter::compile]; afterwards [Formatter::render] cannot fail
/// and reads the current memory content on every call.
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    region: MemoryRegion<'a>,
    offset: usize,
    word_size: WordSize,
    endianness: Endianness,
    format: OutputFormat,
    kind: FormatterKind,
}

impl<'a> Formatter<'a> {
    /// Compiles `config` against `region`.
    ///
    /// Checks run in order: address string, word size x endianness, word size x format,
    /// and finally that [Formatter::extent] lies inside `region`.
    pub fn compile(region: MemoryRegion<'a>, config: &FormatterConfig) -> Result<Self> {
        let result = Self::try_compile(region, config);

        match &result {
            Ok(formatter) => debug!(
                offset = formatter.offset,
                word_size = %formatter.word_size,
                endianness = %formatter.endianness,
                format = %formatter.format,
                extent = formatter.extent(),
                "compiled formatter"
            ),
            Err(err) => debug!(address = %config.address, error = %err, "rejected formatter"),
        }

        result
    }

    fn try_compile(region: MemoryRegion<'a>, config: &FormatterConfig) -> Result<Self> {
        let word_size = config.word_size;
        let address = AddressSpec::parse(&config.address, word_size)?;

        let kind = match address.bit_index {
            Some(index) => FormatterKind::Bit { index },
            None => {
                let normalize = config.endianness.normalizer(word_size)?;
                if !config.format.supports(word_size) {
                    return Err(FormatterError::unsupported(
                        word_size,
                        Setting::Format(config.format),
                    ));
                }

                FormatterKind::Word { normalize }
            }
        };

        if !region.contains(address.byte_offset, word_size) {
            return Err(FormatterError::OutOfBounds {
                extent: address
                    .byte_offset
                    .saturating_add(word_size.bytes() - 1),
                len: region.len(),
            });
        }

        Ok(Formatter {
            region,
            offset: address.byte_offset,
            word_size,
            endianness: config.endianness,
            format: config.format,
            kind,
        })
    }

    /// Reads the current value: the bit (0 or 1) for 1 bit words, otherwise the word
    /// converted to host byte order.
    pub fn read(&self) -> u64 {
        match self.kind {
            FormatterKind::Bit { index } => {
                // SAFETY: compile checked that the offset is inside the region.
                let byte = unsafe { self.region.read_byte_unchecked(self.offset) };
                ((byte >> index) & 1) as u64
            }
            FormatterKind::Word { normalize } => {
                // SAFETY: compile checked that offset..=extent is inside the region.
                let raw = unsafe { self.region.read_word_unchecked(self.offset, self.word_size) };
                normalize(raw)
            }
        }
    }

    /// Reads the current value and renders it as text.
    pub fn render(&self) -> String {
        let text = render_word(self.read(), self.word_size, self.format);
        trace!(offset = self.offset, text = %text, "rendered");
        text
    }

    /// Highest byte offset (relative to the region start) this formatter reads.
    pub fn extent(&self) -> usize {
        self.offset + self.word_size.bytes() - 1
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bit index inside the byte, only for 1 bit formatters.
    pub fn bit_index(&self) -> Option<u8> {
        match self.kind {
            FormatterKind::Bit { index } => Some(index),
            FormatterKind::Word { .. } => None,
        }
    }

    pub fn word_size(&self) -> WordSize {
        self.word_size
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl fmt::Display for Formatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile<'a>(
        data: &'a [u8],
        address: &str,
        word_size: WordSize,
        format: OutputFormat,
        endianness: Endianness,
    ) -> Result<Formatter<'a>> {
        let mut config = FormatterConfig::new(address, word_size);
        config.set_format(format).set_endianness(endianness);
        Formatter::compile(MemoryRegion::new(data), &config)
    }

    #[test]
    fn test_extent() {
        let data = [0u8; 16];
        let cases = [
            ("3.1", WordSize::Bit1, 3),
            ("3", WordSize::Bit8, 3),
            ("3", WordSize::Bit16, 4),
            ("3", WordSize::Bit32, 6),
            ("3", WordSize::Bit64, 10),
        ];

        for (address, word_size, extent) in cases {
            let formatter = compile(
                &data,
                address,
                word_size,
                OutputFormat::Binary,
                Endianness::Host,
            )
            .unwrap();
            assert_eq!(formatter.extent(), extent);
        }
    }

    #[test]
    fn test_out_of_bounds() {
        let data = [0u8; 4];
        assert!(compile(&data, "0", WordSize::Bit32, OutputFormat::Hex, Endianness::Host).is_ok());
        assert_eq!(
            compile(&data, "1", WordSize::Bit32, OutputFormat::Hex, Endianness::Host).unwrap_err(),
            FormatterError::OutOfBounds { extent: 4, len: 4 }
        );
        assert_eq!(
            compile(&data, "4.0", WordSize::Bit1, OutputFormat::Hex, Endianness::Host)
                .unwrap_err(),
            FormatterError::OutOfBounds { extent: 4, len: 4 }
        );
        assert_eq!(
            compile(
                &data,
                "0xffffffffffffffff",
                WordSize::Bit64,
                OutputFormat::Hex,
                Endianness::Host
            )
            .unwrap_err(),
            FormatterError::OutOfBounds {
                extent: usize::MAX,
                len: 4
            }
        );
    }

    #[test]
    fn test_check_order() {
        let data = [0u8; 2];

        // address errors win over everything else
        assert!(matches!(
            compile(&data, "x", WordSize::Bit16, OutputFormat::Float, Endianness::BigSwap32)
                .unwrap_err(),
            FormatterError::InvalidFormat { .. }
        ));

        // endianness before format
        assert_eq!(
            compile(&data, "0", WordSize::Bit16, OutputFormat::Float, Endianness::BigSwap32)
                .unwrap_err(),
            FormatterError::unsupported(WordSize::Bit16, Setting::Endianness(Endianness::BigSwap32))
        );

        // format before bounds
        assert_eq!(
            compile(&data, "8", WordSize::Bit16, OutputFormat::Float, Endianness::Host)
                .unwrap_err(),
            FormatterError::unsupported(WordSize::Bit16, Setting::Format(OutputFormat::Float))
        );
    }

    #[test]
    fn test_single_bit_ignores_format_and_endianness() {
        let data = [0b0000_1000u8];
        let formatter = compile(
            &data,
            "0.3",
            WordSize::Bit1,
            OutputFormat::Float,
            Endianness::LittleSwap32,
        )
        .unwrap();

        assert_eq!(formatter.bit_index(), Some(3));
        assert_eq!(formatter.render(), "1");
    }

    #[test]
    fn test_byte_ignores_endianness() {
        let data = [0x9Au8];
        let formatter =
            compile(&data, "0", WordSize::Bit8, OutputFormat::Hex, Endianness::BigSwap32).unwrap();
        assert_eq!(formatter.render(), "9a");
        assert_eq!(formatter.to_string(), "9a");
    }

    #[test]
    fn test_accessors() {
        let data = [0u8; 8];
        let formatter =
            compile(&data, "0x4", WordSize::Bit32, OutputFormat::Signed, Endianness::Big).unwrap();

        assert_eq!(formatter.offset(), 4);
        assert_eq!(formatter.bit_index(), None);
        assert_eq!(formatter.word_size(), WordSize::Bit32);
        assert_eq!(formatter.endianness(), Endianness::Big);
        assert_eq!(formatter.format(), OutputFormat::Signed);
    }

    #[test]
    fn test_read() {
        let data = [0x12, 0x34, 0x56, 0x78];
        let formatter =
            compile(&data, "0", WordSize::Bit32, OutputFormat::Hex, Endianness::Big).unwrap();
        assert_eq!(formatter.read(), 0x12345678);
        assert_eq!(formatter.render(), "12345678");
    }
}
