//! Description of a formatter before it is compiled against a memory region.

use crate::{
    endian::Endianness,
    errors::Result,
    formatter::Formatter,
    memory::MemoryRegion,
    word::{OutputFormat, WordSize},
};

/// What to read and how to render it. Use [FormatterConfig::compile] (or
/// [Formatter::compile]) to validate it and bind it to a [MemoryRegion].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Address string, see [crate::address] for the grammar.
    pub address: String,
    pub word_size: WordSize,
    /// Ignored for 1 bit words. Defaults to [OutputFormat::Binary].
    pub format: OutputFormat,
    /// Ignored for 1 and 8 bit words. Defaults to [Endianness::Host].
    pub endianness: Endianness,
}

impl FormatterConfig {
    /// Creates a config with binary output and host endianness.
    pub fn new(address: impl Into<String>, word_size: WordSize) -> Self {
        Self {
            address: address.into(),
            word_size,
            format: OutputFormat::default(),
            endianness: Endianness::default(),
        }
    }

    pub fn set_format(&mut self, format: OutputFormat) -> &mut Self {
        self.format = format;
        self
    }

    pub fn set_endianness(&mut self, endianness: Endianness) -> &mut Self {
        self.endianness = endianness;
        self
    }

    pub fn compile<'a>(&self, region: MemoryRegion<'a>) -> Result<Formatter<'a>> {
        Formatter::compile(region, self)
    }
}
