use memformat::{Endianness, MemoryRegion, OutputFormat, WordSize, build_formatter};
use proptest::prelude::*;

/// Lays out `value` (low `word_size.bytes()` bytes) in memory as `endianness` describes it:
/// plain big/little endian bytes, then 16 or 32 bit units swapped pairwise.
fn encode(value: u64, word_size: WordSize, endianness: Endianness) -> Vec<u8> {
    let n = word_size.bytes();
    let be = &value.to_be_bytes()[8 - n..];

    let mut bytes = match endianness {
        Endianness::Host if cfg!(target_endian = "big") => be.to_vec(),
        Endianness::Big | Endianness::BigSwap16 | Endianness::BigSwap32 => be.to_vec(),
        _ => be.iter().rev().copied().collect(),
    };

    let unit = match endianness {
        Endianness::BigSwap16 | Endianness::LittleSwap16 => 2,
        Endianness::BigSwap32 | Endianness::LittleSwap32 => 4,
        _ => return bytes,
    };

    for pair in bytes.chunks_mut(unit * 2) {
        let (a, b) = pair.split_at_mut(unit);
        a.swap_with_slice(b);
    }

    bytes
}

fn decode(
    bytes: &[u8],
    word_size: WordSize,
    format: OutputFormat,
    endianness: Endianness,
) -> String {
    build_formatter(MemoryRegion::new(bytes), "0", word_size, format, endianness)
        .unwrap()
        .render()
}

fn legal_word() -> impl Strategy<Value = (WordSize, Endianness)> {
    prop_oneof![
        prop::sample::select(vec![Endianness::Host, Endianness::Big, Endianness::Little])
            .prop_map(|e| (WordSize::Bit16, e)),
        prop::sample::select(Endianness::ALL[..5].to_vec()).prop_map(|e| (WordSize::Bit32, e)),
        prop::sample::select(Endianness::ALL.to_vec()).prop_map(|e| (WordSize::Bit64, e)),
    ]
}

fn mask(value: u64, word_size: WordSize) -> u64 {
    match word_size.bits() {
        64 => value,
        bits => value & ((1u64 << bits) - 1),
    }
}

proptest! {
    #[test]
    fn round_trip(value in any::<u64>(), (word_size, endianness) in legal_word()) {
        let value = mask(value, word_size);
        let bytes = encode(value, word_size, endianness);

        prop_assert_eq!(
            decode(&bytes, word_size, OutputFormat::Unsigned, endianness),
            value.to_string()
        );
        prop_assert_eq!(
            decode(&bytes, word_size, OutputFormat::Hex, endianness),
            format!("{value:x}")
        );
    }

    #[test]
    fn swapped_layouts_match_plain(value in any::<u64>()) {
        let cases = [
            (WordSize::Bit32, Endianness::BigSwap16, Endianness::Big),
            (WordSize::Bit32, Endianness::LittleSwap16, Endianness::Little),
            (WordSize::Bit64, Endianness::BigSwap16, Endianness::Big),
            (WordSize::Bit64, Endianness::LittleSwap16, Endianness::Little),
            (WordSize::Bit64, Endianness::BigSwap32, Endianness::Big),
            (WordSize::Bit64, Endianness::LittleSwap32, Endianness::Little),
        ];

        for (word_size, swapped, plain) in cases {
            let value = mask(value, word_size);
            let swapped_bytes = encode(value, word_size, swapped);
            let plain_bytes = encode(value, word_size, plain);

            prop_assert_eq!(
                decode(&swapped_bytes, word_size, OutputFormat::Binary, swapped),
                decode(&plain_bytes, word_size, OutputFormat::Binary, plain)
            );
        }
    }

    #[test]
    fn signed_matches_twos_complement(value in any::<i32>(), wide in any::<i64>()) {
        prop_assert_eq!(
            decode(&value.to_be_bytes(), WordSize::Bit32, OutputFormat::Signed, Endianness::Big),
            value.to_string()
        );
        prop_assert_eq!(
            decode(&wide.to_le_bytes(), WordSize::Bit64, OutputFormat::Signed, Endianness::Little),
            wide.to_string()
        );
    }

    #[test]
    fn binary_octal_have_expected_shape(value in any::<u16>()) {
        let bytes = value.to_ne_bytes();
        let binary = decode(&bytes, WordSize::Bit16, OutputFormat::Binary, Endianness::Host);

        prop_assert_eq!(binary.len(), 16);
        prop_assert_eq!(u16::from_str_radix(&binary, 2).unwrap(), value);
        prop_assert_eq!(
            decode(&bytes, WordSize::Bit16, OutputFormat::Octal, Endianness::Host),
            format!("{value:o}")
        );
    }

    #[test]
    fn float_has_six_fractional_digits(value in -1.0e12f64..1.0e12f64) {
        let text = decode(&value.to_be_bytes(), WordSize::Bit64, OutputFormat::Float, Endianness::Big);
        prop_assert_eq!(&text, &format!("{value:.6}"));

        let fraction = text.split_once('.').map(|(_, f)| f.len());
        prop_assert_eq!(fraction, Some(6));
    }

    #[test]
    fn bit_addressing(byte in any::<u8>(), offset in 0usize..64, index in 0u8..8) {
        let mut data = vec![0u8; 64];
        data[offset] = byte;

        for address in [
            format!("{offset}.{index}"),
            format!("{offset:#x}.{index}"),
            format!("0{offset:o}.{index}"),
        ] {
            let text = build_formatter(
                MemoryRegion::new(&data),
                &address,
                WordSize::Bit1,
                OutputFormat::Hex,
                Endianness::Host,
            )
            .unwrap()
            .render();
            prop_assert_eq!(text, ((byte >> index) & 1).to_string());
        }
    }
}
