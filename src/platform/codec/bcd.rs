// ============================================================================
// BCD Lookup Table
// Two-digit decimal to packed nibbles, for division-free digit emission
// ============================================================================

use super::detector::Endianness;

/// Pack two digits into one byte, ordered so that expanding the nibbles
/// yields the digits in memory order on this target.
const fn encode_pair(tens: u8, ones: u8) -> u8 {
    match Endianness::NATIVE {
        Endianness::Little => tens | (ones << 4),
        Endianness::Big => ones | (tens << 4),
    }
}

const fn build_lut() -> [u8; 100] {
    let mut lut = [0u8; 100];
    let mut i = 0;
    while i < 100 {
        lut[i] = encode_pair((i / 10) as u8, (i % 10) as u8);
        i += 1;
    }
    lut
}

/// Decimal representation of `0..100` as two nibbles per byte.
pub(crate) static BCD_LUT: [u8; 100] = build_lut();

/// Spread the two nibbles of `c` into the two bytes of a `u16`.
#[inline]
const fn expand(c: u8) -> u16 {
    (c & 0x0f) as u16 | ((c & 0xf0) as u16) << 4
}

/// Write `value` as exactly four digits into `out`.
///
/// e.g. `1234` writes `[1, 2, 3, 4]`. Uses two table lookups and one
/// 32-bit store.
#[inline]
pub(crate) fn write_bcd4(value: u32, out: &mut [u8]) {
    debug_assert!(value < 10_000);
    debug_assert_eq!(out.len(), 4);

    let upper = (value / 100) as usize;
    let lower = (value % 100) as usize;

    let upper = u32::from(expand(BCD_LUT[upper]));
    let lower = u32::from(expand(BCD_LUT[lower]));

    // The pair stored at the lower address must occupy the low half on
    // little-endian targets and the high half on big-endian ones.
    let digits = match Endianness::NATIVE {
        Endianness::Little => lower << 16 | upper,
        Endianness::Big => upper << 16 | lower,
    };
    out.copy_from_slice(&digits.to_ne_bytes());
}
