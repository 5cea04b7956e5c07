// ============================================================================
// 64-bit Limb Codec
// Eight decimal digits per u64 limb
// ============================================================================

use super::bcd::write_bcd4;
use super::detector::Endianness;
use super::traits::LimbCodec;

/// Codec for 64-bit targets: `u64` limbs of 8 digits, base `10^8`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Word64;

impl LimbCodec for Word64 {
    type Limb = u64;

    const DIGITS: usize = 8;
    const BASE: u64 = 100_000_000;
    const MAX_ADD_COUNT: usize = (u64::MAX / (Self::BASE * Self::BASE)) as usize;
    const NAME: &'static str = "Word64";

    /// Turns the bytes `AABBCCDD EEFFGGHH` into the integer `AABBCCDDEEFFGGHH`
    /// in three pairwise-combine rounds (x10, x100, x10000).
    ///
    /// Every lane stays below 256 after the first round and below 65536
    /// after the second, so no round bleeds into its neighbour.
    #[inline]
    fn pack_chunk(chunk: &[u8]) -> u64 {
        debug_assert_eq!(chunk.len(), Self::DIGITS);

        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        let mut tmp = u64::from_ne_bytes(bytes);
        if Endianness::NATIVE == Endianness::Big {
            tmp = tmp.swap_bytes();
        }

        let lower_digits = (tmp & 0x0f00_0f00_0f00_0f00) >> 8;
        let upper_digits = (tmp & 0x000f_000f_000f_000f) * 10;
        tmp = lower_digits + upper_digits;

        let lower_digits = (tmp & 0x00ff_0000_00ff_0000) >> 16;
        let upper_digits = (tmp & 0x0000_00ff_0000_00ff) * 100;
        tmp = lower_digits + upper_digits;

        let lower_digits = (tmp & 0x0000_ffff_0000_0000) >> 32;
        let upper_digits = (tmp & 0x0000_0000_0000_ffff) * 10_000;

        lower_digits + upper_digits
    }

    /// Two 4-digit halves, each through the 32-bit BCD writer.
    #[inline]
    fn write_limb(limb: u64, out: &mut [u8]) {
        debug_assert!(limb < Self::BASE);
        debug_assert_eq!(out.len(), Self::DIGITS);

        let (high, low) = out.split_at_mut(4);
        write_bcd4((limb / 10_000) as u32, high);
        write_bcd4((limb % 10_000) as u32, low);
    }
}
