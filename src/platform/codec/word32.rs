// ============================================================================
// 32-bit Limb Codec
// Four decimal digits per u32 limb
// ============================================================================

use super::bcd::write_bcd4;
use super::detector::Endianness;
use super::traits::LimbCodec;

/// Codec for 32-bit targets: `u32` limbs of 4 digits, base `10^4`.
///
/// Always compiled, so 64-bit hosts can exercise it too.
#[derive(Debug, Clone, Copy, Default)]
pub struct Word32;

impl LimbCodec for Word32 {
    type Limb = u32;

    const DIGITS: usize = 4;
    const BASE: u32 = 10_000;
    const MAX_ADD_COUNT: usize = (u32::MAX / (Self::BASE * Self::BASE)) as usize;
    const NAME: &'static str = "Word32";

    /// `AABBCCDD` to `1000*A + 100*B + 10*C + D` in two rounds (x10, x100).
    #[inline]
    fn pack_chunk(chunk: &[u8]) -> u32 {
        debug_assert_eq!(chunk.len(), Self::DIGITS);

        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(chunk);
        let mut tmp = u32::from_ne_bytes(bytes);
        if Endianness::NATIVE == Endianness::Big {
            tmp = tmp.swap_bytes();
        }

        let lower_digits = (tmp & 0x0f00_0f00) >> 8;
        let upper_digits = (tmp & 0x000f_000f) * 10;
        tmp = lower_digits + upper_digits;

        let lower_digits = (tmp & 0x00ff_0000) >> 16;
        let upper_digits = (tmp & 0x0000_00ff) * 100;

        lower_digits + upper_digits
    }

    #[inline]
    fn write_limb(limb: u32, out: &mut [u8]) {
        debug_assert!(limb < Self::BASE);
        write_bcd4(limb, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Word32::DIGITS, 4);
        assert_eq!(Word32::BASE, 10_000);
        assert_eq!(Word32::MAX_ADD_COUNT, 42);
        assert!((Word32::BASE - 1).checked_mul(Word32::BASE - 1).is_some());
    }

    #[test]
    fn test_pack_chunk() {
        assert_eq!(Word32::pack_chunk(&[1, 2, 3, 4]), 1234);
        assert_eq!(Word32::pack_chunk(&[9, 9, 9, 9]), 9999);
        assert_eq!(Word32::pack_chunk(&[0, 0, 0, 0]), 0);
        assert_eq!(Word32::pack_chunk(&[0, 9, 0, 1]), 901);
    }

    #[test]
    fn test_pack_chunk_exhaustive() {
        let mut out = [0u8; 4];
        for value in 0..10_000u32 {
            Word32::write_limb(value, &mut out);
            assert_eq!(Word32::pack_chunk(&out), value);
        }
    }

    #[test]
    fn test_pack_into() {
        let digits: Vec<u8> = "12345678901234567890".bytes().map(|b| b - b'0').collect();
        let mut limbs = [0u32; 5];
        Word32::pack_into(&digits, &mut limbs);
        assert_eq!(limbs, [7890, 3456, 9012, 5678, 1234]);

        let mut short = [0u32; 2];
        Word32::pack_into(&[5, 0, 0, 0, 7], &mut short);
        assert_eq!(short, [7, 5]);
    }
}
