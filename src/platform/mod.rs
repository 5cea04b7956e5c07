// ============================================================================
// Platform Module
// Word-size and byte-order specific code for the multiplier's hot loops
//
// This module contains:
// - Codec: BCD packing/unpacking of digit runs into 32- or 64-bit limbs
//
// Usage:
// ```ignore
// use decimal_mul::platform::{LimbCodec, Word64, WordWidth};
//
// let limb = Word64::pack(&[1, 2, 3, 4, 5, 6, 7, 8]);
// assert_eq!(WordWidth::detect().digits(), 8);
// ```
// ============================================================================

pub mod codec;

pub use codec::{Endianness, Limb, LimbCodec, Word32, Word64, WordWidth};
