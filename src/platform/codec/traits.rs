// ============================================================================
// Limb Codec Traits
// Abstract interface for packing decimal digits into native integers
// ============================================================================

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, Rem, RemAssign};

/// Native unsigned integer used as a packed-digit limb.
///
/// Implemented for `u32` and `u64`. The multiplier also uses the limb type
/// as its accumulator, so every operation here is plain unsigned arithmetic.
pub trait Limb:
    Copy
    + Default
    + Ord
    + fmt::Debug
    + Send
    + Sync
    + From<u8>
    + Add<Output = Self>
    + AddAssign
    + Mul<Output = Self>
    + Div<Output = Self>
    + DivAssign
    + Rem<Output = Self>
    + RemAssign
    + 'static
{
    /// Additive identity
    const ZERO: Self;

    /// Truncating conversion to `u8`. Callers guarantee the value fits.
    fn low_u8(self) -> u8;
}

macro_rules! impl_limb {
    ($($t:ty),*) => {$(
        impl Limb for $t {
            const ZERO: Self = 0;

            #[inline]
            fn low_u8(self) -> u8 {
                self as u8
            }
        }
    )*};
}

impl_limb!(u32, u64);

/// Packs runs of base-10 digits into limbs of `DIGITS` digits and back.
///
/// Implementations provide the two width-specific primitives
/// ([`pack_chunk`](Self::pack_chunk) and [`write_limb`](Self::write_limb));
/// the partial-width and partitioning logic is shared.
///
/// # Invariant
/// `BASE * BASE` must not overflow `Limb`, so a single product of two
/// packed limbs always fits.
pub trait LimbCodec: Copy + Default + Send + Sync + 'static {
    /// Native integer holding one limb
    type Limb: Limb;

    /// Decimal digits per limb (W)
    const DIGITS: usize;

    /// `10^DIGITS`
    const BASE: Self::Limb;

    /// How many full `(BASE - 1)^2` products an accumulator slot can absorb
    /// before a carry normalization is required.
    const MAX_ADD_COUNT: usize;

    /// Name of this implementation, for logging and benchmarks.
    const NAME: &'static str;

    /// Pack exactly `DIGITS` digits (most significant first) without per-digit
    /// multiplication, division or modulo.
    fn pack_chunk(chunk: &[u8]) -> Self::Limb;

    /// Write `limb` as exactly `DIGITS` digits into `out`.
    ///
    /// Precondition: `limb < BASE` and `out.len() == DIGITS`.
    fn write_limb(limb: Self::Limb, out: &mut [u8]);

    /// Number of limbs needed for `len` digits.
    #[inline]
    fn limb_count(len: usize) -> usize {
        len.div_ceil(Self::DIGITS)
    }

    /// Pack between 1 and `DIGITS` digits into one limb.
    #[inline]
    fn pack(digits: &[u8]) -> Self::Limb {
        debug_assert!(!digits.is_empty() && digits.len() <= Self::DIGITS);

        if digits.len() == Self::DIGITS {
            return Self::pack_chunk(digits);
        }

        let ten = Self::Limb::from(10u8);
        let mut num = Self::Limb::ZERO;
        let mut base = Self::Limb::from(1u8);
        for &d in digits.iter().rev() {
            num += Self::Limb::from(d) * base;
            base = base * ten;
        }
        num
    }

    /// Partition `digits` into limbs, least significant limb first.
    ///
    /// e.g. with 8-digit limbs `12345678901234567890` becomes
    /// `[34567890, 56789012, 1234]`.
    fn pack_into(digits: &[u8], out: &mut [Self::Limb]) {
        debug_assert_eq!(out.len(), Self::limb_count(digits.len()));

        for (limb, chunk) in out.iter_mut().zip(digits.rchunks(Self::DIGITS)) {
            *limb = Self::pack(chunk);
        }
    }
}
