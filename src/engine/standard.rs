// ============================================================================
// Standard Multiplier
// Schoolbook multiplication in base 10^W over packed limbs
// ============================================================================
//
// Operands are split into limbs least significant first, e.g. with 8-digit
// limbs 12345678901234567890 => [34567890, 56789012, 1234]. Limb i of the
// first operand times limb j of the second lands in accumulator slot i + j.
//
// Slots are not carried after every add. Each slot can take MAX_ADD_COUNT
// full-size products before it risks wrapping, so the outer loop counts its
// iterations and propagates carries whenever that budget runs out.

use crate::numeric::Num;
use crate::platform::{Limb, LimbCodec};

/// Bookkeeping from one standard-path multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StandardMulStats {
    /// Limbs in the first operand
    pub limbs1: usize,
    /// Limbs in the second operand
    pub limbs2: usize,
    /// Carry normalization passes, including the final one
    pub normalizations: usize,
}

/// Multiply two digit runs of any length.
///
/// Returns the raw integer-shaped product with exactly
/// `n1.len() + n2.len()` digits.
pub fn standard_mul<C: LimbCodec>(n1: &[u8], n2: &[u8]) -> Num {
    standard_mul_with_threshold::<C>(n1, n2, C::MAX_ADD_COUNT).0
}

/// [`standard_mul`] with an explicit normalization threshold.
///
/// `max_add_count` is clamped to `1..=C::MAX_ADD_COUNT`, since anything above
/// the codec's limit would let accumulator slots wrap.
///
/// # Panics
/// If either digit run is empty.
pub fn standard_mul_with_threshold<C: LimbCodec>(
    n1: &[u8],
    n2: &[u8],
    max_add_count: usize,
) -> (Num, StandardMulStats) {
    assert!(
        !n1.is_empty() && !n2.is_empty(),
        "standard path needs at least one digit per operand"
    );
    let max_add_count = max_add_count.clamp(1, C::MAX_ADD_COUNT);

    let n1_size = C::limb_count(n1.len());
    let n2_size = C::limb_count(n2.len());
    let prod_size = n1_size + n2_size - 1;

    let mut buf = vec![C::Limb::ZERO; n1_size + n2_size + prod_size];
    let (n1_limbs, rest) = buf.split_at_mut(n1_size);
    let (n2_limbs, prod_limbs) = rest.split_at_mut(n2_size);

    C::pack_into(n1, n1_limbs);
    C::pack_into(n2, n2_limbs);

    let mut normalizations = 0;
    let mut count = 0;
    for (i, &a) in n1_limbs.iter().enumerate() {
        if count >= max_add_count {
            tracing::debug!(
                codec = C::NAME,
                row = i,
                slots = prod_size,
                "accumulator budget exhausted, normalizing carries"
            );
            normalize_carries::<C>(prod_limbs);
            normalizations += 1;
            count = 0;
        }
        count += 1;

        for (slot, &b) in prod_limbs[i..].iter_mut().zip(n2_limbs.iter()) {
            *slot += a * b;
        }
    }

    normalize_carries::<C>(prod_limbs);
    normalizations += 1;

    let mut result = Num::zeroed(n1.len() + n2.len());
    emit_digits::<C>(prod_limbs, result.digits_mut());

    let stats = StandardMulStats {
        limbs1: n1_size,
        limbs2: n2_size,
        normalizations,
    };
    (result, stats)
}

/// Move `slot / BASE` into the next slot and keep `slot % BASE`, from the
/// least significant slot up. The top slot is never reduced.
fn normalize_carries<C: LimbCodec>(prod_limbs: &mut [C::Limb]) {
    for i in 0..prod_limbs.len().saturating_sub(1) {
        let carry = prod_limbs[i] / C::BASE;
        prod_limbs[i + 1] += carry;
        prod_limbs[i] %= C::BASE;
    }
}

/// Write a normalized accumulator into `out`, most significant digit first.
///
/// Every slot below the top is exactly `C::DIGITS` digits. The top slot may
/// exceed `C::BASE`, so it is drained one digit at a time until the remaining
/// head of `out` is filled.
fn emit_digits<C: LimbCodec>(prod_limbs: &[C::Limb], out: &mut [u8]) {
    let Some((&top, lower)) = prod_limbs.split_last() else {
        return;
    };

    let bulk = lower.len() * C::DIGITS;
    debug_assert!(bulk < out.len());
    let (head, tail) = out.split_at_mut(out.len() - bulk);

    for (&limb, chunk) in lower.iter().zip(tail.rchunks_exact_mut(C::DIGITS)) {
        C::write_limb(limb, chunk);
    }

    let ten = C::Limb::from(10u8);
    let mut top = top;
    for d in head.iter_mut().rev() {
        *d = (top % ten).low_u8();
        top /= ten;
    }
    debug_assert!(top == C::Limb::ZERO);
}
