// ============================================================================
// Fast-Path Multiplier
// Both operands fit in a single limb: one native multiply
// ============================================================================

use crate::numeric::Num;
use crate::platform::{Limb, LimbCodec};

/// Multiply two digit runs of at most `C::DIGITS` digits each.
///
/// Returns the raw integer-shaped product with exactly
/// `n1.len() + n2.len()` digits; a leading zero is possible and left for the
/// caller to trim. `C::BASE * C::BASE` fits the limb type, so the single
/// product cannot overflow.
///
/// # Panics
/// If either run is empty or longer than `C::DIGITS`.
pub fn fast_mul<C: LimbCodec>(n1: &[u8], n2: &[u8]) -> Num {
    assert!(
        (1..=C::DIGITS).contains(&n1.len()) && (1..=C::DIGITS).contains(&n2.len()),
        "fast path takes 1..={} digits per operand, got {} and {}",
        C::DIGITS,
        n1.len(),
        n2.len()
    );

    let mut prod = C::pack(n1) * C::pack(n2);

    let ten = C::Limb::from(10u8);
    let mut result = Num::zeroed(n1.len() + n2.len());
    for d in result.digits_mut().iter_mut().rev() {
        *d = (prod % ten).low_u8();
        prod /= ten;
    }

    result
}
