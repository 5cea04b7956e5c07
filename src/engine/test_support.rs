// ============================================================================
// Test Support
// Independent digit-at-a-time reference multiplication and generators
// ============================================================================

use crate::numeric::{Num, Sign};
use proptest::prelude::*;

/// "0123" -> [0, 1, 2, 3]
pub(crate) fn digits_of(s: &str) -> Vec<u8> {
    s.bytes().map(|b| b - b'0').collect()
}

/// Base-10 schoolbook product of two digit runs, `a.len() + b.len()` digits.
pub(crate) fn naive_mul_digits(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut acc = vec![0u64; a.len() + b.len()];
    for (i, &x) in a.iter().rev().enumerate() {
        for (j, &y) in b.iter().rev().enumerate() {
            acc[i + j] += u64::from(x) * u64::from(y);
        }
    }

    let mut carry = 0;
    for slot in acc.iter_mut() {
        let v = *slot + carry;
        *slot = v % 10;
        carry = v / 10;
    }
    assert_eq!(carry, 0);

    acc.iter().rev().map(|&d| d as u8).collect()
}

/// Exact product of `a` and `b` truncated to the product scale, rendered as
/// a string without going through the engine's own finishing code.
pub(crate) fn reference_multiply(a: &Num, b: &Num, target_scale: usize) -> String {
    let full_scale = a.scale() + b.scale();
    let scale = full_scale.min(target_scale.max(a.scale().max(b.scale())));

    let digits = naive_mul_digits(a.digits(), b.digits());
    let int_len = digits.len() - full_scale;
    let (int_part, frac_part) = digits.split_at(int_len);
    let frac_part = &frac_part[..scale];

    let first_nonzero = int_part.iter().position(|&d| d != 0);
    let int_part = match first_nonzero {
        Some(pos) => &int_part[pos..],
        None => &int_part[int_part.len().saturating_sub(1)..],
    };

    let is_zero = int_part.iter().chain(frac_part).all(|&d| d == 0);
    let negative = a.is_negative() != b.is_negative() && !is_zero;

    let mut s = String::new();
    if negative {
        s.push('-');
    }
    if int_part.is_empty() {
        s.push('0');
    }
    s.extend(int_part.iter().map(|&d| char::from(b'0' + d)));
    if scale > 0 {
        s.push('.');
        s.extend(frac_part.iter().map(|&d| char::from(b'0' + d)));
    }
    s
}

prop_compose! {
    /// Any canonical `Num` with up to `max_len` digits.
    pub(crate) fn arb_num(max_len: usize)
        (digits in prop::collection::vec(0u8..10, 1..=max_len), negative in any::<bool>())
        (int_len in 0..=digits.len(), digits in Just(digits), negative in Just(negative))
        -> Num
    {
        let sign = if negative { Sign::Negative } else { Sign::Positive };
        Num::new(sign, &digits, int_len).unwrap()
    }
}

#[test]
fn test_naive_mul_digits() {
    assert_eq!(naive_mul_digits(&[1, 2, 3], &[4, 5, 6]), vec![0, 5, 6, 0, 8, 8]);
}

#[test]
fn test_reference_multiply() {
    let a: Num = "-1.5".parse().unwrap();
    let b: Num = "0.25".parse().unwrap();
    assert_eq!(reference_multiply(&a, &b, 0), "-0.37");
    assert_eq!(reference_multiply(&a, &b, 9), "-0.375");
    assert_eq!(reference_multiply(&Num::zero(), &a, 0), "0.0");
}
