// ============================================================================
// Digit-Array Decimal
// Sign + integer length + scale over a run of base-10 digits
// ============================================================================

use super::errors::{NumericError, NumericResult};
use smallvec::SmallVec;
use std::fmt;
use std::ops::Neg;

/// Digit storage. Operands up to 32 digits never touch the heap.
pub(crate) type DigitBuf = SmallVec<[u8; 32]>;

/// Sign of a [`Num`], kept apart from its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    /// Zero or greater
    #[default]
    Positive,
    /// Strictly less than zero
    Negative,
}

impl Sign {
    /// Sign of a product: positive iff both signs match.
    #[inline]
    pub const fn product(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// Arbitrary-precision decimal number.
///
/// The magnitude is stored as base-10 digit values (`0..=9`, not ASCII),
/// most significant first. `int_len` digits sit left of the decimal point and
/// `scale` digits right of it, so `digits.len() == int_len + scale` always
/// holds.
///
/// Values built through the public constructors are canonical: at least one
/// integer digit, no superfluous leading zeros, and zero is always
/// [`Sign::Positive`]. Equality is structural, so `1.0` and `1.00` differ.
///
/// # Example
/// ```
/// use decimal_mul::numeric::{Num, Sign};
///
/// let n: Num = "-12.340".parse().unwrap();
/// assert_eq!(n.sign(), Sign::Negative);
/// assert_eq!(n.int_len(), 2);
/// assert_eq!(n.scale(), 3);
/// assert_eq!(n.digits(), &[1, 2, 3, 4, 0]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Num {
    sign: Sign,
    int_len: usize,
    scale: usize,
    digits: DigitBuf,
}

impl Num {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build a number from raw digit values.
    ///
    /// `int_len` of the digits are integer digits, the rest are fractional.
    /// An `int_len` of zero gets a leading `0` placeholder.
    ///
    /// # Errors
    /// - `InvalidDigit` if any digit exceeds 9
    /// - `LengthMismatch` if `int_len > digits.len()`
    pub fn new(sign: Sign, digits: &[u8], int_len: usize) -> NumericResult<Self> {
        if int_len > digits.len() {
            return Err(NumericError::LengthMismatch {
                int_len,
                digits: digits.len(),
            });
        }
        if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
            return Err(NumericError::InvalidDigit(bad));
        }

        let scale = digits.len() - int_len;
        let mut buf = DigitBuf::with_capacity(digits.len() + 1);
        if int_len == 0 {
            buf.push(0);
        }
        buf.extend_from_slice(digits);

        let mut num = Self {
            sign,
            int_len: int_len.max(1),
            scale,
            digits: buf,
        };
        num.trim_leading_zeros();
        num.canonicalize_zero();
        Ok(num)
    }

    /// The value `0` with scale 0.
    pub fn zero() -> Self {
        Self::zeroed(1)
    }

    /// Create from an integer value.
    pub fn from_integer(value: i64) -> Self {
        let sign = if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };

        let mut magnitude = value.unsigned_abs();
        let mut digits = DigitBuf::new();
        loop {
            digits.push((magnitude % 10) as u8);
            magnitude /= 10;
            if magnitude == 0 {
                break;
            }
        }
        digits.reverse();

        let int_len = digits.len();
        Self {
            sign,
            int_len,
            scale: 0,
            digits,
        }
    }

    /// Positive integer-shaped number of `len` zero digits.
    ///
    /// This is the allocation the multiplier fills with a raw product before
    /// placing the decimal point.
    pub(crate) fn zeroed(len: usize) -> Self {
        Self {
            sign: Sign::Positive,
            int_len: len,
            scale: 0,
            digits: smallvec::smallvec![0; len],
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Sign of the value.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Digits left of the decimal point.
    #[inline]
    pub fn int_len(&self) -> usize {
        self.int_len
    }

    /// Digits right of the decimal point.
    #[inline]
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Total digit count, `int_len + scale`.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// All digits, most significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Digit `i` counted from the most significant end.
    #[inline]
    pub fn digit(&self, i: usize) -> Option<u8> {
        self.digits.get(i).copied()
    }

    /// Digit `i` counted from the least significant end.
    #[inline]
    pub fn digit_from_end(&self, i: usize) -> Option<u8> {
        self.digits.iter().rev().nth(i).copied()
    }

    /// True if every digit is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// True if the value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    // ========================================================================
    // Product Finishing (used by the multiplier)
    // ========================================================================

    #[inline]
    pub(crate) fn digits_mut(&mut self) -> &mut [u8] {
        &mut self.digits
    }

    /// Reinterpret an integer-shaped raw product as having `full_scale`
    /// fractional digits, then keep only `scale` of them.
    ///
    /// Dropped digits are truncated, never rounded.
    pub(crate) fn place_point(&mut self, sign: Sign, full_scale: usize, scale: usize) {
        debug_assert!(full_scale <= self.int_len);
        debug_assert!(scale <= full_scale);

        self.sign = sign;
        self.int_len -= full_scale;
        self.scale = scale;
        self.digits.truncate(self.int_len + scale);
    }

    /// Drop leading zeros of the integer part, keeping at least one digit.
    pub(crate) fn trim_leading_zeros(&mut self) {
        let removable = self.int_len.saturating_sub(1);
        let zeros = self
            .digits
            .iter()
            .take(removable)
            .take_while(|&&d| d == 0)
            .count();

        if zeros > 0 {
            self.digits.drain(..zeros);
            self.int_len -= zeros;
        }
    }

    /// Force a zero value to be positive.
    #[inline]
    pub(crate) fn canonicalize_zero(&mut self) {
        if self.is_zero() {
            self.sign = Sign::Positive;
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Num {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl Neg for Num {
    type Output = Num;

    fn neg(mut self) -> Num {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
        self
    }
}

impl fmt::Debug for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Num({}, int_len={}, scale={})",
            self, self.int_len, self.scale
        )
    }
}

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        if self.sign == Sign::Negative {
            f.write_char('-')?;
        }

        let (int_part, frac_part) = self.digits.split_at(self.int_len);
        if int_part.is_empty() {
            f.write_char('0')?;
        }
        for &d in int_part {
            f.write_char(char::from(b'0' + d))?;
        }

        if !frac_part.is_empty() {
            f.write_char('.')?;
            for &d in frac_part {
                f.write_char(char::from(b'0' + d))?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Num {
    type Err = NumericError;

    /// Parse from a plain decimal string.
    ///
    /// # Examples
    /// - "123" -> int_len 3, scale 0
    /// - "-0.050" -> int_len 1, scale 3
    /// - ".5" -> 0.5
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (sign, s) = if let Some(rest) = s.strip_prefix('-') {
            (Sign::Negative, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (Sign::Positive, rest)
        } else {
            (Sign::Positive, s)
        };

        let (int_str, frac_str) = match s.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (s, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let mut digits = DigitBuf::with_capacity(int_str.len() + frac_str.len());
        for b in int_str.bytes().chain(frac_str.bytes()) {
            if !b.is_ascii_digit() {
                return Err(NumericError::InvalidInput);
            }
            digits.push(b - b'0');
        }

        Self::new(sign, &digits, int_str.len())
    }
}

// ============================================================================
// Conversion to/from rust_decimal (for API boundaries)
// ============================================================================

impl From<rust_decimal::Decimal> for Num {
    fn from(d: rust_decimal::Decimal) -> Self {
        let scale = d.scale() as usize;
        let mut magnitude = d.mantissa().unsigned_abs();

        let mut digits = DigitBuf::new();
        while magnitude != 0 || digits.len() <= scale {
            digits.push((magnitude % 10) as u8);
            magnitude /= 10;
        }
        digits.reverse();

        let sign = if d.is_sign_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let int_len = digits.len() - scale;

        // Digits come from a u128 and are always 0..=9.
        let mut num = Self {
            sign,
            int_len,
            scale,
            digits,
        };
        num.trim_leading_zeros();
        num.canonicalize_zero();
        num
    }
}

impl TryFrom<&Num> for rust_decimal::Decimal {
    type Error = NumericError;

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// `Overflow` if the value needs more than 96 bits of mantissa or a scale
    /// above 28.
    fn try_from(n: &Num) -> Result<Self, Self::Error> {
        let mut mantissa: i128 = 0;
        for &d in n.digits() {
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(i128::from(d)))
                .ok_or(NumericError::Overflow)?;
        }
        if n.is_negative() {
            mantissa = -mantissa;
        }

        let scale = u32::try_from(n.scale()).map_err(|_| NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, scale)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// Serde (string form, so deserialized values stay canonical)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Num {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Num {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_from_str() {
        let x: Num = "123.456".parse().unwrap();
        assert_eq!(x.int_len(), 3);
        assert_eq!(x.scale(), 3);
        assert_eq!(x.digits(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(x.sign(), Sign::Positive);

        let y: Num = "-0.001".parse().unwrap();
        assert!(y.is_negative());
        assert_eq!(y.int_len(), 1);
        assert_eq!(y.digits(), &[0, 0, 0, 1]);

        let z: Num = ".5".parse().unwrap();
        assert_eq!(z.to_string(), "0.5");

        let w: Num = "+42.".parse().unwrap();
        assert_eq!(w.to_string(), "42");
    }

    #[test]
    fn test_from_str_invalid() {
        for s in ["", ".", "-", "1.2.3", "12a", "--1", "1e5"] {
            assert_eq!(
                s.parse::<Num>(),
                Err(NumericError::InvalidInput),
                "input {:?}",
                s
            );
        }
    }

    #[test]
    fn test_leading_zeros_trimmed() {
        let x: Num = "000123.40".parse().unwrap();
        assert_eq!(x.int_len(), 3);
        assert_eq!(x.scale(), 2);
        assert_eq!(x.to_string(), "123.40");

        let zero: Num = "0000.000".parse().unwrap();
        assert_eq!(zero.int_len(), 1);
        assert_eq!(zero.to_string(), "0.000");
    }

    #[test]
    fn test_negative_zero_is_positive() {
        let z: Num = "-0.00".parse().unwrap();
        assert_eq!(z.sign(), Sign::Positive);
        assert!(z.is_zero());
        assert_eq!(z.to_string(), "0.00");

        assert_eq!((-Num::zero()).sign(), Sign::Positive);
    }

    #[test]
    fn test_new_validation() {
        assert_eq!(
            Num::new(Sign::Positive, &[1, 10, 2], 1),
            Err(NumericError::InvalidDigit(10))
        );
        assert_eq!(
            Num::new(Sign::Positive, &[1, 2], 3),
            Err(NumericError::LengthMismatch {
                int_len: 3,
                digits: 2
            })
        );

        let frac_only = Num::new(Sign::Negative, &[2, 5], 0).unwrap();
        assert_eq!(frac_only.int_len(), 1);
        assert_eq!(frac_only.to_string(), "-0.25");
    }

    #[test]
    fn test_digit_access_from_both_ends() {
        let x: Num = "987.65".parse().unwrap();
        assert_eq!(x.digit(0), Some(9));
        assert_eq!(x.digit(4), Some(5));
        assert_eq!(x.digit(5), None);
        assert_eq!(x.digit_from_end(0), Some(5));
        assert_eq!(x.digit_from_end(4), Some(9));
        assert_eq!(x.digit_from_end(5), None);
        assert_eq!(x.digit(usize::MAX), None);
        assert_eq!(x.digit_from_end(usize::MAX), None);
        assert_eq!(x.digit_count(), 5);
    }

    #[test]
    fn test_from_integer() {
        assert_eq!(Num::from_integer(0).to_string(), "0");
        assert_eq!(Num::from_integer(-7).to_string(), "-7");
        assert_eq!(
            Num::from_integer(i64::MIN).to_string(),
            "-9223372036854775808"
        );
    }

    #[test]
    fn test_place_point_truncates() {
        // Raw product 0012345 with 4 fractional digits, keep 2.
        let mut raw = Num::zeroed(7);
        raw.digits_mut().copy_from_slice(&[0, 0, 1, 2, 3, 4, 5]);
        raw.place_point(Sign::Negative, 4, 2);
        raw.trim_leading_zeros();
        assert_eq!(raw.to_string(), "-1.23");
        assert_eq!(raw.int_len(), 1);
        assert_eq!(raw.scale(), 2);
    }

    #[test]
    fn test_decimal_roundtrip() {
        let d = Decimal::new(-12345, 2);
        let n = Num::from(d);
        assert_eq!(n.to_string(), "-123.45");
        assert_eq!(Decimal::try_from(&n).unwrap(), d);

        let small = Num::from(Decimal::new(5, 3));
        assert_eq!(small.to_string(), "0.005");
        assert_eq!(small.int_len(), 1);

        let zero = Num::from(Decimal::new(0, 2));
        assert_eq!(zero.to_string(), "0.00");
    }

    #[test]
    fn test_decimal_overflow() {
        let huge: Num = "1".repeat(40).parse().unwrap();
        assert_eq!(Decimal::try_from(&huge), Err(NumericError::Overflow));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_string_form() {
        let x: Num = "-1.50".parse().unwrap();
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, "\"-1.50\"");
        let back: Num = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);
    }
}
