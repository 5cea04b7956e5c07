// ============================================================================
// Decimal Multiplication Library
// Exact arbitrary-precision decimal products over base-10 digit arrays
// ============================================================================

//! # Decimal Mul
//!
//! Exact multiplication of arbitrary-precision decimal numbers stored as
//! base-10 digit arrays with an independent sign and scale.
//!
//! ## Features
//!
//! - **Exact products**, truncated only to the requested result scale
//! - **Fast path** for operands that fit one native word (a single multiply)
//! - **Schoolbook path** over packed 4- or 8-digit limbs for everything else
//! - **Division-free packing** via SWAR digit parsing and a BCD lookup table
//! - **Overflow-safe accumulation** with counted carry normalization
//!
//! ## Example
//!
//! ```rust
//! use decimal_mul::prelude::*;
//!
//! let price: Num = "19.99".parse().unwrap();
//! let qty: Num = "-3".parse().unwrap();
//!
//! let total = multiply(&price, &qty, 2);
//! assert_eq!(total.to_string(), "-59.97");
//! assert_eq!(total.sign(), Sign::Negative);
//!
//! // Result scale never drops below an operand's scale.
//! let x = multiply(&"1.2345".parse().unwrap(), &"1.5".parse().unwrap(), 2);
//! assert_eq!(x.to_string(), "1.8517");
//! ```

pub mod engine;
pub mod numeric;
pub mod platform;

// Re-exports for convenience
pub mod prelude {
    pub use crate::engine::{multiply, multiply_with, Multiplier, MultiplierConfig};
    pub use crate::numeric::{Num, NumericError, NumericResult, Sign};
    pub use crate::platform::{LimbCodec, Word32, Word64, WordWidth};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_multiply() {
        let a: Num = "-123456789.987654321".parse().unwrap();
        let b: Num = "0.000000001".parse().unwrap();

        let exact = &a * &b;
        assert_eq!(exact.to_string(), "-0.123456789987654321");

        let truncated = multiply(&a, &b, 0);
        assert_eq!(truncated.scale(), 9);
        assert_eq!(truncated.to_string(), "-0.123456789");
    }

    #[test]
    fn test_prelude_codecs_agree() {
        let a: Num = "340282366920938463463374607431768211455".parse().unwrap();
        let b: Num = "18446744073709551615".parse().unwrap();

        let wide = multiply_with::<Word64>(&a, &b, 0);
        let narrow = multiply_with::<Word32>(&a, &b, 0);
        assert_eq!(wide, narrow);
        assert_eq!(
            wide.to_string(),
            "6277101735386680763495507056286727952620534092958556749825"
        );
    }

    #[test]
    fn test_configured_narrow_multiplier() {
        let multiplier = Multiplier::new(MultiplierConfig::new(WordWidth::Narrow)).unwrap();
        let a: Num = "99999999999999999999".parse().unwrap();
        let prod = multiplier.multiply(&a, &a, 0);
        assert_eq!(
            prod.to_string(),
            "9999999999999999999800000000000000000001"
        );
    }
}
