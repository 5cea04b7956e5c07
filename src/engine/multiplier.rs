// ============================================================================
// Multiply Orchestrator
// Path selection, sign, decimal point placement and result cleanup
// ============================================================================

use super::config::MultiplierConfig;
use super::fast::fast_mul;
use super::standard::standard_mul_with_threshold;
use crate::numeric::Num;
use crate::platform::{LimbCodec, Word32, Word64, WordWidth};
use std::ops::Mul;

/// Scale of a product: `min(s1 + s2, max(target, s1, s2))`.
///
/// Never more precision than the exact product has, never less than either
/// operand carried.
#[inline]
pub fn product_scale(scale1: usize, scale2: usize, target_scale: usize) -> usize {
    (scale1 + scale2).min(target_scale.max(scale1.max(scale2)))
}

/// Multiply two numbers, keeping at most [`product_scale`] fractional digits.
///
/// Excess fractional digits are truncated, not rounded. A zero product is
/// always positive. The limb width is chosen for the target platform.
///
/// # Example
/// ```
/// use decimal_mul::engine::multiply;
/// use decimal_mul::numeric::Num;
///
/// let a: Num = "1.23".parse().unwrap();
/// let b: Num = "-4.5".parse().unwrap();
/// assert_eq!(multiply(&a, &b, 10).to_string(), "-5.535");
/// ```
pub fn multiply(n1: &Num, n2: &Num, target_scale: usize) -> Num {
    match WordWidth::detect() {
        WordWidth::Wide => multiply_with::<Word64>(n1, n2, target_scale),
        WordWidth::Narrow => multiply_with::<Word32>(n1, n2, target_scale),
    }
}

/// [`multiply`] with an explicit limb codec.
pub fn multiply_with<C: LimbCodec>(n1: &Num, n2: &Num, target_scale: usize) -> Num {
    multiply_impl::<C>(n1, n2, target_scale, C::MAX_ADD_COUNT)
}

fn multiply_impl<C: LimbCodec>(
    n1: &Num,
    n2: &Num,
    target_scale: usize,
    max_add_count: usize,
) -> Num {
    let len1 = n1.int_len() + n1.scale();
    let len2 = n2.int_len() + n2.scale();
    let full_scale = n1.scale() + n2.scale();
    let prod_scale = product_scale(n1.scale(), n2.scale(), target_scale);

    let mut prod = if len1 <= C::DIGITS && len2 <= C::DIGITS {
        tracing::trace!(codec = C::NAME, len1, len2, "fast path");
        fast_mul::<C>(n1.digits(), n2.digits())
    } else {
        let (prod, stats) =
            standard_mul_with_threshold::<C>(n1.digits(), n2.digits(), max_add_count);
        tracing::trace!(
            codec = C::NAME,
            len1,
            len2,
            limbs1 = stats.limbs1,
            limbs2 = stats.limbs2,
            normalizations = stats.normalizations,
            "standard path"
        );
        prod
    };

    prod.place_point(n1.sign().product(n2.sign()), full_scale, prod_scale);
    prod.trim_leading_zeros();
    prod.canonicalize_zero();
    prod
}

// ============================================================================
// Configured Multiplier
// ============================================================================

/// Multiplier bound to a validated [`MultiplierConfig`].
///
/// Cheap to copy and safe to share across threads; each call owns its own
/// working buffers.
///
/// # Example
/// ```
/// use decimal_mul::engine::{Multiplier, MultiplierConfig};
/// use decimal_mul::numeric::Num;
///
/// let multiplier = Multiplier::new(MultiplierConfig::narrow()).unwrap();
/// let a: Num = "123".parse().unwrap();
/// let b: Num = "456".parse().unwrap();
/// assert_eq!(multiplier.multiply(&a, &b, 0).to_string(), "56088");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Multiplier {
    config: MultiplierConfig,
}

impl Multiplier {
    /// Create a multiplier from configuration
    ///
    /// # Errors
    /// Returns the validation message if the configuration is invalid.
    pub fn new(config: MultiplierConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use
    pub fn config(&self) -> &MultiplierConfig {
        &self.config
    }

    /// Multiply with this multiplier's limb width and threshold.
    pub fn multiply(&self, n1: &Num, n2: &Num, target_scale: usize) -> Num {
        let threshold = self.config.effective_threshold();
        match self.config.word_width {
            WordWidth::Wide => multiply_impl::<Word64>(n1, n2, target_scale, threshold),
            WordWidth::Narrow => multiply_impl::<Word32>(n1, n2, target_scale, threshold),
        }
    }
}

// ============================================================================
// Operator Implementations (exact product)
// ============================================================================

impl Mul for &Num {
    type Output = Num;

    #[inline]
    fn mul(self, rhs: &Num) -> Num {
        multiply(self, rhs, self.scale() + rhs.scale())
    }
}

impl Mul for Num {
    type Output = Num;

    #[inline]
    fn mul(self, rhs: Num) -> Num {
        &self * &rhs
    }
}

// ============================================================================
// Tests
// ============================================================================
