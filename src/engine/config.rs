// ============================================================================
// Multiplier Configuration
// Limb width selection and accumulator normalization budget
// ============================================================================

use crate::platform::WordWidth;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`Multiplier`](super::Multiplier).
///
/// The defaults match the target: 8-digit limbs on 64-bit platforms, 4-digit
/// limbs elsewhere, and the codec's full normalization budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiplierConfig {
    /// Limb width used by both multiplication paths
    pub word_width: WordWidth,

    /// Optional: rows folded into the accumulator between carry
    /// normalizations. None means the codec's maximum safe count.
    #[cfg_attr(feature = "serde", serde(default))]
    pub normalization_threshold: Option<usize>,
}

impl MultiplierConfig {
    /// Create a configuration for an explicit limb width
    pub fn new(word_width: WordWidth) -> Self {
        Self {
            word_width,
            normalization_threshold: None,
        }
    }

    /// 4-digit `u32` limbs
    pub fn narrow() -> Self {
        Self::new(WordWidth::Narrow)
    }

    /// 8-digit `u64` limbs
    pub fn wide() -> Self {
        Self::new(WordWidth::Wide)
    }

    /// Builder method: Set limb width
    pub fn with_word_width(mut self, word_width: WordWidth) -> Self {
        self.word_width = word_width;
        self
    }

    /// Builder method: Normalize carries after at most `rows` outer-loop rows
    pub fn with_normalization_threshold(mut self, rows: usize) -> Self {
        self.normalization_threshold = Some(rows);
        self
    }

    /// Threshold actually used by the standard path.
    pub fn effective_threshold(&self) -> usize {
        self.normalization_threshold
            .unwrap_or_else(|| self.word_width.max_add_count())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(rows) = self.normalization_threshold {
            if rows == 0 {
                return Err("Normalization threshold must be at least 1".to_string());
            }

            let limit = self.word_width.max_add_count();
            if rows > limit {
                return Err(format!(
                    "Normalization threshold {} exceeds the {} accumulator limit of {}",
                    rows, self.word_width, limit
                ));
            }
        }

        Ok(())
    }
}

impl Default for MultiplierConfig {
    fn default() -> Self {
        Self::new(WordWidth::detect())
    }
}
