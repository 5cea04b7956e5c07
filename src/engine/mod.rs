// ============================================================================
// Engine Module
// Decimal multiplication: fast path, standard path and the orchestrator
// ============================================================================

pub mod config;
pub mod fast;
pub mod multiplier;
pub mod standard;

#[cfg(test)]
mod test_support;

pub use config::MultiplierConfig;
pub use fast::fast_mul;
pub use multiplier::{multiply, multiply_with, product_scale, Multiplier};
pub use standard::{standard_mul, standard_mul_with_threshold, StandardMulStats};
