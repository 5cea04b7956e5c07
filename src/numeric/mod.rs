// ============================================================================
// Numeric Module
// Digit-array decimal numbers consumed and produced by the multiplier
// ============================================================================
//
// This module provides:
// - Num: arbitrary-precision decimal stored as base-10 digits
// - Sign: sign of a Num, independent of its magnitude
// - NumericError: Error types for construction and conversion
//
// Design principles:
// - Digits are plain values 0..=9, most significant first
// - Zero is always Positive
// - Operands are never mutated by arithmetic

mod errors;
mod num;

pub use errors::{NumericError, NumericResult};
pub use num::{Num, Sign};
