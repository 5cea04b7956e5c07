// ============================================================================
// Numeric Errors
// Error types for building and converting digit-array numbers
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing or converting a [`Num`](super::Num).
///
/// Multiplication itself never fails; these only surface at the boundaries
/// where digits enter or leave the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is empty or malformed
    InvalidInput,
    /// A digit value outside 0..=9
    InvalidDigit(u8),
    /// Integer length exceeds the number of supplied digits
    LengthMismatch {
        /// Requested integer digit count
        int_len: usize,
        /// Digits actually supplied
        digits: usize,
    },
    /// Value does not fit the target representation
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::InvalidDigit(d) => {
                write!(f, "invalid digit: {} is not a base-10 digit", d)
            },
            NumericError::LengthMismatch { int_len, digits } => write!(
                f,
                "length mismatch: {} integer digits requested but only {} supplied",
                int_len, digits
            ),
            NumericError::Overflow => {
                write!(f, "overflow: value does not fit the target representation")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::InvalidInput.to_string(),
            "invalid input: could not parse value"
        );
        assert_eq!(
            NumericError::InvalidDigit(12).to_string(),
            "invalid digit: 12 is not a base-10 digit"
        );
        assert_eq!(
            NumericError::LengthMismatch {
                int_len: 5,
                digits: 3
            }
            .to_string(),
            "length mismatch: 5 integer digits requested but only 3 supplied"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::InvalidDigit(10), NumericError::InvalidDigit(11));
        assert_ne!(NumericError::Overflow, NumericError::InvalidInput);
    }
}
