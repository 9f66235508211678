// ============================================================================
// Numeric Errors
// Error and warning types for fixed-point BCD arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during fixed-point BCD arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Sum or difference left the one-integer-digit range
    PrecisionOverflow,
    /// Negative shift amount passed to a checked shift
    NegativeShift(i32),
    /// A digit cell outside 0-9
    InvalidDigit { index: usize, digit: u8 },
    /// Sign sentinel other than 0 or 9
    InvalidSign(u8),
    /// Strict parsing hit a character that is not part of the decimal format
    InvalidCharacter { position: usize, character: char },
    /// Input string or value is invalid
    InvalidInput,
    /// Value does not fit a single integer digit
    Overflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::PrecisionOverflow => {
                write!(f, "precision overflow: result does not fit the integer digit")
            },
            NumericError::NegativeShift(bits) => {
                write!(f, "negative shift amount: {}", bits)
            },
            NumericError::InvalidDigit { index, digit } => {
                write!(f, "invalid digit {} in cell {}", digit, index)
            },
            NumericError::InvalidSign(sign) => {
                write!(f, "invalid sign sentinel {}: expected 0 or 9", sign)
            },
            NumericError::InvalidCharacter {
                position,
                character,
            } => write!(
                f,
                "invalid character {:?} at position {}",
                character, position
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value exceeded the representable range")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

/// A character skipped by lenient loading.
///
/// Lenient loading never fails; each character that is neither a digit, the
/// decimal point, nor a leading minus sign is reported here instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseWarning {
    /// Byte offset of the character in the input text
    pub position: usize,
    /// The skipped character
    pub character: char,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "skipped character {:?} at position {}",
            self.character, self.position
        )
    }
}

impl From<ParseWarning> for NumericError {
    fn from(warning: ParseWarning) -> Self {
        NumericError::InvalidCharacter {
            position: warning.position,
            character: warning.character,
        }
    }
}
