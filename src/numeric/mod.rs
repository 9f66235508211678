// ============================================================================
// Numeric Module
// Fixed-point BCD arithmetic for digit-exact trigonometry
// ============================================================================
//
// This module provides:
// - Bcd<N>: Fixed-point decimal value with N digit cells
// - NumericError: Error types for arithmetic and parsing
// - ParseWarning: Characters skipped by lenient loading
//
// Design principles:
// - No floating-point operations
// - Sign kept as a 0/9 sentinel cell, negatives in nines' complement
// - Wrapping operators by default, checked_* variants report overflow
// - Compile-time configurable precision via const generics

mod bcd;
mod errors;

pub use bcd::{Bcd, ParseWarnings, INTEGER_DIGITS};
pub use errors::{NumericError, NumericResult, ParseWarning};
