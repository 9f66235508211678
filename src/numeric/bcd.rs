// ============================================================================
// Fixed-Point BCD
// Decimal digit-cell arithmetic with a nines'-complement sign sentinel
// ============================================================================

use super::errors::{NumericError, NumericResult, ParseWarning};
use rust_decimal::{Decimal, RoundingStrategy};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt::{self, Write};
use std::ops::{Add, Neg, Shr, Sub};

/// Number of integer digits. The decimal point always sits after cell 1.
pub const INTEGER_DIGITS: usize = 1;

const SIGN_CELL: usize = 0;
const FIRST_DIGIT: usize = SIGN_CELL + 1;
const POSITIVE: u8 = 0;
const NEGATIVE: u8 = 9;

/// Half of an odd digit carried into the next, less significant cell.
const SPILL: u8 = 5;

/// Largest scale `rust_decimal::Decimal` can carry.
const DECIMAL_MAX_SCALE: usize = 28;

/// Warnings collected by lenient loading; usually empty.
pub type ParseWarnings = SmallVec<[ParseWarning; 4]>;

/// Fixed-point decimal number stored as `N` decimal digit cells.
///
/// Cell 0 is the sign sentinel (`0` non-negative, `9` negative), cell 1 is
/// the integer digit and cells `2..N` are the fractional digits, most
/// significant first. Negative values are stored as the nines' complement
/// of their magnitude plus one unit in the last place, so addition needs no
/// sign handling at all.
///
/// # Type Parameter
/// - `N`: Total number of cells (at least 3). Default is 24, giving 22
///   fractional digits.
///
/// # Value Range
/// `[-10, 10)` with a resolution of `10^-(N-2)`.
///
/// # Example
/// ```
/// use bcd_cordic::numeric::Bcd;
///
/// let half = Bcd::<6>::load("0.5");
/// let quarter = half.shr(1);
/// assert_eq!(quarter.to_string(), "0.2500");
/// assert_eq!((-quarter).to_string(), "-0.2500");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bcd<const N: usize = 24>([u8; N]);

// ============================================================================
// Constants
// ============================================================================

impl<const N: usize> Bcd<N> {
    const CELLS_OK: () = assert!(N >= 3, "A BCD value needs a sign, an integer and a fraction cell");

    /// Total number of digit cells, sign sentinel included
    pub const CELLS: usize = N;

    /// Number of fractional digits
    pub const FRACTIONAL_DIGITS: usize = N - FIRST_DIGIT - INTEGER_DIGITS;

    /// Zero value
    pub const ZERO: Self = Self([0; N]);

    /// One unit in the last place
    pub const ULP: Self = {
        let mut cells = [0; N];
        cells[N - 1] = 1;
        Self(cells)
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from digit cells, validating every cell and the sign sentinel.
    ///
    /// # Errors
    /// - `InvalidDigit` if any cell is above 9
    /// - `InvalidSign` if cell 0 is neither 0 nor 9
    pub fn from_digits(cells: [u8; N]) -> NumericResult<Self> {
        let () = Self::CELLS_OK;

        if let Some((index, &digit)) = cells.iter().enumerate().find(|&(_, &d)| d > 9) {
            return Err(NumericError::InvalidDigit { index, digit });
        }
        match cells[SIGN_CELL] {
            POSITIVE | NEGATIVE => Ok(Self(cells)),
            other => Err(NumericError::InvalidSign(other)),
        }
    }

    /// Lenient load from decimal text.
    ///
    /// A leading `-` marks the value negative. Every ASCII digit fills the
    /// next cell starting at the integer digit; everything else, the decimal
    /// point included, is skipped. Loading stops once all digit cells are
    /// filled, and missing digits are zero. The decimal point carries no
    /// position: `"0001"` loads as `0.001`.
    pub fn load(text: &str) -> Self {
        Self::load_with_warnings(text).0
    }

    /// Lenient load that also reports every skipped character.
    ///
    /// The leading `-` and the decimal point belong to the text format and
    /// are never reported. Characters past the last digit cell are not
    /// examined.
    pub fn load_with_warnings(text: &str) -> (Self, ParseWarnings) {
        let () = Self::CELLS_OK;

        let mut cells = [0u8; N];
        let mut warnings = ParseWarnings::new();
        let mut next = FIRST_DIGIT;

        for (position, character) in text.char_indices() {
            if next >= N {
                break;
            }
            match character {
                '0'..='9' => {
                    cells[next] = character as u8 - b'0';
                    next += 1;
                },
                '.' => {},
                '-' if position == 0 => {},
                _ => warnings.push(ParseWarning {
                    position,
                    character,
                }),
            }
        }

        let magnitude = Self(cells);
        let value = if text.starts_with('-') {
            magnitude.negate()
        } else {
            magnitude
        };
        (value, warnings)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The raw digit cells, sign sentinel first.
    #[inline]
    pub const fn digits(&self) -> &[u8; N] {
        &self.0
    }

    /// The sign sentinel cell.
    #[inline]
    pub const fn sign_digit(&self) -> u8 {
        self.0[SIGN_CELL]
    }

    /// Check if the sign sentinel marks a negative value.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0[SIGN_CELL] == NEGATIVE
    }

    /// Check if every cell is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&d| d == 0)
    }

    /// Check if the sign sentinel is 0 or 9.
    ///
    /// Only a wrapping add or subtract that overflowed produces anything else.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self.0[SIGN_CELL], POSITIVE | NEGATIVE)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Nines' complement plus one unit in the last place.
    pub fn negate(self) -> Self {
        let mut complement = [0u8; N];
        for (out, &digit) in complement.iter_mut().zip(self.0.iter()) {
            *out = 9 - digit;
        }
        Self(complement).wrapping_add(Self::ULP)
    }

    /// Digit-wise addition with carry; a carry out of the sign cell is lost.
    pub fn wrapping_add(self, rhs: Self) -> Self {
        let mut sum = [0u8; N];
        let mut carry = 0;

        for i in (0..N).rev() {
            let mut cell = self.0[i] + rhs.0[i] + carry;
            if cell > 9 {
                cell -= 10;
                carry = 1;
            } else {
                carry = 0;
            }
            sum[i] = cell;
        }

        Self(sum)
    }

    /// `self + (-rhs)` with the same wraparound as [`Bcd::wrapping_add`].
    #[inline]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.wrapping_add(rhs.negate())
    }

    /// Checked addition.
    ///
    /// Two valid operands only leave `[-10, 10)` when the sign cell of the
    /// sum ends up as 1 or 8.
    ///
    /// # Errors
    /// Returns `InvalidSign` for an invalid operand and `PrecisionOverflow`
    /// if the result is out of range.
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.ensure_valid()?;
        rhs.ensure_valid()?;

        let sum = self.wrapping_add(rhs);
        if sum.is_valid() {
            Ok(sum)
        } else {
            Err(NumericError::PrecisionOverflow)
        }
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `PrecisionOverflow` if the result, or `-rhs` itself, is out of
    /// range.
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        rhs.ensure_valid()?;

        let negated = rhs.negate();
        if !negated.is_valid() {
            return Err(NumericError::PrecisionOverflow);
        }
        self.checked_add(negated)
    }

    /// Arithmetic shift right by `bits` binary places, i.e. `self * 2^-bits`.
    ///
    /// Each single-bit step halves every digit and carries 5 into the next
    /// cell below an odd digit; a negative sentinel feeds 5 into the integer
    /// digit, which replicates the sign. If the last step spilled out of the
    /// final cell, one unit is added to a non-negative result and subtracted
    /// from a negative one. Shifting by zero returns the value unchanged.
    pub fn shr(self, bits: u32) -> Self {
        let mut cells = self.0;
        let mut spill = 0;

        for _ in 0..bits {
            spill = if cells[SIGN_CELL] == NEGATIVE { SPILL } else { 0 };
            for cell in cells[FIRST_DIGIT..].iter_mut() {
                let halved = (*cell >> 1) + spill;
                spill = if *cell & 1 != 0 { SPILL } else { 0 };
                *cell = halved;
            }
        }

        let shifted = Self(cells);
        if spill == 0 {
            shifted
        } else if cells[SIGN_CELL] == POSITIVE {
            shifted.wrapping_add(Self::ULP)
        } else {
            shifted.wrapping_sub(Self::ULP)
        }
    }

    /// Shift right with a signed amount.
    ///
    /// # Errors
    /// Returns `NegativeShift` if `bits` is negative.
    pub fn checked_shr(self, bits: i32) -> NumericResult<Self> {
        u32::try_from(bits)
            .map(|bits| self.shr(bits))
            .map_err(|_| NumericError::NegativeShift(bits))
    }

    fn ensure_valid(&self) -> NumericResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(NumericError::InvalidSign(self.sign_digit()))
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const N: usize> Default for Bcd<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> PartialOrd for Bcd<N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for Bcd<N> {
    /// Numeric order for valid values: complements of negatives sort like
    /// their values once the sign classes are separated.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => self.0.cmp(&other.0),
        }
    }
}

impl<const N: usize> Neg for Bcd<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// Wrapping like the digit arithmetic itself; use checked_* to detect overflow
impl<const N: usize> Add for Bcd<N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl<const N: usize> Sub for Bcd<N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

impl<const N: usize> Shr<u32> for Bcd<N> {
    type Output = Self;

    #[inline]
    fn shr(self, bits: u32) -> Self::Output {
        Bcd::shr(self, bits)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const N: usize> fmt::Debug for Bcd<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bcd<{}>({}, sign={})", N, self, self.sign_digit())
    }
}

impl<const N: usize> fmt::Display for Bcd<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = if self.is_negative() {
            f.write_char('-')?;
            self.negate()
        } else {
            *self
        };

        for (i, &digit) in magnitude.0.iter().enumerate().skip(FIRST_DIGIT) {
            if i == FIRST_DIGIT + INTEGER_DIGITS {
                f.write_char('.')?;
            }
            f.write_char(char::from(b'0' + digit))?;
        }
        Ok(())
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<const N: usize> std::str::FromStr for Bcd<N> {
    type Err = NumericError;

    /// Strict parse: same placement rules as [`Bcd::load`], but any skipped
    /// character is an error.
    ///
    /// # Examples
    /// - "0.5" -> 0.5000...
    /// - "-1.25" -> -1.2500...
    /// - "0.5x" -> `InvalidCharacter`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.bytes().any(|b| b.is_ascii_digit()) {
            return Err(NumericError::InvalidInput);
        }

        let (value, warnings) = Self::load_with_warnings(s);
        match warnings.first() {
            Some(&warning) => Err(warning.into()),
            None => Ok(value),
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl<const N: usize> Bcd<N> {
    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `InvalidSign` if the sentinel is neither 0 nor 9
    /// - `Overflow` for -10, whose magnitude has no representation
    /// - `PrecisionLoss` if `N - 2` exceeds Decimal's 28 digit scale
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        self.ensure_valid()?;
        if Self::FRACTIONAL_DIGITS > DECIMAL_MAX_SCALE {
            return Err(NumericError::PrecisionLoss);
        }

        let magnitude = if self.is_negative() {
            self.negate()
        } else {
            self
        };
        if magnitude.sign_digit() != POSITIVE {
            return Err(NumericError::Overflow);
        }

        let mut mantissa: i128 = 0;
        for &digit in &magnitude.0[FIRST_DIGIT..] {
            mantissa = mantissa * 10 + i128::from(digit);
        }
        if self.is_negative() {
            mantissa = -mantissa;
        }

        Decimal::try_from_i128_with_scale(mantissa, Self::FRACTIONAL_DIGITS as u32)
            .map_err(|_| NumericError::PrecisionLoss)
    }

    /// Convert from rust_decimal::Decimal, rounding half away from zero to
    /// `N - 2` fractional digits.
    ///
    /// # Errors
    /// - `Overflow` if the rounded magnitude needs more than one integer digit
    /// - `PrecisionLoss` if `N - 2` exceeds Decimal's 28 digit scale, or the
    ///   value does not fit Decimal's mantissa at that scale
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        if Self::FRACTIONAL_DIGITS > DECIMAL_MAX_SCALE {
            return Err(NumericError::PrecisionLoss);
        }
        if d.abs() >= Decimal::from(10) {
            return Err(NumericError::Overflow);
        }

        let scale = Self::FRACTIONAL_DIGITS as u32;
        let mut scaled = d.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
        scaled.rescale(scale);
        // rescale keeps a smaller scale when the mantissa would not fit 96 bits
        if scaled.scale() != scale {
            return Err(NumericError::PrecisionLoss);
        }

        let mut remaining = scaled.mantissa().unsigned_abs();
        let mut cells = [0u8; N];
        for cell in cells[FIRST_DIGIT..].iter_mut().rev() {
            *cell = (remaining % 10) as u8;
            remaining /= 10;
        }
        if remaining != 0 {
            return Err(NumericError::Overflow);
        }

        let magnitude = Self(cells);
        Ok(if scaled.is_sign_negative() {
            magnitude.negate()
        } else {
            magnitude
        })
    }
}

// ============================================================================
// Serde (decimal text on the wire)
// ============================================================================

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for Bcd<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for Bcd<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
