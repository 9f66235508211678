// ============================================================================
// Rotation State
// The rotated vector and the residual angle threaded through each stage
// ============================================================================

use super::constants::INVERSE_GAIN;
use crate::numeric::Bcd;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D vector; after a full run `real` holds cos(x) and `imag` sin(x)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector<const N: usize = 24> {
    pub real: Bcd<N>,
    pub imag: Bcd<N>,
}

impl<const N: usize> Vector<N> {
    pub fn new(real: Bcd<N>, imag: Bcd<N>) -> Self {
        Self { real, imag }
    }

    /// `(1, 0)` pre-divided by the CORDIC gain
    pub fn gain_compensated() -> Self {
        Self::new(Bcd::load(INVERSE_GAIN), Bcd::ZERO)
    }
}

/// Rotation direction of one micro-rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    AntiClockwise,
    Clockwise,
}

impl Direction {
    /// Non-negative residuals, zero included, rotate anti-clockwise.
    #[inline]
    pub fn for_residual<const N: usize>(angle: &Bcd<N>) -> Self {
        if angle.is_negative() {
            Direction::Clockwise
        } else {
            Direction::AntiClockwise
        }
    }
}

/// Vector plus the angle still left to rotate through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RotationState<const N: usize = 24> {
    pub vector: Vector<N>,
    pub angle: Bcd<N>,
}

impl<const N: usize> RotationState<N> {
    pub fn new(vector: Vector<N>, angle: Bcd<N>) -> Self {
        Self { vector, angle }
    }
}
