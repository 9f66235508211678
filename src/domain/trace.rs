// ============================================================================
// Stage Trace
// Per-stage records and the outcome of a complete CORDIC run
// ============================================================================

use super::vector::{Direction, RotationState, Vector};
use crate::numeric::Bcd;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// State right after one stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StageRecord<const N: usize = 24> {
    /// Stage index, also the shift amount
    pub stage: usize,
    /// Direction this stage rotated in
    pub direction: Direction,
    /// Residual angle after the stage
    pub angle: Bcd<N>,
    /// Vector after the stage
    pub vector: Vector<N>,
}

impl<const N: usize> StageRecord<N> {
    pub fn new(stage: usize, direction: Direction, state: &RotationState<N>) -> Self {
        Self {
            stage,
            direction,
            angle: state.angle,
            vector: state.vector,
        }
    }
}

/// Result of running every stage
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CordicOutcome<const N: usize = 24> {
    /// State before stage 0
    pub initial: RotationState<N>,
    /// State after the last stage
    pub final_state: RotationState<N>,
    /// Stages run
    pub stages: usize,
    /// Every stage in order; empty when trace recording is off
    pub trace: Vec<StageRecord<N>>,
}

impl<const N: usize> CordicOutcome<N> {
    /// cos(x): the real part of the final vector
    #[inline]
    pub fn cos(&self) -> Bcd<N> {
        self.final_state.vector.real
    }

    /// sin(x): the imaginary part of the final vector
    #[inline]
    pub fn sin(&self) -> Bcd<N> {
        self.final_state.vector.imag
    }

    /// Angle left over after the last stage
    #[inline]
    pub fn residual(&self) -> Bcd<N> {
        self.final_state.angle
    }
}
