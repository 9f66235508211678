// ============================================================================
// CORDIC Configuration
// Stage count, overflow handling and trace recording for a CORDIC engine
// ============================================================================

use super::constants::REFERENCE_STAGES;
use crate::numeric::{Bcd, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Overflow Mode
// ============================================================================

/// How additions and subtractions inside a rotation treat overflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverflowMode {
    /// Carry out of the sign cell is dropped and the raw digits are kept.
    /// Angles and coordinates stay within [-1, 2) for inputs in [0, pi/2),
    /// so this never triggers in practice.
    #[default]
    Wrapping,

    /// Any sum that leaves [-10, 10) fails with `PrecisionOverflow`
    Checked,
}

impl OverflowMode {
    /// Add under this mode
    #[inline]
    pub fn add<const N: usize>(self, lhs: Bcd<N>, rhs: Bcd<N>) -> NumericResult<Bcd<N>> {
        match self {
            OverflowMode::Wrapping => Ok(lhs.wrapping_add(rhs)),
            OverflowMode::Checked => lhs.checked_add(rhs),
        }
    }

    /// Subtract under this mode
    #[inline]
    pub fn sub<const N: usize>(self, lhs: Bcd<N>, rhs: Bcd<N>) -> NumericResult<Bcd<N>> {
        match self {
            OverflowMode::Wrapping => Ok(lhs.wrapping_sub(rhs)),
            OverflowMode::Checked => lhs.checked_sub(rhs),
        }
    }
}

// ============================================================================
// Complete Engine Configuration
// ============================================================================

/// Configuration for creating a CORDIC engine
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CordicConfig {
    /// Number of micro-rotations; the angle table needs at least this many entries
    pub stage_count: usize,

    /// Overflow handling for the rotation arithmetic
    pub overflow_mode: OverflowMode,

    /// Keep every intermediate stage in the outcome
    pub record_trace: bool,
}

impl CordicConfig {
    /// Create a new configuration with the given stage count
    pub fn new(stage_count: usize) -> Self {
        Self {
            stage_count,
            overflow_mode: OverflowMode::Wrapping,
            record_trace: true,
        }
    }

    /// Builder method: Set overflow mode
    pub fn with_overflow_mode(mut self, mode: OverflowMode) -> Self {
        self.overflow_mode = mode;
        self
    }

    /// Builder method: Enable or disable trace recording
    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.stage_count == 0 {
            return Err("Stage count must be positive".to_string());
        }

        // Stage k shifts by k bits
        if u32::try_from(self.stage_count - 1).is_err() {
            return Err("Stage count exceeds the shift range".to_string());
        }

        Ok(())
    }
}

impl Default for CordicConfig {
    fn default() -> Self {
        Self::reference()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CordicConfig {
    /// Reference configuration
    /// - 75 stages
    /// - Wrapping arithmetic
    /// - Full trace
    pub fn reference() -> Self {
        Self::new(REFERENCE_STAGES)
    }

    /// Reference stages with overflow detection
    pub fn checked() -> Self {
        Self::reference().with_overflow_mode(OverflowMode::Checked)
    }

    /// Reference stages without the per-stage trace, for bulk evaluation
    pub fn untraced() -> Self {
        Self::reference().with_trace(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    #[test]
    fn test_config_creation() {
        let config = CordicConfig::new(40);
        assert_eq!(config.stage_count, 40);
        assert_eq!(config.overflow_mode, OverflowMode::Wrapping);
        assert!(config.record_trace);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CordicConfig::new(10)
            .with_overflow_mode(OverflowMode::Checked)
            .with_trace(false);

        assert_eq!(config.overflow_mode, OverflowMode::Checked);
        assert!(!config.record_trace);
    }

    #[test]
    fn test_validation() {
        assert!(CordicConfig::new(0).validate().is_err());
        assert!(CordicConfig::new(1).validate().is_ok());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(CordicConfig::reference().stage_count, 75);
        assert_eq!(CordicConfig::default(), CordicConfig::reference());
        assert_eq!(CordicConfig::checked().overflow_mode, OverflowMode::Checked);
        assert!(!CordicConfig::untraced().record_trace);
    }

    #[test]
    fn test_overflow_modes() {
        let five = Bcd::<8>::load("5");

        let wrapped = OverflowMode::Wrapping.add(five, five).unwrap();
        assert_eq!(wrapped.sign_digit(), 1);
        assert_eq!(
            OverflowMode::Checked.add(five, five),
            Err(NumericError::PrecisionOverflow)
        );

        let diff = OverflowMode::Checked.sub(five, five).unwrap();
        assert!(diff.is_zero());
    }
}
