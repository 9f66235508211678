// ============================================================================
// Engine Errors
// Precondition and arithmetic failures surfaced by the CORDIC engine
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Errors raised while building or running a CORDIC engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CordicError {
    /// Arithmetic failure inside a rotation (checked mode only)
    Numeric(NumericError),
    /// Stage index past the end of the angle table
    StageOutOfRange { stage: usize, table_len: usize },
    /// Angle table shorter than the configured stage count
    TableTooShort { required: usize, available: usize },
    /// Configuration rejected by validation
    InvalidConfig(String),
    /// Angle outside [0, pi/2)
    AngleOutOfRange(String),
    /// A batch worker thread panicked
    WorkerPanicked,
}

impl fmt::Display for CordicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CordicError::Numeric(err) => write!(f, "arithmetic error: {}", err),
            CordicError::StageOutOfRange { stage, table_len } => write!(
                f,
                "stage {} out of range for an angle table of {} entries",
                stage, table_len
            ),
            CordicError::TableTooShort {
                required,
                available,
            } => write!(
                f,
                "angle table has {} entries but {} stages are configured",
                available, required
            ),
            CordicError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
            CordicError::AngleOutOfRange(angle) => {
                write!(f, "angle {} is outside [0, pi/2)", angle)
            },
            CordicError::WorkerPanicked => write!(f, "batch worker panicked"),
        }
    }
}

impl std::error::Error for CordicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CordicError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for CordicError {
    fn from(err: NumericError) -> Self {
        CordicError::Numeric(err)
    }
}

/// Result type alias for engine operations
pub type CordicResult<T> = Result<T, CordicError>;
