// ============================================================================
// Domain Models Module
// Configuration, constants, rotation state and run outcomes
// ============================================================================

pub mod config;
pub mod constants;
pub mod report;
pub mod trace;
pub mod vector;

pub use config::{CordicConfig, OverflowMode};
pub use report::{format_stage, Report};
pub use trace::{CordicOutcome, StageRecord};
pub use vector::{Direction, RotationState, Vector};
