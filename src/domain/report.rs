// ============================================================================
// Text Report
// Per-stage listing and final summary of a CORDIC run
// ============================================================================

use super::trace::{CordicOutcome, StageRecord};
use std::fmt;

/// Formats one stage as `stage {i}:   angle {residual} -> {real} {imag}`
pub fn format_stage<const N: usize>(record: &StageRecord<N>) -> String {
    format!(
        "stage {}:   angle {} -> {} {}",
        record.stage, record.angle, record.vector.real, record.vector.imag
    )
}

/// Display adapter writing every traced stage followed by the final values.
///
/// The summary labels the imaginary part sin(x) and the real part cos(x).
pub struct Report<'a, const N: usize>(pub &'a CordicOutcome<N>);

impl<const N: usize> fmt::Display for Report<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.0.trace {
            writeln!(f, "{}", format_stage(record))?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "Final results:")?;
        writeln!(f, "sin(x) = {}", self.0.sin())?;
        writeln!(f, "cos(x) = {}", self.0.cos())
    }
}
