// ============================================================================
// Angle Table
// Precomputed atan(2^-k) micro-rotation angles, one per stage
// ============================================================================

use super::errors::{CordicError, CordicResult};
use crate::domain::constants::{ATAN_LITERALS, LITERAL_ANGLES};
use crate::numeric::Bcd;

/// Immutable table of micro-rotation angles.
///
/// Entries below 24 are loaded from literals; every later entry is the
/// previous one shifted right by a bit. Built once and shared read-only,
/// typically behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AngleTable<const N: usize = 24> {
    entries: Vec<Bcd<N>>,
}

impl<const N: usize> AngleTable<N> {
    /// Build a table with `stage_count` entries
    pub fn build(stage_count: usize) -> Self {
        let mut entries: Vec<Bcd<N>> = Vec::with_capacity(stage_count);

        for (stage, literal) in ATAN_LITERALS.iter().take(stage_count).enumerate() {
            let (angle, warnings) = Bcd::load_with_warnings(literal);
            for warning in &warnings {
                tracing::warn!(stage, %warning, "angle literal");
            }
            entries.push(angle);
        }

        while entries.len() < stage_count {
            let halved = entries[entries.len() - 1].shr(1);
            entries.push(halved);
        }

        tracing::debug!(
            entries = entries.len(),
            literal_entries = stage_count.min(LITERAL_ANGLES),
            "built CORDIC angle table"
        );

        Self { entries }
    }

    /// Angle for `stage`
    ///
    /// # Errors
    /// Returns `StageOutOfRange` past the end of the table.
    #[inline]
    pub fn get(&self, stage: usize) -> CordicResult<Bcd<N>> {
        self.entries
            .get(stage)
            .copied()
            .ok_or(CordicError::StageOutOfRange {
                stage,
                table_len: self.entries.len(),
            })
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in stage order
    #[inline]
    pub fn entries(&self) -> &[Bcd<N>] {
        &self.entries
    }
}
