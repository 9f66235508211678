// ============================================================================
// CORDIC Engine
// Drives the micro-rotations from stage 0 to the configured stage count
// ============================================================================

use super::angle_table::AngleTable;
use super::errors::{CordicError, CordicResult};
use super::rotation;
use crate::domain::constants::HALF_PI;
use crate::domain::{CordicConfig, CordicOutcome, RotationState, StageRecord, Vector};
use crate::interfaces::StageObserver;
use crate::numeric::Bcd;
use std::sync::Arc;

/// CORDIC engine over a shared, immutable angle table
pub struct CordicEngine<const N: usize = 24> {
    /// Micro-rotation angles, at least `config.stage_count` long
    table: Arc<AngleTable<N>>,

    /// Stage count, overflow mode and trace recording
    config: CordicConfig,

    /// Observer notified of every stage
    observer: Arc<dyn StageObserver<N>>,

    /// pi/2 truncated to `N - 2` places, the largest angle `sin_cos` accepts
    half_pi: Bcd<N>,
}

impl<const N: usize> CordicEngine<N> {
    /// Create a new CORDIC engine
    ///
    /// # Errors
    /// - `InvalidConfig` if the configuration fails validation
    /// - `TableTooShort` if the table has fewer entries than stages
    pub fn new(
        table: Arc<AngleTable<N>>,
        config: CordicConfig,
        observer: Arc<dyn StageObserver<N>>,
    ) -> CordicResult<Self> {
        config.validate().map_err(CordicError::InvalidConfig)?;

        if table.len() < config.stage_count {
            return Err(CordicError::TableTooShort {
                required: config.stage_count,
                available: table.len(),
            });
        }

        Ok(Self {
            table,
            config,
            observer,
            half_pi: Bcd::load(HALF_PI),
        })
    }

    /// Apply a single stage under the engine's overflow mode
    pub fn rotate(&self, state: &RotationState<N>, stage: usize) -> CordicResult<RotationState<N>> {
        rotation::rotate(&self.table, state, stage, self.config.overflow_mode).map(|(next, _)| next)
    }

    /// Run every stage in increasing order.
    ///
    /// The initial vector must already carry the gain compensation; see
    /// [`Vector::gain_compensated`].
    pub fn run(
        &self,
        initial_vector: Vector<N>,
        initial_angle: Bcd<N>,
    ) -> CordicResult<CordicOutcome<N>> {
        let initial = RotationState::new(initial_vector, initial_angle);
        let mut state = initial;
        let mut trace = Vec::with_capacity(if self.config.record_trace {
            self.config.stage_count
        } else {
            0
        });

        for stage in 0..self.config.stage_count {
            let (next, direction) =
                rotation::rotate(&self.table, &state, stage, self.config.overflow_mode)?;
            state = next;

            let record = StageRecord::new(stage, direction, &state);
            tracing::trace!(stage, angle = %state.angle, "rotated");
            self.observer.on_stage(&record);
            if self.config.record_trace {
                trace.push(record);
            }
        }

        let outcome = CordicOutcome {
            initial,
            final_state: state,
            stages: self.config.stage_count,
            trace,
        };
        self.observer.on_complete(&outcome);

        Ok(outcome)
    }

    /// sin and cos of `angle` (radians), starting from the gain compensated
    /// unit vector.
    ///
    /// # Errors
    /// Returns `AngleOutOfRange` unless `0 <= angle < pi/2`. pi/2 is
    /// irrational, so every representable angle up to its truncation is
    /// below it.
    pub fn sin_cos(&self, angle: Bcd<N>) -> CordicResult<CordicOutcome<N>> {
        if angle.is_negative() || !angle.is_valid() || angle > self.half_pi {
            return Err(CordicError::AngleOutOfRange(angle.to_string()));
        }

        tracing::debug!(%angle, stages = self.config.stage_count, "computing sin/cos");
        self.run(Vector::gain_compensated(), angle)
    }

    /// Parse `text` leniently and compute its sin and cos.
    ///
    /// Skipped characters are logged, not rejected.
    pub fn sin_cos_str(&self, text: &str) -> CordicResult<CordicOutcome<N>> {
        let (angle, warnings) = Bcd::load_with_warnings(text);
        for warning in &warnings {
            tracing::warn!(%warning, input = text, "lenient angle parse");
        }
        self.sin_cos(angle)
    }

    /// Get the configuration
    pub fn config(&self) -> &CordicConfig {
        &self.config
    }

    /// Get the shared angle table
    pub fn table(&self) -> &Arc<AngleTable<N>> {
        &self.table
    }
}
