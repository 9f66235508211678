// ============================================================================
// Stage Observer Interface
// Defines the contract for watching a CORDIC run stage by stage
// ============================================================================

use crate::domain::{CordicOutcome, StageRecord};
use parking_lot::Mutex;

/// Observer notified after every stage of a run.
/// Implementations can handle logging, progress reporting, capture, etc.
pub trait StageObserver<const N: usize>: Send + Sync {
    /// Handle one completed stage
    fn on_stage(&self, record: &StageRecord<N>);

    /// Called once after the last stage
    fn on_complete(&self, outcome: &CordicOutcome<N>) {
        let _ = outcome;
    }
}

/// No-op observer for testing
pub struct NoOpObserver;

impl<const N: usize> StageObserver<N> for NoOpObserver {
    fn on_stage(&self, _record: &StageRecord<N>) {
        // Do nothing
    }
}

/// Logging observer
pub struct LoggingObserver;

impl<const N: usize> StageObserver<N> for LoggingObserver {
    fn on_stage(&self, record: &StageRecord<N>) {
        tracing::debug!(
            stage = record.stage,
            direction = ?record.direction,
            angle = %record.angle,
            real = %record.vector.real,
            imag = %record.vector.imag,
            "CORDIC stage"
        );
    }

    fn on_complete(&self, outcome: &CordicOutcome<N>) {
        tracing::debug!(
            stages = outcome.stages,
            sin = %outcome.sin(),
            cos = %outcome.cos(),
            residual = %outcome.residual(),
            "CORDIC run complete"
        );
    }
}

/// Observer that keeps every stage it sees, across runs
pub struct CollectingObserver<const N: usize> {
    records: Mutex<Vec<StageRecord<N>>>,
}

impl<const N: usize> CollectingObserver<N> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Copy of the records collected so far
    pub fn records(&self) -> Vec<StageRecord<N>> {
        self.records.lock().clone()
    }

    /// Drain collected records
    pub fn take(&self) -> Vec<StageRecord<N>> {
        std::mem::take(&mut *self.records.lock())
    }
}

impl<const N: usize> Default for CollectingObserver<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StageObserver<N> for CollectingObserver<N> {
    fn on_stage(&self, record: &StageRecord<N>) {
        self.records.lock().push(*record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, RotationState};

    fn record(stage: usize) -> StageRecord<8> {
        StageRecord::new(stage, Direction::AntiClockwise, &RotationState::default())
    }

    #[test]
    fn test_noop_observer() {
        let observer = NoOpObserver;
        StageObserver::<8>::on_stage(&observer, &record(0));
        // Should not panic
    }

    #[test]
    fn test_logging_observer() {
        let observer = LoggingObserver;
        observer.on_stage(&record(3));
        // Should not panic without a subscriber
    }

    #[test]
    fn test_collecting_observer() {
        let observer = CollectingObserver::<8>::new();
        observer.on_stage(&record(0));
        observer.on_stage(&record(1));

        let stages: Vec<usize> = observer.records().iter().map(|r| r.stage).collect();
        assert_eq!(stages, vec![0, 1]);

        assert_eq!(observer.take().len(), 2);
        assert!(observer.records().is_empty());
    }
}
