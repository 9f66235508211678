// ============================================================================
// Batch Evaluation
// Runs independent sin/cos evaluations across scoped worker threads
// ============================================================================

use super::cordic_engine::CordicEngine;
use super::errors::{CordicError, CordicResult};
use crate::domain::CordicOutcome;
use crate::numeric::Bcd;

/// Evaluate `sin_cos` for every angle, splitting the work across `workers`
/// scoped threads sharing one engine.
///
/// Results come back in input order; a failure for one angle does not stop
/// the others.
///
/// # Errors
/// Returns `WorkerPanicked` if any worker thread panics.
pub fn run_batch<const N: usize>(
    engine: &CordicEngine<N>,
    angles: &[Bcd<N>],
    workers: usize,
) -> CordicResult<Vec<CordicResult<CordicOutcome<N>>>> {
    if angles.is_empty() {
        return Ok(Vec::new());
    }

    let chunk_size = angles.len().div_ceil(workers.max(1)).max(1);

    tracing::debug!(
        angles = angles.len(),
        workers,
        chunk_size,
        "starting CORDIC batch"
    );

    crossbeam::scope(|scope| -> CordicResult<Vec<_>> {
        let handles: Vec<_> = angles
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move |_| {
                    chunk
                        .iter()
                        .map(|&angle| engine.sin_cos(angle))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut results = Vec::with_capacity(angles.len());
        for handle in handles {
            let chunk = handle.join().map_err(|_| CordicError::WorkerPanicked)?;
            results.extend(chunk);
        }
        Ok(results)
    })
    .map_err(|_| CordicError::WorkerPanicked)?
}
