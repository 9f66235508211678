// ============================================================================
// BCD CORDIC Library
// Digit-exact sine and cosine on fixed-point decimal arithmetic
// ============================================================================

//! # BCD CORDIC
//!
//! Sine and cosine by CORDIC over a fixed-point binary-coded-decimal type.
//!
//! ## Features
//!
//! - **`Bcd<N>`** decimal fixed-point with a nines'-complement sign cell
//! - **Shift-and-add rotation** with no multiplication or floating point
//! - **Shared angle tables** built once and reused across engines and threads
//! - **Stage observers** for tracing a run as it happens
//! - **Checked mode** that reports overflow instead of wrapping
//!
//! ## Example
//!
//! ```rust
//! use bcd_cordic::prelude::*;
//! use bcd_cordic::domain::constants::ANGLE_30_DEGREES;
//! use std::sync::Arc;
//!
//! // 75 stages over 24 cells, the reference precision
//! let engine: CordicEngine = CordicEngineBuilder::new()
//!     .build(Arc::new(NoOpObserver))
//!     .unwrap();
//!
//! let outcome = engine.sin_cos(Bcd::load(ANGLE_30_DEGREES)).unwrap();
//!
//! assert_eq!(outcome.sin().to_string(), "0.5000000000000000000009");
//! assert_eq!(outcome.cos().to_string(), "0.8660254037844386467630");
//!
//! // Full per-stage listing
//! println!("{}", Report(&outcome));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CordicConfig, CordicOutcome, Direction, OverflowMode, Report, RotationState, StageRecord,
        Vector,
    };
    pub use crate::engine::{
        create_from_config, run_batch, AngleTable, CordicEngine, CordicEngineBuilder, CordicError,
        CordicResult,
    };
    pub use crate::interfaces::{CollectingObserver, LoggingObserver, NoOpObserver, StageObserver};
    pub use crate::numeric::{Bcd, NumericError, NumericResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::domain::constants::{ANGLE_30_DEGREES, ANGLE_45_DEGREES};
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_thirty_degrees() {
        let observer = Arc::new(CollectingObserver::<24>::new());
        let engine = CordicEngineBuilder::<24>::new()
            .build(observer.clone())
            .unwrap();

        let outcome = engine.sin_cos(Bcd::load(ANGLE_30_DEGREES)).unwrap();

        // Observer and trace agree stage for stage
        assert_eq!(observer.records(), outcome.trace);

        let report = Report(&outcome).to_string();
        assert!(report.starts_with(
            "stage 0:   angle -0.2617993877991494365385 -> \
             0.6072529350088812561694 0.6072529350088812561694\n"
        ));
        assert!(report.ends_with(
            "\n\nFinal results:\nsin(x) = 0.5000000000000000000009\n\
             cos(x) = 0.8660254037844386467630\n"
        ));
        assert_eq!(report.lines().filter(|l| l.starts_with("stage ")).count(), 75);
    }

    #[test]
    fn test_end_to_end_forty_five_degrees() {
        let engine: CordicEngine =
            create_from_config(CordicConfig::checked(), Arc::new(LoggingObserver)).unwrap();

        let outcome = engine.sin_cos(Bcd::load(ANGLE_45_DEGREES)).unwrap();

        assert!(outcome.residual().is_zero());
        assert_eq!(outcome.cos().to_string(), "0.7071067811865475243998");
        assert_eq!(outcome.sin().to_string(), "0.7071067811865475244018");
    }
}
