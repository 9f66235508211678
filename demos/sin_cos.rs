// ============================================================================
// sin/cos Example
// ============================================================================
//
// Usage: cargo run --example sin_cos [--features logging] [angle]
// The angle is in radians and defaults to 30 degrees.

use bcd_cordic::domain::constants::ANGLE_30_DEGREES;
use bcd_cordic::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| ANGLE_30_DEGREES.to_string());

    let engine: CordicEngine = match CordicEngineBuilder::new().build(Arc::new(LoggingObserver)) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("failed to build engine: {}", e);
            std::process::exit(1);
        },
    };

    match engine.sin_cos_str(&input) {
        Ok(outcome) => print!("{}", Report(&outcome)),
        Err(e) => {
            eprintln!("{}: {}", input, e);
            std::process::exit(1);
        },
    }
}
