// ============================================================================
// Engine Module
// Contains the CORDIC angle table, micro-rotation and run driver
// ============================================================================

mod angle_table;
mod batch;
mod cordic_engine;
mod errors;
mod rotation;

pub mod factory;

pub use angle_table::AngleTable;
pub use batch::run_batch;
pub use cordic_engine::CordicEngine;
pub use errors::{CordicError, CordicResult};
pub use factory::{create_from_config, CordicEngineBuilder};
pub use rotation::rotate;
