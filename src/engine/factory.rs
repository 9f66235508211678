// ============================================================================
// CORDIC Engine Factory
// Creates CORDIC engines with proper configuration
// ============================================================================

use super::angle_table::AngleTable;
use super::cordic_engine::CordicEngine;
use super::errors::{CordicError, CordicResult};
use crate::domain::{CordicConfig, OverflowMode};
use crate::interfaces::StageObserver;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a CORDIC engine from configuration, building a fresh angle table
///
/// # Arguments
/// * `config` - Stage count, overflow mode and trace settings
/// * `observer` - Observer for per-stage progress
///
/// # Example
/// ```
/// use bcd_cordic::prelude::*;
/// use std::sync::Arc;
///
/// let engine: CordicEngine =
///     create_from_config(CordicConfig::reference(), Arc::new(NoOpObserver)).unwrap();
/// assert_eq!(engine.table().len(), 75);
/// ```
pub fn create_from_config<const N: usize>(
    config: CordicConfig,
    observer: Arc<dyn StageObserver<N>>,
) -> CordicResult<CordicEngine<N>> {
    // Validate before sizing the table from the stage count
    config.validate().map_err(CordicError::InvalidConfig)?;

    let table = Arc::new(AngleTable::build(config.stage_count));
    CordicEngine::new(table, config, observer)
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating CORDIC engines with fluent API
///
/// # Example
/// ```
/// use bcd_cordic::prelude::*;
/// use std::sync::Arc;
///
/// let engine = CordicEngineBuilder::<24>::new()
///     .with_stage_count(60)
///     .checked_arithmetic()
///     .without_trace()
///     .build(Arc::new(NoOpObserver))
///     .unwrap();
///
/// assert_eq!(engine.config().stage_count, 60);
/// ```
pub struct CordicEngineBuilder<const N: usize = 24> {
    config: CordicConfig,
    table: Option<Arc<AngleTable<N>>>,
}

impl<const N: usize> CordicEngineBuilder<N> {
    /// Create a new builder with the reference configuration
    pub fn new() -> Self {
        Self {
            config: CordicConfig::reference(),
            table: None,
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: CordicConfig) -> Self {
        Self {
            config,
            table: None,
        }
    }

    // ========================================================================
    // Stage Configuration
    // ========================================================================

    /// Set the number of stages
    pub fn with_stage_count(mut self, stage_count: usize) -> Self {
        self.config.stage_count = stage_count;
        self
    }

    /// Reuse an already built angle table instead of building one
    pub fn with_table(mut self, table: Arc<AngleTable<N>>) -> Self {
        self.table = Some(table);
        self
    }

    // ========================================================================
    // Arithmetic and Trace Configuration
    // ========================================================================

    /// Fail with `PrecisionOverflow` instead of wrapping
    pub fn checked_arithmetic(mut self) -> Self {
        self.config.overflow_mode = OverflowMode::Checked;
        self
    }

    /// Wrap silently on overflow (default)
    pub fn wrapping_arithmetic(mut self) -> Self {
        self.config.overflow_mode = OverflowMode::Wrapping;
        self
    }

    /// Skip recording the per-stage trace
    pub fn without_trace(mut self) -> Self {
        self.config.record_trace = false;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the CORDIC engine
    pub fn build(self, observer: Arc<dyn StageObserver<N>>) -> CordicResult<CordicEngine<N>> {
        match self.table {
            Some(table) => CordicEngine::new(table, self.config, observer),
            None => create_from_config(self.config, observer),
        }
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CordicConfig {
        &self.config
    }
}

impl<const N: usize> Default for CordicEngineBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpObserver;
    use crate::numeric::Bcd;

    #[test]
    fn test_create_reference_engine() {
        let engine: CordicEngine<24> =
            create_from_config(CordicConfig::reference(), Arc::new(NoOpObserver)).unwrap();
        assert_eq!(engine.table().len(), 75);
        assert_eq!(engine.config(), &CordicConfig::reference());
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let result: CordicResult<CordicEngine<24>> =
            create_from_config(CordicConfig::new(0), Arc::new(NoOpObserver));
        assert!(matches!(result, Err(CordicError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_pattern() {
        let engine = CordicEngineBuilder::<24>::new()
            .with_stage_count(30)
            .checked_arithmetic()
            .without_trace()
            .build(Arc::new(NoOpObserver))
            .unwrap();

        assert_eq!(engine.config().stage_count, 30);
        assert_eq!(engine.config().overflow_mode, OverflowMode::Checked);
        assert!(!engine.config().record_trace);
    }

    #[test]
    fn test_builder_shares_table() {
        let table = Arc::new(AngleTable::<24>::build(75));

        let a = CordicEngineBuilder::new()
            .with_table(Arc::clone(&table))
            .build(Arc::new(NoOpObserver))
            .unwrap();
        let b = CordicEngineBuilder::new()
            .with_table(Arc::clone(&table))
            .with_stage_count(40)
            .build(Arc::new(NoOpObserver))
            .unwrap();

        assert!(Arc::ptr_eq(a.table(), b.table()));
        assert_eq!(Arc::strong_count(&table), 3);

        let angle = Bcd::load("0.7");
        assert_ne!(a.sin_cos(angle).unwrap().stages, b.sin_cos(angle).unwrap().stages);
    }

    #[test]
    fn test_builder_table_too_short() {
        let table = Arc::new(AngleTable::<24>::build(20));
        let result = CordicEngineBuilder::new()
            .with_table(table)
            .build(Arc::new(NoOpObserver));

        assert!(matches!(result, Err(CordicError::TableTooShort { .. })));
    }

    #[test]
    fn test_builder_from_config() {
        let builder = CordicEngineBuilder::<24>::from_config(CordicConfig::untraced())
            .wrapping_arithmetic();

        assert!(!builder.get_config().record_trace);
        assert_eq!(builder.get_config().overflow_mode, OverflowMode::Wrapping);
    }
}
