// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Infrastructure layer - Pattern file persistence
pub mod persistence;

// Re-exports for convenience
pub use domain::{
    Cell, DEFAULT_COLS, DEFAULT_ROWS, EngineError, Grid, Pattern, Ruleset, Strategy, presets,
};
pub use application::{ClockState, EngineEvent, PlacementPreview, SimulationEngine};
