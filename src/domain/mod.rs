mod cell;
mod error;
mod grid;
mod pattern;
mod rules;
pub mod evolution;

pub use cell::Cell;
pub use error::EngineError;
pub use evolution::{Strategy, changed_cells, step};
pub use grid::{DEFAULT_COLS, DEFAULT_ROWS, Grid};
pub use pattern::{Pattern, presets};
pub use rules::Ruleset;
