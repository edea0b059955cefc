mod engine;
mod placement;

pub use engine::{ClockState, EngineEvent, MAX_SPEED, MIN_SPEED, SimulationEngine};
pub use placement::PlacementPreview;
