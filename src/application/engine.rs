use std::collections::VecDeque;

use log::{info, trace};

use crate::application::PlacementPreview;
use crate::domain::{
    Cell, EngineError, Grid, Pattern, Ruleset, Strategy, changed_cells,
};

/// Slowest selectable speed (one generation per second)
pub const MIN_SPEED: u32 = 1;
/// Fastest selectable speed (ten generations per second)
pub const MAX_SPEED: u32 = 10;

/// Clock states of the simulation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ClockState {
    /// No simulation configured or grid just cleared
    #[default]
    Idle,
    /// Generations advance as time is fed to `tick`
    Running,
    /// Suspended by the user; the iteration counter is kept
    Paused,
    /// The iteration limit was reached
    Stopped,
}

/// Notifications handed to the shell, drained with
/// [`SimulationEngine::poll_event`]. Events are queued only after a
/// generation's grid swap has completed, so observers never see a grid
/// with mixed old and new values.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EngineEvent {
    /// Cells whose state flipped during the last completed generation
    CellsChanged(Vec<(usize, usize)>),
    /// The configured iteration limit was reached; the clock stopped
    IterationLimitReached,
}

/// SimulationEngine orchestrates the simulation: it owns the live grid,
/// drives rule evaluation at the configured cadence, and gates all grid
/// mutation through the clock state machine. The shell holds exactly one
/// engine and feeds it frame time; there is no shared global state.
pub struct SimulationEngine {
    grid: Grid,
    ruleset: Ruleset,
    strategy: Strategy,
    state: ClockState,
    /// Seconds between generations while running
    interval: f32,
    update_timer: f32,
    iteration_limit: u64,
    generation: u64,
    events: VecDeque<EngineEvent>,
    preview: Option<PlacementPreview>,
}

impl SimulationEngine {
    /// Create an idle engine with an all-dead grid of the given size
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
            ruleset: Ruleset::default(),
            strategy: Strategy::default(),
            state: ClockState::Idle,
            interval: interval_for(MIN_SPEED),
            update_timer: 0.0,
            iteration_limit: 0,
            generation: 0,
            events: VecDeque::new(),
            preview: None,
        })
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// Generations completed since the last start
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Select the evaluation strategy; output is identical either way
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Start (or resume) the simulation.
    ///
    /// The rule name is resolved against the registry before any state
    /// changes; an unknown name is refused and the engine is left exactly
    /// as it was. `speed` is clamped to [1, 10] and selects a cadence of
    /// 1000 ms / speed. An `iteration_limit` of 0 means unlimited.
    pub fn start(
        &mut self,
        rule_name: &str,
        speed: u32,
        iteration_limit: u64,
    ) -> Result<(), EngineError> {
        let ruleset = Ruleset::lookup(rule_name)?;

        self.ruleset = ruleset;
        self.interval = interval_for(speed);
        self.iteration_limit = iteration_limit;
        self.generation = 0;
        self.update_timer = 0.0;
        self.state = ClockState::Running;
        info!(
            "simulation started: rule={} ({}), interval={}ms, limit={}",
            ruleset.name(),
            ruleset.notation(),
            (self.interval * 1000.0) as u32,
            iteration_limit,
        );
        Ok(())
    }

    /// Suspend the clock; the iteration counter is kept
    pub fn pause(&mut self) {
        if self.state == ClockState::Running {
            self.state = ClockState::Paused;
            info!("simulation paused at generation {}", self.generation);
        }
    }

    /// Reset the grid and counter and return to Idle. The configured
    /// rule is kept.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.update_timer = 0.0;
        self.state = ClockState::Idle;
        info!("simulation cleared");
    }

    /// Feed elapsed frame time to the clock. Advances at most one
    /// generation per call, once the configured interval has elapsed.
    pub fn tick(&mut self, delta_seconds: f32) {
        if self.state != ClockState::Running {
            return;
        }

        self.update_timer += delta_seconds;
        if self.update_timer < self.interval {
            return;
        }
        self.update_timer = 0.0;
        self.step_generation();
    }

    fn step_generation(&mut self) {
        if self.iteration_limit > 0 && self.generation >= self.iteration_limit {
            self.state = ClockState::Stopped;
            info!("iteration limit {} reached", self.iteration_limit);
            self.events.push_back(EngineEvent::IterationLimitReached);
            return;
        }

        let next = self.strategy.step(&self.grid, self.ruleset);
        let diff = changed_cells(&self.grid, &next);
        self.grid = next;
        self.generation += 1;
        trace!(
            "generation {}: {} cells changed, population {}",
            self.generation,
            diff.len(),
            self.grid.population(),
        );
        self.events.push_back(EngineEvent::CellsChanged(diff));
    }

    /// Next pending notification, if any
    pub fn poll_event(&mut self) -> Option<EngineEvent> {
        self.events.pop_front()
    }

    /// Toggle a cell. Returns Ok(false) without touching the grid while
    /// the simulation is running; the clock is the sole writer then.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<bool, EngineError> {
        if self.state == ClockState::Running {
            return Ok(false);
        }
        self.grid.toggle(row, col)?;
        Ok(true)
    }

    /// Liveness query for the shell; out-of-bounds reads as dead
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.grid.is_alive(row, col)
    }

    // Placement surface. A preview session never mutates the grid;
    // commit is the only write and is gated like direct toggles.

    /// Begin a placement session for `pattern`, replacing any active one
    pub fn begin_preview(&mut self, pattern: Pattern) {
        self.preview = Some(PlacementPreview::new(pattern));
    }

    /// Move the preview anchor
    pub fn update_preview(&mut self, anchor_row: usize, anchor_col: usize) {
        if let Some(preview) = self.preview.as_mut() {
            preview.move_to(anchor_row, anchor_col);
        }
    }

    /// Rotate the previewed pattern 90 degrees clockwise
    pub fn rotate_preview(&mut self) {
        if let Some(preview) = self.preview.as_mut() {
            preview.rotate();
        }
    }

    /// Mirror the previewed pattern left-right
    pub fn flip_preview_horizontal(&mut self) {
        if let Some(preview) = self.preview.as_mut() {
            preview.flip_horizontal();
        }
    }

    /// Mirror the previewed pattern top-bottom
    pub fn flip_preview_vertical(&mut self) {
        if let Some(preview) = self.preview.as_mut() {
            preview.flip_vertical();
        }
    }

    /// The in-bounds cells the active preview would turn alive,
    /// for rendering as a pending state. Empty without an anchored session.
    pub fn preview_cells(&self) -> Vec<(usize, usize)> {
        self.preview
            .as_ref()
            .map(|preview| preview.target_cells(&self.grid))
            .unwrap_or_default()
    }

    /// Stamp the previewed pattern onto the grid and end the session.
    /// Returns false if there is no anchored session or the simulation
    /// is running; the session is kept in that case.
    pub fn commit_preview(&mut self) -> bool {
        if self.state == ClockState::Running {
            return false;
        }
        match self.preview.take() {
            Some(preview) if preview.is_anchored() => {
                preview.commit(&mut self.grid);
                true
            }
            other => {
                self.preview = other;
                false
            }
        }
    }

    /// Discard the active placement session, leaving the grid untouched
    pub fn cancel_preview(&mut self) {
        self.preview = None;
    }

    /// Direct union stamp of a pattern, for seeding without a session
    pub fn place_pattern(&mut self, pattern: &Pattern, row: usize, col: usize) -> bool {
        if self.state == ClockState::Running {
            return false;
        }
        pattern.stamp(&mut self.grid, row, col);
        true
    }

    /// Set a cell explicitly, with the same gating as `toggle_cell`
    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) -> Result<bool, EngineError> {
        if self.state == ClockState::Running {
            return Ok(false);
        }
        self.grid.set(row, col, Cell::from_alive(alive))?;
        Ok(true)
    }
}

/// Seconds between generations for a speed setting, clamped to [1, 10]
fn interval_for(speed: u32) -> f32 {
    1.0 / speed.clamp(MIN_SPEED, MAX_SPEED) as f32
}
