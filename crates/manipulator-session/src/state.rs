//! The session state container.
//!
//! Re-expresses the surrounding application's mutable store as one explicit
//! value: grid configuration, current world, sample count, and display
//! settings live here and are passed in and out openly. The engine below
//! stays stateless; every mutation of this container goes through a named
//! operation, and the world is reseeded whenever the grid or the sample
//! count changes.

use manipulator_engine::{generate_initial_world, simulate};
use manipulator_types::{
    ExecutionResult, ExecutionStep, GridConfig, ManipulatorState, Sample,
};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::error::SessionError;

/// Smallest accepted grid dimension.
pub const MIN_GRID_SIDE: u32 = 1;
/// Largest accepted grid dimension.
pub const MAX_GRID_SIDE: u32 = 30;

/// The complete mutable state of one manipulator session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    grid: GridConfig,
    sample_count: u32,
    manipulator: ManipulatorState,
    samples: Vec<Sample>,
    step_delay_ms: u32,
    executing: bool,
}

impl SessionState {
    /// Create a session with the given grid and sample count, generating a
    /// fresh world. Dimensions are clamped to `1..=30` and the sample
    /// count is capped below the grid capacity before generation.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Engine`] if world generation fails.
    pub fn new(grid: GridConfig, sample_count: u32) -> Result<Self, SessionError> {
        let grid = clamp_grid(grid);
        let sample_count = clamp_sample_count(grid, sample_count);
        let world = generate_initial_world(grid, sample_count)?;
        Ok(Self {
            grid,
            sample_count,
            manipulator: world.manipulator,
            samples: world.samples,
            step_delay_ms: 300,
            executing: false,
        })
    }

    /// Create a session from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Engine`] if world generation fails.
    pub fn from_config(config: &SessionConfig) -> Result<Self, SessionError> {
        let mut session = Self::new(
            GridConfig::new(config.grid.width, config.grid.height),
            config.samples.count,
        )?;
        session.step_delay_ms = config.playback.step_delay_ms;
        Ok(session)
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    /// Current grid configuration.
    pub const fn grid(&self) -> GridConfig {
        self.grid
    }

    /// Configured sample count (what regeneration will place).
    pub const fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Current manipulator state.
    pub const fn manipulator(&self) -> &ManipulatorState {
        &self.manipulator
    }

    /// Current sample list.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Delay between displayed steps, in milliseconds.
    pub const fn step_delay_ms(&self) -> u32 {
        self.step_delay_ms
    }

    /// Whether a trace replay is currently being displayed.
    pub const fn is_executing(&self) -> bool {
        self.executing
    }

    // -------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------

    /// Change the grid dimensions and reseed the world.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Engine`] if world generation fails.
    pub fn set_grid_config(&mut self, grid: GridConfig) -> Result<(), SessionError> {
        self.grid = clamp_grid(grid);
        self.sample_count = clamp_sample_count(self.grid, self.sample_count);
        self.regenerate()
    }

    /// Change the sample count and reseed the world.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Engine`] if world generation fails.
    pub fn set_sample_count(&mut self, count: u32) -> Result<(), SessionError> {
        self.sample_count = clamp_sample_count(self.grid, count);
        self.regenerate()
    }

    /// Reseed the world from the current grid and sample count.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Engine`] if world generation fails.
    pub fn regenerate(&mut self) -> Result<(), SessionError> {
        let world = generate_initial_world(self.grid, self.sample_count)?;
        self.manipulator = world.manipulator;
        self.samples = world.samples;
        debug!(
            width = self.grid.width,
            height = self.grid.height,
            sample_count = self.sample_count,
            "session world reseeded"
        );
        Ok(())
    }

    /// Discard the current world and start over. Alias for [`regenerate`]
    /// kept for the host's "reset" affordance.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Engine`] if world generation fails.
    ///
    /// [`regenerate`]: Self::regenerate
    pub fn reset_to_initial(&mut self) -> Result<(), SessionError> {
        self.regenerate()
    }

    /// Change the displayed step delay.
    pub const fn set_step_delay_ms(&mut self, delay_ms: u32) {
        self.step_delay_ms = delay_ms;
    }

    /// Mark a trace replay as running or finished.
    pub const fn set_executing(&mut self, executing: bool) {
        self.executing = executing;
    }

    /// Adopt the world snapshots of one recorded step.
    ///
    /// Used by hosts that pace a trace replay: each displayed step becomes
    /// the session's current world.
    pub fn apply_step(&mut self, step: &ExecutionStep) {
        self.manipulator = step.manipulator.clone();
        self.samples = step.samples.clone();
    }

    /// Validate and simulate a raw command string against the current
    /// world, adopt the final state, and return the full result.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Engine`] when validation rejects the input.
    pub fn run_command(&mut self, raw: &str) -> Result<ExecutionResult, SessionError> {
        let result = simulate(raw, &self.manipulator, &self.samples, self.grid)?;
        self.manipulator = result.final_manipulator.clone();
        self.samples = result.final_samples.clone();
        info!(
            steps = result.steps.len(),
            optimized = %result.optimized,
            "command string executed"
        );
        Ok(result)
    }
}

/// Clamp grid dimensions into the accepted `1..=30` window.
fn clamp_grid(grid: GridConfig) -> GridConfig {
    GridConfig::new(
        grid.width.clamp(MIN_GRID_SIDE, MAX_GRID_SIDE),
        grid.height.clamp(MIN_GRID_SIDE, MAX_GRID_SIDE),
    )
}

/// Cap a requested sample count at the grid's free-cell capacity so
/// regeneration can never fail with an overfull request.
fn clamp_sample_count(grid: GridConfig, count: u32) -> u32 {
    let free_cells = grid.cell_count().saturating_sub(1);
    u32::try_from(free_cells.min(u64::from(count))).unwrap_or(u32::MAX)
}
