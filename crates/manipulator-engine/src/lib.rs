//! Command-language processing and simulation engine for the grid
//! manipulator.
//!
//! The engine is pure and synchronous: every operation takes materialized
//! inputs, returns an owned result, and keeps no state between calls. A
//! raw command string flows through validation, run-length encoding, and
//! block compression on one path, and through the grid simulator on the
//! other; both paths meet in the [`ExecutionResult`] the simulator returns.
//!
//! # Modules
//!
//! - [`parse`] -- Whitespace normalization and whole-string validation
//! - [`runs`] -- Run-length encoding, rendering, and notation expansion
//! - [`compress`] -- Repeating-block detection with a fixed first-match
//!   scan policy
//! - [`simulate`] -- Per-command world transitions and full-trace replay
//! - [`world`] -- Random initial placement of manipulator and samples
//! - [`error`] -- The two validation errors plus generation failures
//!
//! [`ExecutionResult`]: manipulator_types::ExecutionResult

pub mod compress;
pub mod error;
pub mod parse;
pub mod runs;
pub mod simulate;
pub mod world;

// Re-export primary operations at crate root.
pub use compress::{compress_repeating_block, optimize, optimize_symbols};
pub use error::EngineError;
pub use parse::{normalize, parse, validate};
pub use runs::{expand, render_runs, to_runs};
pub use simulate::{apply_command, simulate, simulate_symbols};
pub use world::{InitialWorld, create_initial_world, generate_initial_world};
