//! Session layer for the grid manipulator: explicit state around the pure
//! engine.
//!
//! The engine computes; this crate remembers. Grid configuration, the
//! current world, display settings, and the execution history all live in
//! values the host owns and passes around openly -- there is no global
//! store. Reseeding, clamping of user-editable bounds, and audit
//! recording happen here so the engine can stay a set of pure functions.
//!
//! # Modules
//!
//! - [`config`] -- YAML session configuration with defaults
//! - [`error`] -- Session error type wrapping engine and config failures
//! - [`history`] -- Newest-first audit log of executed command strings
//! - [`state`] -- The session state container and its operations

pub mod config;
pub mod error;
pub mod history;
pub mod state;

pub use config::{ConfigError, DEFAULT_CONFIG_PATH, SessionConfig};
pub use error::SessionError;
pub use history::HistoryLog;
pub use state::{MAX_GRID_SIDE, MIN_GRID_SIDE, SessionState};
