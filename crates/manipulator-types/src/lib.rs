//! Shared type definitions for the grid manipulator simulation.
//!
//! This crate is the single source of truth for all types used across the
//! manipulator workspace: the command alphabet, the world data model, and
//! the derived records produced by the simulation engine.
//!
//! # Modules
//!
//! - [`enums`] -- The closed six-member command alphabet
//! - [`ids`] -- Identifier newtypes for samples and history entries
//! - [`structs`] -- World state, runs, execution traces, history records

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::CommandSymbol;
pub use ids::{HistoryEntryId, SampleId};
pub use structs::{
    CellCoord, ExecutionResult, ExecutionStep, GridConfig, HistoryEntry, ManipulatorState, Run,
    Sample,
};
