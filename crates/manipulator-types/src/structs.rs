//! Core entity structs for the manipulator simulation.
//!
//! World state (grid, samples, manipulator), the run intermediate form used
//! by the optimizer, and the derived records emitted by the simulator
//! (execution steps, execution results, history entries).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::CommandSymbol;
use crate::ids::{HistoryEntryId, SampleId};

// ---------------------------------------------------------------------------
// World state
// ---------------------------------------------------------------------------

/// A cell coordinate on the grid.
///
/// `x` is the zero-based column index, `y` the zero-based row index. Both
/// are bounded by the configured [`GridConfig`] dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    /// Column index, `0..width`.
    pub x: u32,
    /// Row index, `0..height`.
    pub y: u32,
}

impl CellCoord {
    /// The grid origin `(0, 0)` where the manipulator starts.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a coordinate from column and row indices.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Dimensions of the simulation grid.
///
/// Both dimensions are positive. The engine clamps movement against these
/// bounds; range enforcement on the values themselves (the practical
/// `1..=30` window) belongs to the session layer that edits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl GridConfig {
    /// Create a grid configuration from width and height.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of cells on the grid.
    pub fn cell_count(self) -> u64 {
        u64::from(self.width).saturating_mul(u64::from(self.height))
    }

    /// Whether the coordinate lies within the grid bounds.
    pub const fn contains(self, cell: CellCoord) -> bool {
        cell.x < self.width && cell.y < self.height
    }
}

/// A sample token placed on the grid.
///
/// Multiple samples may coexist, including at the same cell. While a sample
/// is held by the manipulator its `position` field is stale and must not be
/// read; it is re-anchored on release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Stable identifier assigned at world creation.
    pub id: SampleId,
    /// Current cell. Not authoritative while the sample is held.
    pub position: CellCoord,
}

/// The manipulator's position and hold state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManipulatorState {
    /// Current cell of the manipulator head.
    pub position: CellCoord,
    /// Identifier of the held sample, or `None` when empty-handed.
    /// At most one sample can be held at a time.
    pub holding: Option<SampleId>,
}

impl ManipulatorState {
    /// Create a manipulator at the given cell, holding nothing.
    pub const fn at(position: CellCoord) -> Self {
        Self {
            position,
            holding: None,
        }
    }

    /// Whether the manipulator currently holds a sample.
    pub const fn is_holding(&self) -> bool {
        self.holding.is_some()
    }
}

// ---------------------------------------------------------------------------
// Compression intermediate form
// ---------------------------------------------------------------------------

/// A maximal contiguous repetition of one command symbol.
///
/// Intermediate form for the optimizer; never fed to the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// The repeated symbol.
    pub symbol: CommandSymbol,
    /// How many times it repeats. Always at least 1.
    pub count: u32,
}

impl Run {
    /// Create a run of `count` repetitions of `symbol`.
    pub const fn new(symbol: CommandSymbol, count: u32) -> Self {
        Self { symbol, count }
    }
}

// ---------------------------------------------------------------------------
// Execution trace
// ---------------------------------------------------------------------------

/// The recorded world snapshot immediately after applying one command.
///
/// Snapshots are full copies, not diffs: a consumer can jump to any step
/// without replaying the ones before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStep {
    /// Zero-based position of the command in the executed sequence.
    pub index: usize,
    /// The command that produced this snapshot.
    pub symbol: CommandSymbol,
    /// Manipulator state after the command.
    pub manipulator: ManipulatorState,
    /// Full sample list after the command.
    pub samples: Vec<Sample>,
}

/// The complete outcome of simulating one command string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// One step per executed command, in order.
    pub steps: Vec<ExecutionStep>,
    /// Manipulator state after the last command.
    pub final_manipulator: ManipulatorState,
    /// Sample list after the last command.
    pub final_samples: Vec<Sample>,
    /// The optimized (compressed) rendering of the input string.
    pub optimized: String,
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

/// A derived audit record of one executed command string.
///
/// Produced by the session layer for display and audit; never consumed by
/// the engine itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier of the entry.
    pub id: HistoryEntryId,
    /// When the command string was executed.
    pub created_at: DateTime<Utc>,
    /// The raw command string as entered.
    pub raw_command: String,
    /// The optimized rendering returned by the engine.
    pub optimized_command: String,
    /// Sample positions before execution.
    pub samples_before: Vec<Sample>,
    /// Sample positions after execution.
    pub samples_after: Vec<Sample>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_contains_is_exclusive_at_bounds() {
        let grid = GridConfig::new(3, 2);
        assert!(grid.contains(CellCoord::ORIGIN));
        assert!(grid.contains(CellCoord::new(2, 1)));
        assert!(!grid.contains(CellCoord::new(3, 0)));
        assert!(!grid.contains(CellCoord::new(0, 2)));
    }

    #[test]
    fn cell_count_multiplies_dimensions() {
        assert_eq!(GridConfig::new(4, 8).cell_count(), 32);
        assert_eq!(GridConfig::new(1, 1).cell_count(), 1);
    }

    #[test]
    fn manipulator_starts_empty_handed() {
        let state = ManipulatorState::at(CellCoord::ORIGIN);
        assert!(!state.is_holding());
        assert_eq!(state.position, CellCoord::ORIGIN);
    }

    #[test]
    fn execution_result_roundtrip_serde() {
        let result = ExecutionResult {
            steps: vec![ExecutionStep {
                index: 0,
                symbol: CommandSymbol::MoveRight,
                manipulator: ManipulatorState::at(CellCoord::new(1, 0)),
                samples: vec![Sample {
                    id: SampleId::indexed(0),
                    position: CellCoord::new(1, 1),
                }],
            }],
            final_manipulator: ManipulatorState::at(CellCoord::new(1, 0)),
            final_samples: Vec::new(),
            optimized: "П".to_string(),
        };
        let json = serde_json::to_string(&result).ok();
        assert!(json.is_some());
        let restored: Result<ExecutionResult, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(restored.ok(), Some(result));
    }
}
