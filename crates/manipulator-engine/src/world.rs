//! Initial world generation: manipulator at the origin, samples scattered
//! across distinct random cells.
//!
//! Placement uses rejection sampling against an occupied-cell set. The
//! loop is only entered after a capacity check, so it always terminates:
//! a grid that cannot hold the requested samples plus the origin cell is
//! rejected up front with [`EngineError::InsufficientSpace`] instead of
//! spinning forever.

use std::collections::BTreeSet;

use manipulator_types::{CellCoord, GridConfig, ManipulatorState, Sample, SampleId};
use rand::Rng;
use tracing::debug;

use crate::error::EngineError;

/// A freshly generated world: manipulator plus sample list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialWorld {
    /// The manipulator, at the origin and holding nothing.
    pub manipulator: ManipulatorState,
    /// Samples at distinct cells, identifiers `s0, s1, ...` in order.
    pub samples: Vec<Sample>,
}

/// Generate a fresh world with the given RNG.
///
/// The manipulator starts at the origin `(0, 0)`; each sample lands on a
/// uniformly random cell not already taken by the origin or an earlier
/// sample. Identifiers are assigned sequentially in placement order.
///
/// # Errors
///
/// Returns [`EngineError::InsufficientSpace`] when `sample_count` exceeds
/// the number of grid cells minus one (the origin is reserved).
pub fn create_initial_world(
    grid: GridConfig,
    sample_count: u32,
    rng: &mut impl Rng,
) -> Result<InitialWorld, EngineError> {
    let free_cells = grid.cell_count().saturating_sub(1);
    if u64::from(sample_count) > free_cells {
        return Err(EngineError::InsufficientSpace {
            requested: sample_count,
            capacity: free_cells,
        });
    }

    let mut occupied: BTreeSet<CellCoord> = BTreeSet::new();
    occupied.insert(CellCoord::ORIGIN);

    let mut samples = Vec::new();
    for index in 0..sample_count {
        let position = loop {
            let cell = CellCoord::new(
                rng.random_range(0..grid.width),
                rng.random_range(0..grid.height),
            );
            // Terminates: the capacity check above guarantees a free cell.
            if occupied.insert(cell) {
                break cell;
            }
        };
        samples.push(Sample {
            id: SampleId::indexed(index),
            position,
        });
    }

    debug!(
        width = grid.width,
        height = grid.height,
        sample_count,
        "initial world generated"
    );

    Ok(InitialWorld {
        manipulator: ManipulatorState::at(CellCoord::ORIGIN),
        samples,
    })
}

/// Generate a fresh world with the thread-local RNG.
///
/// # Errors
///
/// Returns [`EngineError::InsufficientSpace`] under the same conditions as
/// [`create_initial_world`].
pub fn generate_initial_world(
    grid: GridConfig,
    sample_count: u32,
) -> Result<InitialWorld, EngineError> {
    create_initial_world(grid, sample_count, &mut rand::rng())
}
