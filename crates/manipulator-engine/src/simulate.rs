//! The grid simulator: replaying a command sequence against a world.
//!
//! A single command mutates exactly one thing: the manipulator's position
//! (clamped to the grid, never wrapping, never erroring) or its hold state.
//! Full-sequence simulation records one complete world snapshot after every
//! command, so a consumer can replay or jump through the trace without
//! re-invoking the engine.
//!
//! The simulator never touches the caller's state: inputs are taken by
//! reference and the result owns independent copies throughout.

use manipulator_types::{
    CommandSymbol, ExecutionResult, ExecutionStep, GridConfig, ManipulatorState, Sample,
};
use tracing::debug;

use crate::compress::optimize_symbols;
use crate::error::EngineError;
use crate::parse::parse;

/// Apply one command to a world snapshot, returning the next snapshot.
///
/// Movement clamps against the grid bounds; a blocked move is a silent
/// no-op. Pick-up takes the first sample in list order at the current cell,
/// and only when empty-handed. Release re-anchors the held sample at the
/// current cell and clears the hold. Everything else is untouched.
pub fn apply_command(
    symbol: CommandSymbol,
    manipulator: &ManipulatorState,
    samples: &[Sample],
    grid: GridConfig,
) -> (ManipulatorState, Vec<Sample>) {
    let mut state = manipulator.clone();
    let mut samples = samples.to_vec();

    match symbol {
        CommandSymbol::MoveLeft => {
            state.position.x = state.position.x.saturating_sub(1);
        }
        CommandSymbol::MoveRight => {
            let max_x = grid.width.saturating_sub(1);
            state.position.x = state.position.x.saturating_add(1).min(max_x);
        }
        CommandSymbol::MoveUp => {
            state.position.y = state.position.y.saturating_sub(1);
        }
        CommandSymbol::MoveDown => {
            let max_y = grid.height.saturating_sub(1);
            state.position.y = state.position.y.saturating_add(1).min(max_y);
        }
        CommandSymbol::PickUp => {
            // Only when empty-handed; first sample in list order wins the
            // tie when several share the cell.
            if state.holding.is_none() {
                if let Some(sample) = samples.iter().find(|s| s.position == state.position) {
                    state.holding = Some(sample.id.clone());
                }
            }
        }
        CommandSymbol::Release => {
            // The hold clears even if the sample list no longer contains
            // the held identifier.
            if let Some(held) = state.holding.take() {
                if let Some(sample) = samples.iter_mut().find(|s| s.id == held) {
                    sample.position = state.position;
                }
            }
        }
    }

    (state, samples)
}

/// Replay a typed command sequence against a world snapshot.
///
/// Records one [`ExecutionStep`] per command with full snapshots of the
/// manipulator and sample list. An empty sequence yields an empty trace
/// with the final state equal to the initial state.
pub fn simulate_symbols(
    symbols: &[CommandSymbol],
    initial_manipulator: &ManipulatorState,
    initial_samples: &[Sample],
    grid: GridConfig,
) -> ExecutionResult {
    let optimized = optimize_symbols(symbols);

    let mut manipulator = initial_manipulator.clone();
    let mut samples = initial_samples.to_vec();
    let mut steps = Vec::with_capacity(symbols.len());

    for (index, &symbol) in symbols.iter().enumerate() {
        let (next_manipulator, next_samples) = apply_command(symbol, &manipulator, &samples, grid);
        manipulator = next_manipulator;
        samples = next_samples;

        steps.push(ExecutionStep {
            index,
            symbol,
            manipulator: manipulator.clone(),
            samples: samples.clone(),
        });
    }

    debug!(
        command_count = symbols.len(),
        final_x = manipulator.position.x,
        final_y = manipulator.position.y,
        holding = ?manipulator.holding,
        "simulation complete"
    );

    ExecutionResult {
        steps,
        final_manipulator: manipulator,
        final_samples: samples,
        optimized,
    }
}

/// Validate and replay a raw command string against a world snapshot.
///
/// The full contract of the engine: whitespace is stripped, the whole
/// string validated, every command applied in order with a recorded step
/// after each, and the optimized rendering computed from the same input.
///
/// # Errors
///
/// Returns [`EngineError::EmptyInput`] or [`EngineError::InvalidSymbol`]
/// when validation fails. Simulation itself cannot fail.
pub fn simulate(
    raw: &str,
    initial_manipulator: &ManipulatorState,
    initial_samples: &[Sample],
    grid: GridConfig,
) -> Result<ExecutionResult, EngineError> {
    let symbols = parse(raw)?;
    Ok(simulate_symbols(
        &symbols,
        initial_manipulator,
        initial_samples,
        grid,
    ))
}
