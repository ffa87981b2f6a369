//! Repeating-block compression of command strings.
//!
//! The optimizer looks for a contiguous block of runs repeated two or more
//! times and rewrites it as `<repeats>(<pattern>)`, so `ЛПЛПЛПЛП` becomes
//! `4(ЛП)`. The scan order is a fixed policy: block length ascending, start
//! index ascending, and the FIRST qualifying block wins. This is
//! deliberately not exhaustive-optimal; the order is part of the contract
//! and must not be "improved", or outputs stop matching.

use core::fmt::Write as _;

use manipulator_types::{CommandSymbol, Run};
use tracing::debug;

use crate::error::EngineError;
use crate::parse::{normalize, parse};
use crate::runs::{render_runs, to_runs};

/// Minimum number of runs before block detection is worth attempting.
/// Below this, no rewrite can beat the plain run-length rendering.
const MIN_RUNS_FOR_BLOCKS: usize = 4;

/// Rewrite the first maximally-repeated contiguous block of runs using the
/// `<repeats>(<pattern>)` notation, or fall back to the plain run-length
/// rendering when no block repeats.
///
/// The repeat count of a found block is extended greedily over subsequent
/// adjacent copies before the rewrite is built. Empty prefix and suffix
/// segments are omitted from the output.
pub fn compress_repeating_block(runs: &[Run]) -> String {
    let n = runs.len();
    if n < MIN_RUNS_FOR_BLOCKS {
        return render_runs(runs);
    }

    for block_len in 1..=n / 2 {
        let last_start = n.saturating_sub(block_len.saturating_mul(2));
        for start in 0..=last_start {
            let block_end = start.saturating_add(block_len);
            let Some(pattern) = runs.get(start..block_end) else {
                continue;
            };
            let Some(next) = runs.get(block_end..block_end.saturating_add(block_len)) else {
                continue;
            };
            if pattern != next {
                continue;
            }

            // Extend the repeat count over further adjacent copies.
            let mut repeats: usize = 2;
            let mut tail = block_end.saturating_add(block_len);
            while let Some(candidate) = runs.get(tail..tail.saturating_add(block_len)) {
                if candidate != pattern {
                    break;
                }
                repeats = repeats.saturating_add(1);
                tail = tail.saturating_add(block_len);
            }

            let prefix = runs.get(..start).unwrap_or(&[]);
            let suffix = runs.get(tail..).unwrap_or(&[]);

            let mut out = render_runs(prefix);
            // Writing to a String cannot fail.
            let _ = write!(out, "{repeats}({})", render_runs(pattern));
            out.push_str(&render_runs(suffix));
            return out;
        }
    }

    render_runs(runs)
}

/// Produce the shortest known rendering of a command sequence.
///
/// Returns whichever of the plain run-length rendering and the
/// block-compressed rewrite is strictly shorter in characters; ties favor
/// the run-length form.
pub fn optimize_symbols(symbols: &[CommandSymbol]) -> String {
    let runs = to_runs(symbols);
    let rle = render_runs(&runs);
    let with_blocks = compress_repeating_block(&runs);

    let chosen = if with_blocks.chars().count() < rle.chars().count() {
        with_blocks
    } else {
        rle
    };
    debug!(
        command_count = symbols.len(),
        optimized_len = chosen.chars().count(),
        "command string optimized"
    );
    chosen
}

/// Optimize a raw command string.
///
/// Whitespace is stripped first; an input that is empty after stripping
/// yields an empty output rather than an error.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSymbol`] if the stripped input contains a
/// character outside the command alphabet.
pub fn optimize(raw: &str) -> Result<String, EngineError> {
    if normalize(raw).is_empty() {
        return Ok(String::new());
    }
    let symbols = parse(raw)?;
    Ok(optimize_symbols(&symbols))
}
