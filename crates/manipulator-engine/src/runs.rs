//! Run-length encoding of command sequences.
//!
//! A run is a maximal contiguous repetition of one symbol. The rendered
//! form writes a count-1 run as the bare glyph and a longer run as
//! `<count><glyph>`, so `ЛЛЛЛВ` renders as `4ЛВ`. [`expand`] is the exact
//! inverse and also understands the block notation `<repeats>(<pattern>)`
//! produced by the optimizer.

use std::iter::Peekable;
use std::str::Chars;

use manipulator_types::{CommandSymbol, Run};

use crate::error::EngineError;

/// Coalesce a command sequence into ordered runs.
///
/// Scans left to right; consecutive identical symbols become one run with
/// their count. The empty sequence yields no runs.
pub fn to_runs(symbols: &[CommandSymbol]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for &symbol in symbols {
        match runs.last_mut() {
            Some(run) if run.symbol == symbol => {
                run.count = run.count.saturating_add(1);
            }
            _ => runs.push(Run::new(symbol, 1)),
        }
    }
    runs
}

/// Render runs back to their textual form.
///
/// Concatenating the rendered runs reconstructs a string that re-expands
/// to the original command sequence.
pub fn render_runs(runs: &[Run]) -> String {
    use core::fmt::Write as _;

    let mut out = String::new();
    for run in runs {
        if run.count > 1 {
            // Writing to a String cannot fail.
            let _ = write!(out, "{}", run.count);
        }
        out.push(run.symbol.glyph());
    }
    out
}

/// Expand a rendered notation string back into the flat command sequence.
///
/// Understands both the run-length form (`4Л`, bare glyphs) and the block
/// form (`3(ЛП)`). Whitespace is not tolerated here: this parses the
/// engine's own output, not user input.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSymbol`] for characters outside the
/// alphabet and [`EngineError::MalformedNotation`] for structural faults
/// (unbalanced parentheses, dangling or zero counts, empty groups).
pub fn expand(notation: &str) -> Result<Vec<CommandSymbol>, EngineError> {
    let mut chars = notation.chars().peekable();
    expand_sequence(&mut chars, false)
}

/// Expand one sequence of items until end of input or, when `nested`, a
/// closing parenthesis (left unconsumed for the caller).
fn expand_sequence(
    chars: &mut Peekable<Chars<'_>>,
    nested: bool,
) -> Result<Vec<CommandSymbol>, EngineError> {
    let mut out = Vec::new();

    while let Some(&ch) = chars.peek() {
        if ch == ')' {
            if nested {
                return Ok(out);
            }
            return Err(EngineError::MalformedNotation);
        }

        // Optional decimal repeat count prefix.
        let mut count: u32 = 0;
        let mut has_count = false;
        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
            count = count.saturating_mul(10).saturating_add(digit);
            has_count = true;
            chars.next();
        }
        if has_count && count == 0 {
            return Err(EngineError::MalformedNotation);
        }
        let repeats = if has_count { count } else { 1 };

        match chars.next() {
            Some('(') => {
                let block = expand_sequence(chars, true)?;
                if chars.next() != Some(')') || block.is_empty() {
                    return Err(EngineError::MalformedNotation);
                }
                for _ in 0..repeats {
                    out.extend_from_slice(&block);
                }
            }
            Some(glyph) => {
                let symbol = CommandSymbol::from_glyph(glyph)
                    .ok_or(EngineError::InvalidSymbol { symbol: glyph })?;
                for _ in 0..repeats {
                    out.push(symbol);
                }
            }
            // A count with nothing after it.
            None => return Err(EngineError::MalformedNotation),
        }
    }

    if nested {
        // Ran out of input inside a group.
        return Err(EngineError::MalformedNotation);
    }
    Ok(out)
}
