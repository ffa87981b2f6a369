//! Command string normalization and validation.
//!
//! The whole string is validated before any use: either every character
//! (after whitespace removal) is one of the six legal glyphs, or the input
//! is rejected. There is no partial acceptance.

use manipulator_types::CommandSymbol;

use crate::error::EngineError;

/// Strip all whitespace from a raw command string.
///
/// Whitespace is incidental formatting in command input (spaces between
/// groups, trailing newlines) and carries no meaning.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|ch| !ch.is_whitespace()).collect()
}

/// Validate a raw command string and return its normalized form.
///
/// # Errors
///
/// Returns [`EngineError::EmptyInput`] if nothing remains after whitespace
/// removal, or [`EngineError::InvalidSymbol`] for the first character
/// outside the command alphabet.
pub fn validate(raw: &str) -> Result<String, EngineError> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Err(EngineError::EmptyInput);
    }
    if let Some(symbol) = normalized
        .chars()
        .find(|&ch| CommandSymbol::from_glyph(ch).is_none())
    {
        return Err(EngineError::InvalidSymbol { symbol });
    }
    Ok(normalized)
}

/// Validate a raw command string and return the typed command sequence.
///
/// Equivalent to [`validate`] followed by glyph-to-symbol conversion.
///
/// # Errors
///
/// Returns [`EngineError::EmptyInput`] or [`EngineError::InvalidSymbol`]
/// under the same conditions as [`validate`].
pub fn parse(raw: &str) -> Result<Vec<CommandSymbol>, EngineError> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Err(EngineError::EmptyInput);
    }
    normalized
        .chars()
        .map(|ch| CommandSymbol::from_glyph(ch).ok_or(EngineError::InvalidSymbol { symbol: ch }))
        .collect()
}
