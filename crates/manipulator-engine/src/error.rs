//! Error types for the `manipulator-engine` crate.
//!
//! Validation has exactly two failure modes; everything else in the engine
//! (boundary clamps, no-op pickup and release, zero-command traces) is a
//! defined no-op and never surfaces as an error.

/// Errors that can occur during command processing or world generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The command string contains nothing after whitespace removal.
    #[error("command string is empty")]
    EmptyInput,

    /// The command string contains a character outside the six-symbol
    /// alphabet.
    #[error("illegal command symbol: {symbol:?}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
    },

    /// An optimized notation string could not be expanded back into a
    /// command sequence (unbalanced parentheses, dangling repeat count,
    /// zero repeat count, or an empty group).
    #[error("malformed optimized notation")]
    MalformedNotation,

    /// The requested sample count does not fit on the grid alongside the
    /// manipulator's origin cell.
    #[error("cannot place {requested} samples on a grid with {capacity} free cells")]
    InsufficientSpace {
        /// How many samples were requested.
        requested: u32,
        /// How many cells are free for samples (grid cells minus origin).
        capacity: u64,
    },
}
