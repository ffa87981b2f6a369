//! The command alphabet for the manipulator simulation.
//!
//! Exactly six commands exist. The set is closed by design: the simulator
//! matches exhaustively over [`CommandSymbol`], so adding a variant is a
//! compile-time event across the whole workspace, never a silent runtime
//! fallthrough.

use serde::{Deserialize, Serialize};

/// A single command in the manipulator control language.
///
/// Each symbol maps to one world-mutating action. The textual glyphs
/// (`Л П В Н О Б`) are a display concern handled at the parse/render
/// boundary; everything past that boundary works on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CommandSymbol {
    /// Move one cell left (`Л`). Clamped at column 0.
    MoveLeft,
    /// Move one cell right (`П`). Clamped at the last column.
    MoveRight,
    /// Move one cell up (`В`). Clamped at row 0.
    MoveUp,
    /// Move one cell down (`Н`). Clamped at the last row.
    MoveDown,
    /// Pick up a sample at the current cell (`О`). No-op when already
    /// holding one or when the cell is empty.
    PickUp,
    /// Release the held sample at the current cell (`Б`). No-op when
    /// holding nothing.
    Release,
}

impl CommandSymbol {
    /// All six symbols, in canonical alphabet order.
    pub const ALL: [Self; 6] = [
        Self::MoveLeft,
        Self::MoveRight,
        Self::MoveUp,
        Self::MoveDown,
        Self::PickUp,
        Self::Release,
    ];

    /// Return the display glyph for this symbol.
    pub const fn glyph(self) -> char {
        match self {
            Self::MoveLeft => 'Л',
            Self::MoveRight => 'П',
            Self::MoveUp => 'В',
            Self::MoveDown => 'Н',
            Self::PickUp => 'О',
            Self::Release => 'Б',
        }
    }

    /// Parse a display glyph into a symbol.
    ///
    /// Returns `None` for any character outside the six-glyph alphabet.
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            'Л' => Some(Self::MoveLeft),
            'П' => Some(Self::MoveRight),
            'В' => Some(Self::MoveUp),
            'Н' => Some(Self::MoveDown),
            'О' => Some(Self::PickUp),
            'Б' => Some(Self::Release),
            _ => None,
        }
    }
}

impl core::fmt::Display for CommandSymbol {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_roundtrip_for_all_symbols() {
        for symbol in CommandSymbol::ALL {
            assert_eq!(CommandSymbol::from_glyph(symbol.glyph()), Some(symbol));
        }
    }

    #[test]
    fn foreign_glyphs_rejected() {
        for ch in ['X', 'л', ' ', '4', '('] {
            assert_eq!(CommandSymbol::from_glyph(ch), None);
        }
    }

    #[test]
    fn display_matches_glyph() {
        assert_eq!(CommandSymbol::MoveLeft.to_string(), "Л");
        assert_eq!(CommandSymbol::Release.to_string(), "Б");
    }

    #[test]
    fn alphabet_has_six_distinct_glyphs() {
        let glyphs: std::collections::BTreeSet<char> =
            CommandSymbol::ALL.iter().map(|s| s.glyph()).collect();
        assert_eq!(glyphs.len(), 6);
    }
}
