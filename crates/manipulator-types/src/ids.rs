//! Identifier newtypes for the manipulator simulation.
//!
//! Samples carry stable string identifiers assigned sequentially at world
//! creation (`s0`, `s1`, ...). History entries use UUID v7 (time-ordered)
//! so an audit log sorts chronologically by identifier.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a sample on the grid.
///
/// Assigned once at world creation and never reused within a world. The
/// manipulator tracks its held sample by this identifier, so the value must
/// stay stable while the sample's position field goes stale during a hold.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SampleId(String);

impl SampleId {
    /// Create the identifier for the sample at the given creation index
    /// (`s0`, `s1`, ...).
    pub fn indexed(index: u32) -> Self {
        Self(format!("s{index}"))
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier and return the inner [`String`].
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for SampleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SampleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SampleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Unique identifier for a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HistoryEntryId(pub Uuid);

impl HistoryEntryId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for HistoryEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for HistoryEntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for HistoryEntryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ids_are_sequential() {
        assert_eq!(SampleId::indexed(0).as_str(), "s0");
        assert_eq!(SampleId::indexed(7).as_str(), "s7");
        assert_ne!(SampleId::indexed(0), SampleId::indexed(1));
    }

    #[test]
    fn sample_id_roundtrip_serde() {
        let original = SampleId::indexed(3);
        let json = serde_json::to_string(&original).ok();
        assert!(json.is_some());
        let restored: Result<SampleId, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(restored.ok(), Some(original));
    }

    #[test]
    fn history_id_display_matches_uuid() {
        let id = HistoryEntryId::new();
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }
}
