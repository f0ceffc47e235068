//! Roster entry types

use serde::{Deserialize, Serialize};

/// Group assigned to entries that carry no explicit group tag.
pub const GENERAL_GROUP: &str = "General";

/// Sentinel group name selecting every group at once.
pub const ALL_GROUPS: &str = "All Groups";

/// One wheel entry parsed from a roster line.
///
/// The original line is retained verbatim (after trimming) so that
/// winner removal can drop the exact line it came from instead of a
/// reconstructed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Display name (text before the first `|`)
    pub name: String,
    /// Group tag (text after the first `|`, or [`GENERAL_GROUP`])
    pub group: String,
    /// The original unparsed line
    pub source_line: String,
}

impl Entry {
    /// Create an entry with an explicit group.
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            source_line: source_line.into(),
        }
    }

    /// Does this entry carry the default group?
    pub fn is_general(&self) -> bool {
        self.group == GENERAL_GROUP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_general() {
        let entry = Entry::new("Ann", GENERAL_GROUP, "Ann");
        assert!(entry.is_general());

        let tagged = Entry::new("Ann", "HR", "Ann | HR");
        assert!(!tagged.is_general());
    }
}
