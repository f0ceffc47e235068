//! Winner records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entry::GENERAL_GROUP;

/// A recorded winner. Immutable once appended to the history ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Winner {
    /// Unique id
    pub id: Uuid,
    /// Winning entry name
    pub name: String,
    /// Prize category the spin was run under
    pub category: String,
    /// Group the entry belonged to at spin time, if still known
    pub group: Option<String>,
    /// Append time
    pub timestamp: DateTime<Utc>,
}

impl Winner {
    /// Stamp a fresh winner record.
    ///
    /// An empty category label falls back to [`GENERAL_GROUP`].
    pub fn record(name: impl Into<String>, category: &str, group: Option<String>) -> Self {
        let category = if category.trim().is_empty() {
            GENERAL_GROUP.to_string()
        } else {
            category.to_string()
        };
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            group,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_stamps_unique_ids() {
        let a = Winner::record("Ann", "Round 1", Some("HR".into()));
        let b = Winner::record("Ann", "Round 1", Some("HR".into()));
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Ann");
        assert_eq!(a.category, "Round 1");
    }

    #[test]
    fn test_record_empty_category_falls_back() {
        let w = Winner::record("Bob", "", None);
        assert_eq!(w.category, GENERAL_GROUP);

        let blank = Winner::record("Bob", "   ", None);
        assert_eq!(blank.category, GENERAL_GROUP);
    }
}
