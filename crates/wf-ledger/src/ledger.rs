//! Append-only winner history

use std::collections::HashMap;

use wf_core::{GENERAL_GROUP, Winner};

/// Append-only record of past winners.
///
/// Category grouping is a derived view over the sequence; the underlying
/// order is arrival order and is only ever appended to or cleared.
#[derive(Debug, Default)]
pub struct HistoryLedger {
    winners: Vec<Winner>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a winner batch under `category`, preserving batch order.
    ///
    /// Each name's group is resolved through `group_of`; a name whose
    /// group is no longer known falls back to [`GENERAL_GROUP`] rather
    /// than failing.
    pub fn append<F>(&mut self, names: &[String], category: &str, group_of: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for name in names {
            let group = group_of(name).unwrap_or_else(|| GENERAL_GROUP.to_string());
            self.winners.push(Winner::record(name.clone(), category, Some(group)));
        }
        log::debug!(
            "ledger: appended {} winner(s) under '{category}', {} total",
            names.len(),
            self.winners.len()
        );
    }

    /// All winners in arrival order.
    pub fn winners(&self) -> &[Winner] {
        &self.winners
    }

    pub fn len(&self) -> usize {
        self.winners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
    }

    /// Winners grouped by category, categories in first-appearance order.
    ///
    /// Display concerns like most-recent-first ordering belong to the
    /// caller; the slices here keep arrival order.
    pub fn by_category(&self) -> Vec<(&str, Vec<&Winner>)> {
        let mut order: Vec<&str> = Vec::new();
        let mut grouped: HashMap<&str, Vec<&Winner>> = HashMap::new();
        for winner in &self.winners {
            let slot = grouped.entry(winner.category.as_str()).or_default();
            if slot.is_empty() {
                order.push(&winner.category);
            }
            slot.push(winner);
        }
        order
            .into_iter()
            .map(|category| {
                let winners = grouped.remove(category).unwrap_or_default();
                (category, winners)
            })
            .collect()
    }

    /// Forget every recorded winner.
    pub fn clear(&mut self) {
        self.winners.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "Ann" => Some("HR".to_string()),
            "Bob" => Some("Ops".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_append_preserves_arrival_order() {
        let mut ledger = HistoryLedger::new();
        ledger.append(
            &["Ann".to_string(), "Bob".to_string()],
            "Round 1",
            lookup,
        );
        ledger.append(&["Cara".to_string()], "Round 2", lookup);

        assert_eq!(ledger.len(), 3);
        let names: Vec<&str> = ledger.winners().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bob", "Cara"]);
    }

    #[test]
    fn test_append_resolves_groups_with_fallback() {
        let mut ledger = HistoryLedger::new();
        ledger.append(
            &["Ann".to_string(), "Ghost".to_string()],
            "Round 1",
            lookup,
        );

        assert_eq!(ledger.winners()[0].group.as_deref(), Some("HR"));
        assert_eq!(ledger.winners()[1].group.as_deref(), Some(GENERAL_GROUP));
    }

    #[test]
    fn test_ids_are_unique_across_appends() {
        let mut ledger = HistoryLedger::new();
        ledger.append(&["Ann".to_string()], "Round 1", lookup);
        ledger.append(&["Ann".to_string()], "Round 1", lookup);

        assert_ne!(ledger.winners()[0].id, ledger.winners()[1].id);
    }

    #[test]
    fn test_by_category_first_appearance_order() {
        let mut ledger = HistoryLedger::new();
        ledger.append(&["Ann".to_string()], "Door Prize", lookup);
        ledger.append(&["Bob".to_string()], "Grand Prize", lookup);
        ledger.append(&["Cara".to_string()], "Door Prize", lookup);

        let view = ledger.by_category();
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].0, "Door Prize");
        assert_eq!(view[0].1.len(), 2);
        assert_eq!(view[1].0, "Grand Prize");
        assert_eq!(view[1].1.len(), 1);
    }

    #[test]
    fn test_clear_empties_the_ledger() {
        let mut ledger = HistoryLedger::new();
        ledger.append(&["Ann".to_string()], "Round 1", lookup);
        assert!(!ledger.is_empty());

        ledger.clear();
        assert!(ledger.is_empty());
        assert!(ledger.by_category().is_empty());
    }
}
