//! Roster text parsing and group filtering

use std::collections::BTreeSet;

use wf_core::{ALL_GROUPS, Entry, GENERAL_GROUP};

/// Parse raw roster text into structured entries.
///
/// Lines are trimmed and blank lines dropped. Each line splits at the
/// first `|` into name and group; a line with no delimiter (or an empty
/// group tag) lands in [`GENERAL_GROUP`].
pub fn parse(raw_text: &str) -> Vec<Entry> {
    raw_text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Entry {
    match line.split_once('|') {
        Some((name, group)) => {
            let group = group.trim();
            Entry::new(
                name.trim(),
                if group.is_empty() { GENERAL_GROUP } else { group },
                line,
            )
        }
        None => Entry::new(line, GENERAL_GROUP, line),
    }
}

/// Distinct group names, sorted, prefixed with the [`ALL_GROUPS`] sentinel.
pub fn distinct_groups(entries: &[Entry]) -> Vec<String> {
    let distinct: BTreeSet<&str> = entries.iter().map(|e| e.group.as_str()).collect();
    std::iter::once(ALL_GROUPS.to_string())
        .chain(distinct.into_iter().map(String::from))
        .collect()
}

/// Entries visible under `selected_group`. Identity for the sentinel,
/// exact match otherwise.
pub fn filter(entries: &[Entry], selected_group: &str) -> Vec<Entry> {
    if selected_group == ALL_GROUPS {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|e| e.group == selected_group)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_groups() {
        let entries = parse("Ann | X\nBob | Y\nCara");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "Ann");
        assert_eq!(entries[0].group, "X");
        assert_eq!(entries[0].source_line, "Ann | X");
        assert_eq!(entries[2].name, "Cara");
        assert_eq!(entries[2].group, GENERAL_GROUP);
    }

    #[test]
    fn test_parse_drops_blank_lines() {
        let entries = parse("\n  \nAnn\n\t\nBob\n");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_parse_splits_on_first_delimiter() {
        let entries = parse("Ann | HR | East");
        assert_eq!(entries[0].name, "Ann");
        assert_eq!(entries[0].group, "HR | East");
    }

    #[test]
    fn test_parse_empty_group_degrades() {
        let entries = parse("Ann |\nBob |   ");
        assert_eq!(entries[0].group, GENERAL_GROUP);
        assert_eq!(entries[1].group, GENERAL_GROUP);
    }

    #[test]
    fn test_parse_idempotence() {
        let text = "Ann | X\n\n  Bob|Y  \nCara\n| odd";
        let once = parse(text);
        let serialized: Vec<&str> = once.iter().map(|e| e.source_line.as_str()).collect();
        let twice = parse(&serialized.join("\n"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_distinct_groups_sorted_with_sentinel() {
        let entries = parse("a | Z\nb | A\nc | Z\nd");
        let groups = distinct_groups(&entries);
        assert_eq!(groups, vec![ALL_GROUPS, "A", GENERAL_GROUP, "Z"]);
    }

    #[test]
    fn test_filter_sentinel_is_identity() {
        let entries = parse("Ann | X\nBob | Y\nCara | X");
        assert_eq!(filter(&entries, ALL_GROUPS), entries);
    }

    #[test]
    fn test_filter_exact_match() {
        let entries = parse("Ann | X\nBob | Y\nCara | X");
        let active = filter(&entries, "X");
        let names: Vec<&str> = active.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Cara"]);
        assert!(filter(&entries, "Nowhere").is_empty());
    }
}
