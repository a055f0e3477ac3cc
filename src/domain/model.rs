use serde::{Deserialize, Serialize};

/// A named ordered list of house-number labels. Order is meaningful: numbers
/// are generated ascending, and variants sit directly after their base number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub name: String,
    pub numbers: Vec<String>,
}

/// The full named collection of streets being canvassed. Streets are addressed
/// by name (first match wins); lookups that miss are silent no-ops so a stray
/// action never takes the session down.
#[derive(Debug, Clone, Default)]
pub struct Territory {
    name: String,
    streets: Vec<Street>,
}

impl Territory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            streets: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn streets(&self) -> &[Street] {
        &self.streets
    }

    /// Appends a street whose numbers run `"1".."count"`. A non-positive
    /// count yields an empty list; no validation happens at this level.
    pub fn add_street(&mut self, name: &str, count: i64) {
        let numbers = (1..=count).map(|n| n.to_string()).collect();
        self.streets.push(Street {
            name: name.to_string(),
            numbers,
        });
        tracing::debug!(street = name, count, "street added");
    }

    /// Inserts the next lettered variant directly after `number`. No-op when
    /// the street is unknown or the variant sequence is already at `c`.
    ///
    /// A `number` that is not present in the street degenerates to inserting
    /// at the front of the list (not-found position maps to index 0). Callers
    /// only pass labels they just rendered, so the case stays unreachable
    /// through the session.
    pub fn add_variant(&mut self, street_name: &str, number: &str) {
        let Some(street) = self.streets.iter_mut().find(|s| s.name == street_name) else {
            tracing::debug!(street = street_name, "add_variant: unknown street, ignoring");
            return;
        };
        let Some(label) = next_variant_label(number) else {
            tracing::debug!(number, "add_variant: sequence exhausted, ignoring");
            return;
        };

        let insert_at = street
            .numbers
            .iter()
            .position(|n| n == number)
            .map_or(0, |i| i + 1);
        street.numbers.insert(insert_at, label);
    }

    /// Removes every entry equal to `number` from the street. Variants of a
    /// removed base number stay; nothing is renumbered.
    pub fn remove_number(&mut self, street_name: &str, number: &str) {
        let Some(street) = self.streets.iter_mut().find(|s| s.name == street_name) else {
            tracing::debug!(street = street_name, "remove_number: unknown street, ignoring");
            return;
        };
        street.numbers.retain(|n| n != number);
    }
}

/// The label the next variant of `number` would get, or `None` once the
/// sequence has reached `c`: `12` -> `12a` -> `12b` -> `12c`.
pub fn next_variant_label(number: &str) -> Option<String> {
    if let Some(stem) = number.strip_suffix('a') {
        Some(format!("{stem}b"))
    } else if let Some(stem) = number.strip_suffix('b') {
        Some(format!("{stem}c"))
    } else if number.ends_with('c') {
        None
    } else {
        Some(format!("{number}a"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_variant_label_progression() {
        assert_eq!(next_variant_label("12").as_deref(), Some("12a"));
        assert_eq!(next_variant_label("12a").as_deref(), Some("12b"));
        assert_eq!(next_variant_label("12b").as_deref(), Some("12c"));
        assert_eq!(next_variant_label("12c"), None);
    }

    #[test]
    fn test_add_street_generates_numbers() {
        let mut territory = Territory::default();
        territory.add_street("Main", 3);
        assert_eq!(territory.streets()[0].numbers, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_add_street_non_positive_count() {
        let mut territory = Territory::default();
        territory.add_street("Main", 0);
        assert!(territory.streets()[0].numbers.is_empty());
        territory.add_street("Side", -4);
        assert!(territory.streets()[1].numbers.is_empty());
    }

    #[test]
    fn test_variant_inserted_after_base() {
        let mut territory = Territory::default();
        territory.add_street("S", 3);
        territory.add_variant("S", "2");
        territory.add_variant("S", "2a");
        territory.add_variant("S", "2b");
        assert_eq!(
            territory.streets()[0].numbers,
            vec!["1", "2", "2a", "2b", "2c", "3"]
        );

        // Fourth variant is a no-op.
        territory.add_variant("S", "2c");
        assert_eq!(
            territory.streets()[0].numbers,
            vec!["1", "2", "2a", "2b", "2c", "3"]
        );
    }

    #[test]
    fn test_add_variant_unknown_street_is_noop() {
        let mut territory = Territory::default();
        territory.add_street("S", 2);
        territory.add_variant("T", "1");
        assert_eq!(territory.streets()[0].numbers, vec!["1", "2"]);
    }

    #[test]
    fn test_add_variant_missing_number_inserts_at_front() {
        // Not-found position maps to index 0.
        let mut territory = Territory::default();
        territory.add_street("S", 2);
        territory.add_variant("S", "9");
        assert_eq!(territory.streets()[0].numbers, vec!["9a", "1", "2"]);
    }

    #[test]
    fn test_remove_number_leaves_siblings() {
        let mut territory = Territory::default();
        territory.add_street("S", 3);
        territory.add_variant("S", "2");
        territory.add_variant("S", "2a");
        territory.remove_number("S", "2a");
        assert_eq!(territory.streets()[0].numbers, vec!["1", "2", "2b", "3"]);
    }

    #[test]
    fn test_remove_number_unknown_street_is_noop() {
        let mut territory = Territory::default();
        territory.add_street("S", 2);
        territory.remove_number("T", "1");
        assert_eq!(territory.streets()[0].numbers, vec!["1", "2"]);
    }

    #[test]
    fn test_first_match_wins_for_duplicate_names() {
        let mut territory = Territory::default();
        territory.add_street("S", 1);
        territory.add_street("S", 2);
        territory.add_variant("S", "1");
        assert_eq!(territory.streets()[0].numbers, vec!["1", "1a"]);
        assert_eq!(territory.streets()[1].numbers, vec!["1", "2"]);
    }
}
