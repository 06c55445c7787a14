use serde::{Deserialize, Serialize};

use crate::domain::Champion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Icon shown next to the "Sort by name" toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIcon {
    AlphaUp,
    AlphaDownAlt,
}

impl SortIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            SortIcon::AlphaUp => "A→Z ⬆",
            SortIcon::AlphaDownAlt => "Z→A ⬇",
        }
    }
}

/// Requested ordering of the roster. `order: None` means the roster is shown
/// in source order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortDirection>,
}

impl SortOrder {
    pub fn ascending() -> Self {
        Self {
            order: Some(SortDirection::Asc),
        }
    }

    pub fn descending() -> Self {
        Self {
            order: Some(SortDirection::Desc),
        }
    }

    pub fn icon(&self) -> Option<SortIcon> {
        self.order.map(|direction| match direction {
            SortDirection::Asc => SortIcon::AlphaUp,
            SortDirection::Desc => SortIcon::AlphaDownAlt,
        })
    }

    /// Next order for the toggle: empty -> asc -> desc -> asc.
    pub fn toggled(self) -> Self {
        match self.order {
            None | Some(SortDirection::Desc) => Self::ascending(),
            Some(SortDirection::Asc) => Self::descending(),
        }
    }

    /// Sorts by case-insensitive name, ties broken by id. An empty order
    /// leaves the slice untouched.
    pub fn apply(&self, champions: &mut [Champion]) {
        let Some(direction) = self.order else {
            return;
        };

        champions.sort_by_cached_key(|c| (c.name.to_lowercase(), c.id));
        if direction == SortDirection::Desc {
            champions.reverse();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(champions: &[Champion]) -> Vec<&str> {
        champions.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn icon_reflects_order() {
        assert_eq!(SortOrder::ascending().icon(), Some(SortIcon::AlphaUp));
        assert_eq!(SortOrder::descending().icon(), Some(SortIcon::AlphaDownAlt));
        assert_eq!(SortOrder::default().icon(), None);
    }

    #[test]
    fn toggle_cycles_from_empty_to_ascending() {
        let order = SortOrder::default().toggled();
        assert_eq!(order, SortOrder::ascending());
        assert_eq!(order.toggled(), SortOrder::descending());
        assert_eq!(order.toggled().toggled(), SortOrder::ascending());
    }

    #[test]
    fn sorts_case_insensitively_in_both_directions() {
        let mut roster = vec![
            Champion::new(1, "zed"),
            Champion::new(2, "Ahri"),
            Champion::new(3, "bard"),
        ];

        SortOrder::ascending().apply(&mut roster);
        assert_eq!(names(&roster), vec!["Ahri", "bard", "zed"]);

        SortOrder::descending().apply(&mut roster);
        assert_eq!(names(&roster), vec!["zed", "bard", "Ahri"]);
    }

    #[test]
    fn equal_names_are_ordered_by_id() {
        let mut roster = vec![
            Champion::new(3, "Nunu"),
            Champion::new(1, "nunu"),
            Champion::new(2, "Annie"),
        ];

        SortOrder::ascending().apply(&mut roster);
        let ids: Vec<i64> = roster.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![2, 1, 3]);

        SortOrder::descending().apply(&mut roster);
        let ids: Vec<i64> = roster.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn empty_order_keeps_source_order() {
        let mut roster = vec![Champion::new(1, "Zed"), Champion::new(2, "Ahri")];
        SortOrder::default().apply(&mut roster);
        assert_eq!(names(&roster), vec!["Zed", "Ahri"]);
    }

    #[test]
    fn serializes_direction_in_lowercase() {
        let json = serde_json::to_string(&SortOrder::descending()).expect("json");
        assert_eq!(json, r#"{"order":"desc"}"#);
        let empty: SortOrder = serde_json::from_str("{}").expect("empty");
        assert_eq!(empty, SortOrder::default());
    }
}
