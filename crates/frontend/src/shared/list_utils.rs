//! Generic helpers for the list screens (filtering, sorting, header chrome).

use std::cmp::Ordering;

/// Trait for row types that support text filtering.
pub trait Searchable {
    /// Whether the row matches the filter text.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait for row types that support sorting by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort rows by the given column.
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Keep only the rows matching the filter text. An empty filter keeps
/// everything.
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field != field {
        ""
    } else if ascending {
        "▲"
    } else {
        "▼"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        model: String,
        seats: i32,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.model.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "model" => self.model.cmp(&other.model),
                "seats" => self.seats.cmp(&other.seats),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                model: "B787".to_string(),
                seats: 280,
            },
            Row {
                model: "A320".to_string(),
                seats: 180,
            },
            Row {
                model: "A350".to_string(),
                seats: 325,
            },
        ]
    }

    #[test]
    fn sorts_ascending_and_descending() {
        let mut items = rows();
        sort_list(&mut items, "seats", true);
        assert_eq!(
            items.iter().map(|r| r.seats).collect::<Vec<_>>(),
            vec![180, 280, 325]
        );

        sort_list(&mut items, "seats", false);
        assert_eq!(
            items.iter().map(|r| r.seats).collect::<Vec<_>>(),
            vec![325, 280, 180]
        );
    }

    #[test]
    fn unknown_field_keeps_order() {
        let mut items = rows();
        sort_list(&mut items, "nope", true);
        assert_eq!(items, rows());
    }

    #[test]
    fn filters_case_insensitively() {
        let filtered = filter_list(rows(), "a3");
        assert_eq!(
            filtered.iter().map(|r| r.model.as_str()).collect::<Vec<_>>(),
            vec!["A320", "A350"]
        );
    }

    #[test]
    fn blank_filter_keeps_everything() {
        assert_eq!(filter_list(rows(), "  ").len(), 3);
    }
}
