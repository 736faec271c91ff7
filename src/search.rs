//! Free-text filtering for the list pages.

use serde::Deserialize;

/// `?q=` of the list pages.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    pub fn query(&self) -> Option<&str> {
        normalize_query(self.q.as_deref())
    }
}

/// Case-insensitive substring match. An empty query matches everything.
pub fn contains_ci(field: &str, query: &str) -> bool {
    field.to_lowercase().contains(&query.to_lowercase())
}

/// Normalizes the `q` parameter: missing or blank means "no filter".
pub fn normalize_query(q: Option<&str>) -> Option<&str> {
    q.map(str::trim).filter(|q| !q.is_empty())
}

/// Keeps the items whose searchable field contains `query`.
pub fn filter_by<T, F>(items: Vec<T>, query: Option<&str>, field: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    match normalize_query(query) {
        None => items,
        Some(query) => items
            .into_iter()
            .filter(|item| contains_ci(field(item), query))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_substrings_regardless_of_case() {
        assert!(contains_ci("Volkswagen", "W"));
        assert!(contains_ci("BMW", "w"));
        assert!(contains_ci("johnny", "JO"));
        assert!(!contains_ci("Audi", "w"));
    }

    #[test]
    fn substring_is_not_prefix_only() {
        assert!(contains_ci("Q7", "7"));
        assert!(contains_ci("alice", "lic"));
    }

    #[test]
    fn blank_query_is_no_filter() {
        assert_eq!(normalize_query(None), None);
        assert_eq!(normalize_query(Some("   ")), None);
        assert_eq!(normalize_query(Some(" jo ")), Some("jo"));
    }

    #[test]
    fn filter_keeps_only_matching_usernames() {
        let users = vec!["john", "johnny", "alice", "jo"];
        let found = filter_by(users, Some("jo"), |u| *u);
        assert_eq!(found, vec!["john", "johnny", "jo"]);
    }

    #[test]
    fn filter_with_no_matches_is_empty_not_error() {
        let models = vec!["A4".to_string(), "A6".to_string()];
        assert!(filter_by(models, Some("zz"), |m| m.as_str()).is_empty());
    }
}
