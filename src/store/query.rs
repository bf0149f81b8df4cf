use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::note::Note;

/// Synthetic category that matches every note. Never stored.
pub const ALL_CATEGORY: &str = "All";

/// View filter over the note collection. The three clauses AND together.
#[derive(Debug, Clone)]
pub struct NoteFilter {
    /// Case-insensitive substring matched against title, content, and tags.
    pub query: String,
    /// Exact category name, or [`ALL_CATEGORY`] to keep everything.
    pub category: String,
    /// Inclusive lower bound on `created_at`, from the start of this day.
    pub date_start: Option<NaiveDate>,
    /// Inclusive upper bound on `created_at`, to the end of this day.
    pub date_end: Option<NaiveDate>,
}

impl Default for NoteFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORY.to_string(),
            date_start: None,
            date_end: None,
        }
    }
}

impl NoteFilter {
    pub fn matches(&self, note: &Note) -> bool {
        if self.category != ALL_CATEGORY && note.category != self.category {
            return false;
        }

        if let Some(start) = self.date_start {
            let start = start.and_hms_opt(0, 0, 0).unwrap().and_utc();
            if note.created_at < start {
                return false;
            }
        }
        if let Some(end) = self.date_end {
            let end = end.and_hms_milli_opt(23, 59, 59, 999).unwrap().and_utc();
            if note.created_at > end {
                return false;
            }
        }

        if self.query.is_empty() {
            return true;
        }
        let q = self.query.to_lowercase();
        note.title.to_lowercase().contains(&q)
            || note.content.to_lowercase().contains(&q)
            || note.tags.iter().any(|t| t.to_lowercase().contains(&q))
    }
}

/// Display order: pinned notes first; within a pinned group ascending
/// `order_index` (notes without one sort last); ties fall back to newest
/// `updated_at` first.
pub fn compare_notes(a: &Note, b: &Note) -> Ordering {
    match (a.pinned, b.pinned) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    let ai = a.order_index.unwrap_or(i64::MAX);
    let bi = b.order_index.unwrap_or(i64::MAX);
    ai.cmp(&bi).then_with(|| b.updated_at.cmp(&a.updated_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn note(title: &str) -> Note {
        Note::new(title.to_string(), String::new(), 0)
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let filter = NoteFilter::default();
        let mut n = note("anything");
        n.category = "Work".to_string();
        assert!(filter.matches(&n));
    }

    #[test]
    fn test_category_filter_is_exact() {
        let filter = NoteFilter {
            category: "Work".to_string(),
            ..Default::default()
        };
        let mut n = note("a");
        n.category = "Work".to_string();
        assert!(filter.matches(&n));
        n.category = "work".to_string();
        assert!(!filter.matches(&n));
    }

    #[test]
    fn test_text_filter_checks_title_content_and_tags() {
        let filter = NoteFilter {
            query: "MILK".to_string(),
            ..Default::default()
        };
        let mut n = note("Groceries");
        assert!(!filter.matches(&n));
        n.content = "buy milk".to_string();
        assert!(filter.matches(&n));

        n.content.clear();
        n.tags = vec!["milk-run".to_string()];
        assert!(filter.matches(&n));
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let today = Utc::now().date_naive();
        let filter = NoteFilter {
            date_start: Some(today),
            date_end: Some(today),
            ..Default::default()
        };
        let n = note("today");
        assert!(filter.matches(&n));

        let yesterday = NoteFilter {
            date_start: Some(today - Duration::days(2)),
            date_end: Some(today - Duration::days(1)),
            ..Default::default()
        };
        assert!(!yesterday.matches(&n));
    }

    #[test]
    fn test_pinned_sorts_before_unpinned() {
        let mut a = note("a");
        let mut b = note("b");
        a.pinned = false;
        b.pinned = true;
        assert_eq!(compare_notes(&a, &b), Ordering::Greater);
        assert_eq!(compare_notes(&b, &a), Ordering::Less);
    }

    #[test]
    fn test_missing_order_index_sorts_last() {
        let mut a = note("a");
        let mut b = note("b");
        a.order_index = None;
        b.order_index = Some(1_000_000);
        assert_eq!(compare_notes(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_equal_index_falls_back_to_newest_updated() {
        let mut a = note("a");
        let mut b = note("b");
        a.order_index = Some(3);
        b.order_index = Some(3);
        a.updated_at = Utc::now() - Duration::hours(1);
        b.updated_at = Utc::now();
        assert_eq!(compare_notes(&a, &b), Ordering::Greater);
    }
}
