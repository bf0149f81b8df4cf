mod import;
mod query;

pub use import::{ImportReport, RejectReason};
pub use query::{compare_notes, NoteFilter, ALL_CATEGORY};

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{JotterError, Result};
use crate::note::{parse_tags, Note, NoteColor, Theme};
use crate::storage::{KvStore, CATEGORIES_KEY, NOTES_KEY, THEME_KEY};

const DEFAULT_CATEGORY: &str = "General";
const SEED_CATEGORIES: [&str; 3] = ["General", "Personal", "Work"];

/// Input for creating a note. Tags arrive as the raw comma-separated string
/// the user typed; everything else is optional and falls back to defaults.
#[derive(Debug, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tags: String,
    pub color: Option<NoteColor>,
    pub category: Option<String>,
}

/// Partial update for an existing note. `None` fields are left untouched.
#[derive(Debug, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub color: Option<NoteColor>,
    pub category: Option<String>,
    pub pinned: Option<bool>,
}

/// The note collection plus its category list and theme preference, backed by
/// an injected key-value store. Every mutating operation persists the
/// affected key before returning; the store is the single owner of the data.
pub struct NoteStore {
    notes: Vec<Note>,
    categories: Vec<String>,
    theme: Theme,
    selected_category: String,
    kv: Box<dyn KvStore>,
}

impl NoteStore {
    /// Load the collection from the given backend. Unreadable or corrupt
    /// state falls back to defaults rather than failing the open.
    pub fn open(kv: Box<dyn KvStore>) -> Result<Self> {
        let notes = match kv.get(NOTES_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("stored notes are unreadable, starting empty: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };

        let mut categories: Vec<String> = match kv.get(CATEGORIES_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("stored categories are unreadable, reseeding: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };
        if categories.is_empty() {
            categories = SEED_CATEGORIES.iter().map(|c| c.to_string()).collect();
        }

        let theme = kv
            .get(THEME_KEY)?
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or_default();

        debug!(notes = notes.len(), theme = %theme, "note store opened");

        Ok(Self {
            notes,
            categories,
            theme,
            selected_category: ALL_CATEGORY.to_string(),
            kv,
        })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// Set the active category filter. Not persisted; view state only.
    pub fn select_category(&mut self, name: &str) {
        self.selected_category = name.to_string();
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Find a note by full id or unique id prefix.
    pub fn find_by_prefix(&self, prefix: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id.starts_with(prefix))
    }

    /// Create a new note from a draft and persist the collection.
    pub fn create(&mut self, draft: NoteDraft) -> Result<Note> {
        let requested = draft
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        // The index scope uses the raw request (or the active filter), so a
        // note created while "All" is selected is ordered globally.
        let scope = requested.unwrap_or(&self.selected_category);
        let order_index = next_order_index(&self.notes, scope);

        let category = match requested {
            Some(c) => c.to_string(),
            None if self.selected_category == ALL_CATEGORY => DEFAULT_CATEGORY.to_string(),
            None => self.selected_category.clone(),
        };

        let mut note = Note::new(
            draft.title.trim().to_string(),
            draft.content.trim().to_string(),
            order_index,
        );
        note.tags = parse_tags(&draft.tags);
        note.color = draft.color.unwrap_or_default();
        note.category = category;

        self.notes.push(note.clone());
        self.persist_notes()?;
        Ok(note)
    }

    /// Merge a patch into the note with the given id, refreshing its
    /// `updated_at`. Returns the updated note, or `None` (and no change)
    /// when the id is unknown.
    pub fn update(&mut self, id: &str, patch: NotePatch) -> Result<Option<Note>> {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        if let Some(tags) = patch.tags {
            note.tags = tags;
        }
        if let Some(color) = patch.color {
            note.color = color;
        }
        if let Some(category) = patch.category {
            note.category = category;
        }
        if let Some(pinned) = patch.pinned {
            note.pinned = pinned;
        }
        note.updated_at = Utc::now();

        let updated = note.clone();
        self.persist_notes()?;
        Ok(Some(updated))
    }

    /// Remove the note with the given id. Returns the removed note, or
    /// `None` (and no change) when the id is unknown.
    pub fn delete(&mut self, id: &str) -> Result<Option<Note>> {
        let Some(pos) = self.notes.iter().position(|n| n.id == id) else {
            return Ok(None);
        };
        let removed = self.notes.remove(pos);
        self.persist_notes()?;
        Ok(Some(removed))
    }

    /// Flip the pinned flag. Silent no-op when the id is unknown.
    pub fn toggle_pin(&mut self, id: &str) -> Result<Option<Note>> {
        let Some(pinned) = self.get(id).map(|n| n.pinned) else {
            return Ok(None);
        };
        self.update(
            id,
            NotePatch {
                pinned: Some(!pinned),
                ..Default::default()
            },
        )
    }

    /// The filtered, display-ordered view of the collection.
    pub fn visible(&self, filter: &NoteFilter) -> Vec<&Note> {
        let mut view: Vec<&Note> = self.notes.iter().filter(|n| filter.matches(n)).collect();
        view.sort_by(|a, b| compare_notes(a, b));
        view
    }

    /// Move the dragged note in front of the target note within the current
    /// view, reassigning order indices for the whole pinned group.
    ///
    /// Both notes must be in the same pinned group; crossing groups is a
    /// policy error and leaves the collection untouched. Unknown ids, or ids
    /// outside the filtered view, are no-ops. Returns whether indices were
    /// reassigned.
    pub fn reorder(
        &mut self,
        dragged_id: &str,
        target_id: &str,
        filter: &NoteFilter,
    ) -> Result<bool> {
        let (Some(dragged), Some(target)) = (self.get(dragged_id), self.get(target_id)) else {
            return Ok(false);
        };
        if dragged.pinned != target.pinned {
            return Err(JotterError::CrossGroupReorder);
        }
        let group = dragged.pinned;

        let mut ids: Vec<String> = self
            .visible(filter)
            .into_iter()
            .filter(|n| n.pinned == group)
            .map(|n| n.id.clone())
            .collect();

        let (Some(from), Some(to)) = (
            ids.iter().position(|id| id == dragged_id),
            ids.iter().position(|id| id == target_id),
        ) else {
            return Ok(false);
        };

        let moved = ids.remove(from);
        ids.insert(to, moved);

        for (idx, id) in ids.iter().enumerate() {
            if let Some(note) = self.notes.iter_mut().find(|n| &n.id == id) {
                note.order_index = Some(idx as i64);
            }
        }

        debug!(dragged = dragged_id, target = target_id, "reordered notes");
        self.persist_notes()?;
        Ok(true)
    }

    /// Replace the collection with the records in `raw`, a JSON array of
    /// loose note records. The whole import fails (keeping prior state) when
    /// the top level is not an array; individual bad records are dropped and
    /// tallied in the returned report.
    pub fn import(&mut self, raw: &str) -> Result<ImportReport> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| JotterError::ImportFormat(e.to_string()))?;
        let records = value
            .as_array()
            .ok_or_else(|| JotterError::ImportFormat("top-level value must be an array".to_string()))?;

        let mut report = ImportReport::default();
        let mut imported = Vec::with_capacity(records.len());
        for record in records {
            // Fallback indices are computed against the collection being
            // replaced, matching the create rule at the time of import.
            match import::decode_record(record, |cat| next_order_index(&self.notes, cat)) {
                Ok(note) => {
                    imported.push(note);
                    report.accepted += 1;
                }
                Err(reason) => report.rejected.push(reason),
            }
        }

        self.notes = imported;
        self.persist_notes()?;
        debug!(
            accepted = report.accepted,
            skipped = report.skipped(),
            "import finished"
        );
        Ok(report)
    }

    /// Serialize the full collection, unfiltered, as pretty-printed JSON.
    pub fn export(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.notes)?)
    }

    /// Append a category if the trimmed name is new. Returns whether it was
    /// added; duplicates and empty names are no-ops.
    pub fn add_category(&mut self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() || self.categories.iter().any(|c| c == name) {
            return Ok(false);
        }
        self.categories.push(name.to_string());
        self.persist_categories()?;
        Ok(true)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        self.kv.set(THEME_KEY, &theme.to_string())
    }

    /// Advance the theme along its toggle order and persist it.
    pub fn cycle_theme(&mut self) -> Result<Theme> {
        self.set_theme(self.theme.next())?;
        Ok(self.theme)
    }

    fn persist_notes(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.notes)?;
        self.kv.set(NOTES_KEY, &raw)
    }

    fn persist_categories(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.categories)?;
        self.kv.set(CATEGORIES_KEY, &raw)
    }
}

/// One past the maximum `order_index` among notes in `category`;
/// [`ALL_CATEGORY`] (or an empty scope) ranges over the whole collection.
fn next_order_index(notes: &[Note], category: &str) -> i64 {
    let scoped = !category.is_empty() && category != ALL_CATEGORY;
    notes
        .iter()
        .filter(|n| !scoped || n.category == category)
        .filter_map(|n| n.order_index)
        .max()
        .unwrap_or(-1)
        + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;

    fn empty_store() -> NoteStore {
        NoteStore::open(Box::new(MemoryKvStore::new())).unwrap()
    }

    fn draft(title: &str) -> NoteDraft {
        NoteDraft {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_applies_defaults() {
        let mut store = empty_store();
        store.select_category("General");

        let note = store
            .create(NoteDraft {
                title: "Groceries".to_string(),
                content: "milk, eggs".to_string(),
                tags: "shop, home".to_string(),
                color: None,
                category: None,
            })
            .unwrap();

        assert_eq!(note.tags, vec!["shop", "home"]);
        assert_eq!(note.color, NoteColor::Indigo);
        assert_eq!(note.category, "General");
        assert_eq!(note.order_index, Some(0));
        assert!(!note.pinned);
    }

    #[test]
    fn test_create_trims_title_and_content() {
        let mut store = empty_store();
        let note = store
            .create(NoteDraft {
                title: "  Hello  ".to_string(),
                content: " body \n".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(note.title, "Hello");
        assert_eq!(note.content, "body");
    }

    #[test]
    fn test_create_defaults_to_general_when_all_selected() {
        let mut store = empty_store();
        assert_eq!(store.selected_category(), ALL_CATEGORY);
        let note = store.create(draft("a")).unwrap();
        assert_eq!(note.category, "General");
    }

    #[test]
    fn test_order_index_monotonic_within_category() {
        let mut store = empty_store();
        for i in 0..4 {
            let note = store
                .create(NoteDraft {
                    title: format!("note {}", i),
                    category: Some("Work".to_string()),
                    ..Default::default()
                })
                .unwrap();
            assert_eq!(note.order_index, Some(i));
        }

        // A different category starts its own sequence.
        let other = store
            .create(NoteDraft {
                title: "personal".to_string(),
                category: Some("Personal".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(other.order_index, Some(0));
    }

    #[test]
    fn test_create_exceeds_every_existing_index_in_scope() {
        let mut store = empty_store();
        for _ in 0..3 {
            store
                .create(NoteDraft {
                    title: "w".to_string(),
                    category: Some("Work".to_string()),
                    ..Default::default()
                })
                .unwrap();
        }
        let max = store
            .notes()
            .iter()
            .filter(|n| n.category == "Work")
            .filter_map(|n| n.order_index)
            .max()
            .unwrap();
        let next = store
            .create(NoteDraft {
                title: "new".to_string(),
                category: Some("Work".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert!(next.order_index.unwrap() > max);
    }

    #[test]
    fn test_update_merges_and_refreshes_timestamp() {
        let mut store = empty_store();
        let note = store.create(draft("original")).unwrap();
        let before = note.updated_at;

        let updated = store
            .update(
                &note.id,
                NotePatch {
                    title: Some("renamed".to_string()),
                    tags: Some(vec!["x".to_string()]),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "renamed");
        assert_eq!(updated.tags, vec!["x"]);
        assert_eq!(updated.content, note.content);
        assert!(updated.updated_at >= before);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = empty_store();
        store.create(draft("a")).unwrap();
        let snapshot: Vec<String> = store.notes().iter().map(|n| n.title.clone()).collect();

        let result = store
            .update(
                "no-such-id",
                NotePatch {
                    title: Some("x".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(result.is_none());
        let after: Vec<String> = store.notes().iter().map(|n| n.title.clone()).collect();
        assert_eq!(snapshot, after);
    }

    #[test]
    fn test_delete_removes_and_tolerates_unknown() {
        let mut store = empty_store();
        let note = store.create(draft("bye")).unwrap();

        assert!(store.delete(&note.id).unwrap().is_some());
        assert!(store.notes().is_empty());
        assert!(store.delete(&note.id).unwrap().is_none());
    }

    #[test]
    fn test_toggle_pin_flips_and_tolerates_unknown() {
        let mut store = empty_store();
        let note = store.create(draft("pin me")).unwrap();

        let pinned = store.toggle_pin(&note.id).unwrap().unwrap();
        assert!(pinned.pinned);
        let unpinned = store.toggle_pin(&note.id).unwrap().unwrap();
        assert!(!unpinned.pinned);

        assert!(store.toggle_pin("nope").unwrap().is_none());
    }

    #[test]
    fn test_visible_places_pinned_first_regardless_of_input_order() {
        let mut store = empty_store();
        let a = store.create(draft("a")).unwrap();
        let b = store.create(draft("b")).unwrap();
        let c = store.create(draft("c")).unwrap();
        store.toggle_pin(&c.id).unwrap();

        let view = store.visible(&NoteFilter::default());
        let split = view.iter().position(|n| !n.pinned).unwrap_or(view.len());
        assert!(view[..split].iter().all(|n| n.pinned));
        assert!(view[split..].iter().all(|n| !n.pinned));
        assert_eq!(view[0].id, c.id);

        // Unpinned keep their manual order.
        assert_eq!(view[1].id, a.id);
        assert_eq!(view[2].id, b.id);
    }

    #[test]
    fn test_empty_filter_is_identity_on_membership() {
        let mut store = empty_store();
        for i in 0..5 {
            store.create(draft(&format!("n{}", i))).unwrap();
        }
        let view = store.visible(&NoteFilter::default());
        assert_eq!(view.len(), store.notes().len());
    }

    #[test]
    fn test_reorder_swaps_two_notes() {
        let mut store = empty_store();
        let first = store.create(draft("first")).unwrap();
        let second = store.create(draft("second")).unwrap();
        assert_eq!(first.order_index, Some(0));
        assert_eq!(second.order_index, Some(1));

        let moved = store
            .reorder(&first.id, &second.id, &NoteFilter::default())
            .unwrap();

        assert!(moved);
        assert_eq!(store.get(&first.id).unwrap().order_index, Some(1));
        assert_eq!(store.get(&second.id).unwrap().order_index, Some(0));
    }

    #[test]
    fn test_reorder_is_invertible_for_a_swap() {
        let mut store = empty_store();
        let a = store.create(draft("a")).unwrap();
        let b = store.create(draft("b")).unwrap();
        let filter = NoteFilter::default();

        let original: Vec<String> =
            store.visible(&filter).iter().map(|n| n.id.clone()).collect();

        store.reorder(&a.id, &b.id, &filter).unwrap();
        store.reorder(&b.id, &a.id, &filter).unwrap();

        let restored: Vec<String> =
            store.visible(&filter).iter().map(|n| n.id.clone()).collect();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_reorder_across_pinned_groups_fails_without_mutation() {
        let mut store = empty_store();
        let pinned = store.create(draft("pinned")).unwrap();
        let loose = store.create(draft("loose")).unwrap();
        store.toggle_pin(&pinned.id).unwrap();

        let snapshot: Vec<Option<i64>> =
            store.notes().iter().map(|n| n.order_index).collect();

        let result = store.reorder(&pinned.id, &loose.id, &NoteFilter::default());
        assert!(matches!(result, Err(JotterError::CrossGroupReorder)));

        let after: Vec<Option<i64>> = store.notes().iter().map(|n| n.order_index).collect();
        assert_eq!(snapshot, after);
    }

    #[test]
    fn test_reorder_unknown_id_is_noop() {
        let mut store = empty_store();
        let a = store.create(draft("a")).unwrap();
        let moved = store
            .reorder(&a.id, "no-such-id", &NoteFilter::default())
            .unwrap();
        assert!(!moved);
        assert_eq!(store.get(&a.id).unwrap().order_index, Some(0));
    }

    #[test]
    fn test_reorder_outside_view_reports_no_move() {
        let mut store = empty_store();
        let a = store.create(draft("a")).unwrap();
        let b = store.create(draft("b")).unwrap();
        let snapshot: Vec<Option<i64>> = store.notes().iter().map(|n| n.order_index).collect();

        // Both notes exist but the filter excludes them from the view.
        let filter = NoteFilter {
            category: "Work".to_string(),
            ..Default::default()
        };
        let moved = store.reorder(&a.id, &b.id, &filter).unwrap();

        assert!(!moved);
        let after: Vec<Option<i64>> = store.notes().iter().map(|n| n.order_index).collect();
        assert_eq!(snapshot, after);
    }

    #[test]
    fn test_reorder_only_touches_notes_in_scope() {
        let mut store = empty_store();
        let w1 = store
            .create(NoteDraft {
                title: "w1".to_string(),
                category: Some("Work".to_string()),
                ..Default::default()
            })
            .unwrap();
        let w2 = store
            .create(NoteDraft {
                title: "w2".to_string(),
                category: Some("Work".to_string()),
                ..Default::default()
            })
            .unwrap();
        let personal = store
            .create(NoteDraft {
                title: "p".to_string(),
                category: Some("Personal".to_string()),
                ..Default::default()
            })
            .unwrap();
        let before = store.get(&personal.id).unwrap().order_index;

        let filter = NoteFilter {
            category: "Work".to_string(),
            ..Default::default()
        };
        store.reorder(&w1.id, &w2.id, &filter).unwrap();

        assert_eq!(store.get(&personal.id).unwrap().order_index, before);
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut store = empty_store();
        store
            .create(NoteDraft {
                title: "Groceries".to_string(),
                content: "milk".to_string(),
                tags: "shop, home".to_string(),
                color: Some(NoteColor::Rose),
                category: Some("Personal".to_string()),
            })
            .unwrap();
        let pinned = store.create(draft("pinned")).unwrap();
        store.toggle_pin(&pinned.id).unwrap();

        let exported = store.export().unwrap();
        let originals = store.notes().to_vec();

        let mut fresh = empty_store();
        let report = fresh.import(&exported).unwrap();
        assert_eq!(report.accepted, 2);
        assert!(report.rejected.is_empty());

        for original in &originals {
            let imported = fresh.get(&original.id).unwrap();
            assert_eq!(imported.title, original.title);
            assert_eq!(imported.content, original.content);
            assert_eq!(imported.tags, original.tags);
            assert_eq!(imported.color, original.color);
            assert_eq!(imported.category, original.category);
            assert_eq!(imported.pinned, original.pinned);
            assert_eq!(imported.order_index, original.order_index);
        }
    }

    #[test]
    fn test_import_replaces_collection_and_reports_rejects() {
        let mut store = empty_store();
        store.create(draft("old")).unwrap();

        let raw = r#"[
            { "id": "good", "title": "kept" },
            { "title": "no id" },
            "not even an object"
        ]"#;
        let report = store.import(raw).unwrap();

        assert_eq!(report.accepted, 1);
        assert_eq!(
            report.rejected,
            vec![RejectReason::MissingId, RejectReason::NotAnObject]
        );
        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.notes()[0].id, "good");
    }

    #[test]
    fn test_import_rejects_non_array_and_keeps_state() {
        let mut store = empty_store();
        store.create(draft("keep me")).unwrap();

        let result = store.import(r#"{"not": "an array"}"#);
        assert!(matches!(result, Err(JotterError::ImportFormat(_))));
        assert_eq!(store.notes().len(), 1);

        let result = store.import("this is not json");
        assert!(matches!(result, Err(JotterError::ImportFormat(_))));
        assert_eq!(store.notes().len(), 1);
    }

    #[test]
    fn test_categories_seeded_and_append_only() {
        let mut store = empty_store();
        assert_eq!(store.categories(), ["General", "Personal", "Work"]);

        assert!(store.add_category(" Ideas ").unwrap());
        assert_eq!(store.categories().last().map(String::as_str), Some("Ideas"));

        // Duplicates (case-sensitive) and blanks are no-ops.
        assert!(!store.add_category("Ideas").unwrap());
        assert!(!store.add_category("   ").unwrap());
        assert!(store.add_category("ideas").unwrap());
    }

    #[test]
    fn test_theme_persists_across_open() {
        let mut kv = MemoryKvStore::new();
        kv.set(THEME_KEY, "dark").unwrap();
        let store = NoteStore::open(Box::new(kv)).unwrap();
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_cycle_theme() {
        let mut store = empty_store();
        assert_eq!(store.theme(), Theme::System);
        assert_eq!(store.cycle_theme().unwrap(), Theme::Dark);
        assert_eq!(store.cycle_theme().unwrap(), Theme::Light);
        assert_eq!(store.cycle_theme().unwrap(), Theme::System);
    }

    #[test]
    fn test_corrupt_notes_key_falls_back_to_empty() {
        let mut kv = MemoryKvStore::new();
        kv.set(NOTES_KEY, "{{ definitely not json").unwrap();
        kv.set(CATEGORIES_KEY, "also broken").unwrap();

        let store = NoteStore::open(Box::new(kv)).unwrap();
        assert!(store.notes().is_empty());
        assert_eq!(store.categories(), ["General", "Personal", "Work"]);
    }

    #[test]
    fn test_mutations_survive_reopen() {
        let tmp = tempfile::TempDir::new().unwrap();
        let kv = crate::storage::FileKvStore::init(tmp.path()).unwrap();
        let mut store = NoteStore::open(Box::new(kv)).unwrap();
        let note = store.create(draft("durable")).unwrap();
        store.add_category("Ideas").unwrap();
        store.set_theme(Theme::Light).unwrap();

        let kv = crate::storage::FileKvStore::open(tmp.path()).unwrap();
        let reopened = NoteStore::open(Box::new(kv)).unwrap();
        assert_eq!(reopened.notes().len(), 1);
        assert_eq!(reopened.get(&note.id).unwrap().title, "durable");
        assert!(reopened.categories().contains(&"Ideas".to_string()));
        assert_eq!(reopened.theme(), Theme::Light);
    }
}
