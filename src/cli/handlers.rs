use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::cli::commands::{CategoryAction, ThemeAction, ViewArgs};
use crate::error::{JotterError, Result};
use crate::note::Note;
use crate::storage::FileKvStore;
use crate::store::{NoteDraft, NoteFilter, NotePatch, NoteStore};

/// Find the notebook root by walking up from the current directory.
fn find_notebook_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(".jotter").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

fn open_store() -> Result<NoteStore> {
    let root = find_notebook_root();
    let kv = FileKvStore::open(&root)?;
    NoteStore::open(Box::new(kv))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| JotterError::Storage(format!("Invalid date '{}': expected YYYY-MM-DD", raw)))
}

fn build_filter(view: &ViewArgs) -> Result<NoteFilter> {
    let mut filter = NoteFilter::default();
    if let Some(ref search) = view.search {
        filter.query = search.clone();
    }
    if let Some(ref category) = view.category {
        filter.category = category.clone();
    }
    if let Some(ref from) = view.from {
        filter.date_start = Some(parse_date(from)?);
    }
    if let Some(ref to) = view.to {
        filter.date_end = Some(parse_date(to)?);
    }
    Ok(filter)
}

fn short_id(note: &Note) -> &str {
    &note.id[..note.id.len().min(7)]
}

fn print_note_line(note: &Note) {
    let pin = if note.pinned { "*" } else { " " };
    let tags = note
        .tags
        .iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "{} {}  {}  [{}]  {}",
        pin,
        short_id(note),
        note.title,
        note.category,
        tags
    );
}

pub fn handle_init() -> Result<()> {
    let root = env::current_dir()?;
    let _kv = FileKvStore::init(&root)?;

    println!("Initialized notebook in {}", root.display());
    Ok(())
}

pub fn handle_add(
    title: String,
    content: Option<String>,
    tags: Option<String>,
    color: Option<String>,
    category: Option<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let mut store = open_store()?;

    let content = if stdin {
        let mut body = String::new();
        io::stdin().read_to_string(&mut body)?;
        body
    } else {
        content.unwrap_or_default()
    };

    let color = color
        .map(|c| c.parse().map_err(JotterError::Storage))
        .transpose()?;

    let note = store.create(NoteDraft {
        title,
        content,
        tags: tags.unwrap_or_default(),
        color,
        category,
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Created note ({}) - {}", short_id(&note), note.title);
    }

    Ok(())
}

pub fn handle_list(view: ViewArgs, json: bool) -> Result<()> {
    let store = open_store()?;
    let filter = build_filter(&view)?;
    let notes = store.visible(&filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
        return Ok(());
    }

    if notes.is_empty() {
        println!("No notes found");
        return Ok(());
    }
    for note in notes {
        print_note_line(note);
    }

    Ok(())
}

pub fn handle_get(id: String, json: bool) -> Result<()> {
    let store = open_store()?;

    let Some(note) = store.find_by_prefix(&id) else {
        println!("No note matching '{}'", id);
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(note)?);
        return Ok(());
    }

    println!("Title:    {}", note.title);
    println!("Id:       {}", note.id);
    println!("Category: {}", note.category);
    println!("Color:    {}", note.color);
    println!("Tags:     {}", note.tags.join(", "));
    println!("Pinned:   {}", if note.pinned { "yes" } else { "no" });
    println!("Created:  {}", note.created_at.to_rfc3339());
    println!("Updated:  {}", note.updated_at.to_rfc3339());
    if !note.content.is_empty() {
        println!();
        println!("{}", note.content);
    }

    Ok(())
}

pub fn handle_update(
    id: String,
    title: Option<String>,
    content: Option<String>,
    tags: Option<String>,
    color: Option<String>,
    category: Option<String>,
    json: bool,
) -> Result<()> {
    let mut store = open_store()?;

    let Some(full_id) = store.find_by_prefix(&id).map(|n| n.id.clone()) else {
        println!("No note matching '{}'", id);
        return Ok(());
    };

    let patch = NotePatch {
        title,
        content,
        tags: tags.map(|t| crate::note::parse_tags(&t)),
        color: color
            .map(|c| c.parse().map_err(JotterError::Storage))
            .transpose()?,
        category,
        pinned: None,
    };

    // Unknown ids are silent no-ops at the store level; we resolved one above.
    let Some(updated) = store.update(&full_id, patch)? else {
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        println!("Updated note ({}) - {}", short_id(&updated), updated.title);
    }

    Ok(())
}

pub fn handle_pin(id: String) -> Result<()> {
    let mut store = open_store()?;

    let Some(full_id) = store.find_by_prefix(&id).map(|n| n.id.clone()) else {
        println!("No note matching '{}'", id);
        return Ok(());
    };

    if let Some(note) = store.toggle_pin(&full_id)? {
        let state = if note.pinned { "Pinned" } else { "Unpinned" };
        println!("{} note ({}) - {}", state, short_id(&note), note.title);
    }

    Ok(())
}

pub fn handle_delete(id: String, force: bool) -> Result<()> {
    let mut store = open_store()?;

    let Some(note) = store.find_by_prefix(&id).cloned() else {
        println!("No note matching '{}'", id);
        return Ok(());
    };

    if !force {
        eprintln!("Delete note ({}) - {}? [y/N] ", short_id(&note), note.title);

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            return Err(JotterError::Storage(
                "Use --force to delete in non-interactive mode".to_string(),
            ));
        }
    }

    if store.delete(&note.id)?.is_some() {
        println!("Deleted note ({}) - {}", short_id(&note), note.title);
    }

    Ok(())
}

pub fn handle_move(id: String, target: String, view: ViewArgs) -> Result<()> {
    let mut store = open_store()?;
    let filter = build_filter(&view)?;

    let Some(dragged_id) = store.find_by_prefix(&id).map(|n| n.id.clone()) else {
        println!("No note matching '{}'", id);
        return Ok(());
    };
    let Some(target_id) = store.find_by_prefix(&target).map(|n| n.id.clone()) else {
        println!("No note matching '{}'", target);
        return Ok(());
    };

    if store.reorder(&dragged_id, &target_id, &filter)? {
        println!(
            "Moved {} before {}",
            &dragged_id[..dragged_id.len().min(7)],
            &target_id[..target_id.len().min(7)]
        );
    } else {
        println!("Nothing moved: notes are outside the current view");
    }

    Ok(())
}

pub fn handle_export(file: Option<PathBuf>) -> Result<()> {
    let store = open_store()?;
    let exported = store.export()?;

    match file {
        Some(path) => {
            fs::write(&path, &exported)?;
            println!("Exported {} notes to {}", store.notes().len(), path.display());
        }
        None => println!("{}", exported),
    }

    Ok(())
}

pub fn handle_import(file: PathBuf) -> Result<()> {
    let mut store = open_store()?;
    let raw = fs::read_to_string(&file)?;

    let report = store.import(&raw)?;

    println!(
        "Imported {} notes ({} skipped)",
        report.accepted,
        report.skipped()
    );
    for reason in &report.rejected {
        eprintln!("  skipped record: {}", reason);
    }

    Ok(())
}

pub fn handle_category(action: CategoryAction) -> Result<()> {
    let mut store = open_store()?;

    match action {
        CategoryAction::Add { name } => {
            let name = name.trim();
            if name.is_empty() {
                println!("Category name cannot be empty");
            } else if store.add_category(name)? {
                println!("Added category '{}'", name);
            } else {
                println!("Category '{}' already exists", name);
            }
        }
        CategoryAction::List => {
            let all = store.notes().len();
            println!("All ({})", all);
            for category in store.categories() {
                let count = store
                    .notes()
                    .iter()
                    .filter(|n| &n.category == category)
                    .count();
                println!("{} ({})", category, count);
            }
        }
    }

    Ok(())
}

pub fn handle_theme(action: Option<ThemeAction>) -> Result<()> {
    let mut store = open_store()?;

    match action {
        None => println!("{}", store.theme()),
        Some(ThemeAction::Set { theme }) => {
            let theme = theme.parse().map_err(JotterError::Storage)?;
            store.set_theme(theme)?;
            println!("Theme set to {}", theme);
        }
        Some(ThemeAction::Cycle) => {
            let theme = store.cycle_theme()?;
            println!("Theme set to {}", theme);
        }
    }

    Ok(())
}
