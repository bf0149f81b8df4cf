use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Accent color of a note card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    Indigo,
    Emerald,
    Rose,
    Amber,
    Sky,
    Violet,
}

impl std::fmt::Display for NoteColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoteColor::Indigo => write!(f, "indigo"),
            NoteColor::Emerald => write!(f, "emerald"),
            NoteColor::Rose => write!(f, "rose"),
            NoteColor::Amber => write!(f, "amber"),
            NoteColor::Sky => write!(f, "sky"),
            NoteColor::Violet => write!(f, "violet"),
        }
    }
}

impl std::str::FromStr for NoteColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "indigo" => Ok(NoteColor::Indigo),
            "emerald" => Ok(NoteColor::Emerald),
            "rose" => Ok(NoteColor::Rose),
            "amber" => Ok(NoteColor::Amber),
            "sky" => Ok(NoteColor::Sky),
            "violet" => Ok(NoteColor::Violet),
            _ => Err(format!("Invalid color: {}", s)),
        }
    }
}

/// Display theme preference. Purely presentational, but the choice is
/// persisted alongside the notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// The toggle order: system -> dark -> light -> system.
    pub fn next(self) -> Theme {
        match self {
            Theme::System => Theme::Dark,
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::System,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
            Theme::System => write!(f, "system"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            _ => Err(format!("Invalid theme: {}", s)),
        }
    }
}

/// A single markdown note.
///
/// Field names serialize as camelCase so export files stay byte-compatible
/// across versions. `order_index` is `None` for notes that have never been
/// dragged; those sort after all explicitly ordered notes in their group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub color: NoteColor,
    pub category: String,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
}

impl Note {
    pub fn new(title: String, content: String, order_index: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            tags: Vec::new(),
            color: NoteColor::default(),
            category: String::new(),
            pinned: false,
            created_at: now,
            updated_at: now,
            order_index: Some(order_index),
        }
    }
}

/// Split a raw tags string on commas, trimming each tag and dropping empties.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
