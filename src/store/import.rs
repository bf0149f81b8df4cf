//! Lenient decoding of import-file records.
//!
//! Import files are JSON arrays of loosely-typed records, possibly produced
//! by older versions or edited by hand. Each record is decoded independently:
//! a record either normalizes into a valid [`Note`] or is rejected with a
//! typed reason. Rejected records are dropped from the import; the caller
//! gets the tally in an [`ImportReport`].

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::note::{parse_tags, Note, NoteColor};

/// Why a single import record was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The array element was not a JSON object.
    NotAnObject,
    /// The record has no usable `id` value.
    MissingId,
    /// The record has no `title` key (an empty title is accepted).
    MissingTitle,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::NotAnObject => write!(f, "not an object"),
            RejectReason::MissingId => write!(f, "missing id"),
            RejectReason::MissingTitle => write!(f, "missing title"),
        }
    }
}

/// Outcome of an import: how many records were kept and why the rest fell out.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub accepted: usize,
    pub rejected: Vec<RejectReason>,
}

impl ImportReport {
    pub fn skipped(&self) -> usize {
        self.rejected.len()
    }
}

/// Decode one loose record into a `Note`.
///
/// `next_index` supplies the fallback `order_index` for a given category,
/// computed against the collection the import is about to replace.
pub(crate) fn decode_record(
    value: &Value,
    next_index: impl FnOnce(&str) -> i64,
) -> std::result::Result<Note, RejectReason> {
    let record = value.as_object().ok_or(RejectReason::NotAnObject)?;

    let id = match record.get("id") {
        Some(v) => coerce_id(v).ok_or(RejectReason::MissingId)?,
        None => return Err(RejectReason::MissingId),
    };
    if !record.contains_key("title") {
        return Err(RejectReason::MissingTitle);
    }

    let title = coerce_string(record.get("title")).trim().to_string();
    let content = coerce_string(record.get("content")).trim().to_string();

    let tags = match record.get("tags") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) => parse_tags(s),
        _ => Vec::new(),
    };

    let color = record
        .get("color")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<NoteColor>().ok())
        .unwrap_or_default();

    let category = record
        .get("category")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or("General")
        .to_string();

    let pinned = record.get("pinned").map(is_truthy).unwrap_or(false);

    let created_at = coerce_timestamp(record.get("createdAt"));
    let updated_at = coerce_timestamp(record.get("updatedAt"));

    let order_index = match record.get("orderIndex") {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => Some(next_index(&category)),
    };

    Ok(Note {
        id,
        title,
        content,
        tags,
        color,
        category,
        pinned,
        created_at,
        updated_at,
        order_index,
    })
}

fn coerce_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().map(|f| f != 0.0).unwrap_or(false) => Some(n.to_string()),
        _ => None,
    }
}

fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn coerce_timestamp(value: Option<&Value>) -> DateTime<Utc> {
    value
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}
