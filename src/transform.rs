//! Reshapes a raw records payload into the page-oriented view model.

use crate::query::PAGE_SIZE;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

/// The fixed palette of primary color names, matched case-sensitively.
static PRIMARY_COLORS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["red", "blue", "yellow"].into_iter().collect());

/// Whether `color` belongs to the fixed primary palette.
pub fn is_primary_color(color: &str) -> bool {
    PRIMARY_COLORS.contains(color)
}

/// An open record annotated with its derived primary flag.
///
/// Fields missing from the raw payload come through as `Null`/`None`; a
/// malformed record is kept in the bucket rather than aborting the transform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenRecord {
    pub id: Value,
    pub color: Option<String>,
    pub is_primary: bool,
}

/// One display page of transformed records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPage {
    /// Identifiers of the records on this page, in input order.
    pub ids: Vec<Value>,
    /// Records with an `"open"` disposition, in input order.
    pub open: Vec<OpenRecord>,
    /// How many records on this page are closed and primary-colored.
    pub closed_primary_count: usize,
    pub previous_page: Option<usize>,
    pub next_page: Option<usize>,
}

/// Fold a raw payload into a [`RecordPage`] for `current_page`.
///
/// Only the first [`PAGE_SIZE`] items feed the buckets; the over-fetched
/// sentinel row counts solely toward next-page detection via the raw length.
pub fn transform_payload(data: &[Value], current_page: usize) -> RecordPage {
    let mut ids = Vec::new();
    let mut open = Vec::new();
    let mut closed_primary_count = 0;

    for item in data.iter().take(PAGE_SIZE) {
        ids.push(item.get("id").cloned().unwrap_or(Value::Null));

        let color = item.get("color").and_then(Value::as_str);
        let is_primary = color.is_some_and(is_primary_color);

        match item.get("disposition").and_then(Value::as_str) {
            Some("open") => open.push(OpenRecord {
                id: item.get("id").cloned().unwrap_or(Value::Null),
                color: color.map(str::to_string),
                is_primary,
            }),
            Some("closed") if is_primary => closed_primary_count += 1,
            // Closed-but-non-primary and unknown dispositions land in no bucket.
            _ => {}
        }
    }

    RecordPage {
        ids,
        open,
        closed_primary_count,
        previous_page: (current_page > 1).then(|| current_page - 1),
        next_page: (data.len() > PAGE_SIZE).then(|| current_page + 1),
    }
}
