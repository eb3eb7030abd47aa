//! In-memory store backed by a JSON document of the form `{ "<table>": [row, ...] }`.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use async_trait::async_trait;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::{Collection, ContentFetchError, ContentStore, Row};

#[derive(Debug, Default)]
pub struct StaticContentStore {
    tables: HashMap<Collection, Vec<Row>>,
    offline: AtomicBool,
}

impl StaticContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a seed document. Unknown table names are skipped with a warning.
    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        let doc: HashMap<String, Vec<Row>> = serde_json::from_str(src)?;
        let mut store = Self::new();
        for (table, rows) in doc {
            match Collection::from_table(&table) {
                Some(collection) => store.insert(collection, rows),
                None => tracing::warn!(%table, "seed document names an unknown table; skipped"),
            }
        }
        Ok(store)
    }

    /// Replace the rows of one table. Rows are sorted per the collection's ordering.
    ///
    /// Drafts and scheduled posts stay stored; they are filtered at fetch time.
    pub fn insert(&mut self, collection: Collection, mut rows: Vec<Row>) {
        sort_rows(collection, &mut rows);
        self.tables.insert(collection, rows);
    }

    /// Make every subsequent fetch fail, as an unreachable remote would.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, AtomicOrdering::Relaxed);
    }
}

fn sort_rows(collection: Collection, rows: &mut [Row]) {
    let ordering = collection.ordering();
    // Stable sort: equal keys keep document order.
    rows.sort_by(|a, b| {
        match (sort_key(a, ordering.column), sort_key(b, ordering.column)) {
            // Null or missing keys go last in either direction.
            (None, None) => Ordering::Equal,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = compare_values(x, y);
                if ordering.ascending {
                    ord
                } else {
                    ord.reverse()
                }
            }
        }
    });
}

fn sort_key<'a>(row: &'a Row, column: &str) -> Option<&'a Value> {
    row.get(column).filter(|v| !v.is_null())
}

/// Total order over non-null JSON values: numbers, then strings, then booleans,
/// then arrays and objects (which compare equal among themselves).
fn compare_values(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Number(_) => 0,
            Value::String(_) => 1,
            Value::Bool(_) => 2,
            _ => 3,
        }
    }

    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// `published_at` as an instant.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC).
fn published_at(row: &Row) -> Option<OffsetDateTime> {
    let raw = row.get("published_at")?.as_str()?;
    OffsetDateTime::parse(raw, &Rfc3339).ok().or_else(|| {
        Date::parse(raw, format_description!("[year]-[month]-[day]"))
            .ok()
            .map(|d| d.midnight().assume_utc())
    })
}

/// Published rows only: a publication date that is not in the future.
fn visible_at(collection: Collection, rows: &[Row], now: OffsetDateTime) -> Vec<Row> {
    if !collection.published_only() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| published_at(row).is_some_and(|at| at <= now))
        .cloned()
        .collect()
}

#[async_trait(?Send)]
impl ContentStore for StaticContentStore {
    async fn fetch(&self, collection: Collection) -> Result<Vec<Row>, ContentFetchError> {
        if self.offline.load(AtomicOrdering::Relaxed) {
            return Err(ContentFetchError::Unavailable(collection));
        }
        let rows = self.tables.get(&collection).map(Vec::as_slice).unwrap_or_default();
        Ok(visible_at(collection, rows, OffsetDateTime::now_utc()))
    }
}
