//! The data-store collaborator the reports read from.
//!
//! Only the read side is modeled: [`DataStore::select`] with equality filters
//! and a single-column ordering. Writes and authentication live elsewhere.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use zoo_types::Timestamp;

/// One row as returned by the store.
pub type Row = Map<String, Value>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Table '{0}' not found")]
    TableNotFound(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Failed to decode a row of '{table}': {source}")]
    Decode {
        table: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Nulls sort last.
    Ascending,
    /// Nulls sort first.
    Descending,
}

/// Equality filters plus an optional ordering column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    filters: Vec<(String, Value)>,
    order: Option<(String, Direction)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order = Some((column.into(), direction));
        self
    }

    pub fn matches(&self, row: &Row) -> bool {
        self.filters
            .iter()
            .all(|(column, expected)| row.get(column).unwrap_or(&Value::Null) == expected)
    }

    /// Stable sort of `rows` by the ordering column, if any.
    pub fn sort(&self, rows: &mut [Row]) {
        let Some((column, direction)) = &self.order else {
            return;
        };
        rows.sort_by(|a, b| {
            let a = a.get(column).filter(|v| !v.is_null());
            let b = b.get(column).filter(|v| !v.is_null());
            match (a, b) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => match direction {
                    Direction::Ascending => Ordering::Greater,
                    Direction::Descending => Ordering::Less,
                },
                (Some(_), None) => match direction {
                    Direction::Ascending => Ordering::Less,
                    Direction::Descending => Ordering::Greater,
                },
                (Some(a), Some(b)) => match direction {
                    Direction::Ascending => compare_values(a, b),
                    Direction::Descending => compare_values(b, a),
                },
            }
        });
    }
}

/// Total order over non-null JSON values. Values of different kinds order
/// by kind (booleans, numbers, strings, arrays, objects).
fn compare_values(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    }
    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(f64::NAN);
            let b = b.as_f64().unwrap_or(f64::NAN);
            a.total_cmp(&b)
        }
        // Timestamps compare as instants and sort before other text.
        (Value::String(a), Value::String(b)) => match (Timestamp::parse(a), Timestamp::parse(b)) {
            (Ok(a), Ok(b)) => a.as_utc().cmp(&b.as_utc()),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => a.cmp(b),
        },
        _ => rank(a).cmp(&rank(b)),
    }
}

pub trait DataStore {
    fn select(&self, table: &str, query: &Query) -> Result<Vec<Row>, StoreError>;
}

/// Selects rows and decodes them into typed records.
pub fn fetch<T: DeserializeOwned>(
    store: &dyn DataStore,
    table: &str,
    query: &Query,
) -> Result<Vec<T>, StoreError> {
    let rows = store.select(table, query)?;
    log::debug!("Fetched {} rows from '{}'", rows.len(), table);
    rows.into_iter()
        .map(|row| {
            serde_json::from_value(Value::Object(row)).map_err(|source| StoreError::Decode {
                table: table.to_string(),
                source,
            })
        })
        .collect()
}

/// An in-memory store holding a snapshot of every table.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    tables: HashMap<String, Vec<Row>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a JSON object of `table -> [row, ...]`.
    pub fn from_value(value: Value) -> Result<Self, StoreError> {
        let Value::Object(tables) = value else {
            return Err(StoreError::InvalidSnapshot(
                "expected an object of tables".into(),
            ));
        };
        let mut store = Self::new();
        for (name, rows) in tables {
            let Value::Array(rows) = rows else {
                return Err(StoreError::InvalidSnapshot(format!(
                    "table '{}' is not an array",
                    name
                )));
            };
            let rows = rows
                .into_iter()
                .map(|row| match row {
                    Value::Object(row) => Ok(row),
                    other => Err(StoreError::InvalidSnapshot(format!(
                        "table '{}' holds a non-object row: {}",
                        name, other
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            store.insert_table(name, rows);
        }
        Ok(store)
    }

    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn insert_table(&mut self, name: impl Into<String>, rows: Vec<Row>) {
        self.tables.insert(name.into(), rows);
    }
}

impl DataStore for SnapshotStore {
    fn select(&self, table: &str, query: &Query) -> Result<Vec<Row>, StoreError> {
        let rows = self
            .tables
            .get(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;
        let mut selected: Vec<Row> = rows.iter().filter(|r| query.matches(r)).cloned().collect();
        query.sort(&mut selected);
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use zoo_types::{FoodItem, RecordId};

    fn store() -> SnapshotStore {
        SnapshotStore::from_value(json!({
            "food_items": [
                { "id": 2, "name": "Fruta", "unit": "kg" },
                { "id": 1, "name": "Carne", "unit": "kg" },
                { "id": 3, "name": "Heno", "unit": "fardo" }
            ],
            "cleaning_logs": [
                { "id": 1, "task_id": 1, "performed_at": "2024-06-01T08:00:00Z" },
                { "id": 2, "task_id": 1, "performed_at": null },
                { "id": 3, "task_id": 2, "performed_at": "2024-06-02T08:00:00Z" }
            ]
        }))
        .unwrap()
    }

    fn ids(rows: &[Row]) -> Vec<i64> {
        rows.iter().map(|r| r["id"].as_i64().unwrap()).collect()
    }

    #[test]
    fn unknown_table_is_an_error() {
        let err = store().select("animals", &Query::new()).unwrap_err();
        assert!(matches!(err, StoreError::TableNotFound(t) if t == "animals"));
    }

    #[test]
    fn equality_filter() {
        let rows = store()
            .select("food_items", &Query::new().eq("unit", "kg"))
            .unwrap();
        assert_eq!(ids(&rows), vec![2, 1]);
    }

    #[test]
    fn ascending_puts_nulls_last() {
        let rows = store()
            .select(
                "cleaning_logs",
                &Query::new().order_by("performed_at", Direction::Ascending),
            )
            .unwrap();
        assert_eq!(ids(&rows), vec![1, 3, 2]);
    }

    #[test]
    fn descending_puts_nulls_first() {
        let rows = store()
            .select(
                "cleaning_logs",
                &Query::new().order_by("performed_at", Direction::Descending),
            )
            .unwrap();
        assert_eq!(ids(&rows), vec![2, 3, 1]);
    }

    #[test]
    fn timestamps_order_by_instant_across_offsets() {
        let store = SnapshotStore::from_value(json!({
            "tickets": [
                { "id": 1, "purchased_at": "2024-06-01T12:00:00Z" },
                { "id": 2, "purchased_at": "2024-06-01T10:00:00-03:00" },
                { "id": 3, "purchased_at": "2024-06-01 11:00:00" }
            ]
        }))
        .unwrap();
        let rows = store
            .select(
                "tickets",
                &Query::new().order_by("purchased_at", Direction::Descending),
            )
            .unwrap();
        // 10:00-03:00 is 13:00 UTC; naive values read as UTC.
        assert_eq!(ids(&rows), vec![2, 1, 3]);
    }

    #[test]
    fn fetch_decodes_typed_records() {
        let foods: Vec<FoodItem> = fetch(
            &store(),
            "food_items",
            &Query::new().order_by("id", Direction::Ascending),
        )
        .unwrap();
        assert_eq!(foods[0].id, RecordId::Int(1));
        assert_eq!(foods[0].name, "Carne");
    }

    #[test]
    fn fetch_reports_decode_failures_with_table() {
        let store = SnapshotStore::from_value(json!({ "food_items": [{ "id": 1, "name": 5 }] }))
            .unwrap();
        let err = fetch::<FoodItem>(&store, "food_items", &Query::new()).unwrap_err();
        assert!(matches!(err, StoreError::Decode { table, .. } if table == "food_items"));
    }

    #[test]
    fn rejects_non_object_snapshot() {
        assert!(matches!(
            SnapshotStore::from_value(json!([1, 2])),
            Err(StoreError::InvalidSnapshot(_))
        ));
        assert!(matches!(
            SnapshotStore::from_value(json!({ "t": [1] })),
            Err(StoreError::InvalidSnapshot(_))
        ));
    }
}
