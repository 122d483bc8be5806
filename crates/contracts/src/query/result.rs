//! Query result envelope returned by the query endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Field;

/// Decoded response of a query. Decoding fails as a whole if any part of
/// the response is malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub status: Status,
}

/// Execution statistics of a query
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Status {
    /// Duration of the query in microseconds
    pub elapsed_time: u64,
    pub blocks_examined: u64,
    pub rows_examined: u64,
    pub rows_matched: u64,
    pub num_groups: u32,
    pub is_partial: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_block_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_block_time: Option<DateTime<Utc>>,
}

/// A table of the result. `columns[i]` holds the values of `fields[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub order: Vec<Order>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buckets: Option<Buckets>,
    #[serde(default)]
    pub columns: Vec<Vec<serde_json::Value>>,
}

impl Table {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Values of the named field
    pub fn column(&self, name: &str) -> Option<&[serde_json::Value]> {
        let idx = self.fields.iter().position(|f| f.name == name)?;
        self.columns.get(idx).map(Vec::as_slice)
    }
}

/// Dataset a table was read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub field: String,
    #[serde(default)]
    pub desc: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: u64,
    pub name: String,
}

/// Time range covered by a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub field: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buckets {
    pub field: String,
    /// Bucket width, either a number or a timespan literal
    pub size: serde_json::Value,
}
