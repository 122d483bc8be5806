//! Typed contracts for the query API of the analytics service
//!
//! The server describes the schema of every result table with field types
//! such as `"string"` or `"int|long"`. This crate decodes those responses
//! into plain data and owns the codecs for the string-encoded enums.
//!
//! ## Usage
//!
//! ```rust
//! use contracts::query::{FieldType, QueryResult};
//!
//! let ft: FieldType = "int|long".parse().unwrap();
//! assert_eq!(ft, FieldType::INT | FieldType::LONG);
//! assert_eq!(ft.to_string(), "int|long");
//!
//! let json = r#"{"tables":[{"name":"0","fields":[{"name":"n","type":"long"}]}]}"#;
//! let result: QueryResult = serde_json::from_str(json).unwrap();
//! assert_eq!(result.tables[0].fields[0].field_type, FieldType::LONG);
//! ```

pub mod error;
pub mod query;

pub use error::ContractError;
