//! Query result model: tables, fields and their types

mod aggregation;
mod field;
mod field_type;
mod result;

pub use aggregation::{Aggregation, AggregationOp};
pub use field::Field;
pub use field_type::{FieldType, PRIMITIVE_COUNT};
pub use result::{Buckets, Group, Order, QueryResult, Range, Source, Status, Table};
