use serde::{Deserialize, Serialize};

use super::{Aggregation, FieldType};

/// Field of a result [`Table`](super::Table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// Can be a composite type such as `int|long`
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Set when the field is the output of an aggregation
    #[serde(rename = "agg", default, skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<Aggregation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::AggregationOp;
    use serde_json::json;

    #[test]
    fn test_field_decode() {
        let field: Field = serde_json::from_value(json!({
            "name": "status",
            "type": "integer|string"
        }))
        .unwrap();
        assert_eq!(field.name, "status");
        assert_eq!(field.field_type, FieldType::INT | FieldType::STRING);
        assert!(field.aggregation.is_none());
    }

    #[test]
    fn test_field_null_agg() {
        let field: Field = serde_json::from_value(json!({
            "name": "n",
            "type": "long",
            "agg": null
        }))
        .unwrap();
        assert!(field.aggregation.is_none());
    }

    #[test]
    fn test_field_with_agg() {
        let field: Field = serde_json::from_value(json!({
            "name": "count_",
            "type": "long",
            "agg": { "op": "count", "fields": ["*"] }
        }))
        .unwrap();
        let agg = field.aggregation.unwrap();
        assert_eq!(agg.op, AggregationOp::Count);
        assert_eq!(agg.fields, vec!["*".to_string()]);
    }

    #[test]
    fn test_field_bad_type() {
        let err = serde_json::from_value::<Field>(json!({ "name": "x", "type": "uuid" })).unwrap_err();
        assert!(err.to_string().contains("unknown field type: uuid"));
    }

    #[test]
    fn test_field_encode() {
        let field = Field {
            name: "v".into(),
            field_type: FieldType::REAL | FieldType::INT,
            aggregation: None,
        };
        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            json!({ "name": "v", "type": "int|real" })
        );
    }
}
