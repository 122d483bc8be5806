use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ContractError;

/// Aggregation function applied to a field in a grouped query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregationOp {
    // Any field type, field is usually `*`
    Count,
    CountIf,
    Distinct,
    DistinctIf,
    MakeSet,
    MakeSetIf,

    // Numeric fields only
    Sum,
    Avg,
    Min,
    Max,
    Topk,
    Percentiles,
    Histogram,
    StandardDeviation,
    Variance,
    ArgMin,
    ArgMax,
}

impl AggregationOp {
    /// Name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::CountIf => "countif",
            Self::Distinct => "distinct",
            Self::DistinctIf => "distinctif",
            Self::MakeSet => "makeset",
            Self::MakeSetIf => "makesetif",
            Self::Sum => "sum",
            Self::Avg => "avg",
            Self::Min => "min",
            Self::Max => "max",
            Self::Topk => "topk",
            Self::Percentiles => "percentiles",
            Self::Histogram => "histogram",
            Self::StandardDeviation => "stdev",
            Self::Variance => "variance",
            Self::ArgMin => "argmin",
            Self::ArgMax => "argmax",
        }
    }

    pub fn all() -> Vec<AggregationOp> {
        vec![
            Self::Count,
            Self::CountIf,
            Self::Distinct,
            Self::DistinctIf,
            Self::MakeSet,
            Self::MakeSetIf,
            Self::Sum,
            Self::Avg,
            Self::Min,
            Self::Max,
            Self::Topk,
            Self::Percentiles,
            Self::Histogram,
            Self::StandardDeviation,
            Self::Variance,
            Self::ArgMin,
            Self::ArgMax,
        ]
    }
}

impl FromStr for AggregationOp {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::all()
            .into_iter()
            .find(|op| op.as_str() == lower)
            .ok_or_else(|| ContractError::UnknownAggregationOp(s.to_string()))
    }
}

impl fmt::Display for AggregationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AggregationOp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AggregationOp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Aggregation attached to a [`Field`](super::Field) of a grouped table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    /// Alias given to the aggregation in the query, if any
    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub op: AggregationOp,
    /// Fields the aggregation reads from
    #[serde(default)]
    pub fields: Vec<String>,
    /// Extra arguments, e.g. the percentiles to compute
    #[serde(default)]
    pub args: Vec<serde_json::Value>,
}
