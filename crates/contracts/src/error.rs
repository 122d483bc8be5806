use thiserror::Error;

/// Errors raised while decoding or encoding query contracts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("unknown field type: {0}")]
    UnknownFieldType(String),

    #[error("unknown aggregation operation: {0}")]
    UnknownAggregationOp(String),

    /// Zero or out-of-range value that the server grammar never produces
    #[error("cannot encode field type with raw value {0} ({0:08b})")]
    UnencodableFieldType(u16),
}
