use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("malformed alert payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("total_unread is not a non-negative integer: {0}")]
    InvalidCount(Value),
}

#[derive(Debug, Deserialize)]
struct AlertPayload {
    visitor: Visitor,
}

#[derive(Debug, Deserialize)]
struct Visitor {
    total_unread: Value,
}

/// Pulls `visitor.total_unread` out of the alert endpoint response. The forum
/// sends the count as a string, but a bare integer is accepted too.
pub fn extract_unread_count(body: &[u8]) -> Result<u64, ExtractError> {
    let payload: AlertPayload = serde_json::from_slice(body)?;
    parse_count(payload.visitor.total_unread)
}

fn parse_count(value: Value) -> Result<u64, ExtractError> {
    let parsed = match &value {
        Value::String(s) => s.trim().parse::<u64>().ok(),
        Value::Number(n) => n.as_u64(),
        _ => None,
    };
    parsed.ok_or(ExtractError::InvalidCount(value))
}
