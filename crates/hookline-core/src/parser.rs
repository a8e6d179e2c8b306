//! Parser — reads sanitized text into a [`RawMessage`].

use crate::error::MessageError;
use crate::types::RawMessage;

/// Deserialize a sanitized payload, surfacing JSON errors to the caller.
/// Only a JSON object is a message.
pub fn try_parse(sanitized: &str) -> Result<RawMessage, MessageError> {
    let value: serde_json::Value = serde_json::from_str(sanitized)?;
    if !value.is_object() {
        return Err(MessageError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}

/// Best-effort parse. Invalid JSON is logged and yields an empty message,
/// which classifies as an unknown kind.
pub fn parse(sanitized: &str) -> RawMessage {
    try_parse(sanitized).unwrap_or_else(|err| {
        tracing::warn!(%err, "payload is not valid JSON, treating as unknown kind");
        RawMessage::default()
    })
}
