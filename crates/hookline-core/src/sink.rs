//! The durable, append-only destination for events.
//!
//! Implementations live in `hookline-sink`. The core only hands over a
//! finished [`StructuredEvent`]; [`encode_line`] is the shared wire form.

use crate::error::SinkError;
use crate::types::StructuredEvent;
use std::sync::Arc;

/// Accepts finished events. Each accepted event must land as one complete,
/// newline-terminated record even when called from many threads at once.
pub trait EventSink: Send + Sync {
    fn append(&self, event: &StructuredEvent) -> Result<(), SinkError>;
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn append(&self, event: &StructuredEvent) -> Result<(), SinkError> {
        (**self).append(event)
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn append(&self, event: &StructuredEvent) -> Result<(), SinkError> {
        (**self).append(event)
    }
}

/// Serialize an event as one compact JSON object followed by `\n`.
pub fn encode_line(event: &StructuredEvent) -> Result<String, SinkError> {
    let mut line = serde_json::to_string(event).map_err(|source| SinkError::Serialize {
        id: event.id.clone(),
        source,
    })?;
    line.push('\n');
    Ok(line)
}
