//! In-memory sink.

use hookline_core::error::SinkError;
use hookline_core::sink::EventSink;
use hookline_core::StructuredEvent;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Keeps every accepted event in arrival order. Can be told to refuse
/// writes to exercise failure handling.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<StructuredEvent>>,
    failing: AtomicBool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that rejects every append.
    pub fn failing() -> Self {
        let sink = Self::default();
        sink.set_failing(true);
        sink
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of the accepted events.
    pub fn events(&self) -> Vec<StructuredEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemorySink {
    fn append(&self, event: &StructuredEvent) -> Result<(), SinkError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SinkError::Rejected(format!("memory sink refused {}", event.id)));
        }
        self.events
            .lock()
            .map_err(|_| SinkError::Poisoned)?
            .push(event.clone());
        Ok(())
    }
}
