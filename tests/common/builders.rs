//! Test builders — ergonomic constructors for messages, payloads and
//! deterministic pipelines.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use hookline_core::stamp::{FixedClock, IdSource};
use hookline_core::{ActionLabels, Pipeline, RawMessage, Stamper};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Timestamp every deterministic pipeline reports.
pub const FIXED_TIMESTAMP: &str = "2024-01-15T10:00:00Z";

// ---------------------------------------------------------------------------
// MessageBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawMessage`] fixtures.
///
/// # Example
///
/// ```rust
/// let payload = MessageBuilder::new("deploy")
///     .pull_request("<https://github.com/acme/widgets/pull/42|#42>")
///     .components("svc-a,svc-b")
///     .payload();
/// ```
pub struct MessageBuilder {
    msg: RawMessage,
}

impl MessageBuilder {
    pub fn new(kind: &str) -> Self {
        Self {
            msg: RawMessage {
                kind: kind.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn description(mut self, value: &str) -> Self {
        self.msg.description = value.to_string();
        self
    }

    pub fn pull_request(mut self, value: &str) -> Self {
        self.msg.pull_request = value.to_string();
        self
    }

    pub fn components(mut self, value: &str) -> Self {
        self.msg.components = value.to_string();
        self
    }

    pub fn migration(mut self, value: &str) -> Self {
        self.msg.with_migration = value.to_string();
        self
    }

    pub fn change_type(mut self, value: &str) -> Self {
        self.msg.ff_change_type = value.to_string();
        self
    }

    pub fn feature(mut self, value: &str) -> Self {
        self.msg.feature_name = value.to_string();
        self
    }

    pub fn all_orgs(mut self, value: &str) -> Self {
        self.msg.is_for_all_orgs = value.to_string();
        self
    }

    pub fn orgs(mut self, value: &str) -> Self {
        self.msg.orgs = value.to_string();
        self
    }

    pub fn info(mut self, value: &str) -> Self {
        self.msg.additional_info = value.to_string();
        self
    }

    pub fn query(mut self, value: &str) -> Self {
        self.msg.query = value.to_string();
        self
    }

    pub fn postback_type(mut self, value: &str) -> Self {
        self.msg.postback_update_type = value.to_string();
        self
    }

    pub fn ad_network(mut self, value: &str) -> Self {
        self.msg.ad_network = value.to_string();
        self
    }

    pub fn build(self) -> RawMessage {
        self.msg
    }

    /// The message as the JSON text a chat user would post.
    pub fn payload(self) -> String {
        serde_json::to_string(&self.msg).unwrap()
    }
}

// ---------------------------------------------------------------------------
// Deterministic pipelines
// ---------------------------------------------------------------------------

/// Ids `evt-1`, `evt-2`, ... in call order.
#[derive(Default)]
pub struct SequenceIds(AtomicUsize);

impl IdSource for SequenceIds {
    fn next_id(&self) -> String {
        format!("evt-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

pub fn fixed_stamper() -> Stamper {
    let at = chrono::DateTime::parse_from_rfc3339(FIXED_TIMESTAMP).unwrap();
    Stamper::new(Arc::new(SequenceIds::default()), Arc::new(FixedClock(at)))
}

/// Default labels, sequential ids, frozen clock.
pub fn fixed_pipeline() -> Pipeline {
    Pipeline::with_stamper(ActionLabels::default(), fixed_stamper())
}

// ---------------------------------------------------------------------------
// Form bodies
// ---------------------------------------------------------------------------

/// `application/x-www-form-urlencoded` body with the given fields.
pub fn form_body(fields: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(fields).unwrap()
}

/// `token=...&text=...` body for the webhook.
pub fn hook_body(token: &str, text: &str) -> String {
    form_body(&[("token", token), ("text", text)])
}
