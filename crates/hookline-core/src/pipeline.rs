//! The full normalisation pipeline: sanitize, parse, dispatch.

use crate::classify::{dispatch, Outcome, RejectReason, Rejection};
use crate::config::ActionLabels;
use crate::parser::try_parse;
use crate::sanitizer::sanitize;
use crate::stamp::Stamper;

/// Stateless per request; share one instance across handlers.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    labels: ActionLabels,
    stamper: Stamper,
}

impl Pipeline {
    /// Pipeline with UUID ids and the system clock.
    pub fn new(labels: ActionLabels) -> Self {
        Self::with_stamper(labels, Stamper::system())
    }

    pub fn with_stamper(labels: ActionLabels, stamper: Stamper) -> Self {
        Self { labels, stamper }
    }

    pub fn labels(&self) -> &ActionLabels {
        &self.labels
    }

    /// Run one raw chat payload through every stage.
    pub fn process(&self, raw: &str) -> Outcome {
        let sanitized = sanitize(raw);
        tracing::debug!(%sanitized, "sanitized payload");

        let msg = match try_parse(&sanitized) {
            Ok(msg) => msg,
            Err(err) => {
                tracing::warn!(%err, "dropping payload that is not valid JSON");
                return Outcome::Rejected(Rejection {
                    reason: RejectReason::MalformedPayload,
                    declared_kind: String::new(),
                });
            }
        };
        tracing::debug!(?msg, "parsed message");

        let outcome = dispatch(&msg, &self.labels, &self.stamper);
        match &outcome {
            Outcome::Event(event) => {
                tracing::debug!(id = %event.id, kind = %event.kind, "built structured event")
            }
            Outcome::Rejected(rejection) => tracing::info!(%rejection, "ignoring message"),
        }
        outcome
    }
}
