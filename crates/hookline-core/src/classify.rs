//! Classifier / dispatcher — routes a [`RawMessage`] to its transformer.

use crate::config::ActionLabels;
use crate::stamp::Stamper;
use crate::transform;
use crate::types::{RawMessage, StructuredEvent};
use phf::phf_map;
use std::fmt;

/// The message kinds hookline knows how to transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Deploy,
    FeatureFlagChange,
    PostbackUpdate,
    Unknown,
}

/// Accepted `type` labels. `deploy` and `code-change` are both sent by
/// different producers for the same message.
static KIND_LABELS: phf::Map<&'static str, MessageKind> = phf_map! {
    "deploy" => MessageKind::Deploy,
    "code-change" => MessageKind::Deploy,
    "ff-change" => MessageKind::FeatureFlagChange,
    "postback-update" => MessageKind::PostbackUpdate,
};

impl MessageKind {
    /// Exact, case-sensitive match on the `type` label.
    pub fn classify(label: &str) -> Self {
        KIND_LABELS.get(label).copied().unwrap_or(MessageKind::Unknown)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Deploy => write!(f, "deploy"),
            MessageKind::FeatureFlagChange => write!(f, "ff-change"),
            MessageKind::PostbackUpdate => write!(f, "postback-update"),
            MessageKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Result of running one payload through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Event(StructuredEvent),
    Rejected(Rejection),
}

impl Outcome {
    pub fn event(&self) -> Option<&StructuredEvent> {
        match self {
            Outcome::Event(event) => Some(event),
            Outcome::Rejected(_) => None,
        }
    }
}

/// A payload that produced no event. Not an error: the request still
/// completes normally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub reason: RejectReason,
    /// The `type` label as sent, empty if the payload did not parse.
    pub declared_kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    MalformedPayload,
    UnknownKind,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            RejectReason::MalformedPayload => write!(f, "payload is not a JSON object"),
            RejectReason::UnknownKind => {
                write!(f, "unknown message type {:?}", self.declared_kind)
            }
        }
    }
}

/// Transform `msg` according to its kind. A stamp is only issued when an
/// event is actually built.
pub fn dispatch(msg: &RawMessage, labels: &ActionLabels, stamper: &Stamper) -> Outcome {
    let event = match MessageKind::classify(&msg.kind) {
        MessageKind::Deploy => transform::to_deploy(msg, stamper.issue()),
        MessageKind::FeatureFlagChange => {
            transform::to_feature_flag_change(msg, labels, stamper.issue())
        }
        MessageKind::PostbackUpdate => transform::to_postback_update(msg, stamper.issue()),
        MessageKind::Unknown => {
            return Outcome::Rejected(Rejection {
                reason: RejectReason::UnknownKind,
                declared_kind: msg.kind.clone(),
            })
        }
    };
    Outcome::Event(event)
}
