//! hookline-core — payload normalisation for the hookline webhook.
//!
//! A chat-ops slash command posts a hand-typed, JSON-ish payload. This crate
//! turns that text into a [`StructuredEvent`] ready for an append-only sink.
//!
//! # Pipeline
//!
//! ```text
//! raw text ──► sanitizer ──► parser ──► classify ──► transform ──► EventSink
//!                                           │
//!                                           └──► Rejection (unknown kind)
//! ```
//!
//! Every stage up to the sink is pure. Event ids and timestamps come from
//! the injected [`IdSource`] and [`Clock`] so the transformers can be tested
//! with fixed values.

pub mod auth;
pub mod classify;
pub mod config;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod sanitizer;
pub mod sink;
pub mod stamp;
pub mod transform;
pub mod types;

pub use auth::TokenAuthenticator;
pub use classify::{dispatch, MessageKind, Outcome, RejectReason, Rejection};
pub use config::{ActionLabels, Config};
pub use error::{ConfigError, MessageError, SinkError};
pub use pipeline::Pipeline;
pub use sink::EventSink;
pub use stamp::{Clock, IdSource, Stamp, Stamper};
pub use types::{RawMessage, RelatedSubject, RelatedValue, StructuredEvent, Subject};
