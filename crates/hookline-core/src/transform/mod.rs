//! Transformers — one per message kind, each turning a [`RawMessage`] into
//! a [`StructuredEvent`](crate::StructuredEvent).
//!
//! Transformers are pure: the id and timestamp arrive in a
//! [`Stamp`](crate::Stamp).
//!
//! [`RawMessage`]: crate::RawMessage

pub mod deploy;
pub mod feature_flag;
pub mod postback;

pub use deploy::to_deploy;
pub use feature_flag::to_feature_flag_change;
pub use postback::to_postback_update;

/// The boolean convention for chat form answers.
pub(crate) fn is_yes(value: &str) -> bool {
    value == "Yes"
}

/// Split a comma-joined list. Empty input gives an empty list; entries are
/// kept verbatim, whitespace included.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(',').map(str::to_string).collect()
}
