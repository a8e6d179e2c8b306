//! Feature-flag change messages.
//!
//! Two truthy conventions meet here. The rendered description treats the
//! all-orgs field as set only when it is the literal `"true"`, while the
//! `is_for_all_orgs` related subject uses the `"Yes"` form answer. The two
//! checks are kept separate.

use super::{is_yes, split_list};
use crate::config::ActionLabels;
use crate::sanitizer::collapse_newlines;
use crate::stamp::Stamp;
use crate::types::{RawMessage, RelatedSubject, StructuredEvent, Subject};
use std::fmt;

/// Value of `is_for_all_orgs` that selects the "for all orgs." wording.
pub const ALL_ORGS_LITERAL: &str = "true";

/// What happened to the flag, as rendered in the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagAction {
    Enabled,
    Disabled,
    Changed,
}

impl FlagAction {
    /// Map a `change_type` label. Anything but the enable/disable labels,
    /// the ambiguous one included, is a plain change.
    pub fn from_label(label: &str, labels: &ActionLabels) -> Self {
        if !labels.is_known(label) {
            tracing::debug!(label, "unrecognised feature-flag change type");
        }
        if label == labels.enable {
            FlagAction::Enabled
        } else if label == labels.disable {
            FlagAction::Disabled
        } else {
            FlagAction::Changed
        }
    }
}

impl fmt::Display for FlagAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagAction::Enabled => write!(f, "enabled"),
            FlagAction::Disabled => write!(f, "disabled"),
            FlagAction::Changed => write!(f, "changed"),
        }
    }
}

/// Build a feature-flag change event.
///
/// Related subjects, in order: `is_for_all_orgs`, `query`, `orgs` (if
/// given), `additional_info` (if given).
pub fn to_feature_flag_change(
    msg: &RawMessage,
    labels: &ActionLabels,
    stamp: Stamp,
) -> StructuredEvent {
    let mut related = vec![
        RelatedSubject::flag("is_for_all_orgs", is_yes(&msg.is_for_all_orgs)),
        RelatedSubject::scalar("query", collapse_newlines(&msg.query)),
    ];
    if !msg.orgs.is_empty() {
        related.push(RelatedSubject::list("orgs", split_list(&msg.orgs)));
    }
    if !msg.additional_info.is_empty() {
        related.push(RelatedSubject::scalar("additional_info", msg.additional_info.clone()));
    }

    StructuredEvent {
        id: stamp.id,
        kind: msg.kind.clone(),
        subtype: msg.ff_change_type.clone(),
        description: describe(msg, labels),
        subject: Subject::new("feature_flag", msg.feature_name.clone()),
        related_subjects: related,
        timestamp: stamp.timestamp,
    }
}

/// Render the header sentence. The orgs list is quoted raw.
pub fn describe(msg: &RawMessage, labels: &ActionLabels) -> String {
    let action = FlagAction::from_label(&msg.ff_change_type, labels);
    if msg.is_for_all_orgs == ALL_ORGS_LITERAL {
        format!("Feature Flag {} has been {action} for all orgs.", msg.feature_name)
    } else {
        format!(
            "Feature Flag {} has been {action} for orgs: {}",
            msg.feature_name, msg.orgs
        )
    }
}
