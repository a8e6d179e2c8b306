//! Postback-update messages.
//!
//! The subject is the most specific thing the update targets:
//!
//! | orgs     | ad network | subject                          |
//! |----------|------------|----------------------------------|
//! | none     | none       | `table` `postback_<subtype>`     |
//! | none     | set        | `Ad Network` `<ad network>`      |
//! | one      | any        | `org` `<org>`                    |
//! | several  | any        | `orgs` `<org1, org2, ...>`       |
//!
//! Whenever the subject is not the table, the table is attached as a
//! trailing `table` related subject.

use super::split_list;
use crate::sanitizer::collapse_newlines;
use crate::stamp::Stamp;
use crate::types::{RawMessage, RelatedSubject, StructuredEvent, Subject};

/// `postback_` followed by the lowercased update subtype.
pub fn table_name(subtype: &str) -> String {
    format!("postback_{}", subtype.to_lowercase())
}

/// Build a postback-update event.
///
/// Related subjects, in order: `query`, `orgs` (if given), `ad_network`
/// (if given), `additional_info` (if given), `table` (unless the table is
/// the subject).
pub fn to_postback_update(msg: &RawMessage, stamp: Stamp) -> StructuredEvent {
    let table = table_name(&msg.postback_update_type);
    let orgs = split_list(&msg.orgs);

    let mut related = vec![RelatedSubject::scalar("query", collapse_newlines(&msg.query))];
    if !orgs.is_empty() {
        related.push(RelatedSubject::list("orgs", orgs.clone()));
    }
    if !msg.ad_network.is_empty() {
        related.push(RelatedSubject::scalar("ad_network", msg.ad_network.clone()));
    }
    if !msg.additional_info.is_empty() {
        related.push(RelatedSubject::scalar("additional_info", msg.additional_info.clone()));
    }

    let (subject, target) = if orgs.is_empty() && msg.ad_network.is_empty() {
        (Subject::new("table", table), String::new())
    } else {
        related.push(RelatedSubject::scalar("table", table));
        match orgs.as_slice() {
            [] => (
                Subject::new("Ad Network", msg.ad_network.clone()),
                format!(" for Ad Network {}", msg.ad_network),
            ),
            [org] => (
                Subject::new("org", org.clone()),
                format!(" for The Organization {org}"),
            ),
            many => {
                let joined = many.join(", ");
                let target = format!(" for The Organizations {joined}");
                (Subject::new("orgs", joined), target)
            }
        }
    };

    StructuredEvent {
        id: stamp.id,
        kind: msg.kind.clone(),
        subtype: msg.postback_update_type.clone(),
        description: format!("Updating Postback {}{target}.", msg.postback_update_type),
        subject,
        related_subjects: related,
        timestamp: stamp.timestamp,
    }
}
