//! Deploy / code-change messages.

use super::{is_yes, split_list};
use crate::stamp::Stamp;
use crate::types::{RawMessage, RelatedSubject, StructuredEvent, Subject};

/// Repository name used when the pull-request URL is not GitHub-shaped.
pub const REPO_FALLBACK: &str = "attribution";

pub const SUBTYPE: &str = "merge";

/// Build a deploy event.
///
/// The subject is the repository behind the pull request. Related subjects,
/// in order: `pull_request` (if given), `components` (if given),
/// `has_migration` (always).
pub fn to_deploy(msg: &RawMessage, stamp: Stamp) -> StructuredEvent {
    let pr_url = strip_link_wrapping(&msg.pull_request);

    let mut related = Vec::with_capacity(3);
    if !msg.pull_request.is_empty() {
        related.push(RelatedSubject::scalar("pull_request", pr_url.clone()));
    }
    if !msg.components.is_empty() {
        related.push(RelatedSubject::list("components", split_list(&msg.components)));
    }
    related.push(RelatedSubject::flag("has_migration", is_yes(&msg.with_migration)));

    StructuredEvent {
        id: stamp.id,
        kind: msg.kind.clone(),
        subtype: SUBTYPE.to_string(),
        description: msg.description.clone(),
        subject: Subject::new("repo", repo_name_from_pr_url(&pr_url)),
        related_subjects: related,
        timestamp: stamp.timestamp,
    }
}

/// Recover the bare URL from a chat link such as `<url|text>` or `|url|text`:
/// drop the first and last characters, then cut at the first `|`.
/// Values shorter than two characters are returned as-is.
pub fn strip_link_wrapping(field: &str) -> String {
    let mut chars = field.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return field.to_string();
    }
    let inner = chars.as_str();
    match inner.split_once('|') {
        Some((url, _)) => url.to_string(),
        None => inner.to_string(),
    }
}

/// `owner/repo` from `https://github.com/<owner>/<repo>/pull/<n>`.
pub fn repo_name_from_pr_url(url: &str) -> String {
    let segments: Vec<&str> = url.split('/').collect();
    if segments.len() < 5 {
        return REPO_FALLBACK.to_string();
    }
    format!("{}/{}", segments[3], segments[4])
}
