//! Representative chat payloads, as they arrive from the slash command.
//!
//! Curly quotes and literal newlines are deliberate: they are what the chat
//! client produces and what the sanitizer has to repair.

pub const TOKEN: &str = "s3cret-slash-token";

pub const DEPLOY_PAYLOAD: &str = "{\u{201C}type\u{201D}: \u{201C}deploy\u{201D}, \
\u{201C}description\u{201D}: \u{201C}Release widgets 1.4\u{201D}, \
\u{201C}pull_request\u{201D}: \u{201C}|https://github.com/acme/widgets/pull/42|PR#42\u{201D}, \
\u{201C}affected_services\u{201D}: \u{201C}svc-a,svc-b\u{201D}, \
\u{201C}includes_migration\u{201D}: \u{201C}Yes\u{201D}}";

pub const CODE_CHANGE_PAYLOAD: &str = r#"{"type": "code-change", "description": "Hotfix", "pull_request": "<https://github.com/acme/api/pull/7|#7>"}"#;

pub const FF_ALL_ORGS_PAYLOAD: &str = "{\u{201C}type\u{201D}: \u{201C}ff-change\u{201D}, \
\u{201C}change_type\u{201D}: \u{201C}Enable\u{201D}, \
\u{201C}feature_name\u{201D}: \u{201C}dark-mode\u{201D}, \
\u{201C}is_for_all_orgs\u{201D}: \u{201C}true\u{201D}, \
\u{201C}query\u{201D}: \u{201C}\u{201D}}";

/// Query wrapped in a pair of markers, with raw quotes and a newline inside.
/// Parses once sanitized.
pub const FF_QUERY_PAYLOAD: &str = "{\"type\": \"ff-change\", \"change_type\": \"Disable\", \
\"feature_name\": \"beta-export\", \"orgs\": \"org1,org2\", \
\"additional_info\": \"requested by support\", \
\"query\": \"&lt;query&gt;update flags set enabled = 0\nwhere name = \"beta-export\"&lt;query&gt;\"}";

pub const POSTBACK_PAYLOAD: &str = "{\u{201C}type\u{201D}: \u{201C}postback-update\u{201D}, \
\u{201C}postback_update_type\u{201D}: \u{201C}Sync\u{201D}, \
\u{201C}orgs\u{201D}: \u{201C}org1,org2\u{201D}, \
\u{201C}query\u{201D}: \u{201C}update postback_sync\nset active = 1\u{201D}}";

pub const UNSUPPORTED_PAYLOAD: &str = r#"{"type": "unsupported", "description": "hello"}"#;

pub const MALFORMED_PAYLOADS: &[&str] = &[
    "",
    "deploy please",
    "{\"type\": \"deploy\"",
    "[\"deploy\"]",
];
