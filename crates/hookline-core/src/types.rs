//! Core types for hookline-core.
//!
//! [`RawMessage`] is the flat field bag read from a chat payload; it covers
//! the union of every message kind. [`StructuredEvent`] is the normalised
//! record written to the sink, one JSON object per line.

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Loosely-typed message as typed into the chat command.
///
/// Every field is a string and absence is the empty string. Only `kind` is
/// required for dispatch; an empty `kind` is treated as an unknown message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMessage {
    #[serde(rename = "type", deserialize_with = "loose_string")]
    pub kind: String,
    #[serde(deserialize_with = "loose_string", skip_serializing_if = "String::is_empty")]
    pub description: String,

    // Deploy
    #[serde(deserialize_with = "loose_string", skip_serializing_if = "String::is_empty")]
    pub pull_request: String,
    /// Comma-joined component names.
    #[serde(
        rename = "affected_services",
        deserialize_with = "loose_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub components: String,
    /// `"Yes"` when the deploy ships a migration.
    #[serde(
        rename = "includes_migration",
        deserialize_with = "loose_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub with_migration: String,

    // Feature flag change
    #[serde(
        rename = "change_type",
        deserialize_with = "loose_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub ff_change_type: String,
    #[serde(deserialize_with = "loose_string", skip_serializing_if = "String::is_empty")]
    pub feature_name: String,
    #[serde(deserialize_with = "loose_string", skip_serializing_if = "String::is_empty")]
    pub is_for_all_orgs: String,

    // Shared by feature flag change and postback update
    /// Comma-joined organisation names.
    #[serde(deserialize_with = "loose_string", skip_serializing_if = "String::is_empty")]
    pub orgs: String,
    #[serde(deserialize_with = "loose_string", skip_serializing_if = "String::is_empty")]
    pub additional_info: String,
    #[serde(deserialize_with = "loose_string", skip_serializing_if = "String::is_empty")]
    pub query: String,

    // Postback update
    #[serde(deserialize_with = "loose_string", skip_serializing_if = "String::is_empty")]
    pub postback_update_type: String,
    #[serde(
        rename = "ad_net",
        deserialize_with = "loose_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub ad_network: String,
}

/// Accept any JSON scalar where a string is expected. Arrays of scalars are
/// comma-joined so `["a","b"]` reads the same as `"a,b"`.
fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    fn scalar(value: Value) -> String {
        match value {
            Value::String(s) => s,
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => other.to_string(),
        }
    }

    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(scalar).collect::<Vec<_>>().join(","),
        other => scalar(other),
    })
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Canonical event record. Built once by a transformer and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredEvent {
    pub id: String,
    /// Echo of the input message kind label.
    #[serde(rename = "event_type")]
    pub kind: String,
    pub subtype: String,
    #[serde(rename = "header")]
    pub description: String,
    pub subject: Subject,
    pub related_subjects: Vec<RelatedSubject>,
    /// RFC 3339 capture time.
    #[serde(rename = "timestamps")]
    pub timestamp: String,
}

impl StructuredEvent {
    /// First related subject of the given type, if any.
    pub fn related(&self, kind: &str) -> Option<&RelatedSubject> {
        self.related_subjects.iter().find(|r| r.kind == kind)
    }
}

/// The primary entity an event is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

impl Subject {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

/// Secondary context attached to an event. Holds exactly one value, either
/// a scalar or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RelatedSubjectRepr", try_from = "RelatedSubjectRepr")]
pub struct RelatedSubject {
    pub kind: String,
    pub value: RelatedValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelatedValue {
    Scalar(String),
    List(Vec<String>),
}

impl RelatedSubject {
    pub fn scalar(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: RelatedValue::Scalar(value.into()),
        }
    }

    pub fn list(kind: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            kind: kind.into(),
            value: RelatedValue::List(values),
        }
    }

    /// Scalar holding `"true"` or `"false"`.
    pub fn flag(kind: impl Into<String>, value: bool) -> Self {
        Self::scalar(kind, value.to_string())
    }

    pub fn string_value(&self) -> Option<&str> {
        match &self.value {
            RelatedValue::Scalar(s) => Some(s),
            RelatedValue::List(_) => None,
        }
    }

    pub fn array_value(&self) -> Option<&[String]> {
        match &self.value {
            RelatedValue::List(v) => Some(v),
            RelatedValue::Scalar(_) => None,
        }
    }
}

/// Wire shape: `{type, string_value?, array_value?}`.
#[derive(Serialize, Deserialize)]
struct RelatedSubjectRepr {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    string_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    array_value: Option<Vec<String>>,
}

impl From<RelatedSubject> for RelatedSubjectRepr {
    fn from(subject: RelatedSubject) -> Self {
        let (string_value, array_value) = match subject.value {
            RelatedValue::Scalar(s) => (Some(s), None),
            RelatedValue::List(v) => (None, Some(v)),
        };
        Self {
            kind: subject.kind,
            string_value,
            array_value,
        }
    }
}

impl TryFrom<RelatedSubjectRepr> for RelatedSubject {
    type Error = String;

    fn try_from(repr: RelatedSubjectRepr) -> Result<Self, Self::Error> {
        let value = match (repr.string_value, repr.array_value) {
            (Some(s), None) => RelatedValue::Scalar(s),
            (None, Some(v)) => RelatedValue::List(v),
            (Some(_), Some(_)) => {
                return Err(format!(
                    "related subject {:?} has both string_value and array_value",
                    repr.kind
                ))
            }
            (None, None) => {
                return Err(format!("related subject {:?} has no value", repr.kind))
            }
        };
        Ok(Self {
            kind: repr.kind,
            value,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
