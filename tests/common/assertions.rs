//! Domain-specific assertion macros for hookline harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! name the related subject involved.

/// Assert that an event carries a scalar related subject with the given value.
///
/// ```rust
/// assert_scalar!(event, "has_migration", "true");
/// ```
#[macro_export]
macro_rules! assert_scalar {
    ($event:expr, $kind:expr, $value:expr) => {{
        let event: &hookline_core::StructuredEvent = &$event;
        let kind: &str = $kind;
        match event.related(kind) {
            Some(related) => pretty_assertions::assert_eq!(
                related.string_value(),
                Some($value),
                "related subject {:?} has the wrong scalar value",
                kind
            ),
            None => panic!(
                "assert_scalar! failed: related subject {:?} not found.\n  Available: {:?}",
                kind,
                event.related_subjects.iter().map(|r| &r.kind).collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert that an event carries a list related subject with the given items.
#[macro_export]
macro_rules! assert_list {
    ($event:expr, $kind:expr, [$($item:expr),* $(,)?]) => {{
        let event: &hookline_core::StructuredEvent = &$event;
        let kind: &str = $kind;
        let expected: Vec<String> = vec![$($item.to_string()),*];
        match event.related(kind) {
            Some(related) => pretty_assertions::assert_eq!(
                related.array_value(),
                Some(expected.as_slice()),
                "related subject {:?} has the wrong list value",
                kind
            ),
            None => panic!(
                "assert_list! failed: related subject {:?} not found.\n  Available: {:?}",
                kind,
                event.related_subjects.iter().map(|r| &r.kind).collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert that an event has no related subject of the given type.
#[macro_export]
macro_rules! assert_no_related {
    ($event:expr, $kind:expr) => {{
        let event: &hookline_core::StructuredEvent = &$event;
        if let Some(related) = event.related($kind) {
            panic!("assert_no_related! failed: found {:?}", related);
        }
    }};
}

/// Related-subject types of an event, in emission order.
pub fn related_kinds(event: &hookline_core::StructuredEvent) -> Vec<&str> {
    event.related_subjects.iter().map(|r| r.kind.as_str()).collect()
}

/// Every related subject holds exactly one value and the event has a
/// non-empty id and timestamp.
pub fn assert_well_formed(event: &hookline_core::StructuredEvent) {
    assert!(!event.id.is_empty(), "event id is empty");
    assert!(
        chrono::DateTime::parse_from_rfc3339(&event.timestamp).is_ok(),
        "timestamp {:?} is not RFC 3339",
        event.timestamp
    );
    for related in &event.related_subjects {
        assert!(
            related.string_value().is_some() != related.array_value().is_some(),
            "related subject {:?} must hold exactly one value",
            related.kind
        );
    }
}
