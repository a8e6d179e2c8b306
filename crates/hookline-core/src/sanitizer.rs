//! Sanitizer — recovers valid JSON from a hand-typed chat payload.
//!
//! Steps, in order:
//!
//! 1. Curly double quotes (`“` `”`) become ASCII `"`. Chat clients curl them
//!    as the user types.
//! 2. Literal newlines become single spaces.
//! 3. Text between the first `&lt;query&gt;` marker and the next one (or
//!    the end of the input) is free-form query text: its double quotes are
//!    backslash-escaped. Every marker is dropped.
//!
//! Sanitizing never fails. Text that is still not JSON is reported by the
//! parser.

/// HTML-escaped `<query>` tag the chat tool uses to introduce raw SQL.
pub const QUERY_MARKER: &str = "&lt;query&gt;";

const SMART_QUOTES: [char; 2] = ['\u{201C}', '\u{201D}'];

/// Run all sanitizing steps over `raw`.
pub fn sanitize(raw: &str) -> String {
    let text = straighten_quotes(raw);
    let text = collapse_newlines(&text);
    escape_query(&text)
}

/// Replace left/right double quotation marks with `"`.
pub fn straighten_quotes(text: &str) -> String {
    text.replace(&SMART_QUOTES[..], "\"")
}

/// Replace every `\n` with a single space.
pub fn collapse_newlines(text: &str) -> String {
    text.replace('\n', " ")
}

/// Escape the double quotes of the query segment opened by the first
/// [`QUERY_MARKER`] and closed by the second one, if any.
///
/// A paired `"&lt;query&gt;...&lt;query&gt;"` value keeps its closing quote
/// intact. Markers are removed from the output, so a second pass over
/// already sanitized text finds nothing to escape.
pub fn escape_query(text: &str) -> String {
    let mut segments = text.split(QUERY_MARKER);
    let head = segments.next().unwrap_or_default();
    let Some(query) = segments.next() else {
        return text.to_string();
    };

    let mut out = String::with_capacity(text.len() + 8);
    out.push_str(head);
    out.push_str(&query.replace('"', "\\\""));
    for rest in segments {
        out.push_str(rest);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
