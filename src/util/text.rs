//! String helpers

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static ENCLOSING_QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)^\s*"(.*)"\s*$"#).expect("valid regex"));

/// Collapse every whitespace run to a single space
pub fn normalise_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").into_owned()
}

pub fn escape_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}

/// Strip one pair of enclosing quotes, if any, then unescape inner quotes
pub fn unescape_quotes(text: &str) -> String {
    let inner = match ENCLOSING_QUOTES.captures(text) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
        None => text,
    };
    inner.replace("\\\"", "\"")
}

/// Re-serialise `text` compactly, keys in their original order, if it is
/// JSON; otherwise return it as is
pub fn sanitise_json(text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => value.to_string(),
        Err(_) => text.to_string(),
    }
}

/// `"1 item"`, `"3 items"`
pub fn pluralise(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Loose truthiness: booleans as is, strings equal to "true" in any case,
/// non-zero numbers; everything else is false
pub fn cast_to_bool(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::String(s) => s.to_lowercase() == "true",
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}
