//! HTML escaping for untrusted result text.
//!
//! Card renderers receive [`escape_html`] alongside every item and must run it
//! over each field they interpolate into markup.

use serde_json::Value;

/// Signature of the escape helper handed to card renderers.
pub type EscapeFn = fn(&str) -> String;

/// Escapes `& < > " '` to their HTML entities.
///
/// ```
/// use gridsearch_core::escape_html;
///
/// assert_eq!(escape_html("<script>&\"'"), "&lt;script&gt;&amp;&quot;&#039;");
/// ```
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Coerces a JSON value to text.
///
/// `null` becomes the empty string, strings are used as-is and every other
/// value is rendered as its JSON text.
#[must_use]
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Shorthand for `escape_html(&value_text(value))`.
#[must_use]
pub fn escape_value(value: &Value) -> String {
    escape_html(&value_text(value))
}
