//! Card rendering strategies.

use core::fmt::Write as _;

use serde_json::Value;

use crate::escape::{EscapeFn, value_text};

/// Produces the inner markup of one result card.
///
/// Implemented for any `Fn(&Value, EscapeFn) -> String`, so a closure is the
/// usual way to supply one:
///
/// ```
/// use gridsearch_core::{CardRenderer, EscapeFn, escape_html};
/// use serde_json::{Value, json};
///
/// let renderer = |item: &Value, esc: EscapeFn| {
///     format!("<h3>{}</h3>", esc(item["name"].as_str().unwrap_or_default()))
/// };
/// assert_eq!(
///     renderer.render_card(&json!({"name": "Moe"}), escape_html),
///     "<h3>Moe</h3>"
/// );
/// ```
pub trait CardRenderer {
    /// Returns the markup for `item`. Untrusted fields must go through `escape`.
    fn render_card(&self, item: &Value, escape: EscapeFn) -> String;
}

impl<F> CardRenderer for F
where
    F: Fn(&Value, EscapeFn) -> String,
{
    fn render_card(&self, item: &Value, escape: EscapeFn) -> String {
        self(item, escape)
    }
}

/// Renderer for "attachable" items: `{type, id, label, img, subtitle}`.
///
/// Missing image or subtitle fields are simply left out of the card.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttachableCard;

impl CardRenderer for AttachableCard {
    fn render_card(&self, item: &Value, escape: EscapeFn) -> String {
        let field = |key: &str| escape(&value_text(&item[key]));
        let label = field("label");
        let mut html = String::new();

        let img = field("img");
        if !img.is_empty() {
            let _ = write!(
                html,
                r#"<img class="card-img" src="{img}" alt="{label}" loading="lazy">"#
            );
        }

        let _ = write!(
            html,
            r#"<div class="card-body" data-type="{}" data-id="{}"><h3 class="card-title">{label}</h3>"#,
            field("type"),
            field("id"),
        );

        let subtitle = field("subtitle");
        if !subtitle.is_empty() {
            let _ = write!(html, r#"<p class="muted">{subtitle}</p>"#);
        }

        html.push_str("</div>");
        html
    }
}
