use gridsearch_core::{CardRenderer, EscapeFn, escape_html};
use js_sys::{Function, Object};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Coerces a JavaScript value to text: `null` and `undefined` become the
/// empty string, everything else goes through `toString()`.
fn js_text(value: &JsValue) -> String {
    if value.is_null() || value.is_undefined() {
        return String::new();
    }
    value
        .as_string()
        .unwrap_or_else(|| value.unchecked_ref::<Object>().to_string().into())
}

/// Card renderer backed by a JavaScript function `(item, esc) => string`.
///
/// `esc` is a JavaScript wrapper around [`escape_html`], created once per
/// renderer.
#[derive(Debug, Clone)]
pub struct JsCardRenderer {
    render: Function,
    escape: JsValue,
}

impl JsCardRenderer {
    /// Wraps a JavaScript render function.
    #[must_use]
    pub fn new(render: Function) -> Self {
        let escape = Closure::<dyn Fn(JsValue) -> String>::new(|value: JsValue| {
            escape_html(&js_text(&value))
        })
        .into_js_value();
        Self { render, escape }
    }
}

impl CardRenderer for JsCardRenderer {
    fn render_card(&self, item: &Value, _escape: EscapeFn) -> String {
        let item = match item.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
            Ok(item) => item,
            Err(err) => {
                tracing::warn!(%err, "could not hand a result item to JavaScript");
                return String::new();
            }
        };
        match self.render.call2(&JsValue::NULL, &item, &self.escape) {
            Ok(html) => js_text(&html),
            Err(err) => {
                tracing::warn!(error = ?err, "renderCardHtml threw");
                String::new()
            }
        }
    }
}
