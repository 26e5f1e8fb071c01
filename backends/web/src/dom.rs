use gridsearch_core::DomError;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Window};

use crate::error::WebError;

fn dom_error(value: wasm_bindgen::JsValue) -> DomError {
    WebError::from(value).into()
}

/// The browser page, reached through `web-sys`.
#[derive(Debug, Clone)]
pub struct WebDocument {
    window: Window,
    document: web_sys::Document,
}

impl WebDocument {
    /// Binds to the current window's document.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::DomUnavailable`] outside of a browser main thread.
    pub fn new() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::DomUnavailable)?;
        let document = window.document().ok_or(WebError::DomUnavailable)?;
        Ok(Self { window, document })
    }

    /// Returns the owning window.
    #[must_use]
    pub const fn window(&self) -> &Window {
        &self.window
    }
}

impl gridsearch_core::Document for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement::from)
    }

    fn query_selector(&self, selector: &str) -> Option<WebElement> {
        match self.document.query_selector(selector) {
            Ok(found) => found.map(WebElement::from),
            Err(err) => {
                tracing::debug!(selector, error = ?err, "invalid selector");
                None
            }
        }
    }

    fn create_element(&self, tag: &str) -> Result<WebElement, DomError> {
        self.document
            .create_element(tag)
            .map(WebElement::from)
            .map_err(dom_error)
    }

    fn pathname(&self) -> String {
        self.window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_owned())
    }

    fn navigate(&self, href: &str) -> Result<(), DomError> {
        self.window.location().set_href(href).map_err(dom_error)
    }
}

/// A DOM element handle.
#[derive(Debug, Clone)]
pub struct WebElement {
    element: web_sys::Element,
}

impl WebElement {
    /// Returns the wrapped element.
    #[must_use]
    pub const fn as_element(&self) -> &web_sys::Element {
        &self.element
    }
}

impl From<web_sys::Element> for WebElement {
    fn from(element: web_sys::Element) -> Self {
        Self { element }
    }
}

impl gridsearch_core::Element for WebElement {
    fn value(&self) -> String {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn set_class_name(&self, class_name: &str) {
        self.element.set_class_name(class_name);
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        self.element.set_attribute(name, value).map_err(dom_error)
    }

    fn set_inner_html(&self, html: &str) {
        self.element.set_inner_html(html);
    }

    fn set_text_content(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn append_child(&self, child: &Self) -> Result<(), DomError> {
        self.element
            .append_child(&child.element)
            .map(drop)
            .map_err(dom_error)
    }

    fn set_display(&self, display: Option<&str>) -> Result<(), DomError> {
        let element = self
            .element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| DomError::new("element has no inline style"))?;
        let style = element.style();
        match display {
            Some(value) => style.set_property("display", value),
            None => style.remove_property("display").map(drop),
        }
        .map_err(dom_error)
    }

    fn add_input_listener(&self, mut listener: Box<dyn FnMut()>) -> Result<(), DomError> {
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| listener());
        self.element
            .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        // The listener lives as long as the page.
        closure.forget();
        Ok(())
    }
}
