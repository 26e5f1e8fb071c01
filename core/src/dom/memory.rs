use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::dom::{Document, Element};
use crate::error::DomError;
use crate::escape::escape_html;

struct Node {
    tag: String,
    class_name: String,
    attributes: Vec<(String, String)>,
    markup: String,
    children: Vec<MemoryElement>,
    value: String,
    display: Option<String>,
    listeners: Vec<Box<dyn FnMut()>>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            class_name: String::new(),
            attributes: Vec::new(),
            markup: String::new(),
            children: Vec::new(),
            value: String::new(),
            display: None,
            listeners: Vec::new(),
        }
    }
}

/// An element of a [`MemoryDocument`].
///
/// Markup is stored verbatim rather than parsed: [`inner_html`](Self::inner_html)
/// returns exactly what was written, followed by any appended children.
#[derive(Clone)]
pub struct MemoryElement {
    node: Rc<RefCell<Node>>,
}

impl MemoryElement {
    fn new(tag: &str) -> Self {
        Self {
            node: Rc::new(RefCell::new(Node::new(tag))),
        }
    }

    /// Tag name the element was created with.
    #[must_use]
    pub fn tag(&self) -> String {
        self.node.borrow().tag.clone()
    }

    /// Current `class` attribute.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.node.borrow().class_name.clone()
    }

    /// Returns an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.node
            .borrow()
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    /// Inline `display` style, if set.
    #[must_use]
    pub fn display(&self) -> Option<String> {
        self.node.borrow().display.clone()
    }

    /// Appended child elements, in order.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        self.node.borrow().children.clone()
    }

    /// Serialized contents.
    #[must_use]
    pub fn inner_html(&self) -> String {
        let node = self.node.borrow();
        let mut html = node.markup.clone();
        for child in &node.children {
            html.push_str(&child.outer_html());
        }
        html
    }

    /// Serialized element including its own tag.
    #[must_use]
    pub fn outer_html(&self) -> String {
        let inner = self.inner_html();
        let node = self.node.borrow();
        let mut html = format!("<{}", node.tag);
        if !node.class_name.is_empty() {
            html.push_str(&format!(" class=\"{}\"", escape_html(&node.class_name)));
        }
        for (name, value) in &node.attributes {
            html.push_str(&format!(" {name}=\"{}\"", escape_html(value)));
        }
        html.push('>');
        html.push_str(&inner);
        html.push_str(&format!("</{}>", node.tag));
        html
    }

    /// Sets the value as if the user had typed it, without firing listeners.
    pub fn set_value(&self, value: &str) {
        self.node.borrow_mut().value = value.to_owned();
    }

    /// Sets the value and fires the `input` listeners.
    pub fn type_text(&self, value: &str) {
        self.set_value(value);
        self.dispatch_input();
    }

    fn write_attribute(&self, name: &str, value: &str) {
        let mut node = self.node.borrow_mut();
        if let Some(slot) = node.attributes.iter_mut().find(|(key, _)| key == name) {
            slot.1 = value.to_owned();
        } else {
            node.attributes.push((name.to_owned(), value.to_owned()));
        }
    }

    /// Fires the `input` listeners.
    pub fn dispatch_input(&self) {
        let mut listeners = std::mem::take(&mut self.node.borrow_mut().listeners);
        for listener in &mut listeners {
            listener();
        }
        let mut node = self.node.borrow_mut();
        listeners.append(&mut node.listeners);
        node.listeners = listeners;
    }

    /// Number of registered `input` listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.node.borrow().listeners.len()
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MemoryElement").field(&self.outer_html()).finish()
    }
}

impl Element for MemoryElement {
    fn value(&self) -> String {
        self.node.borrow().value.clone()
    }

    fn set_class_name(&self, class_name: &str) {
        self.node.borrow_mut().class_name = class_name.to_owned();
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(DomError::new(format!("invalid attribute name `{name}`")));
        }
        self.write_attribute(name, value);
        Ok(())
    }

    fn set_inner_html(&self, html: &str) {
        let mut node = self.node.borrow_mut();
        node.children.clear();
        node.markup = html.to_owned();
    }

    fn set_text_content(&self, text: &str) {
        self.set_inner_html(&escape_html(text));
    }

    fn append_child(&self, child: &Self) -> Result<(), DomError> {
        if Rc::ptr_eq(&self.node, &child.node) {
            return Err(DomError::new("cannot append an element to itself"));
        }
        self.node.borrow_mut().children.push(child.clone());
        Ok(())
    }

    fn set_display(&self, display: Option<&str>) -> Result<(), DomError> {
        self.node.borrow_mut().display = display.map(str::to_owned);
        Ok(())
    }

    fn add_input_listener(&self, listener: Box<dyn FnMut()>) -> Result<(), DomError> {
        self.node.borrow_mut().listeners.push(listener);
        Ok(())
    }
}

#[derive(Debug, Default)]
struct DocumentState {
    pathname: String,
    by_id: HashMap<String, MemoryElement>,
    by_selector: HashMap<String, MemoryElement>,
    navigations: Vec<String>,
}

/// An in-memory page.
///
/// Elements are registered up front under an id or a selector; the document
/// records navigations instead of performing them.
///
/// ```
/// use gridsearch_core::{Document, MemoryDocument};
///
/// let document = MemoryDocument::new("/characters/");
/// document.insert_by_id("search", "input");
/// assert!(document.element_by_id("search").is_some());
/// assert!(document.element_by_id("grid").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    state: Rc<RefCell<DocumentState>>,
}

impl MemoryDocument {
    /// Creates an empty document located at `pathname`.
    #[must_use]
    pub fn new(pathname: impl Into<String>) -> Self {
        let document = Self::default();
        document.state.borrow_mut().pathname = pathname.into();
        document
    }

    /// Creates an element and registers it under `id`.
    pub fn insert_by_id(&self, id: &str, tag: &str) -> MemoryElement {
        let element = MemoryElement::new(tag);
        element.write_attribute("id", id);
        self.state
            .borrow_mut()
            .by_id
            .insert(id.to_owned(), element.clone());
        element
    }

    /// Creates an element and registers it under `selector`.
    pub fn insert_by_selector(&self, selector: &str, tag: &str) -> MemoryElement {
        let element = MemoryElement::new(tag);
        self.state
            .borrow_mut()
            .by_selector
            .insert(selector.to_owned(), element.clone());
        element
    }

    /// Every href passed to [`Document::navigate`], oldest first.
    #[must_use]
    pub fn navigations(&self) -> Vec<String> {
        self.state.borrow().navigations.clone()
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.state.borrow().by_id.get(id).cloned()
    }

    fn query_selector(&self, selector: &str) -> Option<MemoryElement> {
        self.state.borrow().by_selector.get(selector).cloned()
    }

    fn create_element(&self, tag: &str) -> Result<MemoryElement, DomError> {
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(DomError::new(format!("invalid tag name `{tag}`")));
        }
        Ok(MemoryElement::new(tag))
    }

    fn pathname(&self) -> String {
        self.state.borrow().pathname.clone()
    }

    fn navigate(&self, href: &str) -> Result<(), DomError> {
        self.state.borrow_mut().navigations.push(href.to_owned());
        Ok(())
    }
}
