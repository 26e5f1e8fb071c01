//! The slice of the DOM the widget touches.
//!
//! The browser backend implements these traits over `web-sys`;
//! [`MemoryDocument`] implements them in memory for headless runs and tests.

mod memory;

pub use memory::{MemoryDocument, MemoryElement};

use crate::error::DomError;

/// A handle to one element of the page.
///
/// Handles are cheap to clone and all clones refer to the same element.
pub trait Element: Clone + 'static {
    /// Current value of a form control, or the empty string for other elements.
    fn value(&self) -> String;

    /// Replaces the `class` attribute.
    fn set_class_name(&self, class_name: &str);

    /// Sets an attribute.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the attribute name.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError>;

    /// Replaces the element's children with parsed markup.
    fn set_inner_html(&self, html: &str);

    /// Replaces the element's children with a single text node.
    fn set_text_content(&self, text: &str);

    /// Appends `child` as the last child.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the insertion.
    fn append_child(&self, child: &Self) -> Result<(), DomError>;

    /// Sets the inline `display` style; `None` removes it so the stylesheet
    /// value applies again.
    ///
    /// # Errors
    ///
    /// Returns an error if the element has no inline style.
    fn set_display(&self, display: Option<&str>) -> Result<(), DomError>;

    /// Registers a listener for the `input` event. The listener lives as long
    /// as the page.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the listener.
    fn add_input_listener(&self, listener: Box<dyn FnMut()>) -> Result<(), DomError>;
}

/// The page the widget is attached to.
pub trait Document: Clone + 'static {
    /// Element handle type of this document.
    type Element: Element;

    /// Looks up an element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Returns the first element matching a CSS selector.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Creates a detached element.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag name is invalid.
    fn create_element(&self, tag: &str) -> Result<Self::Element, DomError>;

    /// Path of the current location, without query string or fragment.
    fn pathname(&self) -> String;

    /// Starts a full navigation to `href`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the navigation.
    fn navigate(&self, href: &str) -> Result<(), DomError>;
}
