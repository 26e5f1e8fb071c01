//! Grid reconciliation.

use serde_json::Value;

use crate::card::CardRenderer;
use crate::config::SearchConfig;
use crate::dom::{Document, Element};
use crate::error::DomError;
use crate::escape::escape_html;

/// Tag and class names used when building the grid contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridStyle {
    card_tag: String,
    card_class: String,
    placeholder_class: String,
}

impl GridStyle {
    /// Takes the tag and class names from a configuration.
    #[must_use]
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            card_tag: config.card_tag().to_owned(),
            card_class: config.card_class().to_owned(),
            placeholder_class: config.placeholder_class().to_owned(),
        }
    }
}

/// The result grid container.
#[derive(Debug, Clone)]
pub struct Grid<D: Document> {
    document: D,
    element: D::Element,
    style: GridStyle,
}

impl<D: Document> Grid<D> {
    /// Wraps an existing grid element.
    pub const fn new(document: D, element: D::Element, style: GridStyle) -> Self {
        Self {
            document,
            element,
            style,
        }
    }

    /// Replaces the grid contents with one card per item, in order, or with
    /// `empty_text` when there are no items.
    ///
    /// # Errors
    ///
    /// Returns an error if a card cannot be created or appended; cards built
    /// before the failure stay in the grid.
    pub fn render(
        &self,
        items: &[Value],
        renderer: &dyn CardRenderer,
        empty_text: &str,
    ) -> Result<(), DomError> {
        self.element.set_inner_html("");
        if items.is_empty() {
            return self.show_message(empty_text);
        }

        for item in items {
            let card = self.document.create_element(&self.style.card_tag)?;
            card.set_class_name(&self.style.card_class);
            card.set_attribute("role", "button")?;
            card.set_attribute("tabindex", "0")?;
            card.set_inner_html(&renderer.render_card(item, escape_html));
            self.element.append_child(&card)?;
        }
        Ok(())
    }

    /// Replaces the grid contents with a single informational paragraph.
    ///
    /// # Errors
    ///
    /// Returns an error if the paragraph cannot be created or appended.
    pub fn show_message(&self, text: &str) -> Result<(), DomError> {
        self.element.set_inner_html("");
        let paragraph = self.document.create_element("p")?;
        paragraph.set_class_name(&self.style.placeholder_class);
        paragraph.set_text_content(text);
        self.element.append_child(&paragraph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryDocument, MemoryElement};
    use crate::escape::EscapeFn;
    use serde_json::json;

    fn grid() -> (MemoryElement, Grid<MemoryDocument>) {
        let document = MemoryDocument::new("/characters/");
        let element = document.insert_by_id("grid", "div");
        let config = SearchConfig::builder("q", "grid", "/s/", "characters")
            .build()
            .expect("config should be valid");
        let grid = Grid::new(document, element.clone(), GridStyle::from_config(&config));
        (element, grid)
    }

    fn name_card(item: &Value, esc: EscapeFn) -> String {
        format!("<h3>{}</h3>", esc(item["name"].as_str().unwrap_or_default()))
    }

    #[test]
    fn empty_items_show_placeholder() {
        let (element, grid) = grid();
        element.set_inner_html("<div class=\"server-rendered\"></div>");
        grid.render(&[], &name_card, "Sin resultados")
            .expect("render should succeed");
        assert_eq!(element.inner_html(), r#"<p class="muted">Sin resultados</p>"#);
    }

    #[test]
    fn cards_follow_item_order_with_button_semantics() {
        let (element, grid) = grid();
        let items = [json!({"name": "Marge"}), json!({"name": "Homer"}), json!({"name": "Bart"})];
        grid.render(&items, &name_card, "none").expect("render should succeed");

        let cards = element.children();
        assert_eq!(cards.len(), 3);
        for (card, item) in cards.iter().zip(&items) {
            assert_eq!(card.tag(), "article");
            assert_eq!(card.class_name(), "card card-trigger");
            assert_eq!(card.attribute("role").as_deref(), Some("button"));
            assert_eq!(card.attribute("tabindex").as_deref(), Some("0"));
            assert_eq!(card.inner_html(), name_card(item, escape_html));
        }
    }

    #[test]
    fn rendering_twice_does_not_accumulate() {
        let (element, grid) = grid();
        let items = [json!({"name": "Lisa"}), json!({"name": "Maggie"})];
        grid.render(&items, &name_card, "none").expect("render should succeed");
        let once = element.inner_html();
        grid.render(&items, &name_card, "none").expect("render should succeed");
        assert_eq!(element.inner_html(), once);
        assert_eq!(element.children().len(), 2);
    }

    #[test]
    fn untrusted_text_reaches_the_grid_escaped() {
        let (element, grid) = grid();
        grid.render(&[json!({"name": "<script>alert(1)</script>"})], &name_card, "none")
            .expect("render should succeed");
        let html = element.inner_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn message_text_is_escaped() {
        let (element, grid) = grid();
        grid.show_message("<oops>").expect("message should render");
        assert_eq!(element.inner_html(), r#"<p class="muted">&lt;oops&gt;</p>"#);
    }
}
