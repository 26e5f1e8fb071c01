use gridsearch_core::{CardRenderer, SearchConfig, SearchOptions, SearchWidget};
use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;

use crate::{
    dom::WebDocument, error::WebError, fetch::FetchClient, logging::install_logging,
    renderer::JsCardRenderer, timer::BrowserScheduler,
};

/// A search widget wired to the browser.
pub type WebSearchWidget = SearchWidget<WebDocument, BrowserScheduler, FetchClient>;

/// Attaches a search widget to the current page.
///
/// Returns `Ok(None)` when the page lacks the configured input or grid.
///
/// # Errors
///
/// Returns an error when no DOM is available.
pub fn attach(
    config: SearchConfig,
    renderer: impl CardRenderer + 'static,
) -> Result<Option<WebSearchWidget>, WebError> {
    let document = WebDocument::new()?;
    let client = FetchClient::new(document.window().clone());
    Ok(SearchWidget::attach(
        document,
        BrowserScheduler,
        client,
        config,
        renderer,
    ))
}

/// JavaScript entry point.
///
/// ```js
/// attachGridSearch({
///   inputId: "character-search",
///   gridId: "character-grid",
///   pagerSelector: ".pagination",
///   searchUrl: "/attachables/search/",
///   type: "characters",
///   renderCardHtml: (item, esc) => `<h3>${esc(item.label)}</h3>`,
/// });
/// ```
///
/// Resolves to `true` when the widget attached and `false` when the page has
/// no matching markup.
///
/// # Errors
///
/// Throws when `renderCardHtml` is not a function, the options fail
/// validation, or no DOM is available.
#[wasm_bindgen(js_name = attachGridSearch)]
pub fn attach_grid_search(options: JsValue) -> Result<bool, WebError> {
    install_logging();

    let render = Reflect::get(&options, &JsValue::from_str("renderCardHtml"))?
        .dyn_into::<Function>()
        .map_err(|_| WebError::InvalidOptions("`renderCardHtml` must be a function".to_owned()))?;

    let options: SearchOptions = serde_wasm_bindgen::from_value(options)
        .map_err(|e| WebError::InvalidOptions(e.to_string()))?;
    let config = SearchConfig::try_from(options)?;

    Ok(attach(config, JsCardRenderer::new(render))?.is_some())
}
