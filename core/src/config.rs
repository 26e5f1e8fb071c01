//! Widget configuration.
//!
//! Rust callers go through [`SearchConfig::builder`]; JavaScript and JSON
//! callers deserialize [`SearchOptions`] and convert it with `TryFrom`.

use core::time::Duration;

use gridsearch_url::Url;
use serde::Deserialize;

use crate::error::ConfigError;

/// Quiet period used when none is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);
/// Placeholder shown when a search returns nothing.
pub const DEFAULT_EMPTY_TEXT: &str = "Sin resultados";
/// Placeholder shown when the search request fails.
pub const DEFAULT_ERROR_TEXT: &str = "No se pudo completar la búsqueda";
/// Element created for each result.
pub const DEFAULT_CARD_TAG: &str = "article";
/// Class list of each result card.
pub const DEFAULT_CARD_CLASS: &str = "card card-trigger";
/// Class of the placeholder paragraph.
pub const DEFAULT_PLACEHOLDER_CLASS: &str = "muted";

/// Validated, immutable widget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    input_id: String,
    grid_id: String,
    pager_selector: Option<String>,
    endpoint: Url,
    kind: String,
    debounce: Duration,
    empty_text: String,
    error_text: String,
    card_tag: String,
    card_class: String,
    placeholder_class: String,
}

impl SearchConfig {
    /// Starts a builder with the required options.
    #[must_use]
    pub fn builder(
        input_id: impl Into<String>,
        grid_id: impl Into<String>,
        search_url: impl Into<String>,
        kind: impl Into<String>,
    ) -> SearchConfigBuilder {
        SearchConfigBuilder::new(input_id, grid_id, search_url, kind)
    }

    /// Id of the text input.
    #[must_use]
    pub fn input_id(&self) -> &str {
        &self.input_id
    }

    /// Id of the result grid container.
    #[must_use]
    pub fn grid_id(&self) -> &str {
        &self.grid_id
    }

    /// Selector of the pager element, if the page has one.
    #[must_use]
    pub fn pager_selector(&self) -> Option<&str> {
        self.pager_selector.as_deref()
    }

    /// Search endpoint without the search parameters.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Discriminator sent as the `type` parameter.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Quiet period between the last keystroke and the search.
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Placeholder text for an empty result set.
    #[must_use]
    pub fn empty_text(&self) -> &str {
        &self.empty_text
    }

    /// Placeholder text for a failed request.
    #[must_use]
    pub fn error_text(&self) -> &str {
        &self.error_text
    }

    /// Tag name of each result card.
    #[must_use]
    pub fn card_tag(&self) -> &str {
        &self.card_tag
    }

    /// Class list of each result card.
    #[must_use]
    pub fn card_class(&self) -> &str {
        &self.card_class
    }

    /// Class of the placeholder paragraph.
    #[must_use]
    pub fn placeholder_class(&self) -> &str {
        &self.placeholder_class
    }
}

/// Builder for [`SearchConfig`].
#[derive(Debug, Clone)]
pub struct SearchConfigBuilder {
    input_id: String,
    grid_id: String,
    pager_selector: Option<String>,
    search_url: String,
    kind: String,
    debounce: Duration,
    empty_text: String,
    error_text: String,
    card_tag: String,
    card_class: String,
    placeholder_class: String,
}

impl SearchConfigBuilder {
    /// Creates a builder with default optional settings.
    #[must_use]
    pub fn new(
        input_id: impl Into<String>,
        grid_id: impl Into<String>,
        search_url: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            input_id: input_id.into(),
            grid_id: grid_id.into(),
            pager_selector: None,
            search_url: search_url.into(),
            kind: kind.into(),
            debounce: DEFAULT_DEBOUNCE,
            empty_text: DEFAULT_EMPTY_TEXT.to_owned(),
            error_text: DEFAULT_ERROR_TEXT.to_owned(),
            card_tag: DEFAULT_CARD_TAG.to_owned(),
            card_class: DEFAULT_CARD_CLASS.to_owned(),
            placeholder_class: DEFAULT_PLACEHOLDER_CLASS.to_owned(),
        }
    }

    /// Sets the pager selector. An empty selector means "no pager".
    #[must_use]
    pub fn with_pager_selector(mut self, selector: impl Into<String>) -> Self {
        let selector = selector.into();
        self.pager_selector = (!selector.is_empty()).then_some(selector);
        self
    }

    /// Overrides the quiet period.
    #[must_use]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Overrides the empty-results placeholder.
    #[must_use]
    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Overrides the failed-request placeholder.
    #[must_use]
    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = text.into();
        self
    }

    /// Overrides the card tag name.
    #[must_use]
    pub fn with_card_tag(mut self, tag: impl Into<String>) -> Self {
        self.card_tag = tag.into();
        self
    }

    /// Overrides the card class list.
    #[must_use]
    pub fn with_card_class(mut self, class: impl Into<String>) -> Self {
        self.card_class = class.into();
        self
    }

    /// Overrides the placeholder class.
    #[must_use]
    pub fn with_placeholder_class(mut self, class: impl Into<String>) -> Self {
        self.placeholder_class = class.into();
        self
    }

    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns an error if an element id or the search URL is empty, or the
    /// search URL does not parse.
    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        if self.input_id.is_empty() {
            return Err(ConfigError::MissingField("inputId"));
        }
        if self.grid_id.is_empty() {
            return Err(ConfigError::MissingField("gridId"));
        }
        if self.search_url.is_empty() {
            return Err(ConfigError::MissingField("searchUrl"));
        }
        let endpoint: Url = self.search_url.parse()?;

        Ok(SearchConfig {
            input_id: self.input_id,
            grid_id: self.grid_id,
            pager_selector: self.pager_selector,
            endpoint,
            kind: self.kind,
            debounce: self.debounce,
            empty_text: self.empty_text,
            error_text: self.error_text,
            card_tag: self.card_tag,
            card_class: self.card_class,
            placeholder_class: self.placeholder_class,
        })
    }
}

/// Attach options as they arrive from JavaScript or JSON.
///
/// Keys are camelCase (`inputId`, `gridId`, `pagerSelector`, `searchUrl`,
/// `type`, `debounceMs`, `emptyText`, `errorText`); unknown keys such as the
/// render callback are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    /// Id of the text input.
    pub input_id: String,
    /// Id of the result grid container.
    pub grid_id: String,
    /// Selector of the pager element.
    #[serde(default)]
    pub pager_selector: Option<String>,
    /// Search endpoint.
    pub search_url: String,
    /// Discriminator sent as the `type` parameter.
    #[serde(rename = "type")]
    pub kind: String,
    /// Quiet period in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,
    /// Empty-results placeholder.
    #[serde(default)]
    pub empty_text: Option<String>,
    /// Failed-request placeholder.
    #[serde(default)]
    pub error_text: Option<String>,
}

impl TryFrom<SearchOptions> for SearchConfig {
    type Error = ConfigError;

    fn try_from(options: SearchOptions) -> Result<Self, Self::Error> {
        let mut builder =
            Self::builder(options.input_id, options.grid_id, options.search_url, options.kind);
        if let Some(selector) = options.pager_selector {
            builder = builder.with_pager_selector(selector);
        }
        if let Some(ms) = options.debounce_ms {
            builder = builder.with_debounce(Duration::from_millis(ms));
        }
        if let Some(text) = options.empty_text {
            builder = builder.with_empty_text(text);
        }
        if let Some(text) = options.error_text {
            builder = builder.with_error_text(text);
        }
        builder.build()
    }
}
