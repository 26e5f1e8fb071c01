//! Debounced, incremental search over a grid of result cards.
//!
//! A [`SearchWidget`] binds a text input to a result grid. As the user types,
//! input is coalesced by a [`Debouncer`], the trimmed text is sent to a search
//! endpoint through a [`SearchClient`], and the grid is replaced in place with
//! one card per result, rendered by a caller-supplied [`CardRenderer`].
//!
//! The widget is platform-agnostic: the page is reached through the
//! [`Document`] and [`Element`] traits and the event loop through
//! [`Scheduler`]. [`MemoryDocument`] and [`ManualScheduler`] implement them
//! in memory for headless use and tests; the browser implementation lives in
//! `gridsearch-web`.
//!
//! ```
//! use std::time::Duration;
//! use gridsearch_core::{
//!     AttachableCard, ManualScheduler, MemoryDocument, SearchClient, SearchConfig, SearchError,
//!     SearchWidget,
//! };
//!
//! struct Endpoint;
//!
//! impl SearchClient for Endpoint {
//!     async fn fetch_text(&self, _url: &str) -> Result<String, SearchError> {
//!         Ok(r#"{"results": [{"type": "characters", "id": 1, "label": "Homer"}]}"#.to_owned())
//!     }
//! }
//!
//! let document = MemoryDocument::new("/characters/");
//! let input = document.insert_by_id("search", "input");
//! let grid = document.insert_by_id("grid", "div");
//! let scheduler = ManualScheduler::new();
//!
//! let config = SearchConfig::builder("search", "grid", "/attachables/search/", "characters")
//!     .build()?;
//! let _widget = SearchWidget::attach(document, scheduler.clone(), Endpoint, config, AttachableCard);
//!
//! input.type_text("homer");
//! scheduler.advance(Duration::from_millis(250));
//! assert_eq!(grid.children().len(), 1);
//! # Ok::<(), gridsearch_core::ConfigError>(())
//! ```

mod card;
mod config;
mod debounce;
mod dom;
mod error;
mod escape;
mod query;
mod render;
mod timer;
mod widget;

pub use card::{AttachableCard, CardRenderer};
pub use config::{
    DEFAULT_CARD_CLASS, DEFAULT_CARD_TAG, DEFAULT_DEBOUNCE, DEFAULT_EMPTY_TEXT, DEFAULT_ERROR_TEXT,
    DEFAULT_PLACEHOLDER_CLASS, SearchConfig, SearchConfigBuilder, SearchOptions,
};
pub use debounce::{DebounceState, Debouncer};
pub use dom::{Document, Element, MemoryDocument, MemoryElement};
pub use error::{ConfigError, DomError, SearchError};
pub use escape::{EscapeFn, escape_html, escape_value, value_text};
pub use query::{SearchClient, decode_results, remote_search, search_url};
pub use render::{Grid, GridStyle};
pub use timer::{ManualScheduler, ManualTimeout, Scheduler};
pub use widget::SearchWidget;

pub use gridsearch_url::Url;
