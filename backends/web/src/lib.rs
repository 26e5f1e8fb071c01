#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Browser backend for `gridsearch`.
//!
//! Implements the core's seams over `web-sys`: [`WebDocument`] for the page,
//! [`BrowserScheduler`] for `setTimeout` and task spawning, and
//! [`FetchClient`] for the search requests. [`attach`] wires them into a
//! [`gridsearch_core::SearchWidget`]; `attachGridSearch` exposes the same to
//! JavaScript with a `renderCardHtml(item, esc)` callback.
//!
//! Targets `wasm32-unknown-unknown`; on other targets the crate builds but
//! every DOM call fails at runtime.

mod app;
mod dom;
mod error;
mod fetch;
mod logging;
mod renderer;
mod timer;

pub use app::{WebSearchWidget, attach, attach_grid_search};
pub use dom::{WebDocument, WebElement};
pub use error::WebError;
pub use fetch::FetchClient;
pub use logging::install_logging;
pub use renderer::JsCardRenderer;
pub use timer::BrowserScheduler;
