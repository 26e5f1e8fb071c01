//! The search widget: input → debounce → fetch → render.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::card::CardRenderer;
use crate::config::SearchConfig;
use crate::debounce::{DebounceState, Debouncer};
use crate::dom::{Document, Element};
use crate::query::{SearchClient, remote_search};
use crate::render::{Grid, GridStyle};
use crate::timer::Scheduler;

struct Inner<D: Document, S: Scheduler, C: SearchClient> {
    config: SearchConfig,
    document: D,
    input: D::Element,
    grid: Grid<D>,
    pager: Option<D::Element>,
    scheduler: S,
    client: C,
    renderer: Box<dyn CardRenderer>,
    debouncer: Debouncer<S>,
    sequence: Cell<u64>,
}

/// A search field bound to a result grid.
///
/// Every input event re-arms a debounce timer; when it fires the trimmed
/// input is sent to the search endpoint and the grid is replaced with the
/// results. An empty input restores the server-rendered listing by navigating
/// back to the page's own path.
///
/// Each dispatched search is numbered. A response that arrives after a newer
/// search was dispatched is dropped rather than rendered.
pub struct SearchWidget<D: Document, S: Scheduler, C: SearchClient> {
    inner: Rc<Inner<D, S, C>>,
}

impl<D: Document, S: Scheduler, C: SearchClient> Clone for SearchWidget<D, S, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<D: Document, S: Scheduler, C: SearchClient> SearchWidget<D, S, C> {
    /// Binds a widget to the page.
    ///
    /// Returns `None` without side effects when the input or grid element is
    /// missing, so pages without the widget's markup can call this
    /// unconditionally. A configured pager that cannot be found is treated as
    /// absent.
    pub fn attach(
        document: D,
        scheduler: S,
        client: C,
        config: SearchConfig,
        renderer: impl CardRenderer + 'static,
    ) -> Option<Self> {
        let Some(input) = document.element_by_id(config.input_id()) else {
            tracing::debug!(id = config.input_id(), "search input not found, not attaching");
            return None;
        };
        let Some(grid_element) = document.element_by_id(config.grid_id()) else {
            tracing::debug!(id = config.grid_id(), "result grid not found, not attaching");
            return None;
        };
        let pager = config
            .pager_selector()
            .and_then(|selector| document.query_selector(selector));

        let grid = Grid::new(document.clone(), grid_element, GridStyle::from_config(&config));
        let debouncer = Debouncer::new(scheduler.clone(), config.debounce());

        let widget = Self {
            inner: Rc::new(Inner {
                config,
                document,
                input,
                grid,
                pager,
                scheduler,
                client,
                renderer: Box::new(renderer),
                debouncer,
                sequence: Cell::new(0),
            }),
        };

        let listener = widget.clone();
        if let Err(err) = widget
            .inner
            .input
            .add_input_listener(Box::new(move || listener.schedule_search()))
        {
            tracing::warn!(%err, "could not listen to the search input");
            return None;
        }

        tracing::debug!(
            input = widget.inner.config.input_id(),
            grid = widget.inner.config.grid_id(),
            kind = widget.inner.config.kind(),
            "search widget attached"
        );
        Some(widget)
    }

    /// The configuration the widget was attached with.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.inner.config
    }

    /// Whether a search is waiting for the quiet period to end.
    #[must_use]
    pub fn debounce_state(&self) -> DebounceState {
        self.inner.debouncer.state()
    }

    /// Number of searches dispatched so far, including empty-query resets.
    #[must_use]
    pub fn dispatched(&self) -> u64 {
        self.inner.sequence.get()
    }

    /// Re-arms the debounce timer. Called for every input event.
    pub fn schedule_search(&self) {
        let widget = self.clone();
        self.inner.debouncer.schedule(move || widget.perform_search());
    }

    fn perform_search(&self) {
        let inner = &self.inner;
        let query = trim_query(&inner.input.value()).to_owned();
        let sequence = inner.sequence.get() + 1;
        inner.sequence.set(sequence);

        if query.is_empty() {
            self.set_pager_visible(true);
            let path = inner.document.pathname();
            tracing::debug!(path = %path, "empty query, restoring listing");
            if let Err(err) = inner.document.navigate(&path) {
                tracing::warn!(%err, "could not navigate back to the listing");
            }
            return;
        }

        self.set_pager_visible(false);

        let task = Rc::clone(inner);
        inner.scheduler.spawn_local(Box::pin(async move {
            let outcome = remote_search(
                &task.client,
                task.config.endpoint(),
                task.config.kind(),
                &query,
            )
            .await;

            let latest = task.sequence.get();
            if sequence != latest {
                tracing::debug!(sequence, latest, "discarding stale search response");
                return;
            }

            let rendered = match outcome {
                Ok(items) => {
                    tracing::debug!(count = items.len(), "rendering search results");
                    task.grid
                        .render(&items, &*task.renderer, task.config.empty_text())
                }
                Err(err) => {
                    tracing::warn!(%err, "search failed");
                    task.grid.show_message(task.config.error_text())
                }
            };
            if let Err(err) = rendered {
                tracing::warn!(%err, "could not update the result grid");
            }
        }));
    }

    fn set_pager_visible(&self, visible: bool) {
        let Some(pager) = &self.inner.pager else {
            return;
        };
        let display = if visible { None } else { Some("none") };
        if let Err(err) = pager.set_display(display) {
            tracing::warn!(%err, "could not toggle the pager");
        }
    }
}

/// Trims the characters a browser's `String.prototype.trim` removes: Unicode
/// whitespace and the byte-order mark, but not U+0085.
fn trim_query(value: &str) -> &str {
    value.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}')
}

impl<D: Document, S: Scheduler, C: SearchClient> fmt::Debug for SearchWidget<D, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchWidget")
            .field("config", &self.inner.config)
            .field("has_pager", &self.inner.pager.is_some())
            .field("debounce", &self.inner.debouncer)
            .field("dispatched", &self.inner.sequence.get())
            .finish_non_exhaustive()
    }
}
