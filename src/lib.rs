#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::future_not_send)]

pub mod logging;

pub mod prelude {
    //! Commonly used types for attaching a widget.
    //!
    //! ```rust
    //! use gridsearch::prelude::*;
    //!
    //! let config = SearchConfig::builder("search", "grid", "/attachables/search/", "episodes")
    //!     .with_pager_selector(".pagination")
    //!     .build()
    //!     .expect("valid config");
    //! assert_eq!(config.kind(), "episodes");
    //! ```
    pub use gridsearch_core::{
        AttachableCard, CardRenderer, Document, Element, EscapeFn, SearchClient, SearchConfig,
        SearchError, SearchWidget, escape_html,
    };

    #[cfg(target_arch = "wasm32")]
    pub use gridsearch_web::{WebSearchWidget, attach};
}

#[doc(inline)]
pub use gridsearch_core::*;
pub use gridsearch_url as url;

#[cfg(target_arch = "wasm32")]
pub use gridsearch_web as web;
