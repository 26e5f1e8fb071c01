use gridsearch_core::{SearchClient, SearchError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

/// Issues search requests through the window's `fetch`.
#[derive(Debug, Clone)]
pub struct FetchClient {
    window: Window,
}

impl FetchClient {
    /// Creates a client bound to `window`.
    #[must_use]
    pub const fn new(window: Window) -> Self {
        Self { window }
    }
}

impl SearchClient for FetchClient {
    async fn fetch_text(&self, url: &str) -> Result<String, SearchError> {
        let resp_value = JsFuture::from(self.window.fetch_with_str(url))
            .await
            .map_err(|e| SearchError::Network(format!("{e:?}")))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| SearchError::Network("fetch did not resolve to a Response".to_owned()))?;

        if !resp.ok() {
            tracing::debug!(status = resp.status(), url, "search endpoint returned an error status");
        }

        // An unreadable body is treated like an undecodable one.
        let body = match resp.text() {
            Ok(promise) => JsFuture::from(promise).await.ok().and_then(|text| text.as_string()),
            Err(_) => None,
        };
        Ok(body.unwrap_or_default())
    }
}
