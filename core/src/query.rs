//! Remote query: URL shaping, fetching and response decoding.

use gridsearch_url::Url;
use serde_json::Value;

use crate::error::SearchError;

/// Fetches response bodies from the search endpoint.
#[allow(async_fn_in_trait)]
pub trait SearchClient: 'static {
    /// Issues a GET for `url` and resolves to the response body.
    ///
    /// The HTTP status is not inspected. A body that cannot be read should be
    /// returned as the empty string, which decodes to zero results.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Network`] when the request itself is rejected.
    async fn fetch_text(&self, url: &str) -> Result<String, SearchError>;
}

/// Builds `<endpoint>?type=<kind>&q=<query>`.
#[must_use]
pub fn search_url(endpoint: &Url, kind: &str, query: &str) -> Url {
    endpoint.with_query_pairs([("type", kind), ("q", query)])
}

/// Extracts the `results` array from a response body.
///
/// Anything that is not a JSON object with an array under `results` yields
/// an empty list.
#[must_use]
pub fn decode_results(body: &str) -> Vec<Value> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(mut map)) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            Some(other) if !other.is_null() => {
                tracing::debug!(kind = json_kind(&other), "`results` is not an array");
                Vec::new()
            }
            _ => Vec::new(),
        },
        Ok(other) => {
            tracing::debug!(kind = json_kind(&other), "search response is not an object");
            Vec::new()
        }
        Err(err) => {
            tracing::debug!(%err, "search response is not valid JSON");
            Vec::new()
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Queries the endpoint and returns the decoded result items.
///
/// # Errors
///
/// Propagates network failures from the client; decoding never fails.
pub async fn remote_search<C: SearchClient>(
    client: &C,
    endpoint: &Url,
    kind: &str,
    query: &str,
) -> Result<Vec<Value>, SearchError> {
    let url = search_url(endpoint, kind, query);
    tracing::debug!(url = %url, "searching");
    let body = client.fetch_text(url.as_str()).await?;
    Ok(decode_results(&body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    struct Canned {
        body: Result<String, SearchError>,
        requested: RefCell<Vec<String>>,
    }

    impl SearchClient for Canned {
        async fn fetch_text(&self, url: &str) -> Result<String, SearchError> {
            self.requested.borrow_mut().push(url.to_owned());
            self.body.clone()
        }
    }

    fn endpoint() -> Url {
        "/attachables/search/".parse().expect("valid endpoint")
    }

    #[test]
    fn url_carries_type_then_query() {
        let url = search_url(&endpoint(), "characters", "homer");
        assert_eq!(url.as_str(), "/attachables/search/?type=characters&q=homer");
    }

    #[test]
    fn url_encodes_both_parameters() {
        let url = search_url(&endpoint(), "a&b", "Moe's bar?");
        assert_eq!(url.as_str(), "/attachables/search/?type=a%26b&q=Moe's%20bar%3F");
    }

    #[test]
    fn decodes_results_array_in_order() {
        let items = decode_results(r#"{"results": [{"id": 2}, {"id": 1}]}"#);
        assert_eq!(items, vec![json!({"id": 2}), json!({"id": 1})]);
    }

    #[test]
    fn malformed_or_unexpected_bodies_are_empty() {
        for body in [
            "",
            "<html>502 Bad Gateway</html>",
            "{\"results\": [",
            "[1, 2, 3]",
            "{}",
            r#"{"results": null}"#,
            r#"{"results": false}"#,
            r#"{"results": {"id": 1}}"#,
        ] {
            assert!(decode_results(body).is_empty(), "expected no results for {body:?}");
        }
    }

    #[test]
    fn remote_search_requests_and_decodes() {
        let client = Canned {
            body: Ok(r#"{"results": [{"id": 1, "name": "Homer"}]}"#.to_owned()),
            requested: RefCell::default(),
        };
        let items = block_on(remote_search(&client, &endpoint(), "characters", "homer"))
            .expect("search should succeed");
        assert_eq!(items, vec![json!({"id": 1, "name": "Homer"})]);
        assert_eq!(
            *client.requested.borrow(),
            ["/attachables/search/?type=characters&q=homer"]
        );
    }

    #[test]
    fn remote_search_propagates_network_failure() {
        let client = Canned {
            body: Err(SearchError::Network("offline".to_owned())),
            requested: RefCell::default(),
        };
        let err = block_on(remote_search(&client, &endpoint(), "characters", "homer"))
            .expect_err("network failure should propagate");
        assert_eq!(err, SearchError::Network("offline".to_owned()));
    }
}
