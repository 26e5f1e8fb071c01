//! # `gridsearch` URL Utilities
//!
//! Small URL type for search endpoints. Endpoints are usually relative paths
//! (`/attachables/search/`) but absolute URLs work too; the type only cares
//! about where the query string and the fragment start so that search
//! parameters can be appended without clobbering either.
//!
//! ```
//! use gridsearch_url::Url;
//!
//! let endpoint: Url = "/attachables/search/".parse()?;
//! let url = endpoint.with_query_pairs([("type", "characters"), ("q", "homer simpson")]);
//! assert_eq!(url.as_str(), "/attachables/search/?type=characters&q=homer%20simpson");
//! # Ok::<(), gridsearch_url::ParseError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod encode;
mod error;

pub use encode::{encode_component, is_unreserved};
pub use error::ParseError;

use alloc::string::{String, ToString};
use core::fmt;

/// Byte range of an optional URL component.
///
/// `Span::NONE` marks an absent component so that the parsed layout stays
/// `Copy` and two words wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    const NONE: Self = Self {
        start: usize::MAX,
        end: usize::MAX,
    };

    #[inline]
    const fn is_present(self) -> bool {
        self.start != usize::MAX
    }
}

/// A search endpoint URL.
///
/// # Examples
///
/// ```
/// use gridsearch_url::Url;
///
/// let url: Url = "https://example.com/search?lang=es#top".parse().unwrap();
/// assert_eq!(url.path(), "https://example.com/search");
/// assert_eq!(url.query(), Some("lang=es"));
/// assert_eq!(url.fragment(), Some("top"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Url {
    inner: String,
    query: Span,
    fragment: Span,
}

impl Url {
    fn from_parts(inner: String) -> Self {
        let bytes = inner.as_bytes();
        let fragment_start = bytes.iter().position(|&b| b == b'#');
        let before_fragment = fragment_start.unwrap_or(bytes.len());
        let query_start = bytes[..before_fragment].iter().position(|&b| b == b'?');

        let query = query_start.map_or(Span::NONE, |start| Span {
            start: start + 1,
            end: before_fragment,
        });
        let fragment = fragment_start.map_or(Span::NONE, |start| Span {
            start: start + 1,
            end: bytes.len(),
        });

        Self {
            inner,
            query,
            fragment,
        }
    }

    fn slice(&self, span: Span) -> &str {
        if span.is_present() {
            &self.inner[span.start..span.end]
        } else {
            ""
        }
    }

    /// Returns everything before the query string and fragment.
    #[must_use]
    pub fn path(&self) -> &str {
        let end = if self.query.is_present() {
            self.query.start - 1
        } else if self.fragment.is_present() {
            self.fragment.start - 1
        } else {
            self.inner.len()
        };
        &self.inner[..end]
    }

    /// Gets the query string (without the '?').
    ///
    /// A bare trailing `?` yields `Some("")`.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.is_present().then(|| self.slice(self.query))
    }

    /// Gets the fragment (without the '#').
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.is_present().then(|| self.slice(self.fragment))
    }

    /// Appends percent-encoded `key=value` pairs to the query string.
    ///
    /// Existing parameters are kept and the fragment, if any, stays at the end.
    #[must_use]
    pub fn with_query_pairs<'a, I>(&self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut out = String::with_capacity(self.inner.len() + 32);
        out.push_str(self.path());
        out.push('?');

        let mut first = true;
        if let Some(existing) = self.query().filter(|q| !q.is_empty()) {
            out.push_str(existing);
            first = existing.ends_with('&');
        }

        for (key, value) in pairs {
            if !first {
                out.push('&');
            }
            first = false;
            out.push_str(&encode_component(key));
            out.push('=');
            out.push_str(&encode_component(value));
        }

        if let Some(fragment) = self.fragment() {
            out.push('#');
            out.push_str(fragment);
        }

        Self::from_parts(out)
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Consumes the URL and returns the owned string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.inner
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl AsRef<str> for Url {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl core::str::FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::empty());
        }
        if let Some((position, found)) = s
            .char_indices()
            .find(|(_, c)| c.is_whitespace() || c.is_control())
        {
            return Err(ParseError::invalid_character(position, found));
        }
        Ok(Self::from_parts(s.to_string()))
    }
}

impl TryFrom<String> for Url {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Url> for String {
    fn from(url: Url) -> Self {
        url.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_endpoint() {
        let url: Url = "/attachables/search/".parse().unwrap();
        assert_eq!(url.path(), "/attachables/search/");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_query_and_fragment_split() {
        let url: Url = "http://localhost:8000/api?x=1#frag".parse().unwrap();
        assert_eq!(url.path(), "http://localhost:8000/api");
        assert_eq!(url.query(), Some("x=1"));
        assert_eq!(url.fragment(), Some("frag"));
    }

    #[test]
    fn test_question_mark_inside_fragment_is_not_a_query() {
        let url: Url = "/search#a?b".parse().unwrap();
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), Some("a?b"));
        assert_eq!(url.path(), "/search");
    }

    #[test]
    fn test_with_query_pairs_on_bare_path() {
        let url: Url = "/search/".parse().unwrap();
        let built = url.with_query_pairs([("type", "episodes"), ("q", "Bart & Lisa")]);
        assert_eq!(built.as_str(), "/search/?type=episodes&q=Bart%20%26%20Lisa");
        assert_eq!(built.query(), Some("type=episodes&q=Bart%20%26%20Lisa"));
    }

    #[test]
    fn test_with_query_pairs_keeps_existing_query() {
        let url: Url = "/search/?lang=es".parse().unwrap();
        let built = url.with_query_pairs([("q", "moe")]);
        assert_eq!(built.as_str(), "/search/?lang=es&q=moe");
    }

    #[test]
    fn test_with_query_pairs_trailing_separators() {
        let bare: Url = "/search/?".parse().unwrap();
        assert_eq!(bare.with_query_pairs([("q", "x")]).as_str(), "/search/?q=x");

        let dangling: Url = "/search/?a=1&".parse().unwrap();
        assert_eq!(
            dangling.with_query_pairs([("q", "x")]).as_str(),
            "/search/?a=1&q=x"
        );
    }

    #[test]
    fn test_with_query_pairs_keeps_fragment_last() {
        let url: Url = "/search#results".parse().unwrap();
        let built = url.with_query_pairs([("q", "ned")]);
        assert_eq!(built.as_str(), "/search?q=ned#results");
        assert_eq!(built.fragment(), Some("results"));
    }

    #[test]
    fn test_fromstr_errors() {
        assert_eq!("".parse::<Url>(), Err(ParseError::empty()));
        assert_eq!(
            "/search here".parse::<Url>(),
            Err(ParseError::invalid_character(7, ' '))
        );
    }

    #[test]
    fn test_display_round_trips_input() {
        let url: Url = "/a?b=c".parse().unwrap();
        assert_eq!(url.to_string(), "/a?b=c");
        assert_eq!(String::from(url), "/a?b=c");
    }
}
