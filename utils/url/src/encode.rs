//! Percent encoding for query components.
//!
//! The rules match the browser's `encodeURIComponent`: ASCII letters, digits
//! and `- _ . ! ~ * ' ( )` pass through, every other byte of the UTF-8
//! encoding becomes `%XX` with uppercase hex digits.

use alloc::string::String;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Returns true if `byte` is left untouched by [`encode_component`].
#[inline]
#[must_use]
pub const fn is_unreserved(byte: u8) -> bool {
    matches!(
        byte,
        b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')'
    )
}

/// Percent-encodes a single query key or value.
///
/// # Examples
///
/// ```
/// use gridsearch_url::encode_component;
///
/// assert_eq!(encode_component("homer simpson"), "homer%20simpson");
/// assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
/// ```
#[must_use]
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        if is_unreserved(byte) {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(char::from(HEX[usize::from(byte >> 4)]));
            out.push(char::from(HEX[usize::from(byte & 0x0F)]));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_pass_through() {
        assert_eq!(encode_component("Az09-_.!~*'()"), "Az09-_.!~*'()");
    }

    #[test]
    fn test_reserved_characters() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("?&=#/+"), "%3F%26%3D%23%2F%2B");
        assert_eq!(encode_component("%"), "%25");
    }

    #[test]
    fn test_multibyte_utf8() {
        assert_eq!(encode_component("ñ"), "%C3%B1");
        assert_eq!(encode_component("Moe's Tavern ☕"), "Moe's%20Tavern%20%E2%98%95");
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode_component(""), "");
    }
}
