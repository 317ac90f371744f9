//! # fk-text
//!
//! A small fluent string helper.  [`TextBuffer`] owns a single string
//! buffer; every operation consumes the buffer and returns it back, so
//! edits chain by value without shared state:
//!
//! ```
//! use fk_text::TextBuffer;
//!
//! let s = TextBuffer::new("feier")
//!     .append("tag")
//!     .prepend("der ")
//!     .into_string();
//! assert_eq!(s, "der feiertag");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use fk_core::ensure;
use fk_core::errors::{Error, Result};

/// An owned string buffer with chainable edit operations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBuffer {
    buf: String,
}

impl TextBuffer {
    /// Create a buffer from any string-like value.
    pub fn new(text: impl Into<String>) -> Self {
        Self { buf: text.into() }
    }

    // ── Edits ─────────────────────────────────────────────────────────────────

    /// Append `text` at the end.
    pub fn append(mut self, text: &str) -> Self {
        self.buf.push_str(text);
        self
    }

    /// Insert `text` at the front.
    pub fn prepend(mut self, text: &str) -> Self {
        self.buf.insert_str(0, text);
        self
    }

    /// Insert `text` at the given byte offset.
    ///
    /// # Errors
    /// The offset must lie inside the buffer and on a UTF-8 character
    /// boundary.
    pub fn insert(mut self, offset: usize, text: &str) -> Result<Self> {
        ensure!(
            self.buf.is_char_boundary(offset),
            "byte offset {offset} is not a char boundary of a buffer of length {}",
            self.buf.len()
        );
        self.buf.insert_str(offset, text);
        Ok(self)
    }

    /// Keep at most `max_chars` characters.
    ///
    /// With `at_word_boundary` set, a cut in the middle of a word snaps
    /// back to the preceding whitespace (when there is one) and trailing
    /// whitespace is dropped.
    pub fn truncate(mut self, max_chars: usize, at_word_boundary: bool) -> Self {
        let Some((cut, _)) = self.buf.char_indices().nth(max_chars) else {
            return self; // already short enough
        };
        let mut end = cut;
        if at_word_boundary
            && !self.buf[..cut].ends_with(char::is_whitespace)
            && !self.buf[cut..].starts_with(char::is_whitespace)
        {
            if let Some(ws) = self.buf[..cut].rfind(char::is_whitespace) {
                end = ws;
            }
        }
        self.buf.truncate(end);
        if at_word_boundary {
            let trimmed = self.buf.trim_end().len();
            self.buf.truncate(trimmed);
        }
        self
    }

    /// Convert `snake_case` to `UpperCamelCase`.
    pub fn snake_to_camel(self) -> Self {
        self.camelize(false)
    }

    /// Convert `snake_case` to `lowerCamelCase`.
    pub fn snake_to_lower_camel(self) -> Self {
        self.camelize(true)
    }

    fn camelize(self, lower_first: bool) -> Self {
        let mut out = String::with_capacity(self.buf.len());
        for part in self.buf.split('_').filter(|p| !p.is_empty()) {
            let mut chars = part.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
        if lower_first {
            let mut chars = out.chars();
            if let Some(first) = chars.next() {
                let lowered: String = first.to_lowercase().chain(chars).collect();
                out = lowered;
            }
        }
        Self { buf: out }
    }

    /// Convert `camelCase` to `snake_case`.
    ///
    /// # Errors
    /// Always returns [`Error::NotImplemented`]; the conversion has no
    /// implementation and callers must not receive a fabricated result.
    pub fn camel_to_snake(self) -> Result<Self> {
        Err(Error::NotImplemented("camel_to_snake".into()))
    }

    /// Trim whitespace from both ends, including the U+00A0 no-break space
    /// (`char::is_whitespace` covers it).
    pub fn trim(mut self) -> Self {
        self.buf = self.buf.trim().to_string();
        self
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// Return `true` if any character needs more than one UTF-8 byte.
    pub fn is_multibyte(&self) -> bool {
        self.buf.chars().any(|c| c.len_utf8() > 1)
    }

    /// View the buffer as a string slice.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Return the buffer length in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Return `true` if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the buffer and return the underlying `String`.
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl std::fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_edits() {
        let s = TextBuffer::new("sonntag")
            .prepend("advents")
            .append(" 2024")
            .into_string();
        assert_eq!(s, "adventssonntag 2024");
    }

    #[test]
    fn insert_at_offset() {
        let s = TextBuffer::new("feirtag").insert(3, "e").unwrap();
        assert_eq!(s.as_str(), "feiertag");
    }

    #[test]
    fn insert_rejects_bad_offsets() {
        // Past the end
        assert!(TextBuffer::new("abc").insert(4, "x").is_err());
        // Inside a multi-byte character ("ä" is two bytes)
        assert!(TextBuffer::new("äpfel").insert(1, "x").is_err());
        // At the end is fine
        assert!(TextBuffer::new("abc").insert(3, "x").is_ok());
    }

    #[test]
    fn truncate_plain() {
        let s = TextBuffer::new("reformationstag").truncate(11, false);
        assert_eq!(s.as_str(), "reformation");
        // Shorter than the limit: untouched
        let s = TextBuffer::new("mai").truncate(11, false);
        assert_eq!(s.as_str(), "mai");
    }

    #[test]
    fn truncate_at_word_boundary() {
        let s = TextBuffer::new("tag der deutschen einheit").truncate(12, true);
        assert_eq!(s.as_str(), "tag der");
        // Cut exactly at a word end keeps the word
        let s = TextBuffer::new("tag der deutschen einheit").truncate(7, true);
        assert_eq!(s.as_str(), "tag der");
        // No whitespace to snap back to: hard cut
        let s = TextBuffer::new("weihnachten").truncate(4, true);
        assert_eq!(s.as_str(), "weih");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let s = TextBuffer::new("äöüäöü").truncate(3, false);
        assert_eq!(s.as_str(), "äöü");
    }

    #[test]
    fn snake_to_camel_variants() {
        let s = TextBuffer::new("good_friday").snake_to_camel();
        assert_eq!(s.as_str(), "GoodFriday");
        let s = TextBuffer::new("good_friday").snake_to_lower_camel();
        assert_eq!(s.as_str(), "goodFriday");
        // Consecutive and trailing underscores collapse
        let s = TextBuffer::new("whit__monday_").snake_to_camel();
        assert_eq!(s.as_str(), "WhitMonday");
    }

    #[test]
    fn camel_to_snake_is_unimplemented() {
        let err = TextBuffer::new("goodFriday").camel_to_snake().unwrap_err();
        assert_eq!(err, Error::NotImplemented("camel_to_snake".into()));
        // Regardless of input
        assert!(TextBuffer::new("").camel_to_snake().is_err());
    }

    #[test]
    fn trim_includes_no_break_space() {
        let s = TextBuffer::new("\u{a0} ostern \u{a0}\t").trim();
        assert_eq!(s.as_str(), "ostern");
    }

    #[test]
    fn multibyte_detection() {
        assert!(!TextBuffer::new("pfingsten").is_multibyte());
        assert!(TextBuffer::new("heiligabend in köln").is_multibyte());
        assert!(!TextBuffer::new("").is_multibyte());
    }

    #[test]
    fn display_and_len() {
        let s = TextBuffer::new("mariä himmelfahrt");
        assert_eq!(s.to_string(), "mariä himmelfahrt");
        assert_eq!(s.len(), "mariä himmelfahrt".len());
        assert!(!s.is_empty());
        assert!(TextBuffer::default().is_empty());
    }
}
