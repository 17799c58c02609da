//! Path normalization.
//!
//! This module turns raw path text into a [`GenericPath`] by:
//! - Splitting off a drive (`C:`) when the dialect has drive postfixes
//! - Detecting a root token (longest match first)
//! - Splitting on every separator the dialect recognizes
//! - Dropping `.` components and resolving `..` against earlier parts
//!
//! Normalization of text never fails. Paths are opaque names and are not
//! checked against a platform's forbidden characters or reserved names.

use crate::decode::decoder_for;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::path::types::GenericPath;
use crate::platform::Platform;

/// Encoding assumed by [`Normalizer::normalize_bytes`] when none is given.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Normalize `text` with the generic dialect.
///
/// # Examples
///
/// ```
/// use gpath::path::normalize::normalize;
///
/// let path = normalize("usr/../bin");
/// assert_eq!(path.named_parts(), ["bin"]);
///
/// let path = normalize("C:\\a\\.\\b\\");
/// assert_eq!(path.to_string(), "C:/a/b");
///
/// let path = normalize("/../a");
/// assert_eq!(path.to_string(), "/a");
/// ```
#[must_use]
pub fn normalize(text: &str) -> GenericPath {
    normalize_with(text, Platform::Generic.dialect())
}

/// Normalize `text` with `dialect`.
///
/// # Examples
///
/// ```
/// use gpath::path::normalize::normalize_with;
/// use gpath::Platform;
///
/// // POSIX has no drives: "C:" is an ordinary component.
/// let path = normalize_with("C:/a", Platform::Posix.dialect());
/// assert!(!path.absolute());
/// assert_eq!(path.named_parts(), ["C:", "a"]);
/// ```
#[must_use]
pub fn normalize_with(text: &str, dialect: &Dialect) -> GenericPath {
    let (drive, rest) = split_drive(text, dialect);
    let (root, rest) = match dialect.match_root(rest) {
        Some(token) => (true, &rest[token.len()..]),
        None => (false, rest),
    };

    let mut parts: Vec<String> = Vec::new();
    let mut parent_level = 0;

    for segment in rest.split(|c| dialect.is_separator(c)) {
        if segment.is_empty() || dialect.is_current(segment) {
            continue;
        }
        if dialect.is_parent(segment) {
            // Climbing above a root is a no-op
            if parts.pop().is_none() && !root {
                parent_level += 1;
            }
            continue;
        }
        parts.push(segment.to_string());
    }

    GenericPath::from_raw(root, drive, parent_level, parts, None)
}

/// Split a leading `X:` drive off `text`.
fn split_drive<'t>(text: &'t str, dialect: &Dialect) -> (String, &'t str) {
    let mut chars = text.char_indices();
    if let (Some((_, first)), Some((offset, second))) = (chars.next(), chars.next()) {
        if dialect.is_drive_postfix(second) && !dialect.is_separator(first) {
            return (first.to_string(), &text[offset + second.len_utf8()..]);
        }
    }
    (String::new(), text)
}

/// Normalizes text and bytes with a fixed dialect.
///
/// # Examples
///
/// ```
/// use gpath::path::Normalizer;
/// use gpath::Platform;
///
/// let windows = Normalizer::for_platform(Platform::WindowsNt);
/// let path = windows.normalize("D:\\data\\..\\logs");
/// assert_eq!(path.to_string(), "D:/logs");
///
/// let bytes = [b'a', 0, b'/', 0, b'b', 0];
/// let path = windows.normalize_bytes(&bytes, Some("utf-16-le")).unwrap();
/// assert_eq!(path.named_parts(), ["a", "b"]);
/// assert_eq!(path.encoding(), Some("utf-16-le"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    dialect: Dialect,
}

impl Normalizer {
    /// Create a normalizer using the generic dialect.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer using a built-in platform dialect.
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            dialect: platform.dialect().clone(),
        }
    }

    /// Create a normalizer using a custom dialect.
    #[must_use]
    pub fn with_dialect(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// The dialect this normalizer parses with.
    #[must_use]
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Normalize raw path text.
    #[must_use]
    pub fn normalize(&self, text: &str) -> GenericPath {
        normalize_with(text, &self.dialect)
    }

    /// Decode raw path bytes and normalize the result.
    ///
    /// `encoding` defaults to UTF-8. When given, its canonical name is
    /// recorded on the returned path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedEncoding`](crate::Error::UnsupportedEncoding)
    /// for an unknown encoding name and
    /// [`Error::Decode`](crate::Error::Decode) when the bytes are not valid
    /// in that encoding.
    pub fn normalize_bytes(&self, bytes: &[u8], encoding: Option<&str>) -> Result<GenericPath> {
        let decoder = decoder_for(encoding.unwrap_or(DEFAULT_ENCODING))?;
        let text = decoder.decode(bytes)?;
        let path = self.normalize(&text);
        Ok(match encoding {
            Some(_) => path.with_encoding(Some(decoder.encoding())),
            None => path,
        })
    }
}
