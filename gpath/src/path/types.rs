//! The normalized path value type.
//!
//! A [`GenericPath`] is the canonical tuple produced by the normalizer:
//! a root flag, an optional single-character drive, a count of leading
//! parent steps and the remaining named components. Every operator and
//! resolver in this crate works on that tuple and never on raw text.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dialect::{CURRENT_INDICATOR, PARENT_INDICATOR};
use crate::error::{Error, Result};
use crate::path::normalize::normalize;
use crate::platform::Platform;
use crate::render;

/// An operating-system-independent, normalized path.
///
/// Values are immutable: every operation returns a new path. Two paths are
/// equal when their root flag, drive, parent level and named parts are
/// equal. The encoding recorded by byte-based construction is metadata and
/// takes no part in equality, hashing or ordering.
///
/// # Examples
///
/// ```
/// use gpath::GenericPath;
///
/// let path = GenericPath::from("C:/usr/./local/../bin/");
/// assert!(path.absolute());
/// assert_eq!(path.drive(), "C");
/// assert_eq!(path.named_parts(), ["usr", "bin"]);
/// assert_eq!(path.to_string(), "C:/usr/bin");
///
/// let relative = GenericPath::from("../../a");
/// assert_eq!(relative.parent_level(), 2);
/// assert_eq!(relative.relative_parts(), ["..", "..", "a"]);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct GenericPath {
    pub(crate) root: bool,
    pub(crate) drive: String,
    pub(crate) parent_level: usize,
    pub(crate) parts: Vec<String>,
    pub(crate) encoding: Option<String>,
}

impl GenericPath {
    /// Parse and normalize `text` with the generic dialect.
    ///
    /// Equivalent to `GenericPath::from(text)`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        normalize(text)
    }

    /// The empty relative path, standing for the current directory.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a path from already-separated components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if the components break an
    /// invariant: a rooted path with a parent level, or a part that is
    /// empty, `.` or `..`. Returns [`Error::InvalidDrive`] if the drive is
    /// longer than one character.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::GenericPath;
    ///
    /// let path = GenericPath::from_components(true, "C", 0, ["Windows"]).unwrap();
    /// assert_eq!(path, GenericPath::from("C:/Windows"));
    ///
    /// assert!(GenericPath::from_components(true, "", 1, ["a"]).is_err());
    /// assert!(GenericPath::from_components(false, "", 0, [".."]).is_err());
    /// assert!(GenericPath::from_components(false, "CD", 0, ["a"]).is_err());
    /// ```
    pub fn from_components<D, I, S>(root: bool, drive: D, parent_level: usize, parts: I) -> Result<Self>
    where
        D: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let path = Self {
            root,
            drive: drive.into(),
            parent_level,
            parts: parts.into_iter().map(Into::into).collect(),
            encoding: None,
        };
        path.check_invariants()?;
        Ok(path)
    }

    /// Build a path by joining `parts` with the generic separator and
    /// normalizing the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::GenericPath;
    ///
    /// let path = GenericPath::from_parts(&["/usr", "local/bin", "..", "lib"]);
    /// assert_eq!(path.to_string(), "/usr/local/lib");
    /// ```
    #[must_use]
    pub fn from_parts<S: AsRef<str>>(parts: &[S]) -> Self {
        let joined = parts.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("/");
        normalize(&joined)
    }

    /// Internal constructor for values that hold the invariants by
    /// construction.
    pub(crate) fn from_raw(
        root: bool,
        drive: String,
        parent_level: usize,
        parts: Vec<String>,
        encoding: Option<String>,
    ) -> Self {
        let path = Self {
            root,
            drive,
            parent_level,
            parts,
            encoding,
        };
        debug_assert!(path.check_invariants().is_ok(), "{path:?}");
        path
    }

    /// Verify the structural invariants of this value.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as an error.
    pub fn check_invariants(&self) -> Result<()> {
        if self.root && self.parent_level != 0 {
            return Err(Error::InvalidState {
                details: format!(
                    "rooted path cannot have parent level {}",
                    self.parent_level
                ),
            });
        }

        if let Some(part) = self
            .parts
            .iter()
            .find(|p| p.is_empty() || *p == CURRENT_INDICATOR || *p == PARENT_INDICATOR)
        {
            return Err(Error::InvalidState {
                details: format!("invalid named part '{part}'"),
            });
        }

        check_drive(&self.drive)
    }

    /// The named components, root to leaf.
    #[must_use]
    pub fn named_parts(&self) -> &[String] {
        &self.parts
    }

    /// One `..` per parent level.
    #[must_use]
    pub fn parent_parts(&self) -> Vec<&'static str> {
        vec![PARENT_INDICATOR; self.parent_level]
    }

    /// Parent parts followed by named parts.
    #[must_use]
    pub fn relative_parts(&self) -> Vec<&str> {
        let mut parts = self.parent_parts();
        parts.extend(self.parts.iter().map(String::as_str));
        parts
    }

    /// Whether the path is anchored at a root.
    #[must_use]
    pub fn absolute(&self) -> bool {
        self.root
    }

    /// Whether the path is a bare root, with or without a drive.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.root && self.parts.is_empty()
    }

    /// The drive name, or `""`.
    #[must_use]
    pub fn drive(&self) -> &str {
        &self.drive
    }

    /// Number of leading parent steps.
    #[must_use]
    pub fn parent_level(&self) -> usize {
        self.parent_level
    }

    /// The encoding recorded when the path was decoded from bytes.
    #[must_use]
    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    /// Return a copy carrying a different encoding label.
    #[must_use]
    pub fn with_encoding(&self, encoding: Option<&str>) -> Self {
        Self {
            encoding: encoding.map(ToString::to_string),
            ..self.clone()
        }
    }

    /// Number of named parts. Parent levels are not counted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether this is the empty relative path: no root, no drive, no
    /// parent level and no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.root && self.drive.is_empty() && self.parent_level == 0 && self.parts.is_empty()
    }

    /// The named part at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.parts.get(index).map(String::as_str)
    }

    /// Iterate over the named parts.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.parts.iter()
    }

    /// Render this path for `platform`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::{GenericPath, Platform};
    ///
    /// let path = GenericPath::from("C:/Program Files/app");
    /// assert_eq!(path.render(Platform::WindowsNt).to_string(), "C:\\Program Files\\app");
    /// assert_eq!(path.render(Platform::Posix).to_string(), "/Program Files/app");
    /// ```
    #[must_use]
    pub fn render(&self, platform: Platform) -> render::RenderedPath<&Self> {
        render::RenderedPath::new(self, platform)
    }

    fn sort_key(&self) -> (bool, &str, usize, &[String]) {
        (self.root, &self.drive, self.parent_level, &self.parts)
    }
}

pub(crate) fn check_drive(drive: &str) -> Result<()> {
    if drive.chars().count() > 1 {
        return Err(Error::InvalidDrive {
            drive: drive.to_string(),
            reason: "drive names must be a single character".into(),
        });
    }
    Ok(())
}

impl PartialEq for GenericPath {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for GenericPath {}

impl Hash for GenericPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sort_key().hash(state);
    }
}

impl PartialOrd for GenericPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GenericPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for GenericPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render_with(self, Platform::Generic.dialect()))
    }
}

impl Index<usize> for GenericPath {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.parts[index]
    }
}

impl<'a> IntoIterator for &'a GenericPath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

impl From<&str> for GenericPath {
    fn from(text: &str) -> Self {
        normalize(text)
    }
}

impl From<String> for GenericPath {
    fn from(text: String) -> Self {
        normalize(&text)
    }
}

impl From<&String> for GenericPath {
    fn from(text: &String) -> Self {
        normalize(text)
    }
}

impl From<&GenericPath> for GenericPath {
    fn from(path: &GenericPath) -> Self {
        path.clone()
    }
}

impl From<GenericPath> for String {
    fn from(path: GenericPath) -> Self {
        path.to_string()
    }
}

impl FromStr for GenericPath {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(normalize(s))
    }
}
