//! Path relationship checking.
//!
//! This module answers "where is B relative to A" questions on normalized
//! paths: the subpath leading from a base to a path inside it, the
//! relative path leading from any origin to a path, whether one path
//! contains another, and a [`PathRelationship`] classification.
//!
//! Results are plain relative paths (no root, no drive). When no sound
//! answer exists, for instance when the origin climbs above the path by an
//! unknown directory name, the result is `None` rather than a guess.

use crate::path::common::CommonOptions;
use crate::path::types::GenericPath;

impl GenericPath {
    /// The path from `base` down to this path, if this path lies inside
    /// `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::GenericPath;
    ///
    /// let path = GenericPath::from("/usr/local/bin");
    /// let base = GenericPath::from("/usr");
    /// assert_eq!(path.subpath_from(&base), Some(GenericPath::from("local/bin")));
    /// assert_eq!(base.subpath_from(&path), None);
    /// assert_eq!(path.subpath_from(&path), Some(GenericPath::empty()));
    /// ```
    #[must_use]
    pub fn subpath_from(&self, base: &GenericPath) -> Option<GenericPath> {
        self.common_with(base, CommonOptions::default())?;
        if !base.contains(self) {
            return None;
        }
        Some(GenericPath::from_raw(
            false,
            String::new(),
            0,
            self.parts[base.parts.len()..].to_vec(),
            self.encoding.clone(),
        ))
    }

    /// The relative path leading from `origin` to this path.
    ///
    /// Returns `None` when the paths share no common base, or when getting
    /// there would require knowing the names of directories above a
    /// relative origin.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::GenericPath;
    ///
    /// let path = GenericPath::from("/usr/bin");
    /// let origin = GenericPath::from("/usr/local/bin");
    /// assert_eq!(path.relpath_from(&origin), Some(GenericPath::from("../../bin")));
    ///
    /// // "a" seen from ".." needs the name of the current directory
    /// assert_eq!(GenericPath::from("a").relpath_from(&GenericPath::from("..")), None);
    /// ```
    #[must_use]
    pub fn relpath_from(&self, origin: &GenericPath) -> Option<GenericPath> {
        if origin.root {
            let common = self.common_with(origin, CommonOptions::default())?;
            return Some(self.climb_from(origin, &common));
        }

        let common = self.common_with(origin, CommonOptions::LENIENT)?;
        if common.parent_level > self.parent_level {
            log::trace!("no relative path from {origin} to {self}: origin climbs above it");
            return None;
        }

        if !common.parts.is_empty() {
            return Some(self.climb_from(origin, &common));
        }

        let parent_level = if origin.parent_level == self.parent_level {
            origin.parts.len()
        } else {
            (common.parent_level - origin.parent_level) + origin.parts.len()
        };
        Some(GenericPath::from_raw(
            false,
            String::new(),
            parent_level,
            self.parts.clone(),
            self.encoding.clone(),
        ))
    }

    /// Whether `other` lies inside this path, or is this path.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::GenericPath;
    ///
    /// assert!(GenericPath::from("/usr").contains(&GenericPath::from("/usr/bin")));
    /// assert!(GenericPath::from("..").contains(&GenericPath::from("a")));
    /// assert!(!GenericPath::from("../a").contains(&GenericPath::from("a")));
    /// ```
    #[must_use]
    pub fn contains(&self, other: &GenericPath) -> bool {
        self.common_with(other, CommonOptions::LENIENT).as_ref() == Some(self)
    }

    /// Climb from `origin` up to `common`, then descend to this path.
    fn climb_from(&self, origin: &GenericPath, common: &GenericPath) -> GenericPath {
        let shared = common.parts.len();
        GenericPath::from_raw(
            false,
            String::new(),
            origin.parts.len() - shared,
            self.parts[shared..].to_vec(),
            self.encoding.clone(),
        )
    }
}

/// Relationship between two paths.
///
/// This enum describes how two paths relate to each other in the directory
/// hierarchy, as decided by [`GenericPath::contains`].
///
/// # Examples
///
/// ```
/// use gpath::GenericPath;
/// use gpath::path::PathRelationship;
///
/// let parent = GenericPath::from("/home/user");
/// let child = GenericPath::from("/home/user/project");
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path contains the second.
    Ancestor,

    /// The first path lies inside the second.
    Descendant,

    /// The paths are equal after normalization.
    Same,

    /// Neither path contains the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::GenericPath;
    /// use gpath::path::PathRelationship;
    ///
    /// let a = GenericPath::from("/a");
    /// let ab = GenericPath::from("/a/b");
    /// let b = GenericPath::from("/b");
    ///
    /// assert_eq!(PathRelationship::between(&a, &ab), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&ab, &a), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&a, &a), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between(&a, &b), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &GenericPath, path2: &GenericPath) -> Self {
        if path1 == path2 {
            return Self::Same;
        }
        if path1.contains(path2) {
            return Self::Ancestor;
        }
        if path2.contains(path1) {
            return Self::Descendant;
        }
        Self::Unrelated
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::path::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if `path` is within `directory` (descendant or same).
    #[must_use]
    pub fn is_within(path: &GenericPath, directory: &GenericPath) -> bool {
        matches!(Self::between(path, directory), Self::Descendant | Self::Same)
    }

    /// Check if `path` contains `other` (ancestor or same).
    #[must_use]
    pub fn contains(path: &GenericPath, other: &GenericPath) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::GenericPath;
    /// use gpath::path::PathRelationship;
    ///
    /// let desc = PathRelationship::Ancestor
    ///     .description(&GenericPath::from("/a"), &GenericPath::from("/a/b"));
    /// assert_eq!(desc, "/a is an ancestor of /a/b");
    /// ```
    #[must_use]
    pub fn description(&self, path1: &GenericPath, path2: &GenericPath) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}
