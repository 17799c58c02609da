//! Common base path resolution.
//!
//! The common base of two paths is their longest shared ancestor. It only
//! exists when both paths share a drive and are both rooted or both
//! relative; relative paths at different parent levels share nothing
//! unless parent-level ancestors are allowed.

use std::ops::BitAnd;

use crate::path::types::GenericPath;

/// Policy for [`GenericPath::common_with`].
///
/// - `allow_current`: accept the empty relative path (the current
///   directory) as a common base.
/// - `allow_parents`: accept a bare parent-level path such as `../..` as a
///   common base of relative paths at different levels. Implies
///   `allow_current`.
///
/// # Examples
///
/// ```
/// use gpath::path::CommonOptions;
///
/// let options = CommonOptions::default();
/// assert!(options.allow_current);
/// assert!(!options.allow_parents);
///
/// let lenient = CommonOptions::default().with_parents(true);
/// assert!(lenient.allow_parents);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommonOptions {
    /// Accept the empty relative path as a common base.
    pub allow_current: bool,
    /// Accept a parent-level-only path as a common base.
    pub allow_parents: bool,
}

impl Default for CommonOptions {
    fn default() -> Self {
        Self {
            allow_current: true,
            allow_parents: false,
        }
    }
}

impl CommonOptions {
    /// Neither the current directory nor parent levels are accepted.
    pub const STRICT: Self = Self {
        allow_current: false,
        allow_parents: false,
    };

    /// Both the current directory and parent levels are accepted.
    pub const LENIENT: Self = Self {
        allow_current: true,
        allow_parents: true,
    };

    /// Set `allow_current`.
    #[must_use]
    pub const fn with_current(mut self, allow: bool) -> Self {
        self.allow_current = allow;
        self
    }

    /// Set `allow_parents`.
    #[must_use]
    pub const fn with_parents(mut self, allow: bool) -> Self {
        self.allow_parents = allow;
        self
    }

    /// Whether the empty relative path is acceptable, taking
    /// `allow_parents` into account.
    #[must_use]
    pub const fn accepts_current(&self) -> bool {
        self.allow_current || self.allow_parents
    }
}

impl GenericPath {
    /// Find the longest common base of this path and `other`.
    ///
    /// Returns `None` when the paths have different drives, when one is
    /// rooted and the other is not, or when `options` rule the candidate
    /// out. The result is symmetric in its two arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::GenericPath;
    /// use gpath::path::CommonOptions;
    ///
    /// let a = GenericPath::from("/usr/bin");
    /// let b = GenericPath::from("/usr/local/bin");
    /// assert_eq!(a.common_with(&b, CommonOptions::default()), Some(GenericPath::from("/usr")));
    ///
    /// let c = GenericPath::from("C:/Windows");
    /// let d = GenericPath::from("D:/Windows");
    /// assert_eq!(c.common_with(&d, CommonOptions::default()), None);
    ///
    /// let e = GenericPath::from("../a");
    /// let f = GenericPath::from("../../b");
    /// assert_eq!(e.common_with(&f, CommonOptions::default()), None);
    /// assert_eq!(e.common_with(&f, CommonOptions::LENIENT), Some(GenericPath::from("../..")));
    /// ```
    #[must_use]
    pub fn common_with(&self, other: &GenericPath, options: CommonOptions) -> Option<GenericPath> {
        if self.drive != other.drive {
            log::trace!("no common base for {self} and {other}: drives differ");
            return None;
        }
        if self.root != other.root {
            log::trace!("no common base for {self} and {other}: only one is rooted");
            return None;
        }

        let encoding = self.encoding.clone().or_else(|| other.encoding.clone());
        let candidate = if !self.root && self.parent_level != other.parent_level {
            if !options.allow_parents {
                log::trace!("no common base for {self} and {other}: parent levels differ");
                return None;
            }
            GenericPath::from_raw(
                false,
                self.drive.clone(),
                self.parent_level.max(other.parent_level),
                Vec::new(),
                encoding,
            )
        } else {
            GenericPath::from_raw(
                self.root,
                self.drive.clone(),
                self.parent_level,
                common_prefix(&self.parts, &other.parts),
                encoding,
            )
        };

        if !options.accepts_current() && candidate.is_empty() && !(self.is_empty() && other.is_empty())
        {
            log::trace!("no common base for {self} and {other}: only the current directory");
            return None;
        }

        Some(candidate)
    }
}

fn common_prefix(a: &[String], b: &[String]) -> Vec<String> {
    a.iter()
        .zip(b)
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.clone())
        .collect()
}

/// `a & b` is `a.common_with(b, CommonOptions::default())`.
impl BitAnd for &GenericPath {
    type Output = Option<GenericPath>;

    fn bitand(self, rhs: &GenericPath) -> Option<GenericPath> {
        self.common_with(rhs, CommonOptions::default())
    }
}

impl BitAnd for GenericPath {
    type Output = Option<GenericPath>;

    fn bitand(self, rhs: GenericPath) -> Option<GenericPath> {
        self.common_with(&rhs, CommonOptions::default())
    }
}
