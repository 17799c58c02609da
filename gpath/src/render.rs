//! Platform-specific rendering of paths.
//!
//! Rendering only reads a path through the [`Renderable`] accessors, so any
//! type exposing the normalized tuple can be displayed for any platform.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::dialect::{Dialect, CURRENT_INDICATOR, PARENT_INDICATOR};
use crate::path::GenericPath;
use crate::platform::Platform;

/// Read-only view of a normalized path, as needed for rendering.
pub trait Renderable {
    /// The named components, root to leaf.
    fn named_parts(&self) -> &[String];

    /// Whether the path is anchored at a root.
    fn absolute(&self) -> bool;

    /// The drive name, or `""`.
    fn drive(&self) -> &str;

    /// Number of leading parent steps.
    fn parent_level(&self) -> usize;

    /// Parent steps as `..` followed by the named components.
    fn relative_parts(&self) -> Vec<&str> {
        let mut parts = vec![PARENT_INDICATOR; self.parent_level()];
        parts.extend(self.named_parts().iter().map(String::as_str));
        parts
    }
}

impl Renderable for GenericPath {
    fn named_parts(&self) -> &[String] {
        GenericPath::named_parts(self)
    }

    fn absolute(&self) -> bool {
        GenericPath::absolute(self)
    }

    fn drive(&self) -> &str {
        GenericPath::drive(self)
    }

    fn parent_level(&self) -> usize {
        GenericPath::parent_level(self)
    }

    fn relative_parts(&self) -> Vec<&str> {
        GenericPath::relative_parts(self)
    }
}

impl<R: Renderable + ?Sized> Renderable for &R {
    fn named_parts(&self) -> &[String] {
        (**self).named_parts()
    }

    fn absolute(&self) -> bool {
        (**self).absolute()
    }

    fn drive(&self) -> &str {
        (**self).drive()
    }

    fn parent_level(&self) -> usize {
        (**self).parent_level()
    }

    fn relative_parts(&self) -> Vec<&str> {
        (**self).relative_parts()
    }
}

/// Render `path` as text in `dialect`.
///
/// The dialect's first drive postfix, first root and first separator are
/// used. Dialects without drive postfixes drop the drive. A path with
/// nothing to print renders as `.`.
///
/// Part names are not escaped. A relative, driveless path whose first part
/// has a drive postfix as its second character (`a:b` in the generic
/// dialect) renders as text that parses back with a drive.
///
/// # Examples
///
/// ```
/// use gpath::render::render_with;
/// use gpath::{GenericPath, Platform};
///
/// let path = GenericPath::from("C:../a/b");
/// assert_eq!(render_with(&path, Platform::Generic.dialect()), "C:../a/b");
/// assert_eq!(render_with(&path, Platform::WindowsNt.dialect()), "C:..\\a\\b");
/// assert_eq!(render_with(&path, Platform::Posix.dialect()), "../a/b");
/// ```
#[must_use]
pub fn render_with<R: Renderable + ?Sized>(path: &R, dialect: &Dialect) -> String {
    let separator = dialect.preferred_separator().unwrap_or('/');
    let mut out = String::new();

    if let Some(postfix) = dialect.preferred_drive_postfix() {
        if !path.drive().is_empty() {
            out.push_str(path.drive());
            out.push(postfix);
        }
    }

    if path.absolute() {
        match dialect.preferred_root() {
            Some(root) => out.push_str(root),
            None => out.push(separator),
        }
    }

    let separator = separator.to_string();
    out.push_str(&path.relative_parts().join(separator.as_str()));

    if out.is_empty() {
        out.push_str(CURRENT_INDICATOR);
    }
    out
}

/// A path paired with the platform it renders for.
///
/// Equality and ordering follow the platform: on platforms without drives
/// the drive is ignored, so `C:/a` and `/a` compare equal as POSIX paths.
///
/// # Examples
///
/// ```
/// use gpath::{GenericPath, Platform};
/// use gpath::render::RenderedPath;
///
/// let a = GenericPath::from("C:/a");
/// let b = GenericPath::from("/a");
///
/// assert_eq!(RenderedPath::new(&a, Platform::Posix), RenderedPath::new(&b, Platform::Posix));
/// assert_ne!(RenderedPath::new(&a, Platform::WindowsNt), RenderedPath::new(&b, Platform::WindowsNt));
/// assert_eq!(RenderedPath::new(&a, Platform::WindowsNt).to_string(), "C:\\a");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RenderedPath<R> {
    path: R,
    platform: Platform,
}

impl<R: Renderable> RenderedPath<R> {
    /// Pair `path` with `platform`.
    pub fn new(path: R, platform: Platform) -> Self {
        Self { path, platform }
    }

    /// The platform used for rendering.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The wrapped path.
    pub fn path(&self) -> &R {
        &self.path
    }

    /// Unwrap the path.
    pub fn into_inner(self) -> R {
        self.path
    }

    fn key(&self) -> (bool, &str, usize, &[String]) {
        let drive = if self.platform.dialect().allows_drive() {
            self.path.drive()
        } else {
            ""
        };
        (
            self.path.absolute(),
            drive,
            self.path.parent_level(),
            self.path.named_parts(),
        )
    }
}

impl<R: Renderable> fmt::Display for RenderedPath<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_with(&self.path, self.platform.dialect()))
    }
}

impl<R: Renderable> PartialEq for RenderedPath<R> {
    fn eq(&self, other: &Self) -> bool {
        self.platform == other.platform && self.key() == other.key()
    }
}

impl<R: Renderable> Eq for RenderedPath<R> {}

impl<R: Renderable> Hash for RenderedPath<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.platform.hash(state);
        self.key().hash(state);
    }
}

impl<R: Renderable> PartialOrd for RenderedPath<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Renderable> Ord for RenderedPath<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key()
            .cmp(&other.key())
            .then_with(|| self.platform.cmp(&other.platform))
    }
}
