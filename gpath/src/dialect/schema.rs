//! Dialect table definitions.
//!
//! A dialect describes the surface syntax of paths on one platform: which
//! tokens anchor a path at a root, which characters separate components,
//! how a drive is introduced and which components mean "here" and "up".
//! The normalizer and the renderer are both driven entirely by this table.

use serde::{Deserialize, Serialize};

/// The canonical "current directory" component.
pub const CURRENT_INDICATOR: &str = ".";

/// The canonical "parent directory" component.
pub const PARENT_INDICATOR: &str = "..";

/// Syntax table for one family of paths.
///
/// Every field defaults to the generic table, so a dialect file only has
/// to name the fields it changes.
///
/// # Examples
///
/// ```
/// use gpath::dialect::Dialect;
///
/// let dialect = Dialect {
///     separators: vec![':'],
///     roots: vec![":".to_string()],
///     drive_postfixes: Vec::new(),
///     ..Default::default()
/// };
/// assert!(dialect.is_separator(':'));
/// assert!(!dialect.allows_drive());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Dialect {
    /// Tokens that anchor a path at a filesystem root. The first one is
    /// used when rendering.
    #[serde(default = "generic_roots")]
    pub roots: Vec<String>,

    /// Characters splitting a path into components. The first one is used
    /// when rendering.
    #[serde(default = "generic_separators")]
    pub separators: Vec<char>,

    /// Characters that, in second position, turn the first character into
    /// a drive name. Empty when the platform has no drives.
    #[serde(default = "generic_drive_postfixes")]
    pub drive_postfixes: Vec<char>,

    /// Components meaning "the current directory".
    #[serde(default = "default_current_indicators")]
    pub current_indicators: Vec<String>,

    /// Components meaning "the parent directory".
    #[serde(default = "default_parent_indicators")]
    pub parent_indicators: Vec<String>,

    /// Characters the platform does not accept inside a component.
    ///
    /// Informational only: paths are never rejected for containing them.
    #[serde(default)]
    pub forbidden_chars: Vec<char>,

    /// Component names the platform reserves.
    ///
    /// Informational only, like [`forbidden_chars`](Self::forbidden_chars).
    #[serde(default)]
    pub forbidden_names: Vec<String>,
}

fn generic_roots() -> Vec<String> {
    vec!["/".to_string(), "\\".to_string()]
}

fn generic_separators() -> Vec<char> {
    vec!['/', '\\']
}

fn generic_drive_postfixes() -> Vec<char> {
    vec![':']
}

fn default_current_indicators() -> Vec<String> {
    vec![CURRENT_INDICATOR.to_string()]
}

fn default_parent_indicators() -> Vec<String> {
    vec![PARENT_INDICATOR.to_string()]
}

fn windows_forbidden_chars() -> Vec<char> {
    let mut chars: Vec<char> = (0u8..=0x1f).map(char::from).collect();
    chars.extend(['"', '*', '/', ':', '<', '>', '?', '\\', '|', '\u{7f}']);
    chars
}

fn windows_forbidden_names() -> Vec<String> {
    let mut names: Vec<String> = ["CON", "PRN", "AUX", "NUL"]
        .iter()
        .map(ToString::to_string)
        .collect();
    for device in ["COM", "LPT"] {
        names.extend((0..=9).map(|n| format!("{device}{n}")));
    }
    names
}

impl Default for Dialect {
    fn default() -> Self {
        Self::generic()
    }
}

impl Dialect {
    /// The generic dialect: accepts `/` and `\` separators and `X:` drives.
    #[must_use]
    pub fn generic() -> Self {
        Self {
            roots: generic_roots(),
            separators: generic_separators(),
            drive_postfixes: generic_drive_postfixes(),
            current_indicators: default_current_indicators(),
            parent_indicators: default_parent_indicators(),
            forbidden_chars: Vec::new(),
            forbidden_names: Vec::new(),
        }
    }

    /// POSIX paths: `/` only, no drives.
    #[must_use]
    pub fn posix() -> Self {
        Self {
            roots: vec!["/".to_string()],
            separators: vec!['/'],
            drive_postfixes: Vec::new(),
            forbidden_chars: vec!['/', '\0'],
            ..Self::generic()
        }
    }

    /// POSIX paths restricted to the portable filename character set.
    #[must_use]
    pub fn posix_portable() -> Self {
        let forbidden: Vec<char> = (0u8..=0x7f)
            .map(char::from)
            .filter(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
            .collect();
        Self {
            forbidden_chars: forbidden,
            ..Self::posix()
        }
    }

    /// Windows NT paths: `\` preferred, `/` accepted, `X:` drives.
    #[must_use]
    pub fn windows_nt() -> Self {
        Self {
            roots: vec!["\\".to_string(), "/".to_string()],
            separators: vec!['\\', '/'],
            drive_postfixes: vec![':'],
            current_indicators: default_current_indicators(),
            parent_indicators: default_parent_indicators(),
            forbidden_chars: windows_forbidden_chars(),
            forbidden_names: windows_forbidden_names(),
        }
    }

    /// Windows UNC paths rooted at `\\` (or `//`).
    #[must_use]
    pub fn unc() -> Self {
        Self {
            roots: vec!["\\\\".to_string(), "//".to_string()],
            ..Self::windows_nt()
        }
    }

    /// Check whether `c` separates components.
    #[must_use]
    pub fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }

    /// Check whether `c` introduces a drive when it follows the drive name.
    #[must_use]
    pub fn is_drive_postfix(&self, c: char) -> bool {
        self.drive_postfixes.contains(&c)
    }

    /// Check whether the dialect can express drives at all.
    #[must_use]
    pub fn allows_drive(&self) -> bool {
        !self.drive_postfixes.is_empty()
    }

    /// Check whether `segment` means "the current directory".
    ///
    /// The canonical `.` is always recognized, whatever the table says.
    #[must_use]
    pub fn is_current(&self, segment: &str) -> bool {
        segment == CURRENT_INDICATOR || self.current_indicators.iter().any(|c| c == segment)
    }

    /// Check whether `segment` means "the parent directory".
    ///
    /// The canonical `..` is always recognized, whatever the table says.
    #[must_use]
    pub fn is_parent(&self, segment: &str) -> bool {
        segment == PARENT_INDICATOR || self.parent_indicators.iter().any(|p| p == segment)
    }

    /// The root token used when rendering, if any.
    #[must_use]
    pub fn preferred_root(&self) -> Option<&str> {
        self.roots.first().map(String::as_str)
    }

    /// The separator used when rendering, if any.
    #[must_use]
    pub fn preferred_separator(&self) -> Option<char> {
        self.separators.first().copied()
    }

    /// The drive postfix used when rendering, if any.
    #[must_use]
    pub fn preferred_drive_postfix(&self) -> Option<char> {
        self.drive_postfixes.first().copied()
    }

    /// Find the longest root token that `text` starts with.
    #[must_use]
    pub fn match_root(&self, text: &str) -> Option<&str> {
        self.roots
            .iter()
            .filter(|root| !root.is_empty() && text.starts_with(root.as_str()))
            .max_by_key(|root| root.len())
            .map(String::as_str)
    }
}
