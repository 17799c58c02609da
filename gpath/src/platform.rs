//! Platform tags selecting a path dialect.
//!
//! A [`Platform`] names a family of path syntaxes. Each platform maps to a
//! built-in [`Dialect`] table used when parsing text into a
//! [`GenericPath`](crate::GenericPath) and when rendering one back to text.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::error::{Error, Result};

/// A target platform whose path syntax can be parsed and rendered.
///
/// # Examples
///
/// ```
/// use gpath::Platform;
///
/// assert_eq!(Platform::from_name("linux").unwrap(), Platform::Posix);
/// assert_eq!(Platform::from_name("NT").unwrap(), Platform::WindowsNt);
/// assert_eq!(Platform::WindowsNt.to_string(), "windows-nt");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    /// Accepts both POSIX and Windows syntax; renders with `/`.
    #[default]
    Generic,
    /// POSIX-like systems (Linux, macOS).
    Posix,
    /// The POSIX portable filename character set.
    PosixPortable,
    /// Windows NT paths with optional drive letters.
    WindowsNt,
    /// Windows UNC paths rooted at `\\`.
    Unc,
}

impl Platform {
    /// All platforms, in declaration order.
    pub const ALL: [Platform; 5] = [
        Self::Generic,
        Self::Posix,
        Self::PosixPortable,
        Self::WindowsNt,
        Self::Unc,
    ];

    /// Parses a platform from its canonical name or a common alias.
    ///
    /// Recognizes (case-insensitive): `""`, `generic`, `posix`, `linux`,
    /// `macos`, `osx`, `posix-portable`, `portable`, `windows-nt`,
    /// `windows`, `win`, `nt` and `unc`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPlatform`] if the name is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::Platform;
    ///
    /// assert_eq!(Platform::from_name("").unwrap(), Platform::Generic);
    /// assert_eq!(Platform::from_name("osx").unwrap(), Platform::Posix);
    /// assert!(Platform::from_name("amiga").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "" | "generic" => Ok(Self::Generic),
            "posix" | "linux" | "macos" | "osx" => Ok(Self::Posix),
            "posix-portable" | "portable" => Ok(Self::PosixPortable),
            "windows-nt" | "windows" | "win" | "nt" => Ok(Self::WindowsNt),
            "unc" => Ok(Self::Unc),
            _ => Err(Error::UnknownPlatform {
                name: name.to_string(),
            }),
        }
    }

    /// Returns the canonical name of the platform.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Posix => "posix",
            Self::PosixPortable => "posix-portable",
            Self::WindowsNt => "windows-nt",
            Self::Unc => "unc",
        }
    }

    /// Returns the built-in dialect table for this platform.
    ///
    /// Tables are built once and shared for the life of the process.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::Platform;
    ///
    /// let dialect = Platform::WindowsNt.dialect();
    /// assert!(dialect.is_separator('\\'));
    /// assert!(dialect.allows_drive());
    /// assert!(!Platform::Posix.dialect().allows_drive());
    /// ```
    #[must_use]
    pub fn dialect(self) -> &'static Dialect {
        static GENERIC: OnceLock<Dialect> = OnceLock::new();
        static POSIX: OnceLock<Dialect> = OnceLock::new();
        static POSIX_PORTABLE: OnceLock<Dialect> = OnceLock::new();
        static WINDOWS_NT: OnceLock<Dialect> = OnceLock::new();
        static UNC: OnceLock<Dialect> = OnceLock::new();

        match self {
            Self::Generic => GENERIC.get_or_init(Dialect::generic),
            Self::Posix => POSIX.get_or_init(Dialect::posix),
            Self::PosixPortable => POSIX_PORTABLE.get_or_init(Dialect::posix_portable),
            Self::WindowsNt => WINDOWS_NT.get_or_init(Dialect::windows_nt),
            Self::Unc => UNC.get_or_init(Dialect::unc),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_round_trip() {
        for platform in Platform::ALL {
            assert_eq!(Platform::from_name(platform.name()).unwrap(), platform);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Platform::from_name("linux").unwrap(), Platform::Posix);
        assert_eq!(Platform::from_name("macos").unwrap(), Platform::Posix);
        assert_eq!(Platform::from_name("portable").unwrap(), Platform::PosixPortable);
        assert_eq!(Platform::from_name("win").unwrap(), Platform::WindowsNt);
        assert_eq!(Platform::from_name("Windows").unwrap(), Platform::WindowsNt);
        assert_eq!(Platform::from_name(" unc ").unwrap(), Platform::Unc);
    }

    #[test]
    fn test_unknown_platform() {
        let err = Platform::from_name("vms").unwrap_err();
        assert!(matches!(err, Error::UnknownPlatform { ref name } if name == "vms"));
    }

    #[test]
    fn test_from_str() {
        let platform: Platform = "nt".parse().unwrap();
        assert_eq!(platform, Platform::WindowsNt);
    }

    #[test]
    fn test_default_is_generic() {
        assert_eq!(Platform::default(), Platform::Generic);
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Platform::WindowsNt).unwrap();
        assert_eq!(json, "\"windows-nt\"");
        let parsed: Platform = serde_json::from_str("\"posix-portable\"").unwrap();
        assert_eq!(parsed, Platform::PosixPortable);
    }

    #[test]
    fn test_dialect_tables_are_shared() {
        let first = Platform::Posix.dialect();
        let second = Platform::Posix.dialect();
        assert!(std::ptr::eq(first, second));
    }
}
