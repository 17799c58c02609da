//! Environment variable handling for dialect selection.
//!
//! Two variables are recognized:
//!
//! - `GPATH_PLATFORM` names a built-in platform (any alias accepted by
//!   [`Platform::from_name`]).
//! - `GPATH_DIALECT_FILE` points to a YAML or JSON dialect file.

use std::env;
use std::path::PathBuf;

use crate::platform::Platform;

/// Environment variable naming a built-in platform.
pub const PLATFORM_VAR: &str = "GPATH_PLATFORM";

/// Environment variable pointing to a dialect file.
pub const DIALECT_FILE_VAR: &str = "GPATH_DIALECT_FILE";

/// Reads dialect overrides from the environment.
///
/// # Examples
///
/// ```no_run
/// use gpath::dialect::EnvironmentDialect;
///
/// if let Some(platform) = EnvironmentDialect::platform() {
///     println!("paths are parsed as {platform}");
/// }
/// ```
pub struct EnvironmentDialect;

impl EnvironmentDialect {
    /// The platform named by `GPATH_PLATFORM`, if set and recognized.
    ///
    /// An unrecognized name is logged and ignored rather than failing the
    /// caller.
    #[must_use]
    pub fn platform() -> Option<Platform> {
        let value = env::var(PLATFORM_VAR).ok()?;
        match Platform::from_name(&value) {
            Ok(platform) => {
                log::debug!("{PLATFORM_VAR} selects platform {platform}");
                Some(platform)
            }
            Err(e) => {
                log::warn!("Ignoring {PLATFORM_VAR}: {e}");
                None
            }
        }
    }

    /// The dialect file named by `GPATH_DIALECT_FILE`, if set and non-empty.
    #[must_use]
    pub fn dialect_file() -> Option<PathBuf> {
        let value = env::var_os(DIALECT_FILE_VAR)?;
        if value.is_empty() {
            return None;
        }
        let path = PathBuf::from(value);
        log::debug!("{DIALECT_FILE_VAR} points to {}", path.display());
        Some(path)
    }
}
