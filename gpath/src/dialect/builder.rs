//! Dialect builder with layered sources.

use std::path::PathBuf;

use crate::dialect::environment::EnvironmentDialect;
use crate::dialect::loader::DialectLoader;
use crate::dialect::schema::Dialect;
use crate::dialect::validator::DialectValidator;
use crate::error::Result;
use crate::platform::Platform;

/// Resolves the dialect to use from programmatic, file and environment
/// sources.
///
/// Sources are consulted from highest to lowest precedence, and the first
/// one present wins:
///
/// 1. A table given with [`with_dialect`](Self::with_dialect)
/// 2. A file given with [`with_file`](Self::with_file)
/// 3. The file named by `GPATH_DIALECT_FILE`
/// 4. The platform named by `GPATH_PLATFORM`
/// 5. A platform given with [`with_platform`](Self::with_platform)
/// 6. The generic dialect
///
/// # Examples
///
/// ```
/// use gpath::dialect::DialectBuilder;
/// use gpath::Platform;
///
/// let dialect = DialectBuilder::new()
///     .skip_env()
///     .with_platform(Platform::WindowsNt)
///     .build()
///     .unwrap();
/// assert_eq!(dialect.preferred_separator(), Some('\\'));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DialectBuilder {
    dialect: Option<Dialect>,
    file: Option<PathBuf>,
    platform: Option<Platform>,
    skip_env: bool,
}

impl DialectBuilder {
    /// Create a new builder with no sources.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this table, ignoring every other source.
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = Some(dialect);
        self
    }

    /// Load the table from this YAML or JSON file.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Fall back to this platform's table when the environment names none.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Ignore `GPATH_PLATFORM` and `GPATH_DIALECT_FILE`.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Resolve and validate the dialect.
    ///
    /// # Errors
    ///
    /// Returns an error if a dialect file cannot be loaded or if the
    /// resolved table fails validation.
    pub fn build(self) -> Result<Dialect> {
        let dialect = self.resolve()?;
        DialectValidator::validate(&dialect)?;
        Ok(dialect)
    }

    fn resolve(self) -> Result<Dialect> {
        if let Some(dialect) = self.dialect {
            log::debug!("Using programmatic dialect");
            return Ok(dialect);
        }

        if let Some(path) = self.file {
            return DialectLoader::load_file(&path);
        }

        if !self.skip_env {
            if let Some(path) = EnvironmentDialect::dialect_file() {
                return DialectLoader::load_file(&path);
            }
            if let Some(platform) = EnvironmentDialect::platform() {
                return Ok(platform.dialect().clone());
            }
        }

        let platform = self.platform.unwrap_or_default();
        log::debug!("Using built-in {platform} dialect");
        Ok(platform.dialect().clone())
    }
}
