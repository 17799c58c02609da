//! Dialect file loading.
//!
//! Dialect tables can be kept in YAML (`.yaml`/`.yml`) or JSON (`.json`)
//! files. The file format is chosen from the extension.

use std::fs;
use std::path::Path;

use crate::dialect::schema::Dialect;
use crate::error::{Error, Result};

/// Loads dialect tables from files and strings.
///
/// # Examples
///
/// ```
/// use gpath::dialect::DialectLoader;
///
/// let dialect = DialectLoader::from_yaml_str("separators: ['/']\nroots: ['/']\n").unwrap();
/// assert_eq!(dialect.separators, vec!['/']);
/// ```
pub struct DialectLoader;

impl DialectLoader {
    /// Load and parse a dialect file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an extension other
    /// than `.yaml`, `.yml` or `.json`, or does not parse.
    pub fn load_file(path: &Path) -> Result<Dialect> {
        let format = Self::format_of(path)?;
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidDialectFile {
            path: path.to_path_buf(),
            reason: format!("Failed to read dialect file: {e}"),
        })?;

        log::debug!("Loading {format} dialect from {}", path.display());
        match format {
            FileFormat::Yaml => Self::from_yaml_str(&contents),
            FileFormat::Json => Self::from_json_str(&contents),
        }
    }

    /// Parse a dialect from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the YAML is invalid or names an
    /// unknown field.
    pub fn from_yaml_str(contents: &str) -> Result<Dialect> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Parse a dialect from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the JSON is invalid or names an unknown
    /// field.
    pub fn from_json_str(contents: &str) -> Result<Dialect> {
        Ok(serde_json::from_str(contents)?)
    }

    fn format_of(path: &Path) -> Result<FileFormat> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml" | "yml") => Ok(FileFormat::Yaml),
            Some("json") => Ok(FileFormat::Json),
            _ => Err(Error::InvalidDialectFile {
                path: path.to_path_buf(),
                reason: "unsupported file extension (expected .yaml, .yml or .json)".into(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum FileFormat {
    Yaml,
    Json,
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yaml => f.write_str("YAML"),
            Self::Json => f.write_str("JSON"),
        }
    }
}
