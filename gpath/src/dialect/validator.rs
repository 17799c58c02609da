//! Dialect table validation.
//!
//! The normalizer accepts any table, but a table that is not internally
//! consistent parses paths in surprising ways. Tables coming from files,
//! the environment or the builder are checked here first.

use crate::dialect::schema::{Dialect, CURRENT_INDICATOR, PARENT_INDICATOR};
use crate::error::{Error, Result};

/// Validates dialect tables.
///
/// # Examples
///
/// ```
/// use gpath::dialect::{Dialect, DialectValidator};
/// use gpath::Platform;
///
/// for platform in Platform::ALL {
///     DialectValidator::validate(platform.dialect()).unwrap();
/// }
///
/// let broken = Dialect { separators: Vec::new(), ..Dialect::default() };
/// assert!(DialectValidator::validate(&broken).is_err());
/// ```
pub struct DialectValidator;

impl DialectValidator {
    /// Validate a complete dialect table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(dialect: &Dialect) -> Result<()> {
        if dialect.separators.is_empty() {
            return Err(Error::Validation {
                field: "separators".into(),
                message: "At least one separator is required".into(),
            });
        }

        Self::validate_roots(dialect)?;
        Self::validate_drive_postfixes(dialect)?;
        Self::validate_indicators(
            "current_indicators",
            &dialect.current_indicators,
            CURRENT_INDICATOR,
            dialect,
        )?;
        Self::validate_indicators(
            "parent_indicators",
            &dialect.parent_indicators,
            PARENT_INDICATOR,
            dialect,
        )?;

        if let Some(shared) = dialect
            .current_indicators
            .iter()
            .find(|token| dialect.parent_indicators.contains(token))
        {
            return Err(Error::Validation {
                field: "parent_indicators".into(),
                message: format!("'{shared}' is also a current indicator"),
            });
        }

        if dialect.forbidden_names.iter().any(String::is_empty) {
            return Err(Error::Validation {
                field: "forbidden_names".into(),
                message: "Names cannot be empty".into(),
            });
        }

        Ok(())
    }

    /// Roots must be non-empty runs of separator characters.
    fn validate_roots(dialect: &Dialect) -> Result<()> {
        for root in &dialect.roots {
            if root.is_empty() {
                return Err(Error::Validation {
                    field: "roots".into(),
                    message: "Root tokens cannot be empty".into(),
                });
            }
            if let Some(c) = root.chars().find(|&c| !dialect.is_separator(c)) {
                return Err(Error::Validation {
                    field: "roots".into(),
                    message: format!("Root '{root}' contains non-separator character '{c}'"),
                });
            }
        }
        Ok(())
    }

    fn validate_drive_postfixes(dialect: &Dialect) -> Result<()> {
        if let Some(&c) = dialect
            .drive_postfixes
            .iter()
            .find(|&&c| dialect.is_separator(c))
        {
            return Err(Error::Validation {
                field: "drive_postfixes".into(),
                message: format!("'{c}' is also a separator"),
            });
        }
        Ok(())
    }

    fn validate_indicators(
        field: &str,
        tokens: &[String],
        canonical: &str,
        dialect: &Dialect,
    ) -> Result<()> {
        if !tokens.iter().any(|token| token == canonical) {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Must contain '{canonical}'"),
            });
        }

        for token in tokens {
            if token.is_empty() {
                return Err(Error::Validation {
                    field: field.into(),
                    message: "Indicators cannot be empty".into(),
                });
            }
            if token.chars().any(|c| dialect.is_separator(c)) {
                return Err(Error::Validation {
                    field: field.into(),
                    message: format!("Indicator '{token}' contains a separator"),
                });
            }
        }
        Ok(())
    }
}
