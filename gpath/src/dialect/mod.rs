//! Path dialects: the syntax tables driving parsing and rendering.
//!
//! A dialect can come from several sources, with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic tables (via `DialectBuilder::with_dialect`)
//! 2. Dialect files (via `DialectBuilder::with_file`)
//! 3. `GPATH_DIALECT_FILE`
//! 4. `GPATH_PLATFORM`
//! 5. A fallback platform (via `DialectBuilder::with_platform`)
//! 6. The built-in generic table
//!
//! # Examples
//!
//! ```
//! use gpath::dialect::{Dialect, DialectBuilder};
//! use gpath::path::Normalizer;
//!
//! let dialect = DialectBuilder::new()
//!     .skip_env()
//!     .with_dialect(Dialect {
//!         roots: vec!["/".to_string()],
//!         separators: vec!['/'],
//!         drive_postfixes: Vec::new(),
//!         ..Dialect::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! let path = Normalizer::with_dialect(dialect).normalize("C:/x");
//! assert_eq!(path.drive(), "");
//! assert_eq!(path.named_parts(), ["C:", "x"]);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

pub use builder::DialectBuilder;
pub use environment::{EnvironmentDialect, DIALECT_FILE_VAR, PLATFORM_VAR};
pub use loader::DialectLoader;
pub use schema::{Dialect, CURRENT_INDICATOR, PARENT_INDICATOR};
pub use validator::DialectValidator;
