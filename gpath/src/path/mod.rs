//! Abstract, operating-system-independent paths.
//!
//! This module provides the [`GenericPath`] value type and the algebra
//! built on it.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Raw text is parsed with a [`Dialect`](crate::dialect::Dialect) into a
//! canonical tuple:
//! - a root flag (`/`, `\`)
//! - an optional single-character drive (`C:`)
//! - a count of leading `..` steps (only for relative paths)
//! - the named parts, with `.` dropped and inner `..` resolved
//!
//! Normalization never touches a filesystem, so paths from any host can be
//! handled on any other.
//!
//! ## Operators
//!
//! | Operator | Method | Meaning |
//! |---|---|---|
//! | `a + b`, `a / b` | [`GenericPath::concat`] | append `b` to `a` |
//! | `a - n` | [`GenericPath::truncate`] | drop `n` trailing parts |
//! | `a * n` | [`GenericPath::repeat`] | repeat the relative parts |
//! | `a << n`, `a >> n` | [`GenericPath::shift_up`], [`GenericPath::shift_down`] | change the parent level |
//! | `a & b` | [`GenericPath::common_with`] | longest common base |
//!
//! ## Resolvers
//!
//! [`GenericPath::common_with`], [`GenericPath::subpath_from`],
//! [`GenericPath::relpath_from`] and [`partition`] share one notion of
//! common ancestry and return `None` where no sound answer exists.
//!
//! # Examples
//!
//! ```
//! use gpath::GenericPath;
//! use gpath::path::PathRelationship;
//!
//! let install = GenericPath::from("/opt/app");
//! let binary = &install / "bin/app";
//! assert_eq!(binary.to_string(), "/opt/app/bin/app");
//!
//! assert_eq!(binary.subpath_from(&install), Some(GenericPath::from("bin/app")));
//! assert_eq!(PathRelationship::between(&install, &binary), PathRelationship::Ancestor);
//! ```

mod common;
pub mod normalize;
mod operators;
mod partition;
mod relationship;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use common::CommonOptions;
pub use normalize::Normalizer;
pub use partition::{partition, partition_paths};
pub use relationship::PathRelationship;
pub use types::GenericPath;
