#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # gpath
//!
//! A generalized, operating-system-independent abstract file path.
//!
//! This library parses path text from any platform into a normalized value
//! and provides an algebra over those values: concatenation, truncation,
//! common bases, relative paths and partitioning of path collections. It
//! never touches a filesystem, so paths recorded on one host can be
//! reasoned about on another.
//!
//! ## Core Types
//!
//! - [`GenericPath`]: The normalized path value type
//! - [`CommonOptions`]: Policy for common base resolution
//! - [`Platform`] and [`Dialect`](dialect::Dialect): Path syntax tables
//! - [`RenderedPath`](render::RenderedPath): A path displayed for a platform
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use gpath::{CommonOptions, GenericPath, Platform};
//!
//! let a = GenericPath::from("C:\\Users\\me\\src\\app");
//! let b = GenericPath::from("C:/Users/me/docs");
//!
//! let base = a.common_with(&b, CommonOptions::default()).unwrap();
//! assert_eq!(base.to_string(), "C:/Users/me");
//!
//! let rel = b.relpath_from(&a).unwrap();
//! assert_eq!(rel.to_string(), "../../docs");
//!
//! assert_eq!(b.render(Platform::WindowsNt).to_string(), "C:\\Users\\me\\docs");
//! ```

pub mod decode;
pub mod dialect;
pub mod error;
pub mod path;
pub mod platform;
pub mod render;

// Re-export key types at crate root for convenience
pub use decode::{decoder_for, PathDecoder};
pub use error::{Error, Result};
pub use path::{partition, partition_paths, CommonOptions, GenericPath, Normalizer, PathRelationship};
pub use platform::Platform;
pub use render::{Renderable, RenderedPath};
