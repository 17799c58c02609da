//! Common test utilities for integration tests.
//!
//! This module provides helper functions for building paths and dialect
//! fixtures when testing the gpath library.

use std::fs;
use std::path::{Path, PathBuf};

use gpath::GenericPath;

/// Shorthand for normalizing text with the generic dialect.
#[allow(dead_code)]
pub fn p(text: &str) -> GenericPath {
    GenericPath::from(text)
}

/// Normalizes every entry of `texts`, keeping order.
#[allow(dead_code)]
pub fn paths(texts: &[&str]) -> Vec<GenericPath> {
    texts.iter().map(|text| p(text)).collect()
}

/// Parses an optional expectation from a table row.
#[allow(dead_code)]
pub fn expected(text: Option<&str>) -> Option<GenericPath> {
    text.map(p)
}

/// Writes a dialect file into `dir` and returns its path.
#[allow(dead_code)]
pub fn create_temp_dialect(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// A YAML dialect using `|` as its only separator and `#` as drive postfix.
#[allow(dead_code)]
pub const PIPE_DIALECT_YAML: &str = r"
roots: ['|']
separators: ['|']
drive_postfixes: ['#']
";
