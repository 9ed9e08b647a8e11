//! Scaffolding library for the PythonTypeGuide stub tree.
//!
//! The crate is a static enumeration plus a file writer: `catalog` holds the
//! (level, category, name) table and path derivation, `stub` renders and
//! writes the fixed Markdown skeleton, and `generate_tree` drives one
//! sequential pass over the whole catalog. The binaries are thin wrappers
//! over these entry points.

use anyhow::Result;
use std::path::Path;

pub mod catalog;
pub mod stub;

pub use catalog::{CATALOG, CatalogEntry, Level};
pub use stub::{render_stub, write_stub};

/// Directory the `generate-stubs` binary writes under, relative to the
/// working directory.
pub const DEFAULT_BASE_DIR: &str = "PythonTypeGuide";

/// Write every catalog stub under `base`, creating directories as needed.
///
/// Entries are processed in catalog order, one synchronous write each; the
/// first I/O failure aborts the run, leaving any files already written in
/// place. Returns the number of stubs written. Safe to re-run: each file is
/// replaced with identical content.
pub fn generate_tree(base: &Path) -> Result<usize> {
    for entry in CATALOG {
        write_stub(&base.join(entry.relative_path()), entry.name)?;
    }
    Ok(CATALOG.len())
}
