//! One-shot stub generator.
//!
//! Takes no flags and reads no environment: it writes the full catalog as
//! Markdown stubs under `PythonTypeGuide/` in the current directory and
//! exits. The first I/O failure aborts the run with a nonzero exit code.

use anyhow::Result;
use std::path::Path;
use typeguide_stubs::{DEFAULT_BASE_DIR, generate_tree};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    generate_tree(Path::new(DEFAULT_BASE_DIR))?;
    Ok(())
}
