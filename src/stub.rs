//! Stub rendering and writing.
//!
//! A stub is the fixed four-section Markdown skeleton with the concept name
//! as its title; every section body is intentionally empty. Writing is
//! create-or-truncate: re-running the tool replaces each file wholesale, so
//! the output tree is identical run over run.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Section headers emitted after the title, in order.
const SECTIONS: [&str; 4] = ["Overview", "Usage", "Examples", "Related Types"];

/// Render the stub document for `title`.
///
/// Format is bit-exact: title line, blank line, then each section header
/// followed by a blank line. The title is substituted verbatim, casing
/// preserved.
pub fn render_stub(title: &str) -> String {
    let mut doc = format!("# {title}\n\n");
    for section in SECTIONS {
        doc.push_str("## ");
        doc.push_str(section);
        doc.push_str("\n\n");
    }
    doc
}

/// Materialize one stub at `path`, creating missing ancestor directories.
///
/// Existing content at `path` is fully replaced, never merged or appended.
/// Any directory-creation or write failure is fatal to the caller; there is
/// no retry and no cleanup of files written earlier in the run.
pub fn write_stub(path: &Path, title: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    fs::write(path, render_stub(title))
        .with_context(|| format!("writing stub {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_bit_exact() {
        assert_eq!(
            render_stub("int"),
            "# int\n\n## Overview\n\n## Usage\n\n## Examples\n\n## Related Types\n\n"
        );
    }

    #[test]
    fn render_preserves_title_casing() {
        let doc = render_stub("FrozenSet");
        assert!(doc.starts_with("# FrozenSet\n\n"));
        assert!(doc.ends_with("## Related Types\n\n"));
    }
}
