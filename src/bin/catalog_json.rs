//! Prints the stub catalog as JSON.
//!
//! Inspection helper only: emits one JSON array on stdout with each entry's
//! level, category, name, and derived output path. Never touches the
//! filesystem, so it is safe to run anywhere.

use anyhow::Result;
use serde_json::{Value, json};
use typeguide_stubs::CATALOG;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let records: Vec<Value> = CATALOG
        .iter()
        .map(|entry| {
            json!({
                "level": entry.level,
                "category": entry.category,
                "name": entry.name,
                "path": entry.relative_path(),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
