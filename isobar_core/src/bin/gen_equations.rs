//! Generate EQUATIONS.md from the equation registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations
//! ```
//!
//! The generated file is written to `isobar_core/src/equations/EQUATIONS.md`.

use std::fs;
use std::path::Path;

use isobar_core::equations::generate_equations_markdown;

fn main() {
    println!("Generating EQUATIONS.md...");

    let markdown = generate_equations_markdown();
    let output_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/equations/EQUATIONS.md");

    match fs::write(&output_path, &markdown) {
        Ok(()) => {
            println!("Wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Failed to write {}: {}", output_path.display(), e);
            std::process::exit(1);
        }
    }
}
