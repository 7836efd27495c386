//! Equations command implementation

use std::io::{self, Write};

use isobar_core::equations::generate_equations_markdown;

use crate::Result;

/// Print the equation reference as markdown
pub fn run() -> Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(generate_equations_markdown().as_bytes())?;
    Ok(())
}
