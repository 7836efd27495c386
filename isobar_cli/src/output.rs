//! Result rendering for the terminal.

use std::io::{self, Write};

use clap::ValueEnum;
use isobar_core::file_io::{write_labeled_profiles_csv, write_profiles_csv};
use isobar_core::StressAnalysisResult;

use crate::Result;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary and sampled profile table
    Table,
    /// Full result as JSON
    Json,
    /// Depth/stress profile as CSV
    Csv,
}

/// Print a result to stdout in the requested format.
///
/// `every` controls how many depth samples are skipped between table rows.
pub fn print_result(result: &StressAnalysisResult, format: OutputFormat, every: usize) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => write_table(&mut out, result, every)?,
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Csv => write_profiles_csv(result, &mut out)?,
    }
    Ok(())
}

/// Print several results as one CSV with a leading `label` column.
pub fn print_labeled_csv(results: &[StressAnalysisResult]) -> Result<()> {
    let stdout = io::stdout();
    write_labeled_profiles_csv(results, stdout.lock())?;
    Ok(())
}

fn write_table<W: Write>(out: &mut W, result: &StressAnalysisResult, every: usize) -> io::Result<()> {
    let rule = "═".repeat(60);
    let check = &result.check;

    writeln!(out, "{}", rule)?;
    writeln!(out, "  VERTICAL STRESS DISTRIBUTION: {}", result.label)?;
    writeln!(out, "{}", rule)?;
    writeln!(out)?;
    writeln!(out, "  Radial offset r = {:.3} m", result.radial_offset_m)?;
    writeln!(out)?;

    let weighted = result.weighted_kpa.as_deref();
    match weighted {
        Some(_) => writeln!(
            out,
            "  {:>8}  {:>14}  {:>14}  {:>14}",
            "z [m]", "Boussinesq", "Westergaard", "Weighted"
        )?,
        None => writeln!(out, "  {:>8}  {:>14}  {:>14}", "z [m]", "Boussinesq", "Westergaard")?,
    }

    let last = result.depths_m.len().saturating_sub(1);
    for (i, z) in result.depths_m.iter().enumerate() {
        if i % every.max(1) != 0 && i != last {
            continue;
        }
        write!(
            out,
            "  {:>8.3}  {:>14.3}  {:>14.3}",
            z, result.boussinesq_kpa[i], result.westergaard_kpa[i]
        )?;
        if let Some(weighted) = weighted {
            write!(out, "  {:>14.3}", weighted[i])?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, "  Stresses in kN/m²")?;
    writeln!(out)?;
    writeln!(out, "Foundation Depth Check ({}):", result.checked_profile.display_name())?;
    writeln!(out, "  Foundation depth:  {:.3} m", check.target_depth_m)?;
    writeln!(out, "  Induced stress:    {:.3} kN/m²", check.stress_kpa)?;
    writeln!(out, "  Bearing capacity:  {:.3} kN/m²", check.capacity_kpa)?;
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "  RESULT: {} {}",
        if check.passes() { "[OK]" } else { "[FAIL]" },
        check.message()
    )?;
    writeln!(out, "{}", rule)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use isobar_core::{calculate, PointLoad, SoilProfile, StressAnalysisInput};

    fn result(capacity: f64) -> StressAnalysisResult {
        let input = StressAnalysisInput::new(
            "T-1",
            PointLoad::centred(100.0),
            10.0,
            SoilProfile::uniform(0.3).unwrap(),
            capacity,
            1.0,
        );
        calculate(&input).unwrap()
    }

    #[test]
    fn test_table_samples_rows() {
        let mut buffer = Vec::new();
        write_table(&mut buffer, &result(150.0), 10).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        // Rows 0, 10, ..., 90 plus the last sample
        let rows = text.lines().filter(|l| l.trim_start().starts_with(|c: char| c.is_ascii_digit())).count();
        assert_eq!(rows, 11);
        assert!(text.contains("[OK] The foundation depth is adequate."));
        assert!(!text.contains("Weighted"));
    }

    #[test]
    fn test_table_reports_failure() {
        let mut buffer = Vec::new();
        write_table(&mut buffer, &result(10.0), 25).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("[FAIL] Insufficient foundation depth."));
    }
}
