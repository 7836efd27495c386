//! # Equation Registry
//!
//! Central registry of every formula Isobar evaluates. Each equation carries
//! metadata (plain-text formula, reference, variables, assumptions) so a
//! result can list exactly which formulas produced it and so the equations
//! reference can be regenerated from source.
//!
//! ## Usage
//!
//! ```rust
//! use isobar_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::BoussinesqStress, "Boussinesq profile");
//!
//! let meta = Equation::BoussinesqStress.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! assert_eq!(tracker.unique_equations(), vec![Equation::BoussinesqStress]);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Literature reference for an equation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Boussinesq (1885), point load on an elastic half-space
    Boussinesq1885,
    /// Westergaard (1938), elastic medium reinforced by rigid sheets
    Westergaard1938,
    /// Das, Principles of Geotechnical Engineering
    Das { edition: u8, chapter: u8 },
    /// Fundamental mechanics or numerics (no specific reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Boussinesq1885 => "Boussinesq (1885)".to_string(),
            CodeReference::Westergaard1938 => "Westergaard (1938)".to_string(),
            CodeReference::Das { edition, chapter } => {
                format!("Das, Principles of Geotechnical Engineering {}ed, Ch. {}", edition, chapter)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Categories for grouping equations in the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Load geometry (radial offset)
    Geometry,
    /// Stress distribution models
    StressDistribution,
    /// Combination of model outputs
    Combination,
    /// Interpolation and capacity checks
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Geometry => "Geometry",
            EquationCategory::StressDistribution => "Stress Distribution",
            EquationCategory::Combination => "Combination",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }

    /// Sort order (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Geometry => 1,
            EquationCategory::StressDistribution => 2,
            EquationCategory::Combination => 3,
            EquationCategory::DesignChecks => 4,
        }
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    pub symbol: &'static str,
    pub description: &'static str,
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

/// Complete metadata for an equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Literature reference
    pub reference: CodeReference,
    pub variables: Vec<Variable>,
    pub assumptions: Vec<&'static str>,
    pub category: EquationCategory,
    /// Source file implementing the equation, relative to `src/equations/`
    pub source_module: &'static str,
    /// Function implementing the equation
    pub source_function: &'static str,
}

/// Every formula used by Isobar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// r = √(x² + y²)
    RadialOffset,
    /// Δσz = (3P / 2πz²)·[1 / (1 + (r/z)²)]^(5/2)
    BoussinesqStress,
    /// η = √[(1 - 2μ) / (2 - 2μ)]
    WestergaardEta,
    /// I5 = (1 / 2πη²)·[(r/ηz)² + 1]^(-3/2)
    WestergaardInfluence,
    /// Δσz = (P / z²)·I5
    WestergaardStress,
    /// Δσz = w₁σ₁ + w₂σ₂
    WeightedStress,
    /// Piecewise-linear interpolation of a profile at a depth
    LinearInterpolation,
    /// Δσz(D_f) > q_a
    BearingCapacityCheck,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::RadialOffset => EquationMetadata {
                name: "Radial Offset",
                description: "Horizontal distance from the load line to the point of interest",
                formula_plain: "r = sqrt(x^2 + y^2)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("x", "Plan offset along x", "m"),
                    Variable::new("y", "Plan offset along y", "m"),
                    Variable::new("r", "Radial offset", "m"),
                ],
                assumptions: vec![],
                category: EquationCategory::Geometry,
                source_module: "stress.rs",
                source_function: "radial_offset",
            },

            Equation::BoussinesqStress => EquationMetadata {
                name: "Boussinesq Point Load Stress",
                description: "Vertical stress increment beneath a point load in an elastic half-space",
                formula_plain: "dsz = (3P / (2 pi z^2)) * (1 / (1 + (r/z)^2))^(5/2)",
                reference: CodeReference::Boussinesq1885,
                variables: vec![
                    Variable::new("P", "Point load", "kN"),
                    Variable::new("z", "Depth below surface", "m"),
                    Variable::new("r", "Radial offset", "m"),
                    Variable::new("dsz", "Vertical stress increment", "kN/m²"),
                ],
                assumptions: vec![
                    "Homogeneous, isotropic, linear-elastic half-space",
                    "Load applied at the ground surface",
                    "z > 0",
                ],
                category: EquationCategory::StressDistribution,
                source_module: "stress.rs",
                source_function: "boussinesq_stress",
            },

            Equation::WestergaardEta => EquationMetadata {
                name: "Westergaard Elastic Parameter",
                description: "Parameter relating lateral restraint to the layer's Poisson ratio",
                formula_plain: "eta = sqrt((1 - 2 mu) / (2 - 2 mu))",
                reference: CodeReference::Westergaard1938,
                variables: vec![
                    Variable::new("mu", "Poisson's ratio of the layer", "-"),
                    Variable::new("eta", "Westergaard parameter", "-"),
                ],
                assumptions: vec!["0 < mu < 0.5"],
                category: EquationCategory::StressDistribution,
                source_module: "stress.rs",
                source_function: "westergaard_eta",
            },

            Equation::WestergaardInfluence => EquationMetadata {
                name: "Westergaard Influence Factor",
                description: "Dimensionless influence factor I5 for a point load",
                formula_plain: "I5 = (1 / (2 pi eta^2)) * ((r / (eta z))^2 + 1)^(-3/2)",
                reference: CodeReference::Das { edition: 9, chapter: 10 },
                variables: vec![
                    Variable::new("I5", "Influence factor", "-"),
                    Variable::new("eta", "Westergaard parameter", "-"),
                ],
                assumptions: vec![],
                category: EquationCategory::StressDistribution,
                source_module: "stress.rs",
                source_function: "westergaard_influence",
            },

            Equation::WestergaardStress => EquationMetadata {
                name: "Westergaard Point Load Stress",
                description: "Vertical stress increment in a medium restrained by rigid horizontal sheets",
                formula_plain: "dsz = (P / z^2) * I5",
                reference: CodeReference::Westergaard1938,
                variables: vec![
                    Variable::new("P", "Point load", "kN"),
                    Variable::new("z", "Depth below surface", "m"),
                    Variable::new("dsz", "Vertical stress increment", "kN/m²"),
                ],
                assumptions: vec![
                    "Poisson's ratio taken from the layer whose top is the greatest boundary <= z",
                    "z > 0",
                ],
                category: EquationCategory::StressDistribution,
                source_module: "stress.rs",
                source_function: "westergaard_stress",
            },

            Equation::WeightedStress => EquationMetadata {
                name: "Weighted Stress Estimate",
                description: "Weighted combination of the Boussinesq and Westergaard profiles",
                formula_plain: "dsz = w1 * dsz_B + w2 * dsz_W",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("w1", "Boussinesq weight", "-"),
                    Variable::new("w2", "Westergaard weight", "-"),
                ],
                assumptions: vec!["Weights are not normalized"],
                category: EquationCategory::Combination,
                source_module: "stress.rs",
                source_function: "weighted_stress",
            },

            Equation::LinearInterpolation => EquationMetadata {
                name: "Linear Interpolation",
                description: "Stress at the foundation depth from the sampled profile",
                formula_plain: "s(D) = s_i + (s_i+1 - s_i) * (D - z_i) / (z_i+1 - z_i)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("D", "Foundation depth", "m"),
                    Variable::new("z_i", "Depth sample at or above D", "m"),
                ],
                assumptions: vec!["Clamped to the first/last sample outside the sampled range"],
                category: EquationCategory::DesignChecks,
                source_module: "../depth.rs",
                source_function: "interpolate",
            },

            Equation::BearingCapacityCheck => EquationMetadata {
                name: "Bearing Capacity Check",
                description: "Foundation depth is insufficient when induced stress exceeds capacity",
                formula_plain: "dsz(D) > qa  =>  insufficient depth",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("qa", "Bearing capacity", "kN/m²"),
                ],
                assumptions: vec!["Strict comparison: equality is adequate"],
                category: EquationCategory::DesignChecks,
                source_module: "../calculations/depth_check.rs",
                source_function: "check",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// All categories, in `sort_order`
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        vec![Geometry, StressDistribution, Combination, DesignChecks]
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::RadialOffset,
    Equation::BoussinesqStress,
    Equation::WestergaardEta,
    Equation::WestergaardInfluence,
    Equation::WestergaardStress,
    Equation::WeightedStress,
    Equation::LinearInterpolation,
    Equation::BearingCapacityCheck,
];

// ============================================================================
// Usage Tracking
// ============================================================================

/// Record of an equation being used in an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationUsage {
    pub equation: Equation,
    /// Where/why it was used (e.g., "Westergaard profile")
    pub context: String,
}

impl EquationUsage {
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during an analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Unique equations in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group unique equations by category, in category order
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }
}

// ============================================================================
// Markdown Reference
// ============================================================================

/// Generate the equations reference as markdown.
///
/// ```rust
/// use isobar_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Isobar Equations Reference"));
/// assert!(markdown.contains("Stress Distribution"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(
        r#"# Isobar Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

## Sign Conventions

| Quantity | Positive Direction |
|----------|-------------------|
| Load | Downward |
| Depth | Downward from the ground surface |
| Stress | Compression |

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}
