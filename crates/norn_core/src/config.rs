//! Configuration management for engine parameters.
//!
//! Strongly-typed configuration structures that map to the `config.toml`
//! file. Defaults are hardcoded in the `Default` impls; a config file
//! overrides them.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [chemistry]
//! pain_reflex_dose = 1.0
//!
//! [mutation]
//! mutation_chance = 0.1
//! duplication_chance = 0.05
//! cut_chance = 0.01
//! crossover_bias = 0.5
//! ```

use serde::{Deserialize, Serialize};

/// Chemistry registry configuration.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChemistryConfig {
    /// Dose added to the pain chemical on every injection.
    pub pain_reflex_dose: f64,
}

impl Default for ChemistryConfig {
    fn default() -> Self {
        Self {
            pain_reflex_dose: 1.0,
        }
    }
}

/// Genome mutation and crossover configuration.
///
/// The three chances gate the mutation kinds in strict precedence order:
/// point mutation, then duplication, then cut.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MutationConfig {
    /// Chance of a point mutation per mutable gene per check.
    pub mutation_chance: f64,
    /// Chance of duplicating a duplicatable gene per check.
    pub duplication_chance: f64,
    /// Chance of cutting a cuttable gene per check.
    pub cut_chance: f64,
    /// Probability crossover picks the first parent's gene when both carry
    /// the key. 0.5 is a fair coin.
    pub crossover_bias: f64,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            mutation_chance: 0.1,
            duplication_chance: 0.05,
            cut_chance: 0.01,
            crossover_bias: 0.5,
        }
    }
}

/// Top-level engine configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub chemistry: ChemistryConfig,
    #[serde(default)]
    pub mutation: MutationConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a
    /// description of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.chemistry.pain_reflex_dose >= 0.0,
            "Pain reflex dose must be non-negative"
        );
        anyhow::ensure!(
            self.chemistry.pain_reflex_dose.is_finite(),
            "Pain reflex dose must be finite"
        );

        anyhow::ensure!(
            (0.0..=1.0).contains(&self.mutation.mutation_chance),
            "Mutation chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.mutation.duplication_chance),
            "Duplication chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.mutation.cut_chance),
            "Cut chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.mutation.crossover_bias),
            "Crossover bias must be in [0.0, 1.0]"
        );

        Ok(())
    }

    /// Loads and validates configuration from TOML content.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }
}
