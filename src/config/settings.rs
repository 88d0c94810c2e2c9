//! Configuration settings for the simulation host

use crate::life::universe::MAX_DIMENSION;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub universe: UniverseConfig,
    pub seed: SeedConfig,
    pub run: RunConfig,
    pub output: OutputConfig,
}

/// Grid dimensions, fixed for the lifetime of the universe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniverseConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub policy: SeedPolicy,
    /// Probability that a cell starts alive under the `random` policy
    pub density: f64,
    /// Pattern file to load under the `pattern` policy
    pub pattern_file: Option<PathBuf>,
}

/// How the universe is initialized before the run starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// Deterministic stripe pattern (every third cell alive)
    Stripes,
    /// Independent Bernoulli draw per cell at the configured density
    Random,
    /// Every cell dead
    Empty,
    /// Load the initial state from `pattern_file`
    Pattern,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub generations: usize,
    /// Sleep between generations in watch mode, in milliseconds
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub save_final: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Visual,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            universe: UniverseConfig {
                width: 64,
                height: 64,
            },
            seed: SeedConfig {
                policy: SeedPolicy::Stripes,
                density: 0.5,
                pattern_file: None,
            },
            run: RunConfig {
                generations: 50,
                delay_ms: 50,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                save_final: false,
                output_directory: PathBuf::from("output/states"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        let UniverseConfig { width, height } = &self.universe;
        if *width == 0 || *height == 0 || *width > MAX_DIMENSION || *height > MAX_DIMENSION {
            anyhow::bail!(
                "Universe dimensions {}x{} invalid: each side must be in 1..={}",
                width,
                height,
                MAX_DIMENSION
            );
        }

        if !(0.0..=1.0).contains(&self.seed.density) {
            anyhow::bail!(
                "Seed density {} out of range: must be in [0, 1]",
                self.seed.density
            );
        }

        if self.seed.policy == SeedPolicy::Pattern {
            match &self.seed.pattern_file {
                None => anyhow::bail!("Seed policy 'pattern' requires a pattern_file"),
                Some(file) if !file.exists() => {
                    anyhow::bail!("Pattern file does not exist: {}", file.display())
                }
                Some(_) => {}
            }
        }

        if self.run.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.universe.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.universe.height = height;
        }
        if let Some(generations) = cli_overrides.generations {
            self.run.generations = generations;
        }
        if let Some(density) = cli_overrides.density {
            self.seed.density = density;
            self.seed.policy = SeedPolicy::Random;
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.seed.pattern_file = Some(pattern_file.clone());
            self.seed.policy = SeedPolicy::Pattern;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub generations: Option<usize>,
    pub density: Option<f64>,
    pub pattern_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.universe.width = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.seed.density = 1.5;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.run.generations = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.seed.policy = SeedPolicy::Pattern;
        settings.seed.pattern_file = None;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            width: Some(16),
            density: Some(0.3),
            ..Default::default()
        });

        assert_eq!(settings.universe.width, 16);
        assert_eq!(settings.seed.density, 0.3);
        // A density override implies random seeding.
        assert_eq!(settings.seed.policy, SeedPolicy::Random);
    }

    #[test]
    fn test_yaml_round_trip() {
        let settings = Settings::default();
        let yaml = serde_yaml::to_string(&settings).unwrap();
        let parsed: Settings = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.universe.width, settings.universe.width);
        assert_eq!(parsed.seed.policy, settings.seed.policy);
    }
}
