//! Toroidal Game of Life simulation engine
//!
//! The [`life`] module owns the grid state: a fixed-size toroidal
//! [`Universe`] advanced one generation at a time by the standard Conway
//! rules, mutated by discrete host commands (toggle a cell, clear, reseed),
//! and read back through a zero-copy cell view. Scheduling, display, and
//! persistence belong to the host: here the CLI binary and the [`config`]
//! and [`utils`] modules that support it.

pub mod config;
pub mod life;
pub mod utils;

pub use config::Settings;
pub use life::{Cell, Universe, UniverseError};

use anyhow::{Context, Result};
use config::SeedPolicy;

/// Build a universe from settings: fixed dimensions plus the configured
/// seed policy.
pub fn build_universe(settings: &Settings) -> Result<Universe> {
    let width = settings.universe.width;
    let height = settings.universe.height;

    let universe = match settings.seed.policy {
        SeedPolicy::Stripes => Universe::new(width, height)?,
        SeedPolicy::Empty => Universe::dead(width, height)?,
        SeedPolicy::Random => {
            let mut universe = Universe::dead(width, height)?;
            universe.reseed_with_density(settings.seed.density);
            universe
        }
        SeedPolicy::Pattern => {
            let file = settings
                .seed
                .pattern_file
                .as_ref()
                .context("Seed policy 'pattern' requires a pattern_file")?;
            life::io::load_universe_from_file(file)?
        }
    };

    Ok(universe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_universe_policies() {
        let mut settings = Settings::default();
        settings.universe.width = 9;
        settings.universe.height = 6;

        settings.seed.policy = SeedPolicy::Stripes;
        let striped = build_universe(&settings).unwrap();
        assert_eq!(striped.width(), 9);
        assert_eq!(striped.height(), 6);
        assert!(!striped.is_empty());

        settings.seed.policy = SeedPolicy::Empty;
        let empty = build_universe(&settings).unwrap();
        assert!(empty.is_empty());

        settings.seed.policy = SeedPolicy::Random;
        settings.seed.density = 1.0;
        let full = build_universe(&settings).unwrap();
        assert_eq!(full.living_count(), 54);
    }

    #[test]
    fn test_build_universe_from_pattern_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let pattern_path = temp_dir.path().join("cross.txt");
        std::fs::write(&pattern_path, "010\n111\n010\n").unwrap();

        let mut settings = Settings::default();
        settings.seed.policy = SeedPolicy::Pattern;
        settings.seed.pattern_file = Some(pattern_path);

        let universe = build_universe(&settings).unwrap();
        assert_eq!(universe.width(), 3);
        assert_eq!(universe.living_count(), 5);
    }

    #[test]
    fn test_build_universe_pattern_requires_file() {
        let mut settings = Settings::default();
        settings.seed.policy = SeedPolicy::Pattern;
        settings.seed.pattern_file = None;

        assert!(build_universe(&settings).is_err());
    }
}
