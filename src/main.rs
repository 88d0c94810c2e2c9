//! CLI host for the Game of Life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_sim::{
    build_universe,
    config::{CliOverrides, Settings},
    life::{create_example_patterns, load_universe_from_file, save_universe_to_file},
    utils::{ColorOutput, ProgressIndicator, UniverseFormatter},
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "life_sim")]
#[command(about = "Toroidal Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Seed from a pattern file (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Random seed density in [0, 1] (overrides config, implies random seeding)
        #[arg(short, long)]
        density: Option<f64>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print every generation to the terminal
        #[arg(short, long)]
        watch: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Edit a pattern file: clear, reseed, or toggle cells
    Edit {
        /// Pattern file to edit
        file: PathBuf,

        /// Set every cell dead before other edits
        #[arg(long)]
        kill_all: bool,

        /// Randomize all cells
        #[arg(long)]
        reseed: bool,

        /// Density for --reseed (default 0.5)
        #[arg(short, long)]
        density: Option<f64>,

        /// Toggle a cell, written as "row,col" (repeatable)
        #[arg(short, long)]
        toggle: Vec<String>,

        /// Write the result here instead of back to the input file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display a pattern file with coordinates and statistics
    Show {
        /// Pattern file to display
        file: PathBuf,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            width,
            height,
            generations,
            pattern,
            density,
            output,
            watch,
            verbose,
        } => run_command(
            config,
            CliOverrides {
                width,
                height,
                generations,
                density,
                pattern_file: pattern,
                output_dir: output.clone(),
            },
            output.is_some(),
            watch,
            verbose,
        ),
        Commands::Edit {
            file,
            kill_all,
            reseed,
            density,
            toggle,
            output,
        } => edit_command(file, kill_all, reseed, density, toggle, output),
        Commands::Show { file } => show_command(file),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn run_command(
    config_path: PathBuf,
    cli_overrides: CliOverrides,
    output_requested: bool,
    watch: bool,
    verbose: bool,
) -> Result<()> {
    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(&cli_overrides);

    if verbose {
        println!("Configuration:");
        println!(
            "  Universe: {}x{}",
            settings.universe.width, settings.universe.height
        );
        println!("  Seed policy: {:?}", settings.seed.policy);
        println!("  Generations: {}", settings.run.generations);
        println!("  Output dir: {}", settings.output.output_directory.display());
        println!();
    }

    settings.validate().context("Configuration validation failed")?;

    let mut universe = build_universe(&settings).context("Failed to build universe")?;

    println!(
        "{}",
        ColorOutput::info(&format!(
            "Running {}x{} universe for {} generations",
            universe.width(),
            universe.height(),
            settings.run.generations
        ))
    );

    let initial_living = universe.living_count();
    let delay = Duration::from_millis(settings.run.delay_ms);

    if watch {
        println!("Generation 0:");
        print!("{}", UniverseFormatter::format_compact(&universe));

        for generation in 1..=settings.run.generations {
            std::thread::sleep(delay);
            universe.step();
            println!("\nGeneration {}:", generation);
            print!("{}", UniverseFormatter::format_compact(&universe));
        }
    } else {
        let mut progress = ProgressIndicator::new(settings.run.generations);
        for generation in 1..=settings.run.generations {
            universe.step();
            progress.update(generation);
        }
        progress.finish();
    }

    println!();
    println!("{}", UniverseFormatter::format_stats(&universe));
    println!(
        "Living cells: {} → {}",
        initial_living,
        universe.living_count()
    );

    if settings.output.save_final || output_requested {
        UniverseFormatter::save_universe(
            &universe,
            &settings.output.output_directory,
            "final_state",
            &settings.output.format,
        )
        .context("Failed to save final state")?;

        println!(
            "{}",
            ColorOutput::success(&format!(
                "Final state saved to {}",
                settings.output.output_directory.display()
            ))
        );
    }

    Ok(())
}

fn edit_command(
    file: PathBuf,
    kill_all: bool,
    reseed: bool,
    density: Option<f64>,
    toggle: Vec<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut universe = load_universe_from_file(&file)
        .with_context(|| format!("Failed to load pattern from {}", file.display()))?;

    // Whole-grid edits first, then the targeted toggles.
    if kill_all {
        universe.kill_all();
    }

    if reseed {
        match density {
            Some(density) => universe.reseed_with_density(density),
            None => universe.reseed(),
        }
    }

    for coord in &toggle {
        let (row, col) = parse_coord(coord)?;
        universe
            .toggle_cell(row, col)
            .with_context(|| format!("Cannot toggle cell '{}'", coord))?;
    }

    let destination = output.unwrap_or(file);
    save_universe_to_file(&universe, &destination)
        .with_context(|| format!("Failed to save pattern to {}", destination.display()))?;

    print!("{}", UniverseFormatter::format_compact(&universe));
    println!("{}", UniverseFormatter::format_stats(&universe));
    println!(
        "{}",
        ColorOutput::success(&format!("Saved to {}", destination.display()))
    );

    Ok(())
}

fn show_command(file: PathBuf) -> Result<()> {
    let universe = load_universe_from_file(&file)
        .with_context(|| format!("Failed to load pattern from {}", file.display()))?;

    println!("{}", UniverseFormatter::format_with_coords(&universe));
    println!("{}", UniverseFormatter::format_stats(&universe));

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");
    let output_dir = directory.join("output/states");

    for dir in [&config_dir, &patterns_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Example patterns
    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    // Example configuration variants
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut random_config = Settings::default();
    random_config.seed.policy = life_sim::config::SeedPolicy::Random;
    random_config.universe.width = 32;
    random_config.universe.height = 32;
    random_config.run.generations = 200;
    random_config.to_file(&examples_dir.join("random.yaml"))?;

    let mut glider_config = Settings::default();
    glider_config.seed.policy = life_sim::config::SeedPolicy::Pattern;
    glider_config.seed.pattern_file = Some(PathBuf::from("patterns/glider.txt"));
    glider_config.run.generations = 32;
    glider_config.run.delay_ms = 100;
    glider_config.to_file(&examples_dir.join("glider.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your patterns to {}", patterns_dir.display());
    println!("3. Run: cargo run -- run --config config/default.yaml --watch");

    Ok(())
}

/// Parse a "row,col" cell coordinate
fn parse_coord(coord: &str) -> Result<(usize, usize)> {
    let (row, col) = coord
        .split_once(',')
        .with_context(|| format!("Invalid cell '{}': expected \"row,col\"", coord))?;

    let row = row
        .trim()
        .parse()
        .with_context(|| format!("Invalid row in '{}'", coord))?;
    let col = col
        .trim()
        .parse()
        .with_context(|| format!("Invalid column in '{}'", coord))?;

    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "life_sim",
            "run",
            "--config",
            "test.yaml",
            "--generations",
            "5",
            "--watch",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from([
            "life_sim",
            "edit",
            "pattern.txt",
            "--toggle",
            "1,2",
            "--toggle",
            "3,4",
            "--kill-all",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("3,4").unwrap(), (3, 4));
        assert_eq!(parse_coord(" 0 , 12 ").unwrap(), (0, 12));

        assert!(parse_coord("3").is_err());
        assert!(parse_coord("a,b").is_err());
        assert!(parse_coord("-1,2").is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());
        assert!(temp_dir.path().join("config/examples/random.yaml").exists());
    }

    #[test]
    fn test_edit_command_round_trip() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("grid.txt");
        std::fs::write(&file, "000\n000\n000\n").unwrap();

        edit_command(
            file.clone(),
            false,
            false,
            None,
            vec!["1,1".to_string()],
            None,
        )
        .unwrap();

        let content = std::fs::read_to_string(&file).unwrap();
        assert_eq!(content, "000\n010\n000\n");
    }
}
