//! Configuration management for the simulation host

pub mod settings;

pub use settings::{
    CliOverrides, OutputConfig, OutputFormat, RunConfig, SeedConfig, SeedPolicy, Settings,
    UniverseConfig,
};
