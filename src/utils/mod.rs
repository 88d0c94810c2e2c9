//! Display and console utilities for the simulation host

pub mod display;

pub use display::{Color, ColorOutput, ProgressIndicator, UniverseFormatter};
