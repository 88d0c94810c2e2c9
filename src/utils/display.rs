//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::life::{io, Universe};
use anyhow::{Context, Result};
use std::path::Path;

/// Format universes for console and file output
pub struct UniverseFormatter;

impl UniverseFormatter {
    /// Format a universe in compact form
    pub fn format_compact(universe: &Universe) -> String {
        let mut output = String::new();
        for row in 0..universe.height() {
            for col in 0..universe.width() {
                output.push(if universe.get(row, col).is_alive() {
                    '█'
                } else {
                    '·'
                });
            }
            output.push('\n');
        }
        output
    }

    /// Format a universe with row and column coordinates
    pub fn format_with_coords(universe: &Universe) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..universe.width() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for row in 0..universe.height() {
            output.push_str(&format!("{:2} ", row));
            for col in 0..universe.width() {
                output.push_str(if universe.get(row, col).is_alive() {
                    "██"
                } else {
                    "··"
                });
            }
            output.push('\n');
        }

        output
    }

    /// Format population statistics for a universe
    pub fn format_stats(universe: &Universe) -> String {
        let total = universe.width() * universe.height();
        let living = universe.living_count();
        format!(
            "Grid: {}x{}\nLiving cells: {}\nDensity: {:.1}%",
            universe.width(),
            universe.height(),
            living,
            (living as f64 / total as f64) * 100.0
        )
    }

    /// Save a universe state to a file in the given output format.
    ///
    /// The file lands in `output_dir` as `<stem>.txt`, `<stem>.json`, or
    /// `<stem>_visual.txt` depending on the format.
    pub fn save_universe<P: AsRef<Path>>(
        universe: &Universe,
        output_dir: P,
        stem: &str,
        format: &OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        match format {
            OutputFormat::Text => {
                let filepath = output_dir.join(format!("{}.txt", stem));
                io::save_universe_to_file(universe, filepath)?;
            }
            OutputFormat::Json => {
                let filepath = output_dir.join(format!("{}.json", stem));
                let json = serde_json::to_string_pretty(universe)
                    .context("Failed to serialize universe")?;
                std::fs::write(&filepath, json)
                    .with_context(|| format!("Failed to write {}", filepath.display()))?;
            }
            OutputFormat::Visual => {
                let filepath = output_dir.join(format!("{}_visual.txt", stem));
                let mut content = Self::format_with_coords(universe);
                content.push('\n');
                content.push_str(&Self::format_stats(universe));
                content.push('\n');
                std::fs::write(&filepath, content)
                    .with_context(|| format!("Failed to write {}", filepath.display()))?;
            }
        }

        Ok(())
    }
}

/// Progress indicator for long generation loops
pub struct ProgressIndicator {
    total: usize,
    current: usize,
    last_update: std::time::Instant,
    start_time: std::time::Instant,
}

impl ProgressIndicator {
    /// Create a new progress indicator
    pub fn new(total: usize) -> Self {
        let now = std::time::Instant::now();
        Self {
            total,
            current: 0,
            last_update: now,
            start_time: now,
        }
    }

    /// Update progress and optionally display
    pub fn update(&mut self, current: usize) {
        self.current = current;
        let now = std::time::Instant::now();

        // Update display every 100ms
        if now.duration_since(self.last_update).as_millis() > 100 {
            self.display();
            self.last_update = now;
        }
    }

    /// Display current progress
    pub fn display(&self) {
        let percentage = if self.total > 0 {
            (self.current as f64 / self.total as f64) * 100.0
        } else {
            0.0
        };

        print!(
            "\rGeneration: {}/{} ({:.1}%)",
            self.current, self.total, percentage
        );
        std::io::Write::flush(&mut std::io::stdout()).ok();
    }

    /// Finish and clear the progress line
    pub fn finish(&self) {
        println!(
            "\rCompleted: {}/{} generations in {:.2}s",
            self.total,
            self.total,
            self.start_time.elapsed().as_secs_f64()
        );
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life::io::parse_universe_from_string;
    use tempfile::tempdir;

    #[test]
    fn test_universe_formatting() {
        let universe = parse_universe_from_string("101\n010\n101\n").unwrap();

        let compact = UniverseFormatter::format_compact(&universe);
        assert!(compact.contains('█'));
        assert!(compact.contains('·'));
        assert_eq!(compact.lines().count(), 3);

        let with_coords = UniverseFormatter::format_with_coords(&universe);
        assert!(with_coords.contains(" 0 1 2"));
        assert!(with_coords.contains("██"));

        let stats = UniverseFormatter::format_stats(&universe);
        assert!(stats.contains("Living cells: 5"));
    }

    #[test]
    fn test_save_universe_formats() {
        let temp_dir = tempdir().unwrap();
        let universe = parse_universe_from_string("10\n01\n").unwrap();

        UniverseFormatter::save_universe(&universe, temp_dir.path(), "final", &OutputFormat::Text)
            .unwrap();
        assert!(temp_dir.path().join("final.txt").exists());

        UniverseFormatter::save_universe(&universe, temp_dir.path(), "final", &OutputFormat::Json)
            .unwrap();
        let json = std::fs::read_to_string(temp_dir.path().join("final.json")).unwrap();
        assert!(json.contains("\"width\": 2"));

        UniverseFormatter::save_universe(&universe, temp_dir.path(), "final", &OutputFormat::Visual)
            .unwrap();
        assert!(temp_dir.path().join("final_visual.txt").exists());
    }

    #[test]
    fn test_progress_indicator() {
        let mut progress = ProgressIndicator::new(100);
        progress.update(50);
        assert_eq!(progress.current, 50);
        assert_eq!(progress.total, 100);
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Either colored or plain depending on the terminal
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
