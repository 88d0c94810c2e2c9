//! File I/O for universe patterns

use super::{Cell, Universe};
use anyhow::{Context, Result};
use std::path::Path;

/// Load a universe from a text file.
/// Format: one line per row, '1' for alive cells and '0' for dead cells.
pub fn load_universe_from_file<P: AsRef<Path>>(path: P) -> Result<Universe> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_universe_from_string(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))
}

/// Parse a universe from its string representation
pub fn parse_universe_from_string(content: &str) -> Result<Universe> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Pattern is empty or contains no valid rows");
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (row_idx, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(Cell::Dead),
                '1' => row.push(Cell::Alive),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
        rows.push(row);
    }

    Ok(Universe::from_rows(rows)?)
}

/// Save a universe to a text file
pub fn save_universe_to_file<P: AsRef<Path>>(universe: &Universe, path: P) -> Result<()> {
    let content = universe_to_string(universe);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write pattern to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a universe to its string representation
pub fn universe_to_string(universe: &Universe) -> String {
    let mut result = String::with_capacity(universe.height() * (universe.width() + 1));

    for row in 0..universe.height() {
        for col in 0..universe.width() {
            result.push(if universe.get(row, col).is_alive() {
                '1'
            } else {
                '0'
            });
        }
        result.push('\n');
    }

    result
}

/// Create example pattern files
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // Glider
    let glider_content = "00100\n10100\n01100\n00000\n00000\n";
    std::fs::write(dir.join("glider.txt"), glider_content)
        .context("Failed to write glider.txt")?;

    // Blinker (oscillator)
    let blinker_content = "000\n111\n000\n";
    std::fs::write(dir.join("blinker.txt"), blinker_content)
        .context("Failed to write blinker.txt")?;

    // Block (still life)
    let block_content = "0000\n0110\n0110\n0000\n";
    std::fs::write(dir.join("block.txt"), block_content).context("Failed to write block.txt")?;

    // Beacon (oscillator)
    let beacon_content = "110000\n110000\n001100\n001100\n";
    std::fs::write(dir.join("beacon.txt"), beacon_content)
        .context("Failed to write beacon.txt")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_universe_from_string() {
        let content = "010\n101\n010\n";
        let universe = parse_universe_from_string(content).unwrap();

        assert_eq!(universe.width(), 3);
        assert_eq!(universe.height(), 3);

        assert_eq!(universe.living_count(), 4);
        assert!(universe.get(0, 1).is_alive());
        assert!(universe.get(1, 0).is_alive());
        assert!(universe.get(1, 2).is_alive());
        assert!(universe.get(2, 1).is_alive());
    }

    #[test]
    fn test_universe_to_string() {
        let universe = parse_universe_from_string("010\n101\n010\n").unwrap();
        assert_eq!(universe_to_string(&universe), "010\n101\n010\n");
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("pattern.txt");

        let original = parse_universe_from_string("101\n010\n").unwrap();
        save_universe_to_file(&original, &file_path).unwrap();
        let loaded = load_universe_from_file(&file_path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_invalid_input() {
        // Invalid character
        assert!(parse_universe_from_string("010\n1X1\n010\n").is_err());

        // Inconsistent row lengths
        assert!(parse_universe_from_string("010\n11\n010\n").is_err());

        // Empty content
        assert!(parse_universe_from_string("").is_err());

        // Blank lines and surrounding whitespace are tolerated
        let universe = parse_universe_from_string("\n  010  \n\n101\n").unwrap();
        assert_eq!(universe.height(), 2);
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        assert!(temp_dir.path().join("glider.txt").exists());
        assert!(temp_dir.path().join("blinker.txt").exists());
        assert!(temp_dir.path().join("block.txt").exists());
        assert!(temp_dir.path().join("beacon.txt").exists());

        let glider = load_universe_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.width(), 5);
        assert_eq!(glider.height(), 5);
        assert_eq!(glider.living_count(), 5);
    }
}
