//! The universe: a fixed-size toroidal Game of Life grid

use super::cell::Cell;
use super::error::UniverseError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on either grid dimension.
pub const MAX_DIMENSION: usize = 8192;

/// Grid width used by [`Universe::default`]
pub const DEFAULT_WIDTH: usize = 64;

/// Grid height used by [`Universe::default`]
pub const DEFAULT_HEIGHT: usize = 64;

/// Fraction of cells left alive by [`Universe::reseed`]
pub const DEFAULT_SEED_DENSITY: f64 = 0.5;

/// A fixed-size rectangular Game of Life grid with toroidal topology.
///
/// Dimensions are set at construction and never change. Cells are stored
/// row-major, one byte each (`index(row, col) = row * width + col`), and the
/// live buffer can be borrowed without copying via [`Universe::cells`].
///
/// Neighbor lookups in the step rule wrap around the edges, so patterns
/// travel across the boundary instead of dying at it. User-facing mutations
/// ([`Universe::toggle_cell`], [`Universe::set`]) do *not* wrap; an
/// out-of-range coordinate is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Universe {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Universe {
    /// Create a universe seeded with the deterministic stripe pattern
    /// (every third cell alive).
    ///
    /// The stripe seed makes freshly constructed universes reproducible;
    /// call [`Universe::reseed`] for a randomized start instead.
    pub fn new(width: usize, height: usize) -> Result<Self, UniverseError> {
        Self::check_dimensions(width, height)?;
        let cells = (0..width * height)
            .map(|i| if i % 3 == 0 { Cell::Alive } else { Cell::Dead })
            .collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Create a universe with every cell dead
    pub fn dead(width: usize, height: usize) -> Result<Self, UniverseError> {
        Self::check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Create a universe from row data.
    ///
    /// All rows must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, UniverseError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        Self::check_dimensions(width, height)?;

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(UniverseError::RaggedRows {
                    row: i,
                    len: row.len(),
                    expected: width,
                });
            }
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    fn check_dimensions(width: usize, height: usize) -> Result<(), UniverseError> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(UniverseError::InvalidDimensions {
                width,
                height,
                limit: MAX_DIMENSION,
            });
        }
        Ok(())
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow the live cell buffer without copying.
    ///
    /// Row-major, length `width * height`, every element `Dead` (byte 0) or
    /// `Alive` (byte 1). The borrow is read-only and ends at the next
    /// mutating call (`step`, `toggle_cell`, `kill_all`, `reseed`, `set`),
    /// which may overwrite or replace the buffer.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert 2D coordinates to the row-major buffer index
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get the cell at the given coordinates.
    ///
    /// Out-of-range coordinates read as `Dead`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            Cell::Dead
        }
    }

    /// Set the cell at the given coordinates
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), UniverseError> {
        self.check_coordinate(row, col)?;
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip one cell between dead and alive.
    ///
    /// Fails with [`UniverseError::OutOfRangeCoordinate`] for coordinates
    /// outside the grid, leaving every cell unchanged.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), UniverseError> {
        self.check_coordinate(row, col)?;
        let idx = self.index(row, col);
        self.cells[idx] = self.cells[idx].toggled();
        Ok(())
    }

    fn check_coordinate(&self, row: usize, col: usize) -> Result<(), UniverseError> {
        if row >= self.height || col >= self.width {
            return Err(UniverseError::OutOfRangeCoordinate {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Set every cell to dead. Idempotent.
    pub fn kill_all(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Randomize every cell at the default density of
    /// [`DEFAULT_SEED_DENSITY`]
    pub fn reseed(&mut self) {
        self.reseed_with_density(DEFAULT_SEED_DENSITY);
    }

    /// Randomize every cell, each alive with the given probability
    pub fn reseed_with_density(&mut self, density: f64) {
        self.reseed_with(&mut rand::rng(), density);
    }

    /// Randomize every cell using the caller's RNG.
    ///
    /// Each cell is an independent Bernoulli draw; `density` is clamped to
    /// `[0, 1]`. A seeded RNG makes the result reproducible.
    pub fn reseed_with<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        for cell in &mut self.cells {
            *cell = Cell::from(rng.random_bool(density));
        }
    }

    /// Count live cells among the 8 toroidally-wrapped neighbors
    pub fn live_neighbor_count(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = (row as isize + dr).rem_euclid(self.height as isize) as usize;
                let c = (col as isize + dc).rem_euclid(self.width as isize) as usize;
                if self.cells[self.index(r, c)].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advance the grid by one generation.
    ///
    /// The next generation is computed entirely from the current one into a
    /// separate buffer, so no cell ever sees a neighbor's already-updated
    /// state. Total: never fails, and the buffer is fully updated when this
    /// returns.
    pub fn step(&mut self) {
        let mut next = vec![Cell::Dead; self.cells.len()];

        for row in 0..self.height {
            for col in 0..self.width {
                let idx = self.index(row, col);
                let neighbors = self.live_neighbor_count(row, col);

                next[idx] = match (self.cells[idx], neighbors) {
                    (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
                    (Cell::Dead, 3) => Cell::Alive,
                    _ => Cell::Dead,
                };
            }
        }

        self.cells = next;
    }

    /// Coordinates of all living cells
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        let mut living = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.get(row, col).is_alive() {
                    living.push((row, col));
                }
            }
        }
        living
    }

    /// Count of living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Whether no cell is alive
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }
}

impl Default for Universe {
    /// A stripe-seeded universe at the fixed default size of
    /// [`DEFAULT_WIDTH`] x [`DEFAULT_HEIGHT`]
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT).expect("default dimensions are valid")
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.get(row, col).is_alive() {
                    "⬛"
                } else {
                    "⬜"
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
