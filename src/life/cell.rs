//! Cell state for the Game of Life universe

use serde::{Deserialize, Serialize};

/// A single cell of the universe.
///
/// Stored as one byte with `Dead = 0` and `Alive = 1`, so a contiguous run
/// of cells doubles as a `{0,1}` byte buffer for readers of the exposed
/// cell view.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Whether this cell is alive
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// The opposite state (Dead↔Alive)
    #[inline]
    pub fn toggled(self) -> Cell {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_discriminants() {
        assert_eq!(Cell::Dead as u8, 0);
        assert_eq!(Cell::Alive as u8, 1);
    }

    #[test]
    fn test_toggle_involution() {
        assert_eq!(Cell::Dead.toggled(), Cell::Alive);
        assert_eq!(Cell::Alive.toggled(), Cell::Dead);
        assert_eq!(Cell::Dead.toggled().toggled(), Cell::Dead);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::from(false), Cell::Dead);
        assert!(Cell::Alive.is_alive());
        assert!(!Cell::Dead.is_alive());
    }
}
