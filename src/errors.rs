//! Errors for malformed puzzle input.

#[cfg(doc)]
use crate::City;

/// Error for [`City::new`]
#[derive(Debug, thiserror::Error)]
#[error("puzzle size must be in 1..=16, found {0}")]
pub struct InvalidSizeError(pub(crate) u8);

/// Error for [`City::load_clues`]
#[derive(Debug, thiserror::Error)]
pub enum LoadCluesError {
    /// Clue slice is not 4·N long
    #[error("clue slice should have length {expected}, found {found}")]
    WrongLength {
        /// 4·N for a puzzle of size N
        expected: usize,
        /// length of the slice that was passed
        found: usize,
    },
    /// A clue demands more visible buildings than the line holds
    #[error("clue {clue} at index {index} exceeds the puzzle size")]
    ClueOutOfRange {
        /// offset into the clue slice
        index: usize,
        /// the offending clue value
        clue: u8,
    },
}

/// Error for [`City::load_heights`]
#[derive(Debug, thiserror::Error)]
pub enum LoadHeightsError {
    /// Height grid is not N×N
    #[error("height grid should be {expected}x{expected}")]
    WrongLength {
        /// the puzzle size N
        expected: usize,
    },
    /// A height lies outside 1..=N (0 is allowed and leaves the cell open)
    #[error("height {height} at ({x}, {y}) exceeds the puzzle size")]
    HeightOutOfRange {
        /// column of the offending cell
        x: usize,
        /// row of the offending cell
        y: usize,
        /// the offending height
        height: u8,
    },
}
