#![warn(missing_docs)]
//! A solver for skyscrapers puzzles
//!
//! ## Overview
//!
//! A skyscrapers puzzle is an N×N grid to be filled with building heights 1
//! to N so that no height repeats in any row or column. Clues on the four
//! edges give the number of buildings visible from there; a building hides
//! every shorter one behind it. The solver keeps a candidate set per cell,
//! narrows the sets with a fixed battery of deduction rules and falls back
//! to backtracking search only when the rules stall.
//!
//! ## Example
//!
//! ```
//! use skyscrapers::City;
//!
//! let mut city = City::new(4)?;
//! // side-major: top, right, bottom, left
//! city.load_clues(&[
//!     2, 2, 1, 3, //
//!     2, 2, 3, 1, //
//!     1, 2, 2, 3, //
//!     3, 2, 1, 3,
//! ])?;
//! assert!(city.solve());
//! assert_eq!(city.heights(), vec![
//!     vec![1, 3, 4, 2],
//!     vec![4, 2, 1, 3],
//!     vec![3, 4, 2, 1],
//!     vec![2, 1, 3, 4],
//! ]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bitset;
mod board;
mod brute_force;
mod consts;
pub mod errors;
pub mod generator;
mod helper;
mod solver;
mod strategy;

pub use crate::board::{City, Height, Side, Street, Tower};
pub use crate::consts::MAX_SIZE;
pub use crate::strategy::Strategy;
