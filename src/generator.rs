//! Random puzzle generation.

use crate::board::Side;
use crate::consts::{MAX_SIZE, N_SIDES};
use rand::seq::SliceRandom;
use rand::Rng;

/// A generated puzzle: the clue slice in loading order plus the solved grid
/// it was derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Puzzle {
    /// Side length of the grid.
    pub size: u8,
    /// Side-major top, right, bottom, left; ready for
    /// [`City::load_clues`](crate::City::load_clues).
    pub clues: Vec<u8>,
    /// Row-major grid of heights satisfying every clue.
    pub solution: Vec<u8>,
}

/// Generates a random valid grid and derives all 4·N clues from it.
///
/// The grid is a randomly relabeled cyclic Latin square, so the Latin
/// property holds by construction. Every clue is given, which makes the
/// puzzle solvable without search; callers wanting a harder puzzle can blank
/// clues out and re-check solvability.
///
/// # Panic
/// Panics, if `size` is not in the range of `1..=16`.
pub fn generate(size: u8, rng: &mut impl Rng) -> Puzzle {
    assert!(size != 0 && size <= MAX_SIZE);
    let n = size as usize;
    let mut rows: Vec<usize> = (0..n).collect();
    let mut cols: Vec<usize> = (0..n).collect();
    let mut symbols: Vec<u8> = (1..=size).collect();
    rows.shuffle(rng);
    cols.shuffle(rng);
    symbols.shuffle(rng);

    let mut solution = vec![0u8; n * n];
    for y in 0..n {
        for x in 0..n {
            solution[y * n + x] = symbols[(rows[y] + cols[x]) % n];
        }
    }

    let mut clues = Vec::with_capacity(N_SIDES * n);
    for &side in &Side::ALL {
        for pos in 0..size {
            clues.push(visible_count(size, &solution, side, pos));
        }
    }

    Puzzle {
        size,
        clues,
        solution,
    }
}

/// Buildings visible along the street at `pos` on `side`: each one taller
/// than everything before it counts.
fn visible_count(size: u8, solution: &[u8], side: Side, pos: u8) -> u8 {
    let mut highest = 0;
    let mut visible = 0;
    for index in 0..size {
        let (x, y) = side.cell(size, pos, index);
        let height = solution[y as usize * size as usize + x as usize];
        if height > highest {
            visible += 1;
            highest = height;
        }
    }
    visible
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn generated_grid_is_latin() {
        let mut rng = rand::thread_rng();
        for &size in &[1u8, 4, 7] {
            let puzzle = generate(size, &mut rng);
            let n = size as usize;
            assert_eq!(puzzle.solution.len(), n * n);
            for line in 0..n {
                let mut row = [false; 16];
                let mut col = [false; 16];
                for i in 0..n {
                    row[puzzle.solution[line * n + i] as usize - 1] = true;
                    col[puzzle.solution[i * n + line] as usize - 1] = true;
                }
                assert!(row[..n].iter().all(|&seen| seen));
                assert!(col[..n].iter().all(|&seen| seen));
            }
        }
    }

    #[test]
    fn clues_count_what_the_solution_shows() {
        let mut rng = rand::thread_rng();
        let puzzle = generate(5, &mut rng);
        assert_eq!(puzzle.clues.len(), 20);
        assert!(puzzle.clues.iter().all(|&clue| (1..=5).contains(&clue)));
        // recounting from the grid must reproduce the stored clues
        for (i, &side) in Side::ALL.iter().enumerate() {
            for pos in 0..5 {
                assert_eq!(
                    puzzle.clues[i * 5 + pos as usize],
                    visible_count(5, &puzzle.solution, side, pos)
                );
            }
        }
    }
}
