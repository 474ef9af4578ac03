use crate::bitset::HeightSet;
use crate::board::street::Street;
use crate::board::{Height, Side, StreetId, Tower};
use crate::consts::{MAX_SIZE, N_SIDES};
use crate::errors::{InvalidSizeError, LoadCluesError, LoadHeightsError};
use crate::helper::Unsolvable;
use std::fmt;
use std::sync::atomic::AtomicBool;

/// A skyscrapers puzzle: the N×N grid of cells plus the 4·N streets viewing
/// it, one per clue position.
///
/// Cells live in a single row-major arena; each street holds indices into it,
/// so a cell is shared by the four streets that can see it. Any change to a
/// cell marks those streets for both a statistics refresh and another rule
/// pass.
#[derive(Clone, Debug)]
pub struct City {
    size: u8,
    towers: Vec<Tower>,
    streets: Vec<Street>,
    /// Street statistics are stale and need [`Street::recompute`].
    dirty: Vec<bool>,
    /// Street should be offered to the deduction rules again.
    pending: Vec<bool>,
    /// Set when loaded clues or heights contradict each other outright.
    unsolvable: bool,
}

impl City {
    /// Creates an empty city of the given side length, all cells open.
    pub fn new(size: u8) -> Result<City, InvalidSizeError> {
        if size == 0 || size > MAX_SIZE {
            return Err(InvalidSizeError(size));
        }
        let n = size as usize;
        let all = HeightSet::full(size);
        let towers = vec![Tower::new(all); n * n];
        let mut streets = Vec::with_capacity(N_SIDES * n);
        for &side in &Side::ALL {
            for pos in 0..size {
                streets.push(Street::new(size, side, pos, |x, y| {
                    y as usize * n + x as usize
                }));
            }
        }
        Ok(City {
            size,
            towers,
            streets,
            dirty: vec![true; N_SIDES * n],
            pending: vec![true; N_SIDES * n],
            unsolvable: false,
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// The cell at column `x`, row `y`.
    pub fn tower(&self, x: u8, y: u8) -> &Tower {
        &self.towers[self.tower_index(x, y)]
    }

    /// The clue at position `pos` on `side`, 0 if unconstrained.
    pub fn clue(&self, side: Side, pos: u8) -> u8 {
        self.streets[self.street_id(side, pos).as_index()].clue
    }

    /// Loads the 4·N clue slice, side-major in the order top, right, bottom,
    /// left, each side's positions running in its viewing order. A clue of 0
    /// leaves that street unconstrained.
    ///
    /// Clues that are individually in range but jointly contradictory do not
    /// error here; the city reports them through [`is_valid`](City::is_valid)
    /// and [`solve`](City::solve) returning `false`.
    pub fn load_clues(&mut self, clues: &[u8]) -> Result<(), LoadCluesError> {
        let expected = self.streets.len();
        if clues.len() != expected {
            return Err(LoadCluesError::WrongLength {
                expected,
                found: clues.len(),
            });
        }
        if let Some((index, &clue)) = clues
            .iter()
            .enumerate()
            .find(|&(_, &clue)| clue > self.size)
        {
            return Err(LoadCluesError::ClueOutOfRange { index, clue });
        }

        for (street, &clue) in self.streets.iter_mut().zip(clues) {
            street.clue = clue;
        }
        for id in 0..expected {
            if self.seed_street(StreetId(id)).is_err() {
                self.unsolvable = true;
            }
        }
        Ok(())
    }

    /// Loads a row-major N×N height grid, 0 leaving a cell open.
    ///
    /// Heights that conflict with each other or with already seeded clues
    /// mark the city unsolvable rather than erroring.
    pub fn load_heights(&mut self, heights: &[u8]) -> Result<(), LoadHeightsError> {
        let n = self.size as usize;
        if heights.len() != n * n {
            return Err(LoadHeightsError::WrongLength { expected: n });
        }
        for (i, &height) in heights.iter().enumerate() {
            if height > self.size {
                return Err(LoadHeightsError::HeightOutOfRange {
                    x: i % n,
                    y: i / n,
                    height,
                });
            }
        }
        for (i, &height) in heights.iter().enumerate() {
            if let Some(height) = Height::new_checked(height) {
                let (x, y) = ((i % n) as u8, (i / n) as u8);
                if self.set_tower_height(x, y, height).is_err() {
                    self.unsolvable = true;
                }
            }
        }
        Ok(())
    }

    /// Applies the immediate consequences of one street's clue: a clue of 1
    /// pins the nearest cell to the maximum height, a clue of N forces the
    /// whole ascending staircase, and anything in between caps how tall the
    /// first `clue - 1` cells can be.
    fn seed_street(&mut self, id: StreetId) -> Result<(), Unsolvable> {
        let size = self.size;
        let clue = self.streets[id.as_index()].clue;
        if clue == 0 {
            return Ok(());
        }
        let full = HeightSet::full(size);
        let top = Height::new(size).as_set();
        if clue == 1 {
            self.restrict_tower(id, 0, top)?;
            let mask = full.without(top);
            for i in 1..size as usize {
                if self.street_tower(id, i).can_hold(mask) {
                    self.restrict_tower(id, i, mask)?;
                }
            }
        } else if clue == size {
            for i in 0..size as usize {
                self.restrict_tower(id, i, Height::new(i as u8 + 1).as_set())?;
            }
        } else {
            let mut options = full;
            for i in (1..=size).rev() {
                if i < clue {
                    options = HeightSet::from_bits(options.bits() >> 1);
                }
                let index = i as usize - 1;
                if self.street_tower(id, index).can_hold(options) {
                    self.restrict_tower(id, index, options)?;
                }
            }
        }
        Ok(())
    }

    /// Checks that no line holds a duplicate resolved height, no cell ran out
    /// of candidates and every clue can still be met.
    pub fn is_valid(&mut self) -> bool {
        if self.unsolvable {
            return false;
        }
        for id in 0..self.streets.len() {
            self.refresh_street(StreetId(id));
        }
        self.streets.iter().all(|street| street.valid)
    }

    /// Checks that every cell is resolved and the grid is still valid.
    pub fn is_solved(&mut self) -> bool {
        self.towers.iter().all(Tower::is_complete) && self.is_valid()
    }

    /// The resolved heights as a row-major grid, 0 for cells still open.
    pub fn heights(&self) -> Vec<Vec<u8>> {
        let n = self.size as usize;
        (0..n)
            .map(|y| {
                (0..n)
                    .map(|x| {
                        self.towers[y * n + x].height().map_or(0, Height::get)
                    })
                    .collect()
            })
            .collect()
    }

    /// Product of the candidate counts over all open cells, saturating at
    /// `u64::MAX`. 1 for a solved grid.
    pub fn search_space(&self) -> u64 {
        self.towers
            .iter()
            .filter(|tower| !tower.is_complete())
            .fold(1u64, |space, tower| {
                space.saturating_mul(u64::from(tower.options().len()))
            })
    }

    /// Solves the city in place. Returns whether a full valid grid was
    /// reached; the first solution found is kept.
    pub fn solve(&mut self) -> bool {
        let cancel = AtomicBool::new(false);
        self.solve_until(&cancel).unwrap_or(false)
    }

    /// Like [`solve`](City::solve), but gives up and returns `None` as soon
    /// as `cancel` is set. The grid is left in whatever intermediate state the
    /// solver reached.
    pub fn solve_until(&mut self, cancel: &AtomicBool) -> Option<bool> {
        crate::solver::run(self, cancel)
    }

    pub(crate) fn tower_index(&self, x: u8, y: u8) -> usize {
        y as usize * self.size as usize + x as usize
    }

    pub(crate) fn street_id(&self, side: Side, pos: u8) -> StreetId {
        StreetId(side.as_index() * self.size as usize + pos as usize)
    }

    pub(crate) fn street(&self, id: StreetId) -> &Street {
        &self.streets[id.as_index()]
    }

    pub(crate) fn street_count(&self) -> usize {
        self.streets.len()
    }

    pub(crate) fn street_tower(&self, id: StreetId, index: usize) -> &Tower {
        &self.towers[self.streets[id.as_index()].tower(index)]
    }

    /// Recomputes a street's derived statistics if a viewed cell changed
    /// since the last refresh.
    pub(crate) fn refresh_street(&mut self, id: StreetId) {
        let i = id.as_index();
        if self.dirty[i] {
            let City { streets, towers, .. } = self;
            streets[i].recompute(towers);
            self.dirty[i] = false;
        }
    }

    pub(crate) fn is_pending(&self, id: StreetId) -> bool {
        self.pending[id.as_index()]
    }

    pub(crate) fn clear_pending(&mut self, id: StreetId) {
        self.pending[id.as_index()] = false;
    }

    /// Narrows the candidates of the `index`-th cell of street `id`.
    /// On change, the four streets viewing the cell are marked stale and
    /// re-queued for the rules.
    pub(crate) fn restrict_tower(
        &mut self,
        id: StreetId,
        index: usize,
        mask: HeightSet,
    ) -> Result<bool, Unsolvable> {
        let ti = self.streets[id.as_index()].tower(index);
        let changed = self.towers[ti].restrict(mask)?;
        if changed {
            self.notify(ti);
        }
        Ok(changed)
    }

    /// Resolves the cell at `(x, y)`, with the same re-queueing as
    /// [`restrict_tower`](City::restrict_tower).
    pub(crate) fn set_tower_height(
        &mut self,
        x: u8,
        y: u8,
        height: Height,
    ) -> Result<bool, Unsolvable> {
        let ti = self.tower_index(x, y);
        let changed = self.towers[ti].set_height(height)?;
        if changed {
            self.notify(ti);
        }
        Ok(changed)
    }

    fn notify(&mut self, ti: usize) {
        let n = self.size as usize;
        let x = ti % n;
        let y = ti / n;
        for &sid in &[x, n + y, 3 * n - x - 1, 4 * n - y - 1] {
            self.dirty[sid] = true;
            self.pending[sid] = true;
        }
    }
}

impl fmt::Display for City {
    /// Renders the grid as height bars: `####` rows for resolved floors,
    /// `++`/`--` per still-open candidate floor, clues along the borders.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size;
        writeln!(f, "==============================")?;
        write!(f, "    ")?;
        for x in 0..size {
            write!(f, " {:^4}", self.clue(Side::Top, x))?;
        }
        writeln!(f)?;
        writeln!(f)?;
        for y in 0..size {
            for floor in (1..=size).rev() {
                if floor == 3 {
                    write!(f, "{:3} ", self.clue(Side::Left, size - 1 - y))?;
                } else {
                    write!(f, "    ")?;
                }
                for x in 0..size {
                    let tower = self.tower(x, y);
                    let cell = match tower.height() {
                        Some(height) if height.get() >= floor => "####",
                        Some(_) => "    ",
                        None if tower.options().contains(Height::new(floor)) => " ++ ",
                        None => " -- ",
                    };
                    write!(f, " {}", cell)?;
                }
                if floor == 3 {
                    write!(f, " {:<3}", self.clue(Side::Right, y))?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }
        write!(f, "    ")?;
        for x in 0..size {
            write!(f, " {:^4}", self.clue(Side::Bottom, size - 1 - x))?;
        }
        writeln!(f)?;
        writeln!(f, "------------------------------")?;
        writeln!(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_bad_sizes() {
        assert!(City::new(0).is_err());
        assert!(City::new(17).is_err());
        assert!(City::new(16).is_ok());
    }

    #[test]
    fn streets_know_their_edge_and_position() {
        let city = City::new(4).unwrap();
        for &side in &Side::ALL {
            for pos in 0..4 {
                let street = city.street(city.street_id(side, pos));
                assert_eq!(street.side(), side);
                assert_eq!(street.pos(), pos);
                assert_eq!(street.clue(), 0);
            }
        }
    }

    #[test]
    fn rejects_bad_clue_slices() {
        let mut city = City::new(4).unwrap();
        assert!(matches!(
            city.load_clues(&[0; 15]),
            Err(LoadCluesError::WrongLength {
                expected: 16,
                found: 15
            })
        ));
        let mut clues = [0; 16];
        clues[5] = 5;
        assert!(matches!(
            city.load_clues(&clues),
            Err(LoadCluesError::ClueOutOfRange { index: 5, clue: 5 })
        ));
    }

    #[test]
    fn clue_of_size_forces_the_staircase() {
        let mut city = City::new(4).unwrap();
        let mut clues = [0; 16];
        // top clue of 4 on the first column
        clues[0] = 4;
        city.load_clues(&clues).unwrap();
        for (y, height) in Height::all(4).enumerate() {
            assert_eq!(city.tower(0, y as u8).height(), Some(height));
        }
        assert!(city.is_valid());
    }

    #[test]
    fn clue_of_one_pins_the_maximum() {
        let mut city = City::new(4).unwrap();
        let mut clues = [0; 16];
        // right clue of 1 on the first row
        clues[4] = 1;
        city.load_clues(&clues).unwrap();
        assert_eq!(city.tower(3, 0).height(), Some(Height::new(4)));
        // the rest of the row lost the maximum as a candidate
        for x in 0..3 {
            assert!(!city.tower(x, 0).options().contains(Height::new(4)));
        }
    }

    #[test]
    fn middle_clue_caps_the_near_cells() {
        let mut city = City::new(5).unwrap();
        let mut clues = [0; 20];
        // top clue of 3: nearest cell at most 3, next at most 4
        clues[2] = 3;
        city.load_clues(&clues).unwrap();
        assert_eq!(city.tower(2, 0).max_height(), 3);
        assert_eq!(city.tower(2, 1).max_height(), 4);
        assert_eq!(city.tower(2, 2).max_height(), 5);
    }

    #[test]
    fn conflicting_heights_invalidate_without_error() {
        let mut city = City::new(4).unwrap();
        city.load_heights(&[
            1, 1, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ])
        .unwrap();
        assert!(!city.is_valid());
        assert!(!city.solve());
    }

    #[test]
    fn search_space_shrinks_to_one_when_solved() {
        let mut city = City::new(4).unwrap();
        assert_eq!(city.search_space(), 4u64.pow(16));
        let mut clues = [0; 16];
        clues[0] = 4;
        city.load_clues(&clues).unwrap();
        assert!(city.search_space() < 4u64.pow(16));
        assert!(city.solve());
        assert_eq!(city.search_space(), 1);
    }
}
