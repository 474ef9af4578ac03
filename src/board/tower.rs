use crate::bitset::HeightSet;
use crate::board::Height;
use crate::helper::Unsolvable;

/// One cell of the grid: the candidate heights still possible for it and the
/// resolved height once only one remains.
///
/// Invariants: the candidate set is never empty while the puzzle is still
/// potentially solvable, and the height is resolved iff the candidate set is
/// a singleton.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tower {
    options: HeightSet,
    height: Option<Height>,
}

impl Tower {
    pub(crate) fn new(all: HeightSet) -> Tower {
        Tower {
            options: all,
            height: all.unique().unwrap_or(None),
        }
    }

    /// The resolved height, `None` while the cell is still open.
    pub fn height(&self) -> Option<Height> {
        self.height
    }

    /// The candidate heights still possible for this cell.
    pub fn options(&self) -> HeightSet {
        self.options
    }

    /// Whether the cell has been resolved to a single height.
    pub fn is_complete(&self) -> bool {
        self.height.is_some()
    }

    /// Whether any of the heights in `mask` is still possible here.
    pub(crate) fn can_hold(&self, mask: HeightSet) -> bool {
        self.options.overlaps(mask)
    }

    /// Resolves the cell to `height`.
    ///
    /// Re-applying the already resolved height is a no-op; a different one is
    /// a contradiction, as is a height the candidate set has excluded.
    /// Returns whether the cell changed.
    pub(crate) fn set_height(&mut self, height: Height) -> Result<bool, Unsolvable> {
        match self.height {
            Some(old) if old != height => Err(Unsolvable),
            Some(_) => Ok(false),
            None => {
                if !self.options.contains(height) {
                    return Err(Unsolvable);
                }
                self.options = height.as_set();
                self.height = Some(height);
                Ok(true)
            }
        }
    }

    /// Intersects the candidate set with `mask`, resolving the height if a
    /// single candidate remains. Returns whether the cell changed.
    ///
    /// An empty intersection is a contradiction; the candidate set is left
    /// untouched in that case.
    pub(crate) fn restrict(&mut self, mask: HeightSet) -> Result<bool, Unsolvable> {
        let narrowed = self.options & mask;
        if narrowed.is_empty() {
            return Err(Unsolvable);
        }
        let changed = narrowed != self.options;
        self.options = narrowed;
        if let Ok(Some(height)) = narrowed.unique() {
            self.height = Some(height);
        }
        Ok(changed)
    }

    /// Lowest candidate height, 0 if the candidate set is empty.
    pub fn min_height(&self) -> u8 {
        self.options.min().map_or(0, Height::get)
    }

    /// Highest candidate height, 0 if the candidate set is empty.
    pub fn max_height(&self) -> u8 {
        self.options.max().map_or(0, Height::get)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn open_tower(size: u8) -> Tower {
        Tower::new(HeightSet::full(size))
    }

    #[test]
    fn restrict_narrows_and_auto_resolves() {
        let mut tower = open_tower(4);
        assert!(tower.restrict(HeightSet::from_bits(0b0110)).unwrap());
        assert_eq!(tower.height(), None);
        assert_eq!(tower.min_height(), 2);
        assert_eq!(tower.max_height(), 3);

        assert!(tower.restrict(HeightSet::from_bits(0b0010)).unwrap());
        assert_eq!(tower.height(), Some(Height::new(2)));
    }

    #[test]
    fn restrict_is_monotone_and_idempotent() {
        let mut tower = open_tower(5);
        let mask = HeightSet::from_bits(0b00111);
        assert!(tower.restrict(mask).unwrap());
        // same mask again: no change
        assert!(!tower.restrict(mask).unwrap());
        // a superset can never grow the candidate set back
        assert!(!tower.restrict(HeightSet::full(5)).unwrap());
        assert_eq!(tower.options(), mask);
    }

    #[test]
    fn restrict_to_nothing_is_a_contradiction() {
        let mut tower = open_tower(4);
        tower.restrict(HeightSet::from_bits(0b0011)).unwrap();
        assert!(tower.restrict(HeightSet::from_bits(0b1100)).is_err());
        // candidates survive the failed restriction
        assert_eq!(tower.options().bits(), 0b0011);
    }

    #[test]
    fn set_height_conflicts() {
        let mut tower = open_tower(4);
        assert!(tower.set_height(Height::new(3)).unwrap());
        assert!(!tower.set_height(Height::new(3)).unwrap());
        assert!(tower.set_height(Height::new(2)).is_err());
        assert_eq!(tower.height(), Some(Height::new(3)));
    }
}
