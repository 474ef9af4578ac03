use crate::bitset::HeightSet;
use crate::consts::MAX_SIZE;
use std::num::NonZeroU8;

/// A building height that can be entered in a cell of the grid.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Height(NonZeroU8);

impl Height {
    /// Constructs a new `Height`.
    ///
    /// # Panic
    /// Panics, if the height is not in the range of `1..=16`.
    pub fn new(height: u8) -> Self {
        Self::new_checked(height).unwrap()
    }

    /// Constructs a new `Height`. Returns `None`, if the height is not in the
    /// range of `1..=16`.
    pub fn new_checked(height: u8) -> Option<Self> {
        if height > MAX_SIZE {
            return None;
        }
        NonZeroU8::new(height).map(Height)
    }

    /// Constructs a new `Height` from an index, i.e. `height - 1`.
    pub(crate) fn from_index(idx: u8) -> Self {
        Self::new_checked(idx + 1).unwrap()
    }

    /// Returns an iterator over all heights of a puzzle of the given size.
    pub fn all(size: u8) -> impl Iterator<Item = Self> {
        (1..=size).map(Height::new)
    }

    /// Returns the height contained within.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the height as `usize`, offset by `-1`, so numbering starts at `0`.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }

    /// Returns a `HeightSet` with only this height's bit set.
    pub fn as_set(self) -> HeightSet {
        HeightSet::from_bits(1 << self.as_index())
    }
}
