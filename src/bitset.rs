//! Candidate-height bitsets
//!
//! Every deduction in this crate is an intersection of height sets, so the
//! representation matters: a [`HeightSet`] is a `u16` with bit `h - 1` set iff
//! height `h` is still possible. The puzzle size is dynamic (up to
//! [`MAX_SIZE`](crate::consts::MAX_SIZE)), so the "all heights" mask is a
//! runtime value obtained from [`HeightSet::full`] rather than a constant.

use crate::board::Height;
use crate::helper::Unsolvable;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};

/// Set of candidate heights for a cell or a restriction mask for a rule.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeightSet(u16);

/// Iterator over the heights contained in a [`HeightSet`], low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iter(u16);

/// Potential return value for [`HeightSet::unique`]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Empty;

impl From<Empty> for Unsolvable {
    fn from(_: Empty) -> Unsolvable {
        Unsolvable
    }
}

impl HeightSet {
    /// The empty set.
    pub const NONE: HeightSet = HeightSet(0);

    /// Set of all heights `1..=size`.
    pub fn full(size: u8) -> HeightSet {
        debug_assert!(size as usize <= 16);
        HeightSet(if size >= 16 { !0 } else { (1 << size) - 1 })
    }

    /// Set of all heights `lo..=hi`. Empty if the range is.
    pub fn range(lo: u8, hi: u8) -> HeightSet {
        if lo == 0 || lo > hi {
            return HeightSet::NONE;
        }
        HeightSet::full(hi).without(HeightSet::full(lo - 1))
    }

    /// Construct a set from a raw bitmask.
    pub fn from_bits(bits: u16) -> HeightSet {
        HeightSet(bits)
    }

    /// The raw bitmask backing the set.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Returns the heights in this set that aren't present in `other`.
    pub fn without(self, other: HeightSet) -> HeightSet {
        HeightSet(self.0 & !other.0)
    }

    /// Deletes all heights from this set that are present in `other`.
    pub fn remove(&mut self, other: HeightSet) {
        self.0 &= !other.0;
    }

    /// Checks if `self` and `other` contain any common height.
    pub fn overlaps(self, other: HeightSet) -> bool {
        self & other != HeightSet::NONE
    }

    /// Checks if `self` contains `height`.
    pub fn contains(self, height: Height) -> bool {
        self.overlaps(height.as_set())
    }

    /// Returns the number of heights in this set.
    pub fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Checks whether this set contains any height.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the only height in this set, iff exactly 1 height remains.
    /// If no heights remain, it returns `Err(Empty)`.
    /// If more than 1 height remains, it returns `Ok(None)`.
    pub fn unique(self) -> Result<Option<Height>, Empty> {
        match self.len() {
            1 => {
                let height = self.into_iter().next();
                debug_assert!(height.is_some());
                Ok(height)
            }
            0 => Err(Empty),
            _ => Ok(None),
        }
    }

    /// Lowest height in the set, `None` if empty.
    pub fn min(self) -> Option<Height> {
        self.into_iter().next()
    }

    /// Highest height in the set, `None` if empty.
    pub fn max(self) -> Option<Height> {
        if self.0 == 0 {
            return None;
        }
        Some(Height::from_index(15 - self.0.leading_zeros() as u8))
    }
}

impl IntoIterator for HeightSet {
    type Item = Height;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Iterator for Iter {
    type Item = Height;

    fn next(&mut self) -> Option<Height> {
        if self.0 == 0 {
            return None;
        }
        let lowest_bit = self.0 & self.0.wrapping_neg();
        let bit_pos = lowest_bit.trailing_zeros() as u8;
        self.0 ^= lowest_bit;
        Some(Height::from_index(bit_pos))
    }
}

macro_rules! impl_binary_bitops {
    ( $( $trait:ident, $fn_name:ident);* $(;)* ) => {
        $(
            impl $trait for HeightSet {
                type Output = Self;

                #[inline(always)]
                fn $fn_name(self, other: Self) -> Self {
                    HeightSet($trait::$fn_name(self.0, other.0))
                }
            }
        )*
    };
}

macro_rules! impl_bitops_assign {
    ( $( $trait:ident, $fn_name:ident);* $(;)* ) => {
        $(
            impl $trait for HeightSet {
                #[inline(always)]
                fn $fn_name(&mut self, other: Self) {
                    $trait::$fn_name(&mut self.0, other.0)
                }
            }
        )*
    };
}

impl_binary_bitops!(
    BitAnd, bitand;
    BitOr, bitor;
    BitXor, bitxor;
);

impl_bitops_assign!(
    BitAndAssign, bitand_assign;
    BitOrAssign, bitor_assign;
    BitXorAssign, bitxor_assign;
);

impl fmt::Binary for HeightSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:b}", self.0)
    }
}

impl fmt::Debug for HeightSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.into_iter().map(Height::get))
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn full_and_range() {
        assert_eq!(HeightSet::full(4).bits(), 0b1111);
        assert_eq!(HeightSet::range(2, 3).bits(), 0b0110);
        assert_eq!(HeightSet::range(3, 3).bits(), 0b0100);
        assert_eq!(HeightSet::range(3, 2), HeightSet::NONE);
        assert_eq!(HeightSet::range(0, 4), HeightSet::NONE);
    }

    #[test]
    fn unique() {
        assert_eq!(HeightSet::NONE.unique(), Err(Empty));
        assert_eq!(HeightSet::from_bits(0b0100).unique(), Ok(Some(Height::new(3))));
        assert_eq!(HeightSet::from_bits(0b0101).unique(), Ok(None));
    }

    #[test]
    fn min_max_iter() {
        let set = HeightSet::from_bits(0b1010);
        assert_eq!(set.min(), Some(Height::new(2)));
        assert_eq!(set.max(), Some(Height::new(4)));
        let heights: Vec<u8> = set.into_iter().map(Height::get).collect();
        assert_eq!(heights, [2, 4]);
        assert_eq!(set.len(), 2);
    }
}
