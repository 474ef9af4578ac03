/// One of the four edges of the grid a clue can be attached to.
///
/// Clue slices are laid out side-major in this order, with the position
/// running along the edge in the side's own viewing order: top positions go
/// left to right, right positions top to bottom, bottom positions right to
/// left and left positions bottom to top.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[allow(missing_docs)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All sides, in clue-slice order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Returns the side's offset in a side-major clue slice.
    pub fn as_index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
        }
    }

    /// The two primary sides cover every column (top) and every row (right)
    /// exactly once between them. Direction-independent rules run only on
    /// these to avoid handling the same physical line twice.
    pub(crate) fn is_primary(self) -> bool {
        matches!(self, Side::Top | Side::Right)
    }

    /// Grid coordinates of the `index`-th cell of the street at `pos` on this
    /// side, counting from the viewing edge.
    pub(crate) fn cell(self, size: u8, pos: u8, index: u8) -> (u8, u8) {
        match self {
            Side::Top => (pos, index),
            Side::Right => (size - 1 - index, pos),
            Side::Bottom => (size - 1 - pos, size - 1 - index),
            Side::Left => (index, size - 1 - pos),
        }
    }
}

/// Index of a street in the grid's street arena: `side * size + pos`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct StreetId(pub(crate) usize);

impl StreetId {
    pub(crate) fn as_index(self) -> usize {
        self.0
    }
}
