use crate::bitset::HeightSet;
use crate::board::{Height, Side, Tower};

/// A maximal run of cells in a street that can still change what the viewer
/// sees: it opens behind a resolved peak (whose height is the `shadow`) and
/// closes at the next resolved building that out-tops it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Hill {
    /// Street index of the first cell of the run.
    pub first: usize,
    /// Street index of the last cell of the run.
    pub last: usize,
    /// Cells of the run that can still become visible.
    pub vacant: u8,
    /// Bit `i` set iff cell `first + i` counts towards `vacant`.
    pub action_mask: u32,
    /// Height of the resolved peak in front of the run; a cell must out-grow
    /// it to be seen.
    pub shadow: u8,
    /// Tallest height committed to the run so far.
    pub top: u8,
    /// Lowest minimum height among the run's vacant cells.
    pub bottom: u8,
}

/// One directional view of a row or column: the clue on one edge plus the N
/// cells in the order that edge sees them.
///
/// A street never owns its cells; it stores indices into the grid's tower
/// arena, fixed at construction via the side's coordinate rotation. All the
/// derived statistics are refreshed together by [`recompute`](Street::recompute)
/// whenever one of the viewed cells changed.
#[derive(Clone, Debug)]
pub struct Street {
    side: Side,
    pos: u8,
    size: u8,
    pub(crate) clue: u8,
    /// Arena indices of the viewed cells, nearest to the edge first.
    pub(crate) towers: Vec<usize>,
    pub(crate) valid: bool,
    /// First street index that can still hold the maximum height.
    pub(crate) highest_first: usize,
    /// Last street index that can still hold the maximum height.
    pub(crate) highest_last: usize,
    /// Resolved buildings certain to be seen from this edge.
    pub(crate) visible: u8,
    /// Open cells across all hills that can still affect the visible count.
    pub(crate) vacant: u8,
    pub(crate) hills: Vec<Hill>,
}

impl Street {
    pub(crate) fn new(size: u8, side: Side, pos: u8, tower_index: impl Fn(u8, u8) -> usize) -> Street {
        let towers = (0..size)
            .map(|index| {
                let (x, y) = side.cell(size, pos, index);
                tower_index(x, y)
            })
            .collect();
        Street {
            side,
            pos,
            size,
            clue: 0,
            towers,
            valid: true,
            highest_first: 0,
            highest_last: 0,
            visible: 0,
            vacant: 0,
            hills: Vec::new(),
        }
    }

    /// The side this street views the grid from.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Position of the street along its edge, in viewing order.
    pub fn pos(&self) -> u8 {
        self.pos
    }

    /// The visibility clue on this street's edge, 0 if unconstrained.
    pub fn clue(&self) -> u8 {
        self.clue
    }

    /// Arena index of the `index`-th viewed cell, counting from the edge.
    pub(crate) fn tower(&self, index: usize) -> usize {
        self.towers[index]
    }

    /// Refreshes every derived statistic from the current cell states:
    /// the max-height placement bounds, the hill segmentation and the
    /// validity flag.
    pub(crate) fn recompute(&mut self, towers: &[Tower]) {
        self.highest_first = self.find_highest_first(towers);
        self.highest_last = self.find_highest_last(towers);
        self.scan_hills(towers);
        self.valid = self.check_valid(towers);
    }

    fn find_highest_first(&self, towers: &[Tower]) -> usize {
        let mask = Height::new(self.size).as_set();
        self.towers
            .iter()
            .position(|&ti| towers[ti].can_hold(mask))
            .unwrap_or(self.size as usize - 1)
    }

    fn find_highest_last(&self, towers: &[Tower]) -> usize {
        let mask = Height::new(self.size).as_set();
        let mut highest = self.size as usize - 1;
        for (i, &ti) in self.towers.iter().enumerate() {
            let tower = &towers[ti];
            if tower.can_hold(mask) {
                highest = i;
            }
            if tower.max_height() == self.size && tower.is_complete() {
                break;
            }
        }
        highest
    }

    /// Walks the street from the edge up to the last possible max-height cell,
    /// splitting the unresolved skyline into hills and counting certainly
    /// visible peaks and vacant cells on the way.
    fn scan_hills(&mut self, towers: &[Tower]) {
        let size = self.size;
        self.hills.clear();
        let mut cur = Hill::default();
        let mut total_visible = 0u8;
        let mut total_vacant = 0u8;
        // A cell must out-grow this to add a visibility step. Bumped for
        // every vacant cell, clamped up to that cell's minimum height.
        let mut bottom_limit = 0u8;
        let mut hill_size = 0usize;
        let mut bit = 1u32;

        for i in 0..=self.highest_last {
            let tower = &towers[self.tower(i)];
            let height = tower.height().map_or(0, Height::get);

            if height == size {
                total_visible += 1;
                break;
            } else if height > cur.top {
                // a resolved peak: close the running hill, open a milestone
                if hill_size != 0 {
                    cur.last = cur.first + hill_size - 1;
                    self.hills.push(cur);
                    cur = Hill::default();
                    hill_size = 0;
                }
                total_visible += 1;
                bottom_limit = height;
                cur.top = height;
                bit = 1;
                continue;
            } else if height != 0 && hill_size == 0 {
                // resolved but hidden, and no hill open to absorb it
                continue;
            }

            if hill_size == 0 {
                cur.first = i;
                cur.shadow = bottom_limit;
                bottom_limit = 0;
            }
            hill_size += 1;

            let bottom = tower.min_height();
            let top = tower.max_height();

            if top > cur.shadow && top > bottom_limit {
                bottom_limit += 1;
                if bottom > bottom_limit {
                    bottom_limit = bottom;
                }
                cur.bottom = if cur.bottom == 0 {
                    bottom
                } else {
                    cur.bottom.min(bottom)
                };
                cur.top = cur.top.max(top);
                cur.vacant += 1;
                total_vacant += 1;
                cur.action_mask |= bit;
            }

            bit <<= 1;
        }

        if hill_size != 0 {
            cur.last = cur.first + hill_size - 1;
            self.hills.push(cur);
        }

        self.vacant = total_vacant;
        self.visible = total_visible;
    }

    /// Replays the street from the edge checking for duplicate resolved
    /// heights and for clues that can no longer be met.
    fn check_valid(&self, towers: &[Tower]) -> bool {
        let size = self.size;
        let mut highest = 0u8;
        // resolved buildings that form a strictly increasing skyline so far
        let mut visible = 0u8;
        // open cells in front of the first resolved building
        let mut foreground = 0u8;
        // open cells behind it that could still be seen
        let mut offstage = 0u8;
        // parity mask: a height resolved twice cancels its own bit
        let mut once = HeightSet::NONE;

        for &ti in &self.towers {
            let tower = &towers[ti];
            let options = tower.options();
            if options.is_empty() {
                return false;
            }
            let height = tower.height().map_or(0, Height::get);
            if height != 0 {
                once ^= options;
                if !once.overlaps(options) {
                    return false;
                }
            } else if highest < size {
                if highest == 0 {
                    foreground += 1;
                } else {
                    offstage += 1;
                }
            }
            if highest < height {
                visible += 1;
                highest = height;
            }
        }

        let clue = self.clue;
        if clue == 0 {
            return true;
        }
        if visible > clue + foreground + offstage {
            return false;
        }
        if visible + foreground + offstage < clue {
            return false;
        }
        if visible + foreground == 0 && offstage != clue {
            return false;
        }
        true
    }
}
