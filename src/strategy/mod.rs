//! Deduction rules and the fixed order the solver applies them in.

mod strategies;

use crate::board::{City, StreetId};
use crate::helper::Unsolvable;

/// The deduction rules, in the order the solver tries them on a street.
///
/// [`Exclude`](Strategy::Exclude) and [`Obvious`](Strategy::Obvious) are the
/// cheap direction-independent pair and always run first; the remaining rules
/// read a street's hill statistics and only fire for specific gaps between
/// the clue and the already visible buildings.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Strategy {
    /// Heights already built in a line are no candidates for its open cells.
    Exclude,
    /// A height with a single possible cell in a line must be built there.
    Obvious,
    /// A clue of 2 caps every cell between the first one and the maximum.
    FirstOfTwo,
    /// Each open visible cell takes exactly one step of the remaining
    /// staircase, bounding it from both sides.
    Staircase,
    /// One step of visibility left: everything behind the first open cell of
    /// the decisive hill stays below it.
    StepDown,
    /// [`StepDown`](Strategy::StepDown) applied per hill when every hill
    /// contributes exactly one more visible building.
    Slope,
}

impl Strategy {
    /// All strategies, in application order.
    pub const ALL: [Strategy; 6] = [
        Strategy::Exclude,
        Strategy::Obvious,
        Strategy::FirstOfTwo,
        Strategy::Staircase,
        Strategy::StepDown,
        Strategy::Slope,
    ];

    /// Applies the rule to one street. Returns whether any candidate set
    /// shrank. Expects the street's statistics to be fresh.
    pub(crate) fn deduce(self, city: &mut City, id: StreetId) -> Result<bool, Unsolvable> {
        match self {
            Strategy::Exclude => strategies::exclude::deduce(city, id),
            Strategy::Obvious => strategies::obvious::deduce(city, id),
            Strategy::FirstOfTwo => strategies::first_of_two::deduce(city, id),
            Strategy::Staircase => strategies::staircase::deduce(city, id),
            Strategy::StepDown => strategies::step_down::deduce(city, id),
            Strategy::Slope => strategies::slope::deduce(city, id),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bitset::HeightSet;
    use crate::board::{Height, Side};

    fn top_street(city: &City, pos: u8) -> StreetId {
        city.street_id(Side::Top, pos)
    }

    #[test]
    fn exclude_removes_built_heights_from_the_line() {
        let mut city = City::new(4).unwrap();
        city.set_tower_height(0, 0, Height::new(4)).unwrap();
        let id = top_street(&city, 0);
        assert!(Strategy::Exclude.deduce(&mut city, id).unwrap());
        for y in 1..4 {
            assert!(!city.tower(0, y).options().contains(Height::new(4)));
        }
        // second pass finds nothing new
        assert!(!Strategy::Exclude.deduce(&mut city, id).unwrap());
    }

    #[test]
    fn obvious_places_the_hidden_single() {
        let mut city = City::new(4).unwrap();
        let id = top_street(&city, 0);
        city.restrict_tower(id, 0, HeightSet::from_bits(0b0011)).unwrap();
        city.restrict_tower(id, 1, HeightSet::from_bits(0b0011)).unwrap();
        city.restrict_tower(id, 2, HeightSet::from_bits(0b0111)).unwrap();
        // only the last cell can still hold the 4
        assert!(Strategy::Obvious.deduce(&mut city, id).unwrap());
        assert_eq!(city.tower(0, 3).height(), Some(Height::new(4)));
    }

    #[test]
    fn first_of_two_caps_the_run_up_to_the_maximum() {
        let mut city = City::new(4).unwrap();
        let mut clues = [0u8; 16];
        clues[0] = 2;
        city.load_clues(&clues).unwrap();
        let id = top_street(&city, 0);
        // keep the second cell from being the maximum itself
        city.restrict_tower(id, 1, HeightSet::from_bits(0b0111)).unwrap();
        city.refresh_street(id);
        assert!(Strategy::FirstOfTwo.deduce(&mut city, id).unwrap());
        // capped below the first cell's tallest candidate of 3
        assert_eq!(city.tower(0, 1).options().bits(), 0b0011);
        // this cell may end the run as the maximum
        assert_eq!(city.tower(0, 2).options().bits(), 0b1011);
        // beyond the possible maximum nothing changes
        assert_eq!(city.tower(0, 3).options().bits(), 0b1111);
    }

    #[test]
    fn staircase_assigns_the_forced_steps() {
        let mut city = City::new(4).unwrap();
        let mut clues = [0u8; 16];
        clues[0] = 3;
        city.load_clues(&clues).unwrap();
        city.load_heights(&[
            2, 0, 0, 0, //
            1, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ])
        .unwrap();
        let id = top_street(&city, 0);
        assert!(Strategy::Exclude.deduce(&mut city, id).unwrap());
        city.refresh_street(id);
        // 2 is visible, 1 hides behind it; both remaining cells must show,
        // so they ascend and the nearer one is exactly 3
        assert!(Strategy::Staircase.deduce(&mut city, id).unwrap());
        assert_eq!(city.tower(0, 2).height(), Some(Height::new(3)));
    }

    #[test]
    fn step_down_blocks_the_maximum_behind_the_first_open_cell() {
        let mut city = City::new(4).unwrap();
        let mut clues = [0u8; 16];
        clues[0] = 2;
        city.load_clues(&clues).unwrap();
        city.load_heights(&[
            1, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ])
        .unwrap();
        let id = top_street(&city, 0);
        assert!(Strategy::Exclude.deduce(&mut city, id).unwrap());
        city.refresh_street(id);
        // one more building may show; everything behind the first open cell
        // stays below its tallest candidate
        assert!(Strategy::StepDown.deduce(&mut city, id).unwrap());
        assert_eq!(city.tower(0, 2).options().bits(), 0b0110);
        assert_eq!(city.tower(0, 3).options().bits(), 0b0110);
        assert!(city.tower(0, 1).options().contains(Height::new(4)));
    }
}
