use crate::bitset::HeightSet;
use crate::board::{City, StreetId};
use crate::helper::Unsolvable;

/// Each hill contributes exactly one more visible building. Within any hill
/// that has a single vacant cell left, only the first cell can be the one
/// that shows, so the cells behind it stay below its tallest candidate. Stops
/// short of the first cell that could hold the maximum.
pub(crate) fn deduce(city: &mut City, id: StreetId) -> Result<bool, Unsolvable> {
    let street = city.street(id);
    if street.clue < 2 {
        return Ok(false);
    }
    let visible = street.visible;
    if street.vacant == 0
        || visible > street.clue
        || (street.clue - visible) as usize != street.hills.len()
    {
        return Ok(false);
    }
    let highest_first = street.highest_first;
    let hills = street.hills.clone();

    let mut changed = false;
    for hill in &hills {
        if hill.vacant != 1 {
            continue;
        }
        let first = city.street_tower(id, hill.first);
        if hill.shadow >= first.min_height() {
            continue;
        }
        let mask = HeightSet::range(1, first.max_height().saturating_sub(1));
        let stop = highest_first.min(hill.last + 1);
        let mut enable_bit = 1u32;
        for tw_i in hill.first + 1..stop {
            enable_bit <<= 1;
            if hill.action_mask & enable_bit != 0 {
                let tower = city.street_tower(id, tw_i);
                if !tower.is_complete() && tower.can_hold(mask) {
                    changed |= city.restrict_tower(id, tw_i, mask)?;
                }
            }
        }
    }
    Ok(changed)
}
