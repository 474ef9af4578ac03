use crate::bitset::HeightSet;
use crate::board::{City, Height, StreetId};
use crate::helper::Unsolvable;

/// A clue of 2 means the first cell hides everything up to the maximum.
/// While the first cell is open, every later cell up to the one that can be
/// the maximum must stay below the first cell's tallest candidate.
pub(crate) fn deduce(city: &mut City, id: StreetId) -> Result<bool, Unsolvable> {
    if city.street(id).clue != 2 {
        return Ok(false);
    }
    let first = city.street_tower(id, 0);
    if first.is_complete() {
        return Ok(false);
    }
    let size = city.size();
    let limit = first.max_height();
    let top = Height::new(size).as_set();
    let below = HeightSet::range(1, limit.saturating_sub(1));

    let mut changed = false;
    for i in 1..size as usize {
        let tower = city.street_tower(id, i);
        if tower.height().map_or(0, Height::get) > limit {
            break;
        }
        if tower.is_complete() {
            continue;
        }
        if tower.can_hold(top) {
            // this cell can end the run as the maximum itself
            changed |= city.restrict_tower(id, i, top | below)?;
            break;
        }
        if tower.can_hold(below) {
            changed |= city.restrict_tower(id, i, below)?;
        }
    }
    Ok(changed)
}
