use crate::bitset::HeightSet;
use crate::board::{City, StreetId};
use crate::helper::Unsolvable;

/// Exactly one more building may become visible. If a single hill holds all
/// the vacant cells, its first cell is the one that shows, so every later
/// open cell of the hill must stay below that cell's tallest candidate.
pub(crate) fn deduce(city: &mut City, id: StreetId) -> Result<bool, Unsolvable> {
    let street = city.street(id);
    if street.clue < 2 {
        return Ok(false);
    }
    let visible = street.visible;
    let total_vacant = street.vacant;
    if total_vacant == 0 || visible + 1 != street.clue {
        return Ok(false);
    }
    let hills = street.hills.clone();

    let mut changed = false;
    for hill in &hills {
        if hill.vacant != total_vacant {
            continue;
        }
        let first = city.street_tower(id, hill.first);
        if hill.shadow >= first.min_height() {
            continue;
        }
        let mask = HeightSet::range(1, first.max_height().saturating_sub(1));
        let mut enable_bit = 1u32;
        for tw_i in hill.first + 1..=hill.last {
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
