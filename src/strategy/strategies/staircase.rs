use crate::bitset::HeightSet;
use crate::board::{City, StreetId};
use crate::helper::Unsolvable;

/// When every vacant cell is needed to meet the clue, each one takes exactly
/// one step of the remaining staircase. That bounds the `k`-th vacant cell of
/// a hill from below by the hill's floor and from above by the hill's top
/// minus the steps still to come.
pub(crate) fn deduce(city: &mut City, id: StreetId) -> Result<bool, Unsolvable> {
    let street = city.street(id);
    if street.clue < 2 {
        return Ok(false);
    }
    let visible = street.visible;
    let vacant = street.vacant;
    if vacant == 0 || visible > street.clue || vacant != street.clue - visible {
        return Ok(false);
    }
    let highest_first = street.highest_first;
    let hills = street.hills.clone();

    let mut changed = false;
    for hill in &hills {
        if hill.vacant == 0 {
            continue;
        }
        let floor = hill.bottom.max(hill.shadow + 1);
        let ceil = (hill.top + 1).saturating_sub(hill.vacant);
        let mut mask = HeightSet::range(floor, ceil);
        let mut enable_bit = 1u32;
        for tw_i in hill.first..=hill.last.min(highest_first) {
            if hill.action_mask & enable_bit != 0 {
                if city.street_tower(id, tw_i).can_hold(mask) {
                    changed |= city.restrict_tower(id, tw_i, mask)?;
                }
                // the next vacant cell sits one step higher
                mask = HeightSet::from_bits(mask.bits() << 1);
            }
            enable_bit <<= 1;
        }
    }
    Ok(changed)
}
