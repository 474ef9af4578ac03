use crate::bitset::HeightSet;
use crate::board::{City, StreetId};
use crate::helper::Unsolvable;

/// Latin-square elimination: every height already built in the line is
/// removed from the candidates of the line's open cells.
///
/// Runs only on the primary sides; the opposite street sees the same line and
/// would repeat the work.
pub(crate) fn deduce(city: &mut City, id: StreetId) -> Result<bool, Unsolvable> {
    if !city.street(id).side().is_primary() {
        return Ok(false);
    }
    let size = city.size();
    let mut mask = HeightSet::full(size);
    for i in 0..size as usize {
        let tower = city.street_tower(id, i);
        if tower.is_complete() {
            mask.remove(tower.options());
        }
    }
    let mut changed = false;
    for i in 0..size as usize {
        if city.street_tower(id, i).can_hold(mask) {
            changed |= city.restrict_tower(id, i, mask)?;
        }
    }
    Ok(changed)
}
