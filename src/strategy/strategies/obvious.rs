use crate::bitset::HeightSet;
use crate::board::{City, StreetId};
use crate::helper::Unsolvable;

/// Hidden single: a height that only one cell of the line can still hold
/// must be built in that cell.
///
/// Primary sides only, like [`exclude`](super::exclude).
pub(crate) fn deduce(city: &mut City, id: StreetId) -> Result<bool, Unsolvable> {
    if !city.street(id).side().is_primary() {
        return Ok(false);
    }
    let size = city.size() as usize;

    // parity sieve: a height lands in `once` on its first occurrence and
    // moves to `many` on its second
    let mut once = HeightSet::NONE;
    let mut many = HeightSet::NONE;
    for i in 0..size {
        let options = city.street_tower(id, i).options();
        once ^= options.without(many);
        many |= options.without(once);
    }

    let mut changed = false;
    for i in 0..size {
        let hit = city.street_tower(id, i).options() & once;
        if !hit.is_empty() {
            changed |= city.restrict_tower(id, i, hit)?;
        }
    }
    Ok(changed)
}
