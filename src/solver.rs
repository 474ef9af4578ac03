//! The propagation loop: apply rules until nothing changes, then hand over
//! to [`brute_force`](crate::brute_force).

use crate::board::{City, StreetId};
use crate::helper::Unsolvable;
use crate::strategy::Strategy;
use std::sync::atomic::{AtomicBool, Ordering};

const VISIBILITY_STRATEGIES: [Strategy; 4] = [
    Strategy::FirstOfTwo,
    Strategy::Staircase,
    Strategy::StepDown,
    Strategy::Slope,
];

/// Drives the city to a solution or a verdict. Returns `None` iff `cancel`
/// was set before a verdict was reached.
pub(crate) fn run(city: &mut City, cancel: &AtomicBool) -> Option<bool> {
    loop {
        if cancel.load(Ordering::Relaxed) {
            return None;
        }
        if !city.is_valid() {
            return Some(false);
        }
        if city.is_solved() {
            return Some(true);
        }
        match solve_step(city) {
            Err(Unsolvable) => return Some(false),
            Ok(true) => {}
            Ok(false) => {
                log::debug!(
                    "rules exhausted, falling back to search over {} states",
                    city.search_space()
                );
                return crate::brute_force::search(city, cancel);
            }
        }
    }
}

/// One propagation step: offers each re-queued street to the rules and stops
/// at the first narrowing. The changed cells re-queue their streets, so the
/// next step picks up the consequences.
fn solve_step(city: &mut City) -> Result<bool, Unsolvable> {
    for i in 0..city.street_count() {
        let id = StreetId(i);
        if !city.is_pending(id) {
            continue;
        }
        city.clear_pending(id);
        city.refresh_street(id);
        let street = city.street(id);
        let (side, pos) = (street.side(), street.pos());

        // non-short-circuiting: both line rules get their shot
        let narrowed =
            Strategy::Exclude.deduce(city, id)? | Strategy::Obvious.deduce(city, id)?;
        if narrowed {
            log::trace!("{:?} street {}: narrowed by line elimination", side, pos);
            return Ok(true);
        }
        // hill statistics are still fresh, the line rules changed nothing
        for &strategy in &VISIBILITY_STRATEGIES {
            if strategy.deduce(city, id)? {
                log::trace!("{:?} street {}: narrowed by {:?}", side, pos, strategy);
                return Ok(true);
            }
        }
    }
    Ok(false)
}
