//! One module per deduction rule.
//!
//! Every rule has the same shape: read the street, decide whether its firing
//! condition holds, then narrow cells through
//! [`City::restrict_tower`](crate::board::City::restrict_tower). Rules check
//! overlap before each restriction and skip silently when there is none; a
//! real contradiction surfaces through the street validity check instead.

pub(crate) mod exclude;
pub(crate) mod first_of_two;
pub(crate) mod obvious;
pub(crate) mod slope;
pub(crate) mod staircase;
pub(crate) mod step_down;
