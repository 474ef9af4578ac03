/// Largest supported puzzle size. Candidate sets are stored in a `u16`,
/// one bit per height.
pub const MAX_SIZE: u8 = 16;

pub(crate) const N_SIDES: usize = 4;
