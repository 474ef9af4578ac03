// Internal helper types.

/// Marker for a puzzle branch that cannot be completed.
///
/// This is expected control flow, not a failure: the brute force search
/// provokes it constantly and converts it into "restore the snapshot and try
/// the next height". It never crosses the public API boundary.
#[derive(Debug)]
pub(crate) struct Unsolvable;
