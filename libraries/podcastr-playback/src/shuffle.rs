//! Shuffle pick
//!
//! Shuffle mode does not reorder the queue. Each "next" jumps to a random
//! episode other than the current one.

use rand::Rng;

/// Pick a uniformly random index in `[0, len)` other than `current`
///
/// Returns `None` when there is no other index (`len <= 1`). Draws from the
/// `len - 1` remaining slots and skips over `current`, so every other index
/// has equal probability and no retry loop is needed.
pub fn pick_other_index<R: Rng + ?Sized>(rng: &mut R, len: usize, current: usize) -> Option<usize> {
    if len <= 1 {
        return None;
    }

    let pick = rng.gen_range(0..len - 1);
    Some(if pick >= current { pick + 1 } else { pick })
}
