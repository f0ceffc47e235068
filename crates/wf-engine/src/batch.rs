//! Batch winner selection

use rand::prelude::*;

/// Select the winner batch for one spin.
///
/// The primary winner (the name the wheel landed on) always leads the
/// batch. Extras are drawn uniformly without replacement from `active`
/// minus the primary, via a truncated Fisher–Yates shuffle, and the
/// requested size clamps to the names actually available.
pub fn select_batch<R: Rng>(
    primary: &str,
    batch_size: usize,
    active: &[String],
    rng: &mut R,
) -> Vec<String> {
    let mut batch = vec![primary.to_string()];
    if batch_size <= 1 {
        return batch;
    }

    let mut pool: Vec<&String> = active.iter().filter(|n| n.as_str() != primary).collect();
    let take = (batch_size - 1).min(pool.len());
    let (extras, _) = pool.partial_shuffle(rng, take);
    batch.extend(extras.iter().map(|n| (*n).clone()));
    batch
}
