//! Bounded, always-sorted top-k result lists.
//!
//! All finders accumulate their answers through these two functions, which is what makes their
//! outputs directly comparable: the list is kept ascending by `(dist2, id)` and never grows past
//! `k`.

use crate::r#type::Neighbor;

/// Insert `candidate` into `list`, keeping it sorted by `(dist2, id)` and at most `k` long.
///
/// The candidate lands before the first element whose key is not smaller than its own. If the
/// list then holds more than `k` entries the last one is dropped. Runs in `O(k)`.
pub fn insert_bounded(list: &mut Vec<Neighbor>, candidate: Neighbor, k: usize) {
    if k == 0 {
        list.clear();
        return;
    }

    // Full list and the candidate would land at the end: nothing to do.
    if list.len() >= k {
        if let Some(last) = list.last() {
            if candidate.rank() >= last.rank() {
                return;
            }
        }
    }

    let pos = list.partition_point(|item| item.rank() < candidate.rank());
    list.insert(pos, candidate);
    list.truncate(k);
}

/// The largest squared distance still accepted by a full list.
///
/// Returns `None` ("unbounded") while the list holds fewer than `k` entries, meaning any
/// candidate may still enter.
#[inline]
pub fn worst_accepted(list: &[Neighbor], k: usize) -> Option<u64> {
    if list.len() < k {
        return None;
    }
    list.last().map(|item| item.dist2)
}

/// Whether a candidate at squared distance `dist2` could still be accepted.
#[inline]
pub(crate) fn may_accept(list: &[Neighbor], k: usize, dist2: u64) -> bool {
    worst_accepted(list, k).map_or(true, |worst| dist2 <= worst)
}
