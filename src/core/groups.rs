use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::filters::filter_candidates;
use crate::models::{Gender, Profile};

/// Partition the full pool into room groups (admin view)
///
/// Profiles are bucketed by their hard-constraint key, each bucket is
/// shuffled to avoid a fixed pairing order, then sliced into consecutive
/// chunks of the bucket's room capacity. A trailing remainder of one is
/// discarded. Every profile lands in at most one group per invocation -
/// this is a partition, not an enumeration of all possible groupings.
pub fn build_room_groups<'a, R: Rng>(
    profiles: &'a [Profile],
    rng: &mut R,
) -> Vec<Vec<&'a Profile>> {
    // Bucketing by the full constraint key keeps every emitted group
    // constraint-homogeneous; BTreeMap keeps bucket order stable.
    let mut buckets: BTreeMap<(u8, bool, Gender), Vec<&Profile>> = BTreeMap::new();
    for profile in profiles {
        buckets
            .entry((profile.room_capacity, profile.prefers_ac, profile.gender))
            .or_default()
            .push(profile);
    }

    let mut groups = Vec::new();
    for ((capacity, _, _), mut bucket) in buckets {
        bucket.shuffle(rng);
        for chunk in bucket.chunks(capacity as usize) {
            if chunk.len() >= 2 {
                groups.push(chunk.to_vec());
            }
        }
    }

    groups
}

/// Enumerate candidate groups a single person could join (per-person view)
///
/// Runs the hard-constraint filter against the target, prepends the target
/// to the eligible pool, and slices the combined list into consecutive
/// chunks of the target's room capacity, discarding a trailing remainder
/// shorter than 2. Unlike the admin partition, the target may appear in
/// more than one returned candidate group.
pub fn candidate_groups_for<'a>(
    target: &'a Profile,
    pool: &'a [Profile],
) -> Vec<Vec<&'a Profile>> {
    let mut combined = vec![target];
    combined.extend(filter_candidates(target, pool));

    combined
        .chunks(target.room_capacity as usize)
        .filter(|chunk| chunk.len() >= 2)
        .map(|chunk| chunk.to_vec())
        .collect()
}
