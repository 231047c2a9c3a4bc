use rand::Rng;

use crate::models::MatchResult;

/// Sort results descending by compatibility score
///
/// The sort is stable, so ties keep their original relative order.
pub fn sort_by_score(results: &mut [MatchResult]) {
    results.sort_by(|a, b| {
        b.compatibility_score
            .partial_cmp(&a.compatibility_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Damp the tail of a ranked list to widen the displayed score range
///
/// Results ranked below the top 30% are multiplied by a random factor in
/// [0.6, 0.95] and re-clamped into [0.4, 1.0]. Purely cosmetic - the
/// caller opts in via configuration, and the top of the ranking is never
/// touched.
pub fn redistribute_tail<R: Rng>(results: &mut [MatchResult], rng: &mut R) {
    let cutoff = results.len() as f64 * 0.3;

    for (index, result) in results.iter_mut().enumerate() {
        if index as f64 > cutoff {
            let factor: f64 = rng.gen_range(0.6..0.95);
            result.compatibility_score = (result.compatibility_score * factor).clamp(0.4, 1.0);
        }
    }
}

/// Rank results and truncate to `limit` when one is given
pub fn rank(mut results: Vec<MatchResult>, limit: Option<usize>) -> Vec<MatchResult> {
    sort_by_score(&mut results);
    if let Some(limit) = limit {
        results.truncate(limit);
    }
    results
}
