use rand::Rng;

use crate::core::similarity::similarity_with_jitter;
use crate::core::vector::{vectorize, Domain};
use crate::models::{MatchingConfig, Profile};

/// Per-domain average similarity across all pairs in a group
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DomainScores {
    pub habits: f64,
    pub social: f64,
    pub conflict: f64,
    pub interests: f64,
}

impl DomainScores {
    fn get_mut(&mut self, domain: Domain) -> &mut f64 {
        match domain {
            Domain::Habits => &mut self.habits,
            Domain::Social => &mut self.social,
            Domain::Conflict => &mut self.conflict,
            Domain::Interests => &mut self.interests,
        }
    }
}

/// Base score: weighted sum of the four domain averages
///
/// With weights summing to 1.0 and every average in [0, 1], the result is
/// also in [0, 1].
#[inline]
pub fn weighted_score(scores: &DomainScores, config: &MatchingConfig) -> f64 {
    scores.habits * config.weights.habits
        + scores.social * config.weights.social
        + scores.conflict * config.weights.conflict
        + scores.interests * config.weights.interests
}

/// Apply the deal-breaker penalties to a base score
///
/// The penalties are sequential, not mutually exclusive: a group below both
/// thresholds is hit by both factors.
#[inline]
pub fn apply_penalties(base_score: f64, scores: &DomainScores, config: &MatchingConfig) -> f64 {
    let mut score = base_score;

    if scores.habits < config.penalties.habits_threshold {
        score *= config.penalties.habits_factor;
    }
    if scores.conflict < config.penalties.conflict_threshold {
        score *= config.penalties.conflict_factor;
    }

    score
}

/// Group-size penalty factor: pairs are unpenalized, each extra member
/// costs 5% (groups of 3 -> 0.95, groups of 4 -> 0.90)
#[inline]
pub fn group_size_factor(group_size: usize) -> f64 {
    1.0 - (group_size.saturating_sub(2) as f64) * 0.05
}

/// Score a candidate group of 2-4 members
///
/// Averages pairwise per-domain similarity over all C(n,2) pairs, combines
/// the averages with the configured weights, then applies deal-breaker and
/// group-size penalties and clamps into [0, 1].
///
/// A group smaller than 2 is degenerate, not an error: it scores 0.0 with
/// all-zero domain averages.
pub fn score_group<R: Rng>(
    members: &[&Profile],
    config: &MatchingConfig,
    rng: &mut R,
) -> (f64, DomainScores) {
    if members.len() < 2 {
        return (0.0, DomainScores::default());
    }

    let vectors: Vec<_> = members.iter().map(|member| vectorize(member)).collect();

    let mut totals = DomainScores::default();
    let mut pair_count = 0usize;

    for i in 0..vectors.len() {
        for j in (i + 1)..vectors.len() {
            for domain in Domain::ALL {
                let pair_similarity = similarity_with_jitter(
                    vectors[i].domain(domain),
                    vectors[j].domain(domain),
                    config.jitter,
                    rng,
                );
                *totals.get_mut(domain) += pair_similarity;
            }
            pair_count += 1;
        }
    }

    let mut averages = DomainScores::default();
    for domain in Domain::ALL {
        *averages.get_mut(domain) = *totals.get_mut(domain) / pair_count as f64;
    }

    let base_score = weighted_score(&averages, config);
    let penalized = apply_penalties(base_score, &averages, config);
    let final_score = (penalized * group_size_factor(members.len())).clamp(0.0, 1.0);

    (final_score, averages)
}
