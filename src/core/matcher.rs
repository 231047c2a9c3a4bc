use rand::Rng;
use tracing::{debug, info};

use crate::core::explain::create_match_explanation;
use crate::core::filters::group_constraints_satisfied;
use crate::core::groups::{build_room_groups, candidate_groups_for};
use crate::core::rank::{rank, redistribute_tail, sort_by_score};
use crate::core::scoring::score_group;
use crate::models::{MatchResult, MatchingConfig, MatchingConfigError, Profile};

/// Main matching orchestrator
///
/// # Pipeline
/// 1. Assemble candidate groups (capacity-bucketed partition, or the
///    per-person enumeration behind the hard-constraint filter)
/// 2. Score each group across the four questionnaire domains
/// 3. Attach a human-readable explanation
/// 4. Rank by score, optionally truncating to a limit
///
/// The matcher holds only the immutable scoring configuration; every
/// invocation works on a caller-supplied profile snapshot and an injected
/// random source, so fixing the seed makes a run fully reproducible.
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatchingConfig,
}

impl Matcher {
    /// Build a matcher, rejecting configurations that violate the weight
    /// and range invariants
    pub fn new(config: MatchingConfig) -> Result<Self, MatchingConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_default_config() -> Self {
        Self {
            config: MatchingConfig::default(),
        }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Compute room groups for the whole pool (admin view)
    ///
    /// Returns an empty list when fewer than 2 profiles exist.
    pub fn compute_all_matches<R: Rng>(
        &self,
        profiles: &[Profile],
        rng: &mut R,
    ) -> Vec<MatchResult> {
        if profiles.len() < 2 {
            debug!("Need at least 2 profiles to generate matches");
            return Vec::new();
        }

        let groups = build_room_groups(profiles, rng);
        debug!("Assembled {} room groups from {} profiles", groups.len(), profiles.len());

        let mut results: Vec<MatchResult> = groups
            .iter()
            .map(|group| self.score_and_describe(group, rng))
            .collect();

        sort_by_score(&mut results);
        if self.config.redistribute_scores {
            redistribute_tail(&mut results, rng);
        }

        info!("Generated {} group matches", results.len());
        results
    }

    /// Compute ranked candidate groups for one person
    ///
    /// An unknown id is a valid empty answer at this layer, not an error;
    /// so is a pool with no eligible candidates.
    pub fn compute_matches_for<R: Rng>(
        &self,
        profile_id: &str,
        profiles: &[Profile],
        limit: usize,
        rng: &mut R,
    ) -> Vec<MatchResult> {
        let Some(target) = profiles.iter().find(|p| p.profile_id == profile_id) else {
            debug!("Profile {} not in pool, returning no matches", profile_id);
            return Vec::new();
        };

        let groups = candidate_groups_for(target, profiles);
        debug!(
            "Found {} candidate groups for profile {}",
            groups.len(),
            profile_id
        );

        let results: Vec<MatchResult> = groups
            .iter()
            .map(|group| self.score_and_describe(group, rng))
            .collect();

        rank(results, Some(limit))
    }

    fn score_and_describe<R: Rng>(&self, group: &[&Profile], rng: &mut R) -> MatchResult {
        let (score, domain_scores) = score_group(group, &self.config, rng);
        let explanation = create_match_explanation(score, &domain_scores, group.len());

        MatchResult {
            member_ids: group.iter().map(|m| m.profile_id.clone()).collect(),
            member_names: group.iter().map(|m| m.name.clone()).collect(),
            compatibility_score: score,
            habits_similarity: domain_scores.habits,
            social_similarity: domain_scores.social,
            conflict_similarity: domain_scores.conflict,
            interests_similarity: domain_scores.interests,
            constraints_matched: group_constraints_satisfied(group),
            match_explanation: explanation,
            created_at: chrono::Utc::now(),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_config()
    }
}
