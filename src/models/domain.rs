use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Two-way room group category. Rooms are never mixed across this key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            other => Err(format!("unknown gender: {}", other)),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person's matching profile: hard constraints plus the ten questionnaire
/// answers the engine scores on. All answers are on a 1-5 ordinal scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub profile_id: String,
    pub name: String,
    pub contact_info: String,
    pub email: String,

    // Hard constraints - must match exactly for two people to share a room
    pub prefers_ac: bool,
    pub room_capacity: u8,
    pub gender: Gender,

    // Questionnaire answers, grouped by domain:
    // habits
    pub q1_sleep: u8,
    pub q2_tidy: u8,
    pub q3_noise: u8,
    // social
    pub q4_friends_freq: u8,
    pub q5_friday_pref: u8,
    pub q6_overnight_guests: u8,
    // conflict
    pub q7_conflict_style: u8,
    pub q8_alone_time: u8,
    // interests
    pub q9_sports_games: u8,
    pub q10_movies_music: u8,

    #[serde(default)]
    pub self_description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Scored result for one candidate room group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub member_ids: Vec<String>,
    pub member_names: Vec<String>,
    pub compatibility_score: f64,
    pub habits_similarity: f64,
    pub social_similarity: f64,
    pub conflict_similarity: f64,
    pub interests_similarity: f64,
    pub constraints_matched: bool,
    pub match_explanation: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Relative weight of each questionnaire domain in the final score
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DomainWeights {
    pub habits: f64,
    pub social: f64,
    pub conflict: f64,
    pub interests: f64,
}

impl DomainWeights {
    pub fn sum(&self) -> f64 {
        self.habits + self.social + self.conflict + self.interests
    }
}

impl Default for DomainWeights {
    fn default() -> Self {
        Self {
            habits: 0.50,
            social: 0.25,
            conflict: 0.20,
            interests: 0.05,
        }
    }
}

/// Deal-breaker penalties: when a domain average drops below its threshold,
/// the whole score is multiplied by the matching factor. Both penalties can
/// apply to the same group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PenaltyConfig {
    pub habits_threshold: f64,
    pub habits_factor: f64,
    pub conflict_threshold: f64,
    pub conflict_factor: f64,
}

impl Default for PenaltyConfig {
    fn default() -> Self {
        Self {
            habits_threshold: 0.6,
            habits_factor: 0.7,
            conflict_threshold: 0.5,
            conflict_factor: 0.8,
        }
    }
}

/// Immutable engine configuration, validated once at startup
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub weights: DomainWeights,
    pub penalties: PenaltyConfig,
    /// Add uniform +/-5% noise to pairwise similarities (display diversity).
    #[serde(default)]
    pub jitter: bool,
    /// Widen the displayed score range by damping results ranked below the
    /// top 30% (compute-all only).
    #[serde(default)]
    pub redistribute_scores: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: DomainWeights::default(),
            penalties: PenaltyConfig::default(),
            jitter: false,
            redistribute_scores: false,
        }
    }
}

/// Configuration errors that must prevent the engine from starting
#[derive(Debug, Error)]
pub enum MatchingConfigError {
    #[error("domain weights must sum to 1.0, got {0}")]
    WeightSum(f64),

    #[error("{name} must be within [0.0, 1.0], got {value}")]
    OutOfRange { name: &'static str, value: f64 },
}

impl MatchingConfig {
    /// Check the sum-to-1.0 and range invariants. Called by `Matcher::new`,
    /// so an invalid config can never reach scoring.
    pub fn validate(&self) -> Result<(), MatchingConfigError> {
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(MatchingConfigError::WeightSum(sum));
        }

        let ranged = [
            ("weights.habits", self.weights.habits),
            ("weights.social", self.weights.social),
            ("weights.conflict", self.weights.conflict),
            ("weights.interests", self.weights.interests),
            ("penalties.habits_threshold", self.penalties.habits_threshold),
            ("penalties.habits_factor", self.penalties.habits_factor),
            ("penalties.conflict_threshold", self.penalties.conflict_threshold),
            ("penalties.conflict_factor", self.penalties.conflict_factor),
        ];

        for (name, value) in ranged {
            if !(0.0..=1.0).contains(&value) {
                return Err(MatchingConfigError::OutOfRange { name, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let weights = DomainWeights::default();
        assert!((weights.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(MatchingConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_weights_not_summing_to_one() {
        let mut config = MatchingConfig::default();
        config.weights.habits = 0.9;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, MatchingConfigError::WeightSum(_)));
    }

    #[test]
    fn rejects_out_of_range_penalty() {
        let mut config = MatchingConfig::default();
        config.penalties.habits_factor = 1.3;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, MatchingConfigError::OutOfRange { .. }));
    }

    #[test]
    fn gender_round_trips_through_str() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(Gender::Female.as_str(), "Female");
        assert!("Other".parse::<Gender>().is_err());
    }
}
