use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Gender, Profile};

/// Request to create a new profile
///
/// Field validation happens here, upstream of the matching engine: the engine
/// assumes every profile it receives already satisfies these ranges.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub profile_id: String,
    #[validate(length(min = 1, max = 100))]
    pub contact_info: String,
    #[validate(email)]
    pub email: String,

    pub prefers_ac: bool,
    #[validate(range(min = 2, max = 4))]
    pub room_capacity: u8,
    pub gender: Gender,

    // Questionnaire answers (1-5 scale)
    #[validate(range(min = 1, max = 5))]
    pub q1_sleep: u8,
    #[validate(range(min = 1, max = 5))]
    pub q2_tidy: u8,
    #[validate(range(min = 1, max = 5))]
    pub q3_noise: u8,
    #[validate(range(min = 1, max = 5))]
    pub q4_friends_freq: u8,
    #[validate(range(min = 1, max = 5))]
    pub q5_friday_pref: u8,
    #[validate(range(min = 1, max = 5))]
    pub q6_overnight_guests: u8,
    #[validate(range(min = 1, max = 5))]
    pub q7_conflict_style: u8,
    #[validate(range(min = 1, max = 5))]
    pub q8_alone_time: u8,
    #[validate(range(min = 1, max = 5))]
    pub q9_sports_games: u8,
    #[validate(range(min = 1, max = 5))]
    pub q10_movies_music: u8,

    #[validate(length(max = 500))]
    #[serde(default)]
    pub self_description: Option<String>,
}

impl CreateProfileRequest {
    /// Build the stored profile, stamping both timestamps with the same value
    pub fn into_profile(self) -> Profile {
        let now = chrono::Utc::now();
        Profile {
            profile_id: self.profile_id,
            name: self.name,
            contact_info: self.contact_info,
            email: self.email,
            prefers_ac: self.prefers_ac,
            room_capacity: self.room_capacity,
            gender: self.gender,
            q1_sleep: self.q1_sleep,
            q2_tidy: self.q2_tidy,
            q3_noise: self.q3_noise,
            q4_friends_freq: self.q4_friends_freq,
            q5_friday_pref: self.q5_friday_pref,
            q6_overnight_guests: self.q6_overnight_guests,
            q7_conflict_style: self.q7_conflict_style,
            q8_alone_time: self.q8_alone_time,
            q9_sports_games: self.q9_sports_games,
            q10_movies_music: self.q10_movies_music,
            self_description: self.self_description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Query parameters for the per-profile matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateProfileRequest {
        CreateProfileRequest {
            name: "Ada".to_string(),
            profile_id: "S1001".to_string(),
            contact_info: "555-0001".to_string(),
            email: "ada@example.com".to_string(),
            prefers_ac: true,
            room_capacity: 2,
            gender: Gender::Female,
            q1_sleep: 3,
            q2_tidy: 4,
            q3_noise: 2,
            q4_friends_freq: 3,
            q5_friday_pref: 2,
            q6_overnight_guests: 1,
            q7_conflict_style: 4,
            q8_alone_time: 3,
            q9_sports_games: 5,
            q10_movies_music: 4,
            self_description: None,
        }
    }

    #[test]
    fn accepts_valid_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn rejects_answer_out_of_scale() {
        let mut req = valid_request();
        req.q1_sleep = 6;
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_capacity_outside_room_sizes() {
        let mut req = valid_request();
        req.room_capacity = 5;
        assert!(req.validate().is_err());

        req.room_capacity = 1;
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_malformed_email() {
        let mut req = valid_request();
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn into_profile_stamps_matching_timestamps() {
        let profile = valid_request().into_profile();
        assert_eq!(profile.created_at, profile.updated_at);
        assert_eq!(profile.profile_id, "S1001");
    }
}
