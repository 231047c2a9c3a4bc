use crate::models::Profile;

/// The four semantic clusters of questionnaire answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Habits,
    Social,
    Conflict,
    Interests,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::Habits,
        Domain::Social,
        Domain::Conflict,
        Domain::Interests,
    ];
}

/// Per-domain answer vectors derived from one profile. Ephemeral - built
/// during scoring and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainVectors {
    pub habits: [f64; 3],
    pub social: [f64; 3],
    pub conflict: [f64; 2],
    pub interests: [f64; 2],
}

impl DomainVectors {
    pub fn domain(&self, domain: Domain) -> &[f64] {
        match domain {
            Domain::Habits => &self.habits,
            Domain::Social => &self.social,
            Domain::Conflict => &self.conflict,
            Domain::Interests => &self.interests,
        }
    }
}

/// Map a profile's questionnaire answers into domain vectors
///
/// The field-to-domain assignment is fixed:
/// habits = sleep/tidiness/noise, social = visits/going out/guests,
/// conflict = conflict style/alone time, interests = the two activity answers.
pub fn vectorize(profile: &Profile) -> DomainVectors {
    DomainVectors {
        habits: [
            profile.q1_sleep as f64,
            profile.q2_tidy as f64,
            profile.q3_noise as f64,
        ],
        social: [
            profile.q4_friends_freq as f64,
            profile.q5_friday_pref as f64,
            profile.q6_overnight_guests as f64,
        ],
        conflict: [
            profile.q7_conflict_style as f64,
            profile.q8_alone_time as f64,
        ],
        interests: [
            profile.q9_sports_games as f64,
            profile.q10_movies_music as f64,
        ],
    }
}
