use serde::{Deserialize, Serialize};

/// Response for profile creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileResponse {
    pub message: String,
    pub profile_id: String,
    pub name: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Pool statistics for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_profiles: usize,
    pub male_profiles: usize,
    pub female_profiles: usize,
    pub ac_preference: usize,
    pub non_ac_preference: usize,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

/// Response for profile deletion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteProfileResponse {
    pub message: String,
}
