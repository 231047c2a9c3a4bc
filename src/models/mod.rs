// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    DomainWeights, Gender, MatchResult, MatchingConfig, MatchingConfigError, PenaltyConfig, Profile,
};
pub use requests::{CreateProfileRequest, MatchQuery};
pub use responses::{
    CreateProfileResponse, DeleteProfileResponse, ErrorResponse, HealthResponse, StatsResponse,
};
