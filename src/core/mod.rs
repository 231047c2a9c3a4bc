// Core algorithm exports
pub mod explain;
pub mod filters;
pub mod groups;
pub mod matcher;
pub mod rank;
pub mod scoring;
pub mod similarity;
pub mod vector;

pub use explain::create_match_explanation;
pub use filters::{constraints_match, filter_candidates, group_constraints_satisfied};
pub use groups::{build_room_groups, candidate_groups_for};
pub use matcher::Matcher;
pub use rank::{rank, redistribute_tail, sort_by_score};
pub use scoring::{score_group, DomainScores};
pub use similarity::{cosine, similarity, similarity_with_jitter};
pub use vector::{vectorize, Domain, DomainVectors};
