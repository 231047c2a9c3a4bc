use crate::core::scoring::DomainScores;

/// Build a short human-readable rationale for a group's score
///
/// Deterministic thresholds over the final score and the per-domain averages;
/// clauses are joined with "; ".
pub fn create_match_explanation(score: f64, scores: &DomainScores, group_size: usize) -> String {
    let mut clauses = Vec::new();

    if score >= 0.8 {
        clauses.push(format!("Excellent compatibility for {}-member group", group_size));
    } else if score >= 0.6 {
        clauses.push(format!(
            "Good compatibility with minor differences in {}-member group",
            group_size
        ));
    } else if score >= 0.4 {
        clauses.push(format!("Moderate compatibility in {}-member group", group_size));
    } else {
        clauses.push(format!(
            "Lower compatibility in {}-member group - may require adjustment",
            group_size
        ));
    }

    if scores.habits >= 0.8 {
        clauses.push("Very similar living habits across the group".to_string());
    } else if scores.habits < 0.4 {
        clauses.push("Different living habits may require compromise".to_string());
    }

    if scores.social >= 0.8 {
        clauses.push("Compatible social preferences".to_string());
    } else if scores.social < 0.4 {
        clauses.push("Varied social preferences in the group".to_string());
    }

    if scores.conflict < 0.4 {
        clauses.push("Different conflict resolution styles - good communication important".to_string());
    }

    clauses.join("; ")
}
