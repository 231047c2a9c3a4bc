use crate::models::Profile;

/// Check whether two profiles agree on every hard constraint
///
/// Climate preference, room capacity, and group category must all be equal.
/// Any single mismatch excludes the pairing entirely - this gate never
/// scores, it only includes or excludes.
#[inline]
pub fn constraints_match(a: &Profile, b: &Profile) -> bool {
    a.prefers_ac == b.prefers_ac
        && a.room_capacity == b.room_capacity
        && a.gender == b.gender
}

/// Filter a candidate pool down to profiles eligible to share with `target`
///
/// The target itself is always excluded, as is anyone differing on any hard
/// constraint.
pub fn filter_candidates<'a>(target: &Profile, pool: &'a [Profile]) -> Vec<&'a Profile> {
    pool.iter()
        .filter(|candidate| candidate.profile_id != target.profile_id)
        .filter(|candidate| constraints_match(target, candidate))
        .collect()
}

/// Check that every pair in a group agrees on the hard constraints
///
/// Constraint equality is transitive, so comparing everyone against the
/// first member covers all pairs.
pub fn group_constraints_satisfied(members: &[&Profile]) -> bool {
    match members.split_first() {
        Some((first, rest)) => rest.iter().all(|member| constraints_match(first, member)),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn make_profile(id: &str, prefers_ac: bool, capacity: u8, gender: Gender) -> Profile {
        Profile {
            profile_id: id.to_string(),
            name: format!("Person {}", id),
            contact_info: "555-0000".to_string(),
            email: format!("{}@example.com", id),
            prefers_ac,
            room_capacity: capacity,
            gender,
            q1_sleep: 3,
            q2_tidy: 3,
            q3_noise: 3,
            q4_friends_freq: 3,
            q5_friday_pref: 3,
            q6_overnight_guests: 3,
            q7_conflict_style: 3,
            q8_alone_time: 3,
            q9_sports_games: 3,
            q10_movies_music: 3,
            self_description: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn keeps_only_exact_constraint_matches() {
        let target = make_profile("t", true, 2, Gender::Female);
        let pool = vec![
            make_profile("a", true, 2, Gender::Female),  // eligible
            make_profile("b", false, 2, Gender::Female), // AC mismatch
            make_profile("c", true, 3, Gender::Female),  // capacity mismatch
            make_profile("d", true, 2, Gender::Male),    // gender mismatch
        ];

        let candidates = filter_candidates(&target, &pool);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].profile_id, "a");
    }

    #[test]
    fn excludes_the_target_itself() {
        let target = make_profile("t", true, 2, Gender::Female);
        let pool = vec![
            make_profile("t", true, 2, Gender::Female),
            make_profile("a", true, 2, Gender::Female),
        ];

        let candidates = filter_candidates(&target, &pool);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].profile_id, "a");
    }

    #[test]
    fn group_constraint_check_covers_all_pairs() {
        let a = make_profile("a", true, 3, Gender::Male);
        let b = make_profile("b", true, 3, Gender::Male);
        let c = make_profile("c", false, 3, Gender::Male);

        assert!(group_constraints_satisfied(&[&a, &b]));
        assert!(!group_constraints_satisfied(&[&a, &b, &c]));
        assert!(group_constraints_satisfied(&[]));
    }
}
