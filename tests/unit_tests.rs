// Unit tests for Roomie Algo

use roomie_algo::core::{
    filters::{constraints_match, filter_candidates},
    groups::build_room_groups,
    scoring::{apply_penalties, score_group, weighted_score, DomainScores},
    similarity::similarity,
    vector::vectorize,
};
use roomie_algo::models::{Gender, MatchingConfig, Profile};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_profile(
    id: &str,
    prefers_ac: bool,
    capacity: u8,
    gender: Gender,
    answers: [u8; 10],
) -> Profile {
    let now = chrono::Utc::now();
    Profile {
        profile_id: id.to_string(),
        name: format!("Person {}", id),
        contact_info: "555-0000".to_string(),
        email: format!("{}@example.com", id),
        prefers_ac,
        room_capacity: capacity,
        gender,
        q1_sleep: answers[0],
        q2_tidy: answers[1],
        q3_noise: answers[2],
        q4_friends_freq: answers[3],
        q5_friday_pref: answers[4],
        q6_overnight_guests: answers[5],
        q7_conflict_style: answers[6],
        q8_alone_time: answers[7],
        q9_sports_games: answers[8],
        q10_movies_music: answers[9],
        self_description: None,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_self_similarity_is_one_per_domain() {
    let profile = make_profile("a", true, 2, Gender::Male, [2, 4, 1, 5, 3, 2, 4, 1, 5, 3]);
    let vectors = vectorize(&profile);

    assert!((similarity(&vectors.habits, &vectors.habits) - 1.0).abs() < 1e-9);
    assert!((similarity(&vectors.social, &vectors.social) - 1.0).abs() < 1e-9);
    assert!((similarity(&vectors.conflict, &vectors.conflict) - 1.0).abs() < 1e-9);
    assert!((similarity(&vectors.interests, &vectors.interests) - 1.0).abs() < 1e-9);
}

#[test]
fn test_similarity_symmetry_without_jitter() {
    let a = vectorize(&make_profile("a", true, 2, Gender::Male, [1, 2, 3, 4, 5, 1, 2, 3, 4, 5]));
    let b = vectorize(&make_profile("b", true, 2, Gender::Male, [5, 4, 3, 2, 1, 5, 4, 3, 2, 1]));

    assert_eq!(similarity(&a.habits, &b.habits), similarity(&b.habits, &a.habits));
    assert_eq!(similarity(&a.conflict, &b.conflict), similarity(&b.conflict, &a.conflict));
}

#[test]
fn test_constraint_filter_requires_exact_equality() {
    let target = make_profile("t", true, 2, Gender::Female, [3; 10]);
    let pool = vec![
        make_profile("same", true, 2, Gender::Female, [1; 10]),
        make_profile("ac", false, 2, Gender::Female, [3; 10]),
        make_profile("cap", true, 4, Gender::Female, [3; 10]),
        make_profile("gen", true, 2, Gender::Male, [3; 10]),
    ];

    let candidates = filter_candidates(&target, &pool);

    assert_eq!(candidates.len(), 1);
    for candidate in candidates {
        assert_eq!(candidate.prefers_ac, target.prefers_ac);
        assert_eq!(candidate.room_capacity, target.room_capacity);
        assert_eq!(candidate.gender, target.gender);
        assert!(constraints_match(&target, candidate));
    }
}

#[test]
fn test_score_in_unit_interval_for_arbitrary_groups() {
    let config = MatchingConfig::default();
    let mut rng = StdRng::seed_from_u64(17);

    let profiles: Vec<Profile> = (0..4)
        .map(|i| {
            let answers = [
                1 + (i % 5) as u8,
                1 + ((i * 2) % 5) as u8,
                1 + ((i * 3) % 5) as u8,
                5 - (i % 5) as u8,
                1 + (i % 3) as u8,
                1 + (i % 4) as u8,
                2 + (i % 3) as u8,
                1 + ((i * 2) % 4) as u8,
                3,
                1 + (i % 5) as u8,
            ];
            make_profile(&i.to_string(), true, 4, Gender::Male, answers)
        })
        .collect();
    let refs: Vec<&Profile> = profiles.iter().collect();

    for size in 2..=4 {
        let (score, scores) = score_group(&refs[..size], &config, &mut rng);
        assert!((0.0..=1.0).contains(&score));
        for domain_avg in [scores.habits, scores.social, scores.conflict, scores.interests] {
            assert!((0.0..=1.0).contains(&domain_avg));
        }
    }
}

#[test]
fn test_group_size_penalty_is_monotonic() {
    // Identical answers give every pair similarity 1.0, isolating the
    // size penalty from the domain averages.
    let answers = [3, 1, 4, 2, 5, 3, 1, 4, 2, 5];
    let profiles: Vec<Profile> = (0..4)
        .map(|i| make_profile(&i.to_string(), true, 4, Gender::Female, answers))
        .collect();
    let refs: Vec<&Profile> = profiles.iter().collect();
    let config = MatchingConfig::default();
    let mut rng = StdRng::seed_from_u64(13);

    let (pair, _) = score_group(&refs[..2], &config, &mut rng);
    let (trio, _) = score_group(&refs[..3], &config, &mut rng);
    let (quad, _) = score_group(&refs[..4], &config, &mut rng);

    assert!(quad <= trio);
    assert!(trio <= pair);
}

#[test]
fn test_deal_breaker_penalties_compound() {
    let config = MatchingConfig::default();

    // Habits below 0.6 alone
    let habits_only = DomainScores {
        habits: 0.5,
        social: 0.8,
        conflict: 0.8,
        interests: 0.8,
    };
    let base = weighted_score(&habits_only, &config);
    assert!((apply_penalties(base, &habits_only, &config) - base * 0.7).abs() < 1e-9);

    // Habits 0.5 and conflict 0.45 together
    let both = DomainScores {
        habits: 0.5,
        social: 0.8,
        conflict: 0.45,
        interests: 0.8,
    };
    let base = weighted_score(&both, &config);
    assert!((apply_penalties(base, &both, &config) - base * 0.7 * 0.8).abs() < 1e-9);
}

#[test]
fn test_partition_respects_capacity_bounds() {
    let mut profiles = Vec::new();
    for i in 0..11 {
        profiles.push(make_profile(&format!("p{}", i), true, 2, Gender::Male, [3; 10]));
    }
    for i in 0..10 {
        profiles.push(make_profile(&format!("q{}", i), false, 4, Gender::Female, [3; 10]));
    }
    let mut rng = StdRng::seed_from_u64(31);

    let groups = build_room_groups(&profiles, &mut rng);

    for group in &groups {
        let capacity = group[0].room_capacity as usize;
        assert!(group.len() >= 2, "group smaller than 2");
        assert!(group.len() <= capacity, "group exceeds its capacity");
    }
}

#[test]
fn test_weight_validation_rejects_bad_sums() {
    let mut config = MatchingConfig::default();
    config.weights.social = 0.4;

    assert!(config.validate().is_err());
}
