// Integration tests for SkillSwap Match

use skillswap_match::core::{FixedJitter, Recommender, RecommendError, SeededJitter, COMPLEMENTARY_LIMIT};
use skillswap_match::core::normalize::matches_any;
use skillswap_match::models::{Candidate, ScoringWeights};
use skillswap_match::services::demo_roster;
use std::sync::Arc;

fn skills(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn create_roster() -> Vec<Candidate> {
    vec![
        Candidate::new("1", "Sarah", &["Node.js", "React", "Python"]),
        Candidate::new("2", "Empty", &[]),
        Candidate::new("3", "Omar", &["Go", "Rust", "Docker", "Kubernetes", "AWS", "Terraform"]),
        Candidate::new("4", "Ana", &["JavaScript", "TypeScript"]),
        Candidate::new("5", "Lee", &["Figma"]),
    ]
}

#[test]
fn test_integration_end_to_end_recommendation() {
    let recommender = Recommender::with_default_weights();
    let requester = skills(&["React Development", "JavaScript"]);

    let results = recommender
        .recommend(&requester, &[Candidate::new("1", "Sarah", &["Node.js", "React", "Python"])])
        .unwrap();

    assert_eq!(results.len(), 1);
    let sarah = &results[0];
    assert_eq!(sarah.candidate_name, "Sarah");
    assert!(sarah.matching_skills.contains(&"React".to_string()));
    assert!(sarah.complementary_skills.contains(&"Node.js".to_string()));
    assert!(sarah.complementary_skills.contains(&"Python".to_string()));
    assert!(sarah.match_score > 0.0);
}

#[test]
fn test_result_invariants_hold_for_random_jitter() {
    let recommender = Recommender::with_default_weights();
    let requester = skills(&["React Development", "JavaScript", "UI/UX Design"]);
    let roster = create_roster();

    for _ in 0..50 {
        let results = recommender.recommend(&requester, &roster).unwrap();

        // One result per candidate with at least one skill
        let expected = roster.iter().filter(|c| !c.skills.is_empty()).count();
        assert_eq!(results.len(), expected);

        for r in &results {
            let candidate = roster.iter().find(|c| c.id == r.candidate_id).unwrap();

            assert!(r.matching_skills.iter().all(|s| candidate.skills.contains(s)));
            assert!(r.complementary_skills.iter().all(|s| candidate.skills.contains(s)));
            assert!(r.complementary_skills.iter().all(|s| !r.matching_skills.contains(s)));
            assert!(r.complementary_skills.len() <= COMPLEMENTARY_LIMIT);

            assert!(r.matching_skills.iter().all(|s| matches_any(s, &requester)));
            assert!(r.complementary_skills.iter().all(|s| !matches_any(s, &requester)));

            assert!(r.match_score >= 0.0 && r.match_score <= 10.0);
            assert!(((r.match_score * 10.0).round() - r.match_score * 10.0).abs() < 1e-9);
        }

        for pair in results.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score, "Results not sorted by score");
        }
    }
}

#[test]
fn test_complementary_keeps_roster_order() {
    let recommender = Recommender::new(ScoringWeights::default(), Arc::new(FixedJitter::none()));
    let results = recommender.recommend(&skills(&["Python"]), &create_roster()).unwrap();

    let omar = results.iter().find(|r| r.candidate_id == "3").unwrap();
    assert_eq!(omar.complementary_skills, vec!["Go", "Rust", "Docker"]);
    assert!(omar.matching_skills.is_empty());
    // 6*0.6 + 6*0.1 = 4.2, * 0.8 = 3.36
    assert_eq!(omar.match_score, 3.4);
    assert_eq!(results[0].candidate_id, "3");
}

#[test]
fn test_invalid_input_regardless_of_roster() {
    let recommender = Recommender::with_default_weights();

    for roster in [vec![], create_roster()] {
        assert!(matches!(
            recommender.recommend(&[], &roster),
            Err(RecommendError::InvalidInput(_))
        ));
    }
}

#[test]
fn test_seeded_runs_reproducible_and_unseeded_bounded() {
    let requester = skills(&["React Development"]);
    let roster = demo_roster();

    let first = Recommender::new(ScoringWeights::default(), Arc::new(SeededJitter::new(2024)))
        .recommend(&requester, &roster)
        .unwrap();
    let second = Recommender::new(ScoringWeights::default(), Arc::new(SeededJitter::new(2024)))
        .recommend(&requester, &roster)
        .unwrap();
    assert_eq!(first, second);

    // Every demo user has four skills and none match "React Development"
    // ("React Native" and "React Development" do not contain each other)
    for r in &first {
        // raw = 4*0.6 + 4*0.1 = 2.8, so scores fall within [2.2, 2.8]
        assert!(r.match_score >= 2.2 && r.match_score <= 2.8, "score {}", r.match_score);
    }
}

#[test]
fn test_demo_roster_against_default_requester() {
    let recommender = Recommender::new(ScoringWeights::default(), Arc::new(FixedJitter::none()));
    let requester = skills(&["React Development", "JavaScript", "UI/UX Design"]);

    let results = recommender.recommend(&requester, &demo_roster()).unwrap();

    assert_eq!(results.len(), 8);
    assert!(results.iter().all(|r| r.complementary_skills.len() == 3));
}
