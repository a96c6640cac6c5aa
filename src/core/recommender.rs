use crate::core::{
    jitter::{JitterSource, ThreadRngJitter},
    normalize::matches_any,
    scoring::{calculate_match_score, SkillCounts},
};
use crate::models::{Candidate, MatchResult, ScoringWeights};
use std::sync::Arc;
use thiserror::Error;

/// Number of complementary skills published per result
pub const COMPLEMENTARY_LIMIT: usize = 3;

/// Errors that can occur while producing recommendations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to generate recommendations: {0}")]
    GenerationFailure(String),
}

/// Skill-swap recommender - scores a roster against a requester's skills
///
/// # Pipeline Stages
/// 1. Input validation
/// 2. Drop candidates without skills
/// 3. Split each candidate's skills into matching and complementary
/// 4. Score, then rank by descending score
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
    jitter: Arc<dyn JitterSource>,
}

impl Recommender {
    pub fn new(weights: ScoringWeights, jitter: Arc<dyn JitterSource>) -> Self {
        Self { weights, jitter }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), Arc::new(ThreadRngJitter))
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank candidates by how well their skills complement the requester's
    ///
    /// # Arguments
    /// * `requester_skills` - Skills the requester already has; must not be empty
    /// * `candidates` - The roster to evaluate
    ///
    /// # Returns
    /// One result per candidate with at least one skill, sorted by descending
    /// score. Any scoring failure fails the whole call.
    pub fn recommend(
        &self,
        requester_skills: &[String],
        candidates: &[Candidate],
    ) -> Result<Vec<MatchResult>, RecommendError> {
        if requester_skills.is_empty() {
            return Err(RecommendError::InvalidInput(
                "requester skills are required".to_string(),
            ));
        }

        let mut results = candidates
            .iter()
            .filter(|candidate| !candidate.skills.is_empty())
            .map(|candidate| self.score_candidate(requester_skills, candidate))
            .collect::<Result<Vec<_>, _>>()?;

        // Stable sort keeps roster order for equal scores
        results.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(
            "Scored {} of {} candidates against {} requester skills",
            results.len(),
            candidates.len(),
            requester_skills.len()
        );

        Ok(results)
    }

    fn score_candidate(
        &self,
        requester_skills: &[String],
        candidate: &Candidate,
    ) -> Result<MatchResult, RecommendError> {
        let (matching_skills, complementary_full): (Vec<String>, Vec<String>) = candidate
            .skills
            .iter()
            .cloned()
            .partition(|skill| matches_any(skill, requester_skills));

        let counts = SkillCounts {
            complementary: complementary_full.len(),
            matching: matching_skills.len(),
            total: candidate.skills.len(),
        };

        let match_score = calculate_match_score(counts, &self.weights, self.jitter.unit())
            .ok_or_else(|| {
                RecommendError::GenerationFailure(format!(
                    "non-finite score for candidate {}",
                    candidate.id
                ))
            })?;

        tracing::trace!(
            "Candidate {}: {} matching, {} complementary, score {}",
            candidate.id,
            counts.matching,
            counts.complementary,
            match_score
        );

        let mut complementary_skills = complementary_full;
        complementary_skills.truncate(COMPLEMENTARY_LIMIT);

        Ok(MatchResult {
            candidate_id: candidate.id.clone(),
            candidate_name: candidate.name.clone(),
            match_score,
            matching_skills,
            complementary_skills,
        })
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::jitter::{FixedJitter, SeededJitter};

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn fixed_recommender() -> Recommender {
        Recommender::new(ScoringWeights::default(), Arc::new(FixedJitter::none()))
    }

    #[test]
    fn test_recommend_basic() {
        let recommender = fixed_recommender();
        let requester = skills(&["React Development", "JavaScript"]);
        let candidates = vec![Candidate::new("1", "Sarah", &["Node.js", "React", "Python"])];

        let results = recommender.recommend(&requester, &candidates).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].candidate_id, "1");
        assert_eq!(results[0].matching_skills, vec!["React"]);
        assert_eq!(results[0].complementary_skills, vec!["Node.js", "Python"]);
        assert_eq!(results[0].match_score, 1.4);
    }

    #[test]
    fn test_empty_requester_skills_rejected() {
        let recommender = fixed_recommender();
        let candidates = vec![Candidate::new("1", "Sarah", &["Python"])];

        let err = recommender.recommend(&[], &candidates).unwrap_err();
        assert!(matches!(err, RecommendError::InvalidInput(_)));

        let err = recommender.recommend(&[], &[]).unwrap_err();
        assert!(matches!(err, RecommendError::InvalidInput(_)));
    }

    #[test]
    fn test_candidates_without_skills_filtered() {
        let recommender = fixed_recommender();
        let candidates = vec![
            Candidate::new("1", "Empty", &[]),
            Candidate::new("2", "Busy", &["Docker"]),
        ];

        let results = recommender.recommend(&skills(&["Rust"]), &candidates).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].candidate_id, "2");
    }

    #[test]
    fn test_empty_roster_yields_empty_result() {
        let recommender = fixed_recommender();
        let results = recommender.recommend(&skills(&["Rust"]), &[]).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_complementary_truncated_but_counted() {
        let recommender = fixed_recommender();
        let candidates = vec![
            Candidate::new("wide", "Wide", &["A1", "B2", "C3", "D4", "E5"]),
            Candidate::new("narrow", "Narrow", &["A1", "B2", "C3"]),
        ];

        let results = recommender.recommend(&skills(&["Zig"]), &candidates).unwrap();

        assert_eq!(results[0].candidate_id, "wide");
        assert_eq!(results[0].complementary_skills, vec!["A1", "B2", "C3"]);
        // (5*0.6 + 5*0.1) * 0.8 = 2.8 vs (3*0.6 + 3*0.1) * 0.8 = 1.68
        assert_eq!(results[0].match_score, 2.8);
        assert_eq!(results[1].match_score, 1.7);
    }

    #[test]
    fn test_sorted_descending_and_stable() {
        let recommender = fixed_recommender();
        let candidates = vec![
            Candidate::new("1", "One", &["Go"]),
            Candidate::new("2", "Two", &["Python", "Docker", "AWS"]),
            Candidate::new("3", "Three", &["Go"]),
        ];

        let results = recommender.recommend(&skills(&["Rust"]), &candidates).unwrap();

        let ids: Vec<&str> = results.iter().map(|r| r.candidate_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }

    #[test]
    fn test_non_finite_weights_fail_whole_call() {
        let weights = ScoringWeights { complementary: f64::NAN, matching: 0.3, diversity: 0.1 };
        let recommender = Recommender::new(weights, Arc::new(FixedJitter::none()));
        let candidates = vec![Candidate::new("1", "Sarah", &["Python"])];

        let err = recommender.recommend(&skills(&["Rust"]), &candidates).unwrap_err();
        assert!(matches!(err, RecommendError::GenerationFailure(_)));
    }

    #[test]
    fn test_seeded_jitter_is_reproducible() {
        let candidates = vec![
            Candidate::new("1", "One", &["Python", "Go"]),
            Candidate::new("2", "Two", &["Docker", "AWS", "Figma"]),
        ];
        let requester = skills(&["Rust"]);

        let a = Recommender::new(ScoringWeights::default(), Arc::new(SeededJitter::new(7)));
        let b = Recommender::new(ScoringWeights::default(), Arc::new(SeededJitter::new(7)));

        assert_eq!(
            a.recommend(&requester, &candidates).unwrap(),
            b.recommend(&requester, &candidates).unwrap()
        );
    }
}
