use crate::models::ScoringWeights;

/// Upper bound of a published match score
pub const MAX_MATCH_SCORE: f64 = 10.0;

/// Skill counts for one candidate, taken before any truncation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCounts {
    pub complementary: usize,
    pub matching: usize,
    pub total: usize,
}

/// Calculate a match score (0-10) from skill counts
///
/// Scoring formula:
/// score = (
///     complementary * 0.6 +      # Skills the requester can learn
///     matching * 0.3 +           # Common ground
///     total * 0.1                # Overall skill diversity
/// ) * (0.8 + jitter * 0.2)
///
/// `jitter` is a unit draw in `[0, 1)`. The result is clamped to
/// `[0, MAX_MATCH_SCORE]` and rounded to one decimal place. Non-finite
/// inputs produce `None`.
pub fn calculate_match_score(counts: SkillCounts, weights: &ScoringWeights, jitter: f64) -> Option<f64> {
    let raw = raw_score(counts, weights);
    let jittered = raw * jitter_multiplier(jitter);

    if !jittered.is_finite() {
        return None;
    }

    Some(round_one_decimal(jittered.clamp(0.0, MAX_MATCH_SCORE)))
}

/// Weighted sum before jitter
#[inline]
pub fn raw_score(counts: SkillCounts, weights: &ScoringWeights) -> f64 {
    counts.complementary as f64 * weights.complementary
        + counts.matching as f64 * weights.matching
        + counts.total as f64 * weights.diversity
}

/// Multiplier in `[0.8, 1.0)` for a unit draw
#[inline]
fn jitter_multiplier(jitter: f64) -> f64 {
    0.8 + jitter * 0.2
}

#[inline]
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
