/// Normalize a skill label for comparison: trim surrounding whitespace and
/// lowercase.
#[inline]
pub fn normalize(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Check whether two skill labels name the same skill
///
/// Two skills match when, after normalization, either one contains the
/// other. "React" therefore matches "React Development", and a blank label
/// matches everything.
#[inline]
pub fn skills_match(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);
    a.contains(&b) || b.contains(&a)
}

/// Check whether `skill` matches any entry of `skill_set`
#[inline]
pub fn matches_any(skill: &str, skill_set: &[String]) -> bool {
    skill_set.iter().any(|other| skills_match(skill, other))
}
