use crate::models::SkillLevel;

const BEGINNER_MARKERS: &[&str] = &["learning", "basic", "foundational", "beginning", "getting started"];
const ADVANCED_MARKERS: &[&str] = &["expert", "advanced", "proficient", "extensive", "comprehensive", "scalable"];

/// Descriptions shorter than this are treated as beginner
const BEGINNER_MAX_WORDS: usize = 30;
/// Descriptions longer than this are treated as advanced
const ADVANCED_MIN_WORDS: usize = 80;

/// Estimate a proficiency level from a free-text description
///
/// Beginner checks run first, so a description carrying both beginner and
/// advanced markers is classified as beginner.
pub fn suggest_level(description: &str) -> SkillLevel {
    let word_count = description.split_whitespace().count();
    let lowered = description.to_lowercase();

    let has_marker = |markers: &[&str]| markers.iter().any(|m| lowered.contains(m));

    if has_marker(BEGINNER_MARKERS) || word_count < BEGINNER_MAX_WORDS {
        SkillLevel::Beginner
    } else if has_marker(ADVANCED_MARKERS) || word_count > ADVANCED_MIN_WORDS {
        SkillLevel::Advanced
    } else {
        SkillLevel::Intermediate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_short_description_is_beginner() {
        assert_eq!(suggest_level(&words(10)), SkillLevel::Beginner);
        assert_eq!(suggest_level(""), SkillLevel::Beginner);
    }

    #[test]
    fn test_mid_length_without_markers_is_intermediate() {
        assert_eq!(suggest_level(&words(30)), SkillLevel::Intermediate);
        assert_eq!(suggest_level(&words(80)), SkillLevel::Intermediate);
    }

    #[test]
    fn test_long_description_is_advanced() {
        assert_eq!(suggest_level(&words(81)), SkillLevel::Advanced);
    }

    #[test]
    fn test_advanced_marker() {
        let text = format!("{} comprehensive", words(89));
        assert_eq!(suggest_level(&text), SkillLevel::Advanced);

        let text = format!("{} Proficient", words(40));
        assert_eq!(suggest_level(&text), SkillLevel::Advanced);
    }

    #[test]
    fn test_beginner_marker_wins() {
        let text = format!("Expert but still learning {}", words(90));
        assert_eq!(suggest_level(&text), SkillLevel::Beginner);

        let text = format!("Getting Started with {}", words(50));
        assert_eq!(suggest_level(&text), SkillLevel::Beginner);
    }

    #[test]
    fn test_whitespace_runs_count_once() {
        let text = words(35).replace(' ', "  \n ");
        assert_eq!(suggest_level(&text), SkillLevel::Intermediate);
    }
}
