use crate::core::normalize::normalize;
use crate::models::Category;

/// Keyword table in declaration order. The first category with a keyword
/// contained in the skill name wins.
static CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Frontend,
        &["react", "vue", "angular", "javascript", "typescript", "html", "css", "tailwind"],
    ),
    (
        Category::Backend,
        &["nodejs", "node.js", "python", "java", "php", "ruby", "go", "rust", "c#"],
    ),
    (
        Category::Mobile,
        &["react native", "flutter", "ios", "android", "swift", "kotlin"],
    ),
    (
        Category::Design,
        &["ui", "ux", "design", "figma", "photoshop", "illustrator"],
    ),
    (
        Category::DataScience,
        &["data science", "machine learning", "ai", "tensorflow", "pytorch", "pandas"],
    ),
    (
        Category::DevOps,
        &["devops", "docker", "kubernetes", "aws", "azure", "terraform"],
    ),
    (
        Category::Marketing,
        &["marketing", "seo", "social media", "content", "advertising"],
    ),
];

/// Map a free-text skill name to a category
///
/// Returns [`Category::Other`] when no keyword matches.
pub fn categorize(skill_name: &str) -> Category {
    let normalized = normalize(skill_name);

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| normalized.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}
