//! Keyword-driven category inference for the preview pane.

/// Priority-ordered rules: the first set whose keywords appear in the
/// title wins. The vocabularies overlap ("login" lives in the security
/// rule, but "fix login bug" resolves to the bug rule because it is
/// checked first), so the order is part of the contract.
const CATEGORY_RULES: &[(&[&str], [&str; 5])] = &[
    (
        &["bug", "fix", "error"],
        ["Critical", "High Priority", "Bug Fix", "Error Resolution", "Debugging"],
    ),
    (
        &["feature", "enhancement", "improvement"],
        ["Feature Request", "Enhancement", "User Experience", "Functionality", "Innovation"],
    ),
    (
        &["performance", "speed", "optimization"],
        ["Performance", "Optimization", "Speed", "Efficiency", "Scalability"],
    ),
    (
        &["ui", "interface", "design"],
        ["UI/UX", "Design", "Interface", "User Experience", "Visual"],
    ),
    (
        &["api", "backend", "server"],
        ["Backend", "API", "Server", "Database", "Infrastructure"],
    ),
    (
        &["mobile", "app", "ios", "android"],
        ["Mobile", "App Development", "iOS", "Android", "Cross-platform"],
    ),
    (
        &["security", "auth", "login"],
        ["Security", "Authentication", "Authorization", "Privacy", "Encryption"],
    ),
];

const DEFAULT_CATEGORIES: [&str; 5] =
    ["General", "Support", "Maintenance", "Documentation", "Testing"];

/// Map a draft title to five related category labels. Pure and
/// deterministic; unknown or empty titles get the general set.
pub fn related_categories(title: &str) -> [&'static str; 5] {
    let title = title.to_lowercase();
    for (keywords, labels) in CATEGORY_RULES {
        if keywords.iter().any(|keyword| title.contains(keyword)) {
            return *labels;
        }
    }
    DEFAULT_CATEGORIES
}
