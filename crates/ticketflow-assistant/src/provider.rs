//! Suggestion generation behind a trait so a real backend can replace
//! the fixed tables without touching the dialogue flow.

/// One method per suggestion-emitting dialogue step.
pub trait SuggestionProvider: Send + Sync {
    /// Ticket title candidates for the stated purpose
    fn titles(&self, purpose: &str) -> Vec<String>;

    /// Category candidates for the chosen title
    fn categories(&self, title: &str) -> Vec<String>;

    /// Rewritten description candidates for the user's rough description
    fn descriptions(&self, description: &str) -> Vec<String>;

    /// Summary candidates for the chosen description
    fn summaries(&self, description: &str) -> Vec<String>;
}

pub const TITLE_SUGGESTIONS: [&str; 4] = [
    "Bug Fix Request",
    "Feature Enhancement",
    "Performance Issue",
    "User Experience Improvement",
];

pub const CATEGORY_SUGGESTIONS: [&str; 4] = ["Frontend", "Backend", "Database", "Infrastructure"];

pub const DESCRIPTION_SUGGESTIONS: [&str; 4] = [
    "Fix login authentication issue affecting users in the mobile app during peak hours",
    "Resolve database connection timeout that occurs when processing large datasets",
    "Update user interface to improve accessibility for users with visual impairments",
    "Optimize API response time for search functionality in the web application",
];

pub const SUMMARY_SUGGESTIONS: [&str; 4] = [
    "This ticket addresses a critical authentication issue in the mobile app that affects user experience during peak usage hours.",
    "The ticket focuses on resolving database performance issues that impact system reliability when handling large data volumes.",
    "This enhancement improves accessibility compliance and user experience for users with visual impairments.",
    "The optimization targets API performance to enhance search functionality and overall application responsiveness.",
];

/// Fixed suggestion tables. The input text is ignored on purpose: this
/// stands in for a future generation backend, and the dialogue flow must
/// not depend on what the provider does with the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSuggestions;

impl SuggestionProvider for StaticSuggestions {
    fn titles(&self, _purpose: &str) -> Vec<String> {
        TITLE_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
    }

    fn categories(&self, _title: &str) -> Vec<String> {
        CATEGORY_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
    }

    fn descriptions(&self, _description: &str) -> Vec<String> {
        DESCRIPTION_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
    }

    fn summaries(&self, _description: &str) -> Vec<String> {
        SUMMARY_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
    }
}
