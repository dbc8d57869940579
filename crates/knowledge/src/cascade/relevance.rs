//! Rejection of off-domain and personal questions before generation.

use crate::refusals::{DOMAIN_REFUSAL, PERSONA_MESSAGE};
use regex::RegexSet;
use std::sync::LazyLock;

/// Topics the assistant never answers.
pub const BLOCKED_TOPICS: &[&str] = &[
    "weather",
    "stock",
    "sport",
    "game",
    "movie",
    "music",
    "food",
    "restaurant",
    "hotel",
    "flight",
    "train",
    "bus",
    "car",
    "bike",
    "book",
    "novel",
    "news",
    "politics",
    "election",
    "president",
    "prime minister",
    "police",
    "crime",
    "accident",
    "health",
    "doctor",
    "hospital",
    "medicine",
    "covid",
    "virus",
    "vaccine",
    "investment",
    "bitcoin",
    "crypto",
    "blockchain",
];

static PERSONAL_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(how are|how're|how do) you",
        r"what('s| is) your name",
        r"who are you",
        r"tell me about yourself",
        r"where are you",
        r"how old are you",
        r"what do you (like|love|enjoy|prefer)",
        r"your (favorite|favourite)",
    ])
    .expect("personal question patterns are valid")
});

/// Blocklist and self-referential question filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelevanceGuard;

impl RelevanceGuard {
    pub fn new() -> Self {
        Self
    }

    /// Fixed refusal when the input is off-domain or about the assistant.
    pub fn check_irrelevant(&self, input: &str) -> Option<&'static str> {
        let input = input.to_lowercase();

        if let Some(topic) = BLOCKED_TOPICS.iter().find(|t| input.contains(*t)) {
            tracing::debug!("Blocked topic '{}'", topic);
            return Some(DOMAIN_REFUSAL);
        }

        if PERSONAL_PATTERNS.is_match(&input) {
            return Some(PERSONA_MESSAGE);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_topics() {
        let guard = RelevanceGuard::new();

        assert_eq!(guard.check_irrelevant("What's the WEATHER like?"), Some(DOMAIN_REFUSAL));
        assert_eq!(guard.check_irrelevant("bitcoin forecast"), Some(DOMAIN_REFUSAL));
        assert_eq!(guard.check_irrelevant("who will be prime minister"), Some(DOMAIN_REFUSAL));
    }

    #[test]
    fn test_blocklist_is_substring_based() {
        let guard = RelevanceGuard::new();

        // "car" inside "career"
        assert_eq!(guard.check_irrelevant("career opportunities"), Some(DOMAIN_REFUSAL));
    }

    #[test]
    fn test_blocklist_checked_before_personal() {
        let guard = RelevanceGuard::new();

        assert_eq!(
            guard.check_irrelevant("what is your favorite movie"),
            Some(DOMAIN_REFUSAL)
        );
    }

    #[test]
    fn test_personal_questions() {
        let guard = RelevanceGuard::new();

        for question in [
            "How are you?",
            "how're you doing",
            "What's your name",
            "who are you",
            "Tell me about yourself",
            "how old are you",
            "what do you enjoy",
            "your favourite colour?",
        ] {
            assert_eq!(
                guard.check_irrelevant(question),
                Some(PERSONA_MESSAGE),
                "{}",
                question
            );
        }
    }

    #[test]
    fn test_relevant_passes() {
        let guard = RelevanceGuard::new();

        assert_eq!(guard.check_irrelevant("Where is your office located?"), None);
        assert_eq!(guard.check_irrelevant("Do you offer graphic design?"), None);
        assert_eq!(guard.check_irrelevant(""), None);
    }
}
