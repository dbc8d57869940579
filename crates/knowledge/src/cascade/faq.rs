//! FAQ matching by containment plus token overlap.

use crate::types::FaqEntry;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("token regex is valid"));

/// Minimum overlap score; a match must score strictly above it.
pub const MATCH_THRESHOLD: f64 = 0.5;

fn tokens(text: &str) -> HashSet<&str> {
    TOKEN_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Shared tokens over the larger token count. Zero when both are empty.
pub fn overlap_score(input: &str, question: &str) -> f64 {
    let input_tokens = tokens(input);
    let question_tokens = tokens(question);

    let denominator = input_tokens.len().max(question_tokens.len());
    if denominator == 0 {
        return 0.0;
    }

    let common = input_tokens.intersection(&question_tokens).count();
    common as f64 / denominator as f64
}

/// Matches user input against pre-authored FAQ questions.
#[derive(Debug, Clone)]
pub struct FaqMatcher {
    /// Lowercased question, answer
    entries: Vec<(String, String)>,
}

impl FaqMatcher {
    pub fn new(faq: &[FaqEntry]) -> Self {
        Self {
            entries: faq
                .iter()
                .map(|e| (e.question.to_lowercase(), e.answer.clone()))
                .collect(),
        }
    }

    /// Answer of the best-scoring FAQ whose question contains the input or is
    /// contained in it.
    ///
    /// Earlier entries win ties.
    pub fn find(&self, input: &str) -> Option<&str> {
        let input = input.to_lowercase();

        let mut best: Option<(usize, f64)> = None;

        for (idx, (question, _)) in self.entries.iter().enumerate() {
            if !(question.contains(input.as_str()) || input.contains(question.as_str())) {
                continue;
            }

            let score = overlap_score(&input, question);
            let best_score = best.map(|(_, s)| s).unwrap_or(0.0);

            if score > best_score && score > MATCH_THRESHOLD {
                best = Some((idx, score));
            }
        }

        best.map(|(idx, score)| {
            tracing::trace!("FAQ #{} matched with score {:.2}", idx, score);
            self.entries[idx].1.as_str()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(pairs: &[(&str, &str)]) -> FaqMatcher {
        let entries: Vec<FaqEntry> = pairs
            .iter()
            .map(|(q, a)| FaqEntry {
                question: q.to_string(),
                answer: a.to_string(),
            })
            .collect();
        FaqMatcher::new(&entries)
    }

    #[test]
    fn test_exact_question_matches() {
        let matcher = faq(&[
            ("What services does SM Technology offer?", "services answer"),
            ("Who is the CEO of bdCalling IT?", "ceo answer"),
        ]);

        assert_eq!(matcher.find("Who is the CEO of bdCalling IT?"), Some("ceo answer"));
        assert_eq!(matcher.find("WHO IS THE CEO OF BDCALLING IT?"), Some("ceo answer"));
    }

    #[test]
    fn test_input_contained_in_question_needs_overlap() {
        let matcher = faq(&[("Who is the CEO of bdCalling IT?", "ceo answer")]);

        // 4 of 7 question tokens
        assert_eq!(matcher.find("the ceo of bdcalling"), Some("ceo answer"));
        // 2 of 7
        assert_eq!(matcher.find("the ceo"), None);
    }

    #[test]
    fn test_question_contained_in_input() {
        let matcher = faq(&[("do you build ai solutions", "ai answer")]);

        assert_eq!(matcher.find("so, do you build ai solutions?"), Some("ai answer"));
        // 5 shared tokens over 12 input tokens
        assert_eq!(
            matcher.find("tell me please: do you build ai solutions for banks and shops"),
            None
        );
    }

    #[test]
    fn test_no_containment_no_match() {
        let matcher = faq(&[("Who is the CEO of bdCalling IT?", "ceo answer")]);

        // Same words, different order
        assert_eq!(matcher.find("bdcalling it ceo is who"), None);
    }

    #[test]
    fn test_first_of_equal_scores_wins() {
        let matcher = faq(&[
            ("pricing for apps", "first"),
            ("pricing for apps", "second"),
        ]);

        assert_eq!(matcher.find("pricing for apps"), Some("first"));
    }

    #[test]
    fn test_higher_score_later_wins() {
        let matcher = faq(&[
            ("what is the price for website development", "broad"),
            ("website development", "narrow"),
        ]);

        // 2/7 against the first entry; 2/2 against the second
        assert_eq!(matcher.find("website development"), Some("narrow"));
    }

    #[test]
    fn test_empty_input_never_matches() {
        let matcher = faq(&[("Who is the CEO of bdCalling IT?", "ceo answer")]);
        assert_eq!(matcher.find(""), None);
        assert_eq!(matcher.find("   "), None);
    }

    #[test]
    fn test_overlap_score() {
        assert_eq!(overlap_score("who is the ceo", "who is the ceo"), 1.0);
        assert_eq!(overlap_score("", ""), 0.0);
        assert_eq!(overlap_score("a b", "a b c d"), 0.5);
    }
}
