//! Coarse intent classification for incoming questions.
//!
//! The classifier is deliberately deterministic: a question is either about
//! cost or it is not, decided by substring matching over the lower-cased
//! text. There is no confidence score and no model in the loop.

use std::fmt;

/// The coarse classification of a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// The question relates to cost or price.
    Cost,
    /// Anything else.
    Other,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cost => "cost",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a question as cost-related or not.
    ///
    /// Pure and total: every input produces an intent, never an error.
    pub fn classify(&self, text: &str) -> Intent {
        let normalized = normalize_text(text);
        if normalized.contains("cost") || normalized.contains("price") {
            Intent::Cost
        } else {
            Intent::Other
        }
    }
}

fn normalize_text(text: &str) -> String {
    text.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{Intent, IntentClassifier};

    #[test]
    fn cost_keyword_classifies_as_cost() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("What is the cost of X?"), Intent::Cost);
    }

    #[test]
    fn price_keyword_classifies_as_cost() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("What is the price of 100?"), Intent::Cost);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("PRICE CHECK on part 7"), Intent::Cost);
        assert_eq!(classifier.classify("How much does this Cost?"), Intent::Cost);
    }

    #[test]
    fn keyword_matches_as_substring() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("is this a costly mistake"), Intent::Cost);
    }

    #[test]
    fn unrelated_question_classifies_as_other() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("hello"), Intent::Other);
        assert_eq!(classifier.classify("tell me a joke"), Intent::Other);
    }

    #[test]
    fn empty_text_classifies_as_other() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify(""), Intent::Other);
    }

    #[test]
    fn intent_labels_are_stable() {
        assert_eq!(Intent::Cost.as_str(), "cost");
        assert_eq!(Intent::Other.as_str(), "other");
        assert_eq!(Intent::Cost.to_string(), "cost");
    }
}
