//! Scorer module - per-category keyword match scores

use crate::lexicon::{KeywordSignal, MatchMode};
use crate::{Category, Lexicon};

/// Lower-case text and collapse whitespace runs to single spaces
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Join subject and description into normalized case text
pub fn case_text(subject: &str, description: &str) -> String {
    normalize(&format!("{} {}", subject, description))
}

/// Count non-overlapping occurrences of a signal in normalized text
pub fn count_occurrences(text: &str, signal: &KeywordSignal) -> usize {
    if signal.phrase.is_empty() {
        return 0;
    }

    match signal.mode {
        MatchMode::Substring => text.matches(signal.phrase.as_str()).count(),
        MatchMode::WholeWord => text
            .match_indices(signal.phrase.as_str())
            .filter(|(start, matched)| is_word_bounded(text, *start, start + matched.len()))
            .count(),
    }
}

fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// Score normalized text against one category
///
/// Sums `weight x occurrences` over the category's signals. Zero when
/// nothing matches.
pub fn score(text: &str, lexicon: &Lexicon, category: Category) -> f64 {
    lexicon
        .signals(category)
        .iter()
        .map(|signal| signal.weight * count_occurrences(text, signal) as f64)
        .sum()
}

/// Per-category scores for one case
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreVector {
    scores: [f64; Category::COUNT],
}

impl ScoreVector {
    /// Build a vector from explicit scores
    ///
    /// Negative or non-finite inputs are clamped to zero so every score stays
    /// non-negative.
    pub fn from_scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = (Category, f64)>,
    {
        let mut vector = Self::default();
        for (category, value) in scores {
            vector.scores[category.index()] = if value.is_finite() { value.max(0.0) } else { 0.0 };
        }
        vector
    }

    /// Score for a category
    pub fn get(&self, category: Category) -> f64 {
        self.scores[category.index()]
    }

    /// Sum of all scores
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Iterate `(category, score)` in ordinal order
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.iter().map(|&c| (c, self.get(c)))
    }
}

/// Score normalized text against every category
pub fn score_all(text: &str, lexicon: &Lexicon) -> ScoreVector {
    ScoreVector::from_scores(Category::ALL.iter().map(|&c| (c, score(text, lexicon, c))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  Tax\t\nWithholding   ISSUE "), "tax withholding issue");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_case_text_joins_fields() {
        assert_eq!(case_text("ACH", "Failed"), "ach failed");
        assert_eq!(case_text("", ""), "");
        assert_eq!(case_text("Login", ""), "login");
    }

    #[test]
    fn test_substring_counts_every_occurrence() {
        let signal = KeywordSignal::new("bill", 1.0);
        assert_eq!(count_occurrences("bill billing rebill", &signal), 3);
    }

    #[test]
    fn test_whole_word_ignores_embedded_matches() {
        let signal = KeywordSignal::whole_word("app", 1.0);
        assert_eq!(count_occurrences("charges appearing on account", &signal), 0);
        assert_eq!(count_occurrences("the app crashed, app!", &signal), 2);
        assert_eq!(count_occurrences("app", &signal), 1);

        let ach = KeywordSignal::whole_word("ach", 1.0);
        assert_eq!(count_occurrences("each reach attached", &ach), 0);
        assert_eq!(count_occurrences("ach/wire", &ach), 1);
    }

    #[test]
    fn test_score_weights_occurrences() {
        let lexicon = Lexicon::builtin();
        let text = case_text(
            "Payroll tax withholding issue",
            "Employee W2 shows incorrect federal tax withholding amount",
        );
        // payroll (1.0) + 2 x tax withholding (1.5) + w2 (1.0)
        assert!((score(&text, &lexicon, Category::Payroll) - 5.0).abs() < 1e-9);
        assert_eq!(score(&text, &lexicon, Category::Fraud), 0.0);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let lexicon = Lexicon::builtin();
        let scores = score_all("", &lexicon);
        assert_eq!(scores.total(), 0.0);
        for (_, value) in scores.iter() {
            assert_eq!(value, 0.0);
        }
    }

    #[test]
    fn test_from_scores_clamps_negatives() {
        let scores = ScoreVector::from_scores(vec![
            (Category::Billing, -3.0),
            (Category::Fraud, f64::NAN),
            (Category::Banking, 2.0),
        ]);
        assert_eq!(scores.get(Category::Billing), 0.0);
        assert_eq!(scores.get(Category::Fraud), 0.0);
        assert_eq!(scores.total(), 2.0);
    }
}
