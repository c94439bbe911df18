//! Classifier module - winner selection and confidence
//!
//! Picks the highest-scoring category from a [`ScoreVector`]. Ties resolve to
//! the category with the lowest ordinal rank. Confidence is the winner's share
//! of the total score. When nothing matched at all, the classifier returns the
//! explicit fallback pair below instead of whatever category happens to come
//! first.

use crate::scorer::ScoreVector;
use crate::Category;

/// Category used when no signal matches
pub const FALLBACK_CATEGORY: Category = Category::Technical;

/// Confidence reported when no signal matches
pub const FALLBACK_CONFIDENCE: f64 = 0.1;

/// Winning category and its confidence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationResult {
    /// Selected category
    pub category: Category,

    /// Confidence in [0.0, 1.0]
    pub confidence: f64,

    /// Whether the fallback path was taken
    pub fallback: bool,
}

impl ClassificationResult {
    fn fallback() -> Self {
        Self {
            category: FALLBACK_CATEGORY,
            confidence: FALLBACK_CONFIDENCE,
            fallback: true,
        }
    }
}

/// Select the winning category from a score vector
pub fn classify(scores: &ScoreVector) -> ClassificationResult {
    let total = scores.total();
    if total <= 0.0 {
        return ClassificationResult::fallback();
    }

    // Strict comparison keeps the earlier (lower-ordinal) category on ties.
    let (category, best) = scores
        .iter()
        .fold((Category::ALL[0], f64::MIN), |(best_cat, best), (cat, value)| {
            if value > best {
                (cat, value)
            } else {
                (best_cat, best)
            }
        });

    ClassificationResult {
        category,
        confidence: (best / total).clamp(0.0, 1.0),
        fallback: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_category_has_full_confidence() {
        let scores = ScoreVector::from_scores(vec![(Category::Fraud, 3.0)]);
        let result = classify(&scores);
        assert_eq!(result.category, Category::Fraud);
        assert_eq!(result.confidence, 1.0);
        assert!(!result.fallback);
    }

    #[test]
    fn test_confidence_is_share_of_total() {
        let scores = ScoreVector::from_scores(vec![
            (Category::Fraud, 3.0),
            (Category::Banking, 1.0),
        ]);
        let result = classify(&scores);
        assert_eq!(result.category, Category::Fraud);
        assert!((result.confidence - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_tie_goes_to_lowest_ordinal() {
        let scores = ScoreVector::from_scores(vec![
            (Category::Compliance, 2.0),
            (Category::Billing, 2.0),
            (Category::Banking, 2.0),
        ]);
        let result = classify(&scores);
        assert_eq!(result.category, Category::Banking);
        assert!((result.confidence - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_zero_uses_fallback_constants() {
        let result = classify(&ScoreVector::default());
        assert_eq!(result.category, FALLBACK_CATEGORY);
        assert_eq!(result.confidence, FALLBACK_CONFIDENCE);
        assert!(result.fallback);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn score_vector() -> impl Strategy<Value = ScoreVector> {
        proptest::collection::vec(0.0f64..100.0, Category::COUNT).prop_map(|values| {
            ScoreVector::from_scores(Category::ALL.iter().copied().zip(values))
        })
    }

    proptest! {
        /// Property: Confidence is always in [0, 1]
        #[test]
        fn test_confidence_range(scores in score_vector()) {
            let result = classify(&scores);
            prop_assert!(result.confidence >= 0.0 && result.confidence <= 1.0);
        }

        /// Property: The winner has the maximum score
        #[test]
        fn test_winner_has_max_score(scores in score_vector()) {
            let result = classify(&scores);
            if !result.fallback {
                let winner = scores.get(result.category);
                for (_, value) in scores.iter() {
                    prop_assert!(winner >= value);
                }
            }
        }

        /// Property: Raising the winner's score never lowers confidence
        #[test]
        fn test_confidence_monotonic_in_winner(
            scores in score_vector(),
            boost in 0.0f64..50.0,
        ) {
            let before = classify(&scores);
            prop_assume!(!before.fallback);

            let boosted = ScoreVector::from_scores(scores.iter().map(|(c, v)| {
                if c == before.category { (c, v + boost) } else { (c, v) }
            }));
            let after = classify(&boosted);

            prop_assert_eq!(after.category, before.category);
            prop_assert!(after.confidence >= before.confidence - 1e-12);
        }
    }
}
