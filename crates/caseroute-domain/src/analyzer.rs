//! Case analysis facade
//!
//! Runs a case through scoring, classification, priority inference and
//! routing, and assembles the [`CaseAnalysis`] record. The analyzer owns the
//! lexicon and routing table; both are fixed once it is constructed, so one
//! instance can be shared across threads behind an `Arc` without locking.

use crate::classifier::{classify, ClassificationResult};
use crate::priority::infer_priority;
use crate::routing::RoutingTable;
use crate::scorer::{case_text, score_all};
use crate::{CaseAnalysis, CaseId, CaseInput, Category, ConfigurationError, Lexicon};
use tracing::debug;

/// Static description of the classification model
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo {
    /// Model family label
    pub model_type: &'static str,

    /// How case text is matched against the lexicon
    pub matching_strategy: &'static str,

    /// Number of categories
    pub category_count: usize,

    /// Category names in ordinal order
    pub categories: Vec<&'static str>,

    /// Queue names in category order
    pub queues: Vec<String>,

    /// Date the rule set was last revised
    pub last_updated: &'static str,

    /// Estimated accuracy
    pub accuracy: &'static str,
}

/// Scores, classifies and routes support cases
#[derive(Debug, Clone)]
pub struct CaseAnalyzer {
    lexicon: Lexicon,
    routes: RoutingTable,
}

impl CaseAnalyzer {
    /// Create an analyzer from a lexicon and routing table
    ///
    /// Re-checks both tables, so the built-in ones are validated too when
    /// they are passed in here.
    pub fn new(lexicon: Lexicon, routes: RoutingTable) -> Result<Self, ConfigurationError> {
        lexicon.validate()?;
        routes.validate()?;
        Ok(Self { lexicon, routes })
    }

    /// Create an analyzer with the built-in lexicon and routing table
    ///
    /// Skips validation; the server builds through [`CaseAnalyzer::new`].
    pub fn builtin() -> Self {
        Self {
            lexicon: Lexicon::builtin(),
            routes: RoutingTable::builtin(),
        }
    }

    /// The lexicon in use
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The routing table in use
    pub fn routes(&self) -> &RoutingTable {
        &self.routes
    }

    /// Classify case text without routing it
    pub fn classify(&self, subject: &str, description: &str) -> ClassificationResult {
        let text = case_text(subject, description);
        classify(&score_all(&text, &self.lexicon))
    }

    /// Analyze one case
    ///
    /// Never fails. Blank input takes the classifier's fallback path; callers
    /// that want to reject it must do so before calling.
    pub fn analyze(&self, input: &CaseInput) -> CaseAnalysis {
        let text = case_text(&input.subject, &input.description);
        let scores = score_all(&text, &self.lexicon);
        let classification = classify(&scores);

        let requested = input.declared_priority.or_else(|| infer_priority(&text));
        let decision = self.routes.route(
            classification.category,
            requested,
            input.customer_type,
        );

        let analysis = CaseAnalysis {
            case_id: CaseId::new(),
            predicted_category: classification.category,
            confidence_score: round2(classification.confidence),
            recommended_queue: decision.queue,
            priority_level: decision.priority_level,
            estimated_resolution_time: decision.estimated_resolution,
            suggested_actions: decision.suggested_actions,
        };

        debug!(
            case_id = %analysis.case_id,
            category = %analysis.predicted_category,
            confidence = analysis.confidence_score,
            fallback = classification.fallback,
            queue = %analysis.recommended_queue,
            priority = %analysis.priority_level,
            "Analyzed case"
        );

        analysis
    }

    /// `(category, queue)` pairs in ordinal order
    pub fn queue_mapping(&self) -> Vec<(Category, String)> {
        self.routes
            .queues()
            .map(|(category, queue)| (category, queue.to_string()))
            .collect()
    }

    /// Static model metadata
    pub fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model_type: "Rule-based Classifier",
            matching_strategy: "Weighted keyword matching",
            category_count: Category::COUNT,
            categories: Category::ALL.iter().map(Category::as_str).collect(),
            queues: self.routes.queues().map(|(_, q)| q.to_string()).collect(),
            last_updated: "2024-08-27",
            accuracy: "85% (estimated)",
        }
    }
}

impl Default for CaseAnalyzer {
    fn default() -> Self {
        Self::builtin()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
