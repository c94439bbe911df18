//! Wire types returned by the HTTP endpoints
//!
//! Conversions from domain types keep serialization concerns out of the
//! domain crate.

use caseroute_domain::{CaseAnalysis, CaseAnalyzer, ModelInfo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat analysis record returned by `POST /analyze-case`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseAnalysisResponse {
    /// Unique case identifier (`CASE-<uuid>`)
    pub case_id: String,
    /// One of the six category names
    pub predicted_category: String,
    /// Confidence in [0, 1]
    pub confidence_score: f64,
    /// Destination support team
    pub recommended_queue: String,
    /// "Low", "Medium", "High" or "Critical"
    pub priority_level: String,
    /// Human-readable timeframe
    pub estimated_resolution_time: String,
    /// Ordered next steps
    pub suggested_actions: Vec<String>,
}

impl From<CaseAnalysis> for CaseAnalysisResponse {
    fn from(analysis: CaseAnalysis) -> Self {
        Self {
            case_id: analysis.case_id.to_string(),
            predicted_category: analysis.predicted_category.as_str().to_string(),
            confidence_score: analysis.confidence_score,
            recommended_queue: analysis.recommended_queue,
            priority_level: analysis.priority_level.as_str().to_string(),
            estimated_resolution_time: analysis.estimated_resolution_time,
            suggested_actions: analysis.suggested_actions,
        }
    }
}

/// Service banner returned by `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    /// Service name
    pub message: String,
    /// Crate version
    pub version: String,
    /// Always "operational"
    pub status: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// RFC 3339 timestamp of the check
    pub timestamp: String,
    /// Service identifier
    pub service: String,
}

/// Model metadata returned by `GET /model-info`
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelInfoResponse {
    /// Model family label
    pub model_type: String,
    /// Matching strategy label
    pub matching_strategy: String,
    /// Number of categories
    pub category_count: usize,
    /// Category names
    pub categories: Vec<String>,
    /// Queue names
    pub queues: Vec<String>,
    /// Rule set revision date
    pub last_updated: String,
    /// Static accuracy estimate
    pub accuracy: String,
}

impl From<ModelInfo> for ModelInfoResponse {
    fn from(info: ModelInfo) -> Self {
        Self {
            model_type: info.model_type.to_string(),
            matching_strategy: info.matching_strategy.to_string(),
            category_count: info.category_count,
            categories: info.categories.into_iter().map(String::from).collect(),
            queues: info.queues,
            last_updated: info.last_updated.to_string(),
            accuracy: info.accuracy.to_string(),
        }
    }
}

/// Category listing returned by `GET /categories`
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    /// Category names in ordinal order
    pub categories: Vec<String>,
    /// Category name to queue name
    pub queue_mapping: BTreeMap<String, String>,
}

impl From<&CaseAnalyzer> for CategoriesResponse {
    fn from(analyzer: &CaseAnalyzer) -> Self {
        let mapping = analyzer.queue_mapping();
        Self {
            categories: mapping.iter().map(|(c, _)| c.as_str().to_string()).collect(),
            queue_mapping: mapping
                .into_iter()
                .map(|(c, queue)| (c.as_str().to_string(), queue))
                .collect(),
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Individual validation failures
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
}
