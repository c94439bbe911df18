//! Caseroute Domain Layer
//!
//! This crate contains the classification and routing engine for support
//! cases. It performs no I/O: every operation is a pure computation over case
//! text and the static configuration built at startup.
//!
//! ## Key Concepts
//!
//! - **Category**: one of six fixed case classifications
//! - **Signal**: a weighted keyword or phrase used as evidence for a category
//! - **Lexicon**: the signal sets for every category
//! - **Confidence**: the winning category's share of the total score
//! - **Route**: queue, priority, timeframe and actions for a category
//!
//! ## Pipeline
//!
//! ```text
//! CaseInput -> scorer::score_all -> classifier::classify -> RoutingTable::route -> CaseAnalysis
//! ```
//!
//! [`CaseAnalyzer`] wires the stages together.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analyzer;
pub mod case;
pub mod category;
pub mod classifier;
pub mod error;
pub mod lexicon;
pub mod priority;
pub mod routing;
pub mod scorer;

// Re-exports for convenience
pub use analyzer::{CaseAnalyzer, ModelInfo};
pub use case::{CaseAnalysis, CaseId, CaseInput};
pub use category::Category;
pub use classifier::{ClassificationResult, FALLBACK_CATEGORY, FALLBACK_CONFIDENCE};
pub use error::ConfigurationError;
pub use lexicon::{KeywordSignal, Lexicon, MatchMode};
pub use priority::{CustomerType, Priority};
pub use routing::{RouteEntry, RoutingDecision, RoutingTable};
pub use scorer::ScoreVector;
