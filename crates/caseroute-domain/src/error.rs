//! Configuration errors raised while building the engine

use crate::Category;
use thiserror::Error;

/// Errors detected when the lexicon or routing table is assembled
///
/// These are startup-time failures. Once an engine exists, analysis cannot fail.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigurationError {
    /// A category has no keyword signals and could never be selected
    #[error("Configuration incomplete: category '{0}' has no lexicon signals")]
    MissingSignals(Category),

    /// A category has no routing entry
    #[error("Configuration incomplete: category '{0}' has no routing entry")]
    MissingRoute(Category),

    /// A signal is unusable (empty phrase or non-positive weight)
    #[error("Invalid signal for category '{category}': {reason}")]
    InvalidSignal {
        /// Category the signal was declared for
        category: Category,
        /// Description of the issue
        reason: String,
    },

    /// A routing entry is missing a queue, estimate or actions
    #[error("Invalid routing entry for category '{category}': {reason}")]
    InvalidRoute {
        /// Category the entry belongs to
        category: Category,
        /// Description of the issue
        reason: String,
    },
}
