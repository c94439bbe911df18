//! Lexicon module - weighted keyword signals per category
//!
//! The lexicon is assembled once at startup and is read-only afterwards.
//! Construction fails if any category would be left without signals, since
//! such a category could never be selected by the classifier.

use crate::{Category, ConfigurationError};
use std::collections::BTreeMap;

/// How a signal phrase is located in case text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Phrase may appear anywhere, including inside longer words
    Substring,

    /// Phrase must be bounded by non-alphanumeric characters or text edges
    WholeWord,
}

/// A weighted keyword or phrase used as evidence for a category
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordSignal {
    /// Lower-cased, whitespace-normalized phrase
    pub phrase: String,

    /// Contribution per occurrence (finite, > 0)
    pub weight: f64,

    /// Matching strategy
    pub mode: MatchMode,
}

impl KeywordSignal {
    /// Create a substring signal
    pub fn new(phrase: &str, weight: f64) -> Self {
        Self::with_mode(phrase, weight, MatchMode::Substring)
    }

    /// Create a whole-word signal
    pub fn whole_word(phrase: &str, weight: f64) -> Self {
        Self::with_mode(phrase, weight, MatchMode::WholeWord)
    }

    /// Create a signal with an explicit match mode
    ///
    /// The phrase is normalized the same way case text is, so configured
    /// phrases like `"Tax  Withholding"` still match.
    pub fn with_mode(phrase: &str, weight: f64, mode: MatchMode) -> Self {
        Self {
            phrase: crate::scorer::normalize(phrase),
            weight,
            mode,
        }
    }

    fn check(&self, category: Category) -> Result<(), ConfigurationError> {
        if self.phrase.is_empty() {
            return Err(ConfigurationError::InvalidSignal {
                category,
                reason: "phrase is empty".to_string(),
            });
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(ConfigurationError::InvalidSignal {
                category,
                reason: format!(
                    "weight {} for '{}' must be finite and positive",
                    self.weight, self.phrase
                ),
            });
        }
        Ok(())
    }
}

/// Weight for single keywords
const BASE: f64 = 1.0;

/// Weight for multi-word phrases and strong fraud indicators
const STRONG: f64 = 1.5;

use MatchMode::{Substring, WholeWord};

/// Built-in signal table
const BUILTIN_SIGNALS: &[(Category, &str, f64, MatchMode)] = &[
    (Category::Payroll, "payroll", BASE, Substring),
    (Category::Payroll, "salary", BASE, Substring),
    (Category::Payroll, "wages", BASE, Substring),
    (Category::Payroll, "tax withholding", STRONG, Substring),
    (Category::Payroll, "w2", BASE, WholeWord),
    (Category::Payroll, "1099", BASE, WholeWord),
    (Category::Payroll, "paycheck", BASE, Substring),
    (Category::Banking, "bank", BASE, Substring),
    (Category::Banking, "deposit", BASE, Substring),
    (Category::Banking, "withdrawal", BASE, Substring),
    (Category::Banking, "account", BASE, Substring),
    (Category::Banking, "routing", BASE, Substring),
    (Category::Banking, "transfer", BASE, Substring),
    (Category::Banking, "ach", BASE, WholeWord),
    (Category::Fraud, "fraud", STRONG, Substring),
    (Category::Fraud, "unauthorized", STRONG, Substring),
    (Category::Fraud, "suspicious", STRONG, Substring),
    (Category::Fraud, "dispute", BASE, Substring),
    (Category::Fraud, "chargeback", STRONG, Substring),
    (Category::Fraud, "stolen", STRONG, Substring),
    (Category::Technical, "app", BASE, WholeWord),
    (Category::Technical, "login", BASE, Substring),
    (Category::Technical, "password", BASE, Substring),
    (Category::Technical, "error", BASE, Substring),
    (Category::Technical, "bug", BASE, WholeWord),
    (Category::Technical, "crash", BASE, Substring),
    (Category::Technical, "sync", BASE, Substring),
    (Category::Billing, "bill", BASE, Substring),
    (Category::Billing, "charge", BASE, Substring),
    (Category::Billing, "fee", BASE, WholeWord),
    (Category::Billing, "payment", BASE, Substring),
    (Category::Billing, "invoice", BASE, Substring),
    (Category::Billing, "refund", BASE, Substring),
    (Category::Billing, "subscription", BASE, Substring),
    (Category::Compliance, "compliance", BASE, Substring),
    (Category::Compliance, "audit", BASE, Substring),
    (Category::Compliance, "regulation", BASE, Substring),
    (Category::Compliance, "kyc", BASE, WholeWord),
    (Category::Compliance, "aml", BASE, WholeWord),
    (Category::Compliance, "verification", BASE, Substring),
];

/// Mapping from category to its signal set
#[derive(Debug, Clone)]
pub struct Lexicon {
    signals: BTreeMap<Category, Vec<KeywordSignal>>,
}

impl Lexicon {
    /// Build a lexicon from `(category, signal)` pairs
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidSignal`] for an empty phrase or a
    /// non-positive weight, and [`ConfigurationError::MissingSignals`] if any
    /// category ends up with no signals.
    pub fn from_signals<I>(entries: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (Category, KeywordSignal)>,
    {
        let mut signals: BTreeMap<Category, Vec<KeywordSignal>> = BTreeMap::new();
        for (category, signal) in entries {
            signal.check(category)?;
            signals.entry(category).or_default().push(signal);
        }

        for category in Category::ALL {
            if signals.get(&category).map_or(true, Vec::is_empty) {
                return Err(ConfigurationError::MissingSignals(category));
            }
        }

        Ok(Self { signals })
    }

    /// The built-in lexicon
    pub fn builtin() -> Self {
        let mut signals: BTreeMap<Category, Vec<KeywordSignal>> = BTreeMap::new();
        for &(category, phrase, weight, mode) in BUILTIN_SIGNALS {
            signals
                .entry(category)
                .or_default()
                .push(KeywordSignal::with_mode(phrase, weight, mode));
        }
        Self { signals }
    }

    /// The built-in lexicon extended with additional signals
    pub fn builtin_with<I>(extra: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (Category, KeywordSignal)>,
    {
        let builtin = Self::builtin()
            .signals
            .into_iter()
            .flat_map(|(category, signals)| signals.into_iter().map(move |s| (category, s)));
        Self::from_signals(builtin.chain(extra))
    }

    /// Check that every category has signals and every signal is usable
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for category in Category::ALL {
            let signals = self.signals(category);
            if signals.is_empty() {
                return Err(ConfigurationError::MissingSignals(category));
            }
            for signal in signals {
                signal.check(category)?;
            }
        }
        Ok(())
    }

    /// Signals for a category
    pub fn signals(&self, category: Category) -> &[KeywordSignal] {
        self.signals
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of signals across all categories
    pub fn len(&self) -> usize {
        self.signals.values().map(Vec::len).sum()
    }

    /// Whether the lexicon holds no signals at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
