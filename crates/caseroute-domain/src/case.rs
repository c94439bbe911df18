//! Case module - request input and analysis output

use crate::{Category, CustomerType, Priority};
use std::fmt;

/// Prefix for rendered case identifiers
pub const CASE_ID_PREFIX: &str = "CASE-";

/// Unique identifier for an analysis, based on UUIDv7
///
/// UUIDv7 combines a millisecond timestamp with random bits, so ids are
/// time-ordered and stay unique across concurrent requests without any
/// shared counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaseId(u128);

impl CaseId {
    /// Generate a new UUIDv7-based CaseId
    ///
    /// # Examples
    ///
    /// ```
    /// use caseroute_domain::CaseId;
    ///
    /// let id = CaseId::new();
    /// assert!(id.to_string().starts_with("CASE-"));
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Parse a CaseId from its `CASE-<uuid>` rendering
    ///
    /// # Examples
    ///
    /// ```
    /// use caseroute_domain::CaseId;
    ///
    /// let id = CaseId::new();
    /// let parsed = CaseId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        let raw = s
            .strip_prefix(CASE_ID_PREFIX)
            .ok_or_else(|| format!("Case id must start with {}", CASE_ID_PREFIX))?;
        uuid::Uuid::parse_str(raw)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid case id: {}", e))
    }

    /// Get the timestamp component (milliseconds since Unix epoch)
    pub fn timestamp(&self) -> u64 {
        (self.0 >> 80) as u64
    }
}

impl Default for CaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CASE_ID_PREFIX, uuid::Uuid::from_u128(self.0))
    }
}

/// Text and metadata of an incoming support case
#[derive(Debug, Clone, PartialEq)]
pub struct CaseInput {
    /// Short summary line
    pub subject: String,

    /// Free-form body
    pub description: String,

    /// Priority stated by the caller, if any
    pub declared_priority: Option<Priority>,

    /// Kind of customer, if known
    pub customer_type: Option<CustomerType>,
}

impl CaseInput {
    /// Create a case with no declared priority or customer type
    pub fn new(subject: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            description: description.into(),
            declared_priority: None,
            customer_type: None,
        }
    }

    /// Set the declared priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.declared_priority = Some(priority);
        self
    }

    /// Set the customer type
    pub fn with_customer_type(mut self, customer_type: CustomerType) -> Self {
        self.customer_type = Some(customer_type);
        self
    }

    /// Whether both subject and description are blank
    pub fn is_blank(&self) -> bool {
        self.subject.trim().is_empty() && self.description.trim().is_empty()
    }
}

/// Result of analyzing one case
#[derive(Debug, Clone, PartialEq)]
pub struct CaseAnalysis {
    /// Freshly generated identifier
    pub case_id: CaseId,

    /// Winning category
    pub predicted_category: Category,

    /// Confidence in [0.0, 1.0], rounded to two decimals
    pub confidence_score: f64,

    /// Destination support team
    pub recommended_queue: String,

    /// Effective priority
    pub priority_level: Priority,

    /// Human-readable timeframe
    pub estimated_resolution_time: String,

    /// Ordered next steps
    pub suggested_actions: Vec<String>,
}
