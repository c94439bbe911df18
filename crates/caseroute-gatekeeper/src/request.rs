//! Raw case request as received from a client

use serde::Deserialize;

/// Unvalidated case request
///
/// Every field is optional on the wire. Missing text fields deserialize to
/// empty strings and are caught by validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CaseRequest {
    /// Short summary line
    #[serde(default)]
    pub subject: String,

    /// Free-form body
    #[serde(default)]
    pub description: String,

    /// Declared priority ("Low", "Medium", "High", "Critical")
    #[serde(default, alias = "declared_priority")]
    pub priority: Option<String>,

    /// Customer type ("Individual", "Business")
    #[serde(default)]
    pub customer_type: Option<String>,
}

impl CaseRequest {
    /// Create a request with only text fields set
    pub fn new(subject: &str, description: &str) -> Self {
        Self {
            subject: subject.to_string(),
            description: description.to_string(),
            ..Self::default()
        }
    }

    /// Set the declared priority
    pub fn with_priority(mut self, priority: &str) -> Self {
        self.priority = Some(priority.to_string());
        self
    }

    /// Set the customer type
    pub fn with_customer_type(mut self, customer_type: &str) -> Self {
        self.customer_type = Some(customer_type.to_string());
        self
    }
}
