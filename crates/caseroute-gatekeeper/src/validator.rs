//! Case request validation logic

use crate::{CaseRequest, GatekeeperError, ValidationConfig};
use caseroute_domain::{CaseInput, CustomerType, Priority};
use thiserror::Error;

/// Result of request validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether the request passed validation
    pub status: ValidationStatus,

    /// Rejection reasons (if any)
    pub reasons: Vec<RejectionReason>,
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Request accepted
    Accepted,

    /// Request rejected
    Rejected,
}

/// Reasons for rejection
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RejectionReason {
    /// Subject and description are both blank
    #[error("subject and description are both empty")]
    EmptyCase,

    /// A text field exceeds its length limit
    #[error("{field} is {actual} characters, limit is {limit}")]
    TextTooLong {
        /// Field name
        field: &'static str,
        /// Configured limit
        limit: usize,
        /// Actual length
        actual: usize,
    },

    /// Priority is not one of Low, Medium, High, Critical
    #[error("unknown priority '{0}' (expected Low, Medium, High or Critical)")]
    UnknownPriority(String),

    /// Customer type is not one of Individual, Business
    #[error("unknown customer type '{0}' (expected Individual or Business)")]
    UnknownCustomerType(String),
}

/// The Gatekeeper validates case requests before analysis
#[derive(Debug, Clone)]
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Validate a request against the configured rules
    ///
    /// All failing rules are reported, not just the first.
    pub fn validate(&self, request: &CaseRequest) -> ValidationResult {
        let mut reasons = Vec::new();

        // 1. Blank case
        if self.config.reject_blank
            && request.subject.trim().is_empty()
            && request.description.trim().is_empty()
        {
            reasons.push(RejectionReason::EmptyCase);
        }

        // 2. Length limits
        if let Some(reason) =
            check_length("subject", &request.subject, self.config.max_subject_chars)
        {
            reasons.push(reason);
        }
        if let Some(reason) = check_length(
            "description",
            &request.description,
            self.config.max_description_chars,
        ) {
            reasons.push(reason);
        }

        // 3. Enumerated metadata
        if let Err(reason) = parse_priority(request.priority.as_deref()) {
            reasons.push(reason);
        }
        if let Err(reason) = parse_customer_type(request.customer_type.as_deref()) {
            reasons.push(reason);
        }

        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            ValidationStatus::Rejected
        };

        ValidationResult { status, reasons }
    }

    /// Validate a request and convert it into engine input
    ///
    /// # Errors
    ///
    /// Returns [`GatekeeperError::InvalidInput`] with every rejection reason
    /// when validation fails.
    pub fn admit(&self, request: CaseRequest) -> Result<CaseInput, GatekeeperError> {
        let result = self.validate(&request);
        if result.status == ValidationStatus::Rejected {
            return Err(GatekeeperError::InvalidInput(result.reasons));
        }

        let declared_priority = parse_priority(request.priority.as_deref())
            .map_err(|r| GatekeeperError::InvalidInput(vec![r]))?;
        let customer_type = parse_customer_type(request.customer_type.as_deref())
            .map_err(|r| GatekeeperError::InvalidInput(vec![r]))?;

        Ok(CaseInput {
            subject: request.subject,
            description: request.description,
            declared_priority,
            customer_type,
        })
    }
}

fn check_length(field: &'static str, value: &str, limit: Option<usize>) -> Option<RejectionReason> {
    let limit = limit?;
    let actual = value.chars().count();
    (actual > limit).then_some(RejectionReason::TextTooLong {
        field,
        limit,
        actual,
    })
}

// Blank strings count as "not declared".
fn parse_priority(value: Option<&str>) -> Result<Option<Priority>, RejectionReason> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => Priority::parse(v)
            .map(Some)
            .ok_or_else(|| RejectionReason::UnknownPriority(v.to_string())),
    }
}

fn parse_customer_type(value: Option<&str>) -> Result<Option<CustomerType>, RejectionReason> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => CustomerType::parse(v)
            .map(Some)
            .ok_or_else(|| RejectionReason::UnknownCustomerType(v.to_string())),
    }
}
