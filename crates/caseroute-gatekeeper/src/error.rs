//! Gatekeeper error types

use crate::RejectionReason;
use thiserror::Error;

/// Errors that can occur during gatekeeper operations
#[derive(Error, Debug, PartialEq)]
pub enum GatekeeperError {
    /// Request failed validation
    #[error("Invalid input: {}", format_reasons(.0))]
    InvalidInput(Vec<RejectionReason>),
}

impl GatekeeperError {
    /// Rejection reasons carried by the error
    pub fn reasons(&self) -> &[RejectionReason] {
        match self {
            GatekeeperError::InvalidInput(reasons) => reasons,
        }
    }
}

fn format_reasons(reasons: &[RejectionReason]) -> String {
    reasons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
