//! Caseroute Gatekeeper
//!
//! Validates raw case requests at the service boundary, before they reach
//! the analysis engine.
//!
//! The Gatekeeper provides:
//! - Blank case rejection (no subject and no description)
//! - Field length limits
//! - Priority and customer type parsing
//!
//! # Examples
//!
//! ```
//! use caseroute_gatekeeper::{CaseRequest, Gatekeeper, ValidationConfig};
//!
//! let gatekeeper = Gatekeeper::new(ValidationConfig::default());
//! let request = CaseRequest::new("ACH transfer failed", "Deposit was rejected");
//!
//! let input = gatekeeper.admit(request).unwrap();
//! assert_eq!(input.subject, "ACH transfer failed");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod request;
mod validator;

pub use config::ValidationConfig;
pub use error::GatekeeperError;
pub use request::CaseRequest;
pub use validator::{Gatekeeper, RejectionReason, ValidationResult, ValidationStatus};
