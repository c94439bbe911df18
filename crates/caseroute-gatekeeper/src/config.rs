//! Gatekeeper configuration

/// Default character limit for the subject line
pub const DEFAULT_MAX_SUBJECT_CHARS: usize = 500;

/// Default character limit for the description
pub const DEFAULT_MAX_DESCRIPTION_CHARS: usize = 10_000;

/// Configuration for validation rules
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    /// Reject cases whose subject and description are both blank
    pub reject_blank: bool,

    /// Maximum subject length in characters (`None` = unlimited)
    pub max_subject_chars: Option<usize>,

    /// Maximum description length in characters (`None` = unlimited)
    pub max_description_chars: Option<usize>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            reject_blank: true,
            max_subject_chars: Some(DEFAULT_MAX_SUBJECT_CHARS),
            max_description_chars: Some(DEFAULT_MAX_DESCRIPTION_CHARS),
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (no length limits)
    ///
    /// Blank cases are still rejected: the engine's fallback result does not
    /// describe a case where nothing was provided.
    pub fn permissive() -> Self {
        Self {
            reject_blank: true,
            max_subject_chars: None,
            max_description_chars: None,
        }
    }

    /// Override the length limits
    pub fn with_limits(mut self, max_subject_chars: usize, max_description_chars: usize) -> Self {
        self.max_subject_chars = Some(max_subject_chars);
        self.max_description_chars = Some(max_description_chars);
        self
    }
}
