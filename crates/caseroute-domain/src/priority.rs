//! Priority levels and customer types attached to a case

use std::fmt;

/// Urgency of a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// Informational requests
    Low,

    /// Standard issues
    Medium,

    /// Needs attention within hours
    High,

    /// Needs immediate attention
    Critical,
}

impl Priority {
    /// Every priority level, lowest first
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    /// Get the display name ("Low", "Medium", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    /// Parse a priority from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "critical" => Some(Priority::Critical),
            _ => None,
        }
    }

    /// Resolution timeframe for a case handled at this priority
    pub fn resolution_estimate(&self) -> &'static str {
        match self {
            Priority::Low => "3-5 business days",
            Priority::Medium => "1-2 business days",
            Priority::High => "2-4 hours",
            Priority::Critical => "Within 1 hour",
        }
    }

    /// Whether cases at this priority get the urgent marker action
    pub fn is_urgent(&self) -> bool {
        matches!(self, Priority::High | Priority::Critical)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid priority: {}", s))
    }
}

/// Kind of customer that opened the case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerType {
    /// A single person
    Individual,

    /// A company account
    Business,
}

impl CustomerType {
    /// Get the display name
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerType::Individual => "Individual",
            CustomerType::Business => "Business",
        }
    }

    /// Parse a customer type from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "individual" => Some(CustomerType::Individual),
            "business" => Some(CustomerType::Business),
            _ => None,
        }
    }
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword groups for urgency detection, checked highest first
const URGENCY_KEYWORDS: [(Priority, &[&str]); 3] = [
    (
        Priority::High,
        &["urgent", "critical", "emergency", "fraud", "security", "breach"],
    ),
    (Priority::Medium, &["issue", "problem", "help", "support"]),
    (Priority::Low, &["question", "inquiry", "information", "how to"]),
];

/// Infer a priority from normalized case text
///
/// Groups are checked in order High, Medium, Low and the first group with any
/// substring hit wins. Returns `None` when no urgency keyword appears.
pub fn infer_priority(normalized_text: &str) -> Option<Priority> {
    URGENCY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| normalized_text.contains(k)))
        .map(|(priority, _)| *priority)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse("critical"), Some(Priority::Critical));
        assert_eq!(Priority::parse("HIGH"), Some(Priority::High));
        assert_eq!(Priority::parse("Medium"), Some(Priority::Medium));
        assert_eq!(Priority::parse("asap"), None);
        assert_eq!("low".parse::<Priority>(), Ok(Priority::Low));
    }

    #[test]
    fn test_urgent_levels() {
        assert!(!Priority::Low.is_urgent());
        assert!(!Priority::Medium.is_urgent());
        assert!(Priority::High.is_urgent());
        assert!(Priority::Critical.is_urgent());
    }

    #[test]
    fn test_every_priority_has_estimate() {
        for priority in Priority::ALL {
            assert!(!priority.resolution_estimate().is_empty());
        }
    }

    #[test]
    fn test_infer_priority_prefers_highest_group() {
        assert_eq!(
            infer_priority("urgent question about my paycheck"),
            Some(Priority::High)
        );
        assert_eq!(infer_priority("login problem"), Some(Priority::Medium));
        assert_eq!(
            infer_priority("how to update my address"),
            Some(Priority::Low)
        );
        assert_eq!(infer_priority("w2 form"), None);
    }

    #[test]
    fn test_customer_type_parse() {
        assert_eq!(CustomerType::parse("business"), Some(CustomerType::Business));
        assert_eq!(
            CustomerType::parse("Individual"),
            Some(CustomerType::Individual)
        );
        assert_eq!(CustomerType::parse("enterprise"), None);
    }
}
