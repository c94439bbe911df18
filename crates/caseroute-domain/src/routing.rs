//! Routing module - category to queue, priority, timeframe and actions

use crate::{Category, ConfigurationError, CustomerType, Priority};
use std::collections::BTreeMap;

/// Action prepended to the list for High and Critical cases
pub const URGENT_ACTION: &str = "URGENT: Prioritize immediate attention";

/// Static routing data for one category
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry {
    /// Destination support team
    pub queue: String,

    /// Priority used when the caller declares none and no urgency keyword hits
    pub default_priority: Priority,

    /// Resolution estimate at the default priority
    pub resolution: String,

    /// Ordered next steps for the assignee
    pub actions: Vec<String>,
}

impl RouteEntry {
    /// Create a route entry
    pub fn new(queue: &str, default_priority: Priority, resolution: &str, actions: &[&str]) -> Self {
        Self {
            queue: queue.to_string(),
            default_priority,
            resolution: resolution.to_string(),
            actions: actions.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn check(&self, category: Category) -> Result<(), ConfigurationError> {
        let reason = if self.queue.trim().is_empty() {
            "queue is empty"
        } else if self.resolution.trim().is_empty() {
            "resolution estimate is empty"
        } else if self.actions.is_empty() {
            "no suggested actions"
        } else {
            return Ok(());
        };

        Err(ConfigurationError::InvalidRoute {
            category,
            reason: reason.to_string(),
        })
    }
}

/// Final routing for one case
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingDecision {
    /// Destination support team
    pub queue: String,

    /// Effective priority
    pub priority_level: Priority,

    /// Human-readable timeframe
    pub estimated_resolution: String,

    /// Ordered next steps
    pub suggested_actions: Vec<String>,
}

/// Total mapping from category to [`RouteEntry`]
#[derive(Debug, Clone)]
pub struct RoutingTable {
    // Indexed by `Category::index()`; complete after construction.
    entries: Vec<RouteEntry>,
}

impl RoutingTable {
    /// Build a table from per-category entries
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingRoute`] if a category has no entry,
    /// or [`ConfigurationError::InvalidRoute`] if an entry is incomplete.
    pub fn from_entries<I>(entries: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (Category, RouteEntry)>,
    {
        let mut by_category: BTreeMap<Category, RouteEntry> = entries.into_iter().collect();

        let mut ordered = Vec::with_capacity(Category::COUNT);
        for category in Category::ALL {
            let entry = by_category
                .remove(&category)
                .ok_or(ConfigurationError::MissingRoute(category))?;
            entry.check(category)?;
            ordered.push(entry);
        }

        Ok(Self { entries: ordered })
    }

    /// The built-in routing table
    pub fn builtin() -> Self {
        Self {
            entries: Category::ALL.iter().map(|&c| builtin_entry(c)).collect(),
        }
    }

    /// Check that every entry has a queue, an estimate and actions
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for category in Category::ALL {
            self.entry(category).check(category)?;
        }
        Ok(())
    }

    /// Entry for a category
    pub fn entry(&self, category: Category) -> &RouteEntry {
        &self.entries[category.index()]
    }

    /// Route a classified case
    ///
    /// `priority` is the caller's requested priority; when present it always
    /// replaces the category default. The estimate follows the effective
    /// priority whenever it differs from the default.
    ///
    /// `customer_type` does not affect routing: the rule set has no
    /// business-specific queues, so every customer type gets the same decision.
    pub fn route(
        &self,
        category: Category,
        priority: Option<Priority>,
        _customer_type: Option<CustomerType>,
    ) -> RoutingDecision {
        let entry = self.entry(category);

        let priority_level = priority.unwrap_or(entry.default_priority);
        let estimated_resolution = if priority_level == entry.default_priority {
            entry.resolution.clone()
        } else {
            priority_level.resolution_estimate().to_string()
        };

        let mut suggested_actions = Vec::with_capacity(entry.actions.len() + 1);
        if priority_level.is_urgent() {
            suggested_actions.push(URGENT_ACTION.to_string());
        }
        suggested_actions.extend(entry.actions.iter().cloned());

        RoutingDecision {
            queue: entry.queue.clone(),
            priority_level,
            estimated_resolution,
            suggested_actions,
        }
    }

    /// `(category, queue)` pairs in ordinal order
    pub fn queues(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        Category::ALL
            .iter()
            .map(move |&c| (c, self.entry(c).queue.as_str()))
    }
}

impl Default for RoutingTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_entry(category: Category) -> RouteEntry {
    match category {
        Category::Payroll => RouteEntry::new(
            "Payroll Support Team",
            Priority::Medium,
            "1-2 business days",
            &[
                "Verify employee information",
                "Check payroll processing status",
                "Review tax withholding settings",
                "Escalate to payroll specialist if needed",
            ],
        ),
        Category::Banking => RouteEntry::new(
            "Banking Operations",
            Priority::Medium,
            "1-2 business days",
            &[
                "Verify account details",
                "Check transaction history",
                "Review banking integration status",
                "Contact banking partner if required",
            ],
        ),
        Category::Fraud => RouteEntry::new(
            "Fraud Investigation",
            Priority::High,
            "2-4 hours",
            &[
                "Immediately flag account for review",
                "Document all suspicious activity",
                "Escalate to fraud investigation team",
                "Implement temporary security measures",
            ],
        ),
        Category::Technical => RouteEntry::new(
            "Technical Support",
            Priority::Medium,
            "1-2 business days",
            &[
                "Gather system logs and error details",
                "Check for known issues",
                "Test reproduction steps",
                "Escalate to engineering if needed",
            ],
        ),
        Category::Billing => RouteEntry::new(
            "Billing Department",
            Priority::Medium,
            "1-2 business days",
            &[
                "Review billing history",
                "Check payment processing status",
                "Verify subscription details",
                "Process refund if applicable",
            ],
        ),
        Category::Compliance => RouteEntry::new(
            "Compliance Team",
            Priority::Medium,
            "1-2 business days",
            &[
                "Review compliance requirements",
                "Gather necessary documentation",
                "Escalate to compliance team",
                "Ensure regulatory adherence",
            ],
        ),
    }
}
