//! Category module - the fixed set of case classifications

use std::fmt;

/// Classification of a support case
///
/// The declaration order is the ordinal rank used to break score ties:
/// when two categories score the same, the one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Salary, wages, tax withholding and year-end forms
    Payroll,

    /// Deposits, transfers, account and routing issues
    Banking,

    /// Unauthorized activity, disputes and chargebacks
    Fraud,

    /// Application errors, login and sync problems
    Technical,

    /// Charges, fees, invoices and refunds
    Billing,

    /// Audits, regulation, KYC/AML verification
    Compliance,
}

impl Category {
    /// Every category, in ordinal order
    pub const ALL: [Category; 6] = [
        Category::Payroll,
        Category::Banking,
        Category::Fraud,
        Category::Technical,
        Category::Billing,
        Category::Compliance,
    ];

    /// Number of categories
    pub const COUNT: usize = Self::ALL.len();

    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Payroll => "payroll",
            Category::Banking => "banking",
            Category::Fraud => "fraud",
            Category::Technical => "technical",
            Category::Billing => "billing",
            Category::Compliance => "compliance",
        }
    }

    /// Parse a category from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "payroll" => Some(Category::Payroll),
            "banking" => Some(Category::Banking),
            "fraud" => Some(Category::Fraud),
            "technical" => Some(Category::Technical),
            "billing" => Some(Category::Billing),
            "compliance" => Some(Category::Compliance),
            _ => None,
        }
    }

    /// Ordinal position in [`Category::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid category: {}", s))
    }
}
