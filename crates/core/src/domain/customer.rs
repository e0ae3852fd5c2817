use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    Small,
    Medium,
    Large,
    Enterprise,
}

impl CompanySize {
    /// Willingness-to-pay factor associated with the company size band.
    pub fn willingness_factor(&self) -> f64 {
        match self {
            CompanySize::Small => 0.3,
            CompanySize::Medium => 0.6,
            CompanySize::Large => 0.8,
            CompanySize::Enterprise => 0.9,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    Urgent,
    Normal,
    Flexible,
}

impl Timeline {
    pub fn urgency_factor(&self) -> f64 {
        match self {
            Timeline::Urgent => 0.9,
            Timeline::Normal => 0.6,
            Timeline::Flexible => 0.4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetIndicator {
    Tight,
    Moderate,
    Flexible,
    Premium,
}

impl BudgetIndicator {
    pub fn flexibility_factor(&self) -> f64 {
        match self {
            BudgetIndicator::Tight => 0.2,
            BudgetIndicator::Moderate => 0.5,
            BudgetIndicator::Flexible => 0.7,
            BudgetIndicator::Premium => 0.9,
        }
    }
}

/// What the customer said they care about most. Drives strategy selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Price,
    Quality,
    Speed,
    Relationship,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub company_size: CompanySize,
    pub timeline: Timeline,
    pub budget_indicators: BudgetIndicator,
    pub previous_vendors: Vec<String>,
    pub priority: Priority,
    pub payment_history: Option<String>,
}
