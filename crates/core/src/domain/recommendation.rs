use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecommendationId(pub Uuid);

impl RecommendationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecommendationId {
    fn default() -> Self {
        Self::new()
    }
}

/// The four candidate strategy shapes the generator can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    ValueOptimized,
    MarketCompetitive,
    MarketPenetration,
    BundleDiscount,
}

impl StrategyKind {
    pub fn label(&self) -> &'static str {
        match self {
            StrategyKind::ValueOptimized => "Value Optimized",
            StrategyKind::MarketCompetitive => "Market Competitive",
            StrategyKind::MarketPenetration => "Market Penetration",
            StrategyKind::BundleDiscount => "Bundle Discount",
        }
    }
}

/// A single named price adjustment. Descriptive only: adjustments explain
/// how a strategy price was reached and are never re-fed into the math.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingAdjustment {
    pub reason: String,
    /// Signed percentage contribution.
    pub percentage: f64,
    pub amount: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingStrategy {
    pub kind: StrategyKind,
    pub price: f64,
    pub adjustments: Vec<PricingAdjustment>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    /// Confidence in the strategy itself, 0-100.
    pub confidence: f64,
    /// Populated by the win-probability estimator stage.
    pub win_probability: Option<f64>,
}

/// Final output of the pipeline: the selected strategy flattened into a
/// recommendation, the remaining candidates kept as alternatives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingRecommendation {
    pub id: RecommendationId,
    pub generated_at: DateTime<Utc>,
    pub base_price: f64,
    pub recommended_price: f64,
    pub adjustments: Vec<PricingAdjustment>,
    pub confidence: f64,
    pub win_probability: f64,
    pub alternative_strategies: Vec<PricingStrategy>,
    pub insights: Vec<String>,
}
