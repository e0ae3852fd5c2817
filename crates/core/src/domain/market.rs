use serde::{Deserialize, Serialize};

/// Market snapshot supplied by the estimation workflow. The price
/// distribution may arrive in any order; the analyzer sorts its own copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketAnalysis {
    pub price_distribution: Vec<f64>,
    /// Demand level on a 0-100 scale.
    pub demand_level: f64,
    pub seasonality: String,
    pub competition_density: f64,
    pub average_margin: f64,
}
