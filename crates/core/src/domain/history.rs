use serde::{Deserialize, Serialize};

/// One historical bid outcome. The corpus of these records backs the
/// nearest-neighbor win-probability estimate and bundle win-rate lookups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WinRateRecord {
    pub price_point: f64,
    pub services: Vec<String>,
    /// Observed win rate at this price point, 0-1.
    pub win_rate: f64,
    pub customer_type: String,
    pub project_size: String,
    pub margin: f64,
}
