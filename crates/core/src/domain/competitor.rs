use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompetitorProfile {
    pub name: String,
    /// Service codes this competitor is known to bid on.
    pub services: Vec<String>,
    pub average_price: f64,
    pub win_rate: f64,
    pub market_share: f64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl CompetitorProfile {
    /// Whether this competitor bids on any of the requested services.
    pub fn offers_any(&self, services: &[String]) -> bool {
        self.services.iter().any(|offered| services.contains(offered))
    }
}
