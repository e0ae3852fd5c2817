//! Market position analysis: where the marked-up price sits inside the
//! observed price distribution, and what that implies for pricing room.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::market::MarketAnalysis;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketPosition {
    /// 0 = cheapest observed, 100 = at or above the most expensive.
    pub percentile: f64,
    /// Multiplier applied by the Market Competitive strategy.
    pub competitiveness: f64,
    pub recommendation: String,
    pub local_factors: Vec<String>,
}

/// Rank a price within the observed distribution. The first sorted entry
/// at or above the price fixes the rank; a price above everything observed
/// ranks at 100.
pub fn market_percentile(price: f64, distribution: &[f64]) -> f64 {
    let mut sorted = distribution.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    match sorted.iter().position(|observed| *observed >= price) {
        Some(index) => index as f64 / sorted.len() as f64 * 100.0,
        None => 100.0,
    }
}

fn competitiveness_multiplier(percentile: f64, demand_level: f64) -> f64 {
    let mut multiplier = if percentile < 25.0 {
        // Cheap relative to market: room to raise.
        1.2
    } else if percentile < 50.0 {
        1.1
    } else if percentile > 75.0 {
        // Premium territory carries losing-on-price risk.
        0.9
    } else {
        1.0
    };

    if demand_level > 80.0 {
        multiplier *= 1.05;
    } else if demand_level < 40.0 {
        multiplier *= 0.95;
    }

    multiplier
}

fn band_recommendation(percentile: f64) -> &'static str {
    if percentile < 25.0 {
        "Priced below most of the market; there is headroom to raise the quote"
    } else if percentile < 50.0 {
        "Competitively priced against the observed market"
    } else if percentile <= 75.0 {
        "Priced in the upper mid-range; lean on scope and service quality"
    } else {
        "Premium market position; expect longer sales cycles and price pushback"
    }
}

pub fn analyze_market_position(
    price: f64,
    market: &MarketAnalysis,
    local_factors: Vec<String>,
) -> MarketPosition {
    let percentile = market_percentile(price, &market.price_distribution);

    MarketPosition {
        percentile,
        competitiveness: competitiveness_multiplier(percentile, market.demand_level),
        recommendation: band_recommendation(percentile).to_string(),
        local_factors,
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::market::MarketAnalysis;

    use super::{analyze_market_position, market_percentile};

    fn market(distribution: Vec<f64>, demand_level: f64) -> MarketAnalysis {
        MarketAnalysis {
            price_distribution: distribution,
            demand_level,
            seasonality: "shoulder".to_string(),
            competition_density: 0.5,
            average_margin: 30.0,
        }
    }

    #[test]
    fn percentile_ranks_against_sorted_distribution() {
        let distribution = [800.0, 900.0, 1000.0, 1100.0, 1200.0];

        // 1000 lands on index 2 of 5.
        assert!((market_percentile(1000.0, &distribution) - 40.0).abs() < 1e-9);
        assert!((market_percentile(750.0, &distribution) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn price_above_all_observations_ranks_at_100() {
        let distribution = [800.0, 900.0, 1000.0];

        assert!((market_percentile(5000.0, &distribution) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_distribution_ranks_at_100() {
        assert!((market_percentile(1000.0, &[]) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn cheap_position_earns_raise_multiplier() {
        let distribution = vec![800.0, 2000.0, 3000.0, 4000.0];

        let bottom = analyze_market_position(700.0, &market(distribution.clone(), 50.0), Vec::new());
        assert!((bottom.percentile - 0.0).abs() < 1e-9);
        assert!((bottom.competitiveness - 1.2).abs() < 1e-9);

        // Percentile 25 exactly is not below 25, so the mid band applies.
        let low_mid = analyze_market_position(850.0, &market(distribution, 50.0), Vec::new());
        assert!((low_mid.percentile - 25.0).abs() < 1e-9);
        assert!((low_mid.competitiveness - 1.1).abs() < 1e-9);
    }

    #[test]
    fn premium_position_discounts_competitiveness() {
        let position = analyze_market_position(
            3900.0,
            &market(vec![800.0, 900.0, 1000.0, 1100.0], 50.0),
            Vec::new(),
        );

        assert!((position.percentile - 100.0).abs() < 1e-9);
        assert!((position.competitiveness - 0.9).abs() < 1e-9);
        assert!(position.recommendation.contains("Premium"));
    }

    #[test]
    fn demand_extremes_shift_the_multiplier_five_percent() {
        let hot = analyze_market_position(850.0, &market(vec![800.0, 2000.0, 3000.0], 90.0), Vec::new());
        let cold = analyze_market_position(850.0, &market(vec![800.0, 2000.0, 3000.0], 20.0), Vec::new());

        assert!((hot.competitiveness - 1.1 * 1.05).abs() < 1e-9);
        assert!((cold.competitiveness - 1.1 * 0.95).abs() < 1e-9);
    }

    #[test]
    fn percentile_stays_within_bounds() {
        for price in [0.0, 500.0, 1000.0, 10_000.0] {
            let percentile = market_percentile(price, &[800.0, 900.0, 1000.0]);
            assert!((0.0..=100.0).contains(&percentile));
        }
    }
}
