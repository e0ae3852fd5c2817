//! Strategy selection and insight composition.

use crate::domain::customer::Priority;
use crate::domain::recommendation::PricingStrategy;
use crate::pricing::competitors::CompetitorAssessment;
use crate::pricing::market::MarketPosition;
use crate::pricing::willingness::WillingnessEstimate;
use crate::pricing::MAX_INSIGHTS;

const HIGH_WILLINGNESS: f64 = 0.7;
const PREMIUM_PERCENTILE: f64 = 75.0;
const HIGH_WIN_PROBABILITY: f64 = 0.8;

fn selection_key(strategy: &PricingStrategy, priority: Priority) -> f64 {
    let win_probability = strategy.win_probability.unwrap_or(0.0);

    match priority {
        Priority::Price => win_probability,
        // Price stands in for quality positioning.
        Priority::Quality => strategy.price,
        Priority::Speed => strategy.confidence,
        Priority::Relationship => strategy.price * win_probability,
    }
}

/// Split the candidates into the winner and the also-rans. On a tied key
/// the earliest-generated strategy wins.
pub fn select_strategy(
    mut strategies: Vec<PricingStrategy>,
    priority: Priority,
) -> (PricingStrategy, Vec<PricingStrategy>) {
    debug_assert!(!strategies.is_empty(), "generator always emits at least two strategies");

    let mut best = 0;
    for index in 1..strategies.len() {
        if selection_key(&strategies[index], priority) > selection_key(&strategies[best], priority)
        {
            best = index;
        }
    }

    let selected = strategies.remove(best);
    (selected, strategies)
}

/// Compose up to five insight strings, highest-signal first.
pub fn compose_insights(
    willingness: &WillingnessEstimate,
    market: &MarketPosition,
    win_probability: f64,
    competitors: &CompetitorAssessment,
) -> Vec<String> {
    let mut insights = Vec::new();

    if willingness.score > HIGH_WILLINGNESS {
        insights.push(
            "Customer profile indicates strong willingness to pay; value-based positioning is viable"
                .to_string(),
        );
    }
    if market.percentile > PREMIUM_PERCENTILE {
        insights.push(
            "Price sits in the premium band of the local market; be ready to defend the value story"
                .to_string(),
        );
    }
    if win_probability > HIGH_WIN_PROBABILITY {
        insights
            .push("Historical outcomes at this price point are strongly favorable".to_string());
    }
    insights.push(market.recommendation.clone());
    insights.extend(competitors.insights.iter().cloned());

    insights.truncate(MAX_INSIGHTS);
    insights
}
