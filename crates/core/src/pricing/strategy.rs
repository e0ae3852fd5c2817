//! Candidate strategy generation.
//!
//! Two strategies are always on the table; penetration pricing and bundle
//! discounts join only when the market position or the requested services
//! make them meaningful.

use crate::domain::recommendation::{PricingAdjustment, PricingStrategy, StrategyKind};
use crate::pricing::bundles::BundleAssessment;
use crate::pricing::market::MarketPosition;
use crate::pricing::willingness::WillingnessEstimate;

/// How strongly the willingness score moves the value-optimized price:
/// a 0-1 score swings the price by at most +-20%.
const WILLINGNESS_SWING: f64 = 0.4;

const PENETRATION_PERCENTILE: f64 = 60.0;
const PENETRATION_DISCOUNT: f64 = 0.15;

const MARKET_COMPETITIVE_CONFIDENCE: f64 = 85.0;
const PENETRATION_CONFIDENCE: f64 = 70.0;
const BUNDLE_CONFIDENCE: f64 = 90.0;

pub struct StrategyInputs<'a> {
    pub base_price: f64,
    pub willingness: &'a WillingnessEstimate,
    pub risk_multiplier: f64,
    pub market: &'a MarketPosition,
    pub bundle: &'a BundleAssessment,
}

fn value_optimized(inputs: &StrategyInputs<'_>) -> PricingStrategy {
    let willingness_shift = (inputs.willingness.score - 0.5) * WILLINGNESS_SWING;
    let price = inputs.base_price * (1.0 + willingness_shift) * inputs.risk_multiplier;

    PricingStrategy {
        kind: StrategyKind::ValueOptimized,
        price,
        adjustments: vec![
            PricingAdjustment {
                reason: "Customer willingness to pay".to_string(),
                percentage: willingness_shift * 100.0,
                amount: None,
            },
            PricingAdjustment {
                reason: "Project risk premium".to_string(),
                percentage: (inputs.risk_multiplier - 1.0) * 100.0,
                amount: None,
            },
        ],
        pros: vec![
            "Captures the value this customer places on the work".to_string(),
            "Prices project risk in explicitly".to_string(),
        ],
        cons: vec!["Sensitive to how well the customer profile is understood".to_string()],
        confidence: inputs.willingness.confidence,
        win_probability: None,
    }
}

fn market_competitive(inputs: &StrategyInputs<'_>) -> PricingStrategy {
    PricingStrategy {
        kind: StrategyKind::MarketCompetitive,
        price: inputs.base_price * inputs.market.competitiveness,
        adjustments: vec![PricingAdjustment {
            reason: "Market positioning".to_string(),
            percentage: (inputs.market.competitiveness - 1.0) * 100.0,
            amount: None,
        }],
        pros: vec![
            "Tracks where the local market actually transacts".to_string(),
            "Easy to defend against competing bids".to_string(),
        ],
        cons: vec!["Leaves value on the table with willing customers".to_string()],
        confidence: MARKET_COMPETITIVE_CONFIDENCE,
        win_probability: None,
    }
}

fn market_penetration(inputs: &StrategyInputs<'_>) -> PricingStrategy {
    PricingStrategy {
        kind: StrategyKind::MarketPenetration,
        price: inputs.base_price * (1.0 - PENETRATION_DISCOUNT),
        adjustments: vec![PricingAdjustment {
            reason: "Penetration discount".to_string(),
            percentage: -(PENETRATION_DISCOUNT * 100.0),
            amount: None,
        }],
        pros: vec![
            "Undercuts a premium-positioned market".to_string(),
            "Builds share and reference accounts quickly".to_string(),
        ],
        cons: vec![
            "Compresses margin".to_string(),
            "Hard to raise prices on the same customer later".to_string(),
        ],
        confidence: PENETRATION_CONFIDENCE,
        win_probability: None,
    }
}

fn bundle_discount(inputs: &StrategyInputs<'_>, bundle_name: &str) -> PricingStrategy {
    PricingStrategy {
        kind: StrategyKind::BundleDiscount,
        price: inputs.base_price * (1.0 - inputs.bundle.discount_pct / 100.0),
        adjustments: vec![PricingAdjustment {
            reason: format!("{} bundle discount", bundle_name),
            percentage: -inputs.bundle.discount_pct,
            amount: Some(inputs.bundle.value),
        }],
        pros: vec![
            "Rewards the customer for buying the full package".to_string(),
            "Raises total contract value per sale".to_string(),
        ],
        cons: vec!["Discount applies even if the customer would have bought anyway".to_string()],
        confidence: BUNDLE_CONFIDENCE,
        win_probability: None,
    }
}

pub fn generate_strategies(inputs: &StrategyInputs<'_>) -> Vec<PricingStrategy> {
    let mut strategies = vec![value_optimized(inputs), market_competitive(inputs)];

    if inputs.market.percentile > PENETRATION_PERCENTILE {
        strategies.push(market_penetration(inputs));
    }

    if inputs.bundle.applicable {
        if let Some(name) = inputs.bundle.name.as_deref() {
            strategies.push(bundle_discount(inputs, name));
        }
    }

    strategies
}
