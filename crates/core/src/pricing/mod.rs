//! Optimal price recommendation pipeline.
//!
//! A single pure computation: marked-up cost fans out into market
//! position, competitor standing, customer willingness, project risk, and
//! bundle analysis; the signals converge into candidate strategies, each
//! scored for win probability, and one strategy is selected per the
//! customer's stated priority. Nothing here retains state across calls,
//! so any number of invocations may run concurrently.

pub mod bundles;
pub mod competitors;
pub mod market;
pub mod markup;
pub mod probability;
pub mod risk;
pub mod selection;
pub mod strategy;
pub mod willingness;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::complexity::ComplexityScore;
use crate::domain::competitor::CompetitorProfile;
use crate::domain::cost::CostBasis;
use crate::domain::customer::CustomerProfile;
use crate::domain::history::WinRateRecord;
use crate::domain::market::MarketAnalysis;
use crate::domain::recommendation::{PricingRecommendation, RecommendationId};
use crate::errors::PricingEngineError;
use crate::intel::{MarketIntelligence, StaticLocalFactors};

use self::markup::MarkupWeights;
use self::strategy::StrategyInputs;

/// Win rate assumed when the historical corpus has nothing to say.
pub const DEFAULT_WIN_RATE: f64 = 0.6;
/// Historical records consulted per win-probability estimate.
pub const NEIGHBOR_COUNT: usize = 5;
pub const MAX_RISK_MULTIPLIER: f64 = 1.5;
pub const MIN_WIN_PROBABILITY: f64 = 0.1;
pub const MAX_WIN_PROBABILITY: f64 = 0.95;
pub const MAX_INSIGHTS: usize = 5;

/// Everything the estimation workflow pre-computes before asking for a
/// price: cost and margins, the market snapshot, the customer, the
/// project complexity, the competitor roster, and historical outcomes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingFactors {
    pub cost_basis: CostBasis,
    pub market_data: MarketAnalysis,
    pub customer_profile: CustomerProfile,
    pub project_complexity: ComplexityScore,
    pub competitor_pricing: Vec<CompetitorProfile>,
    pub historical_win_rates: Vec<WinRateRecord>,
}

#[async_trait]
pub trait OptimalPriceEngine: Send + Sync {
    /// Recommend an optimal price for the requested services. Async only
    /// to fit the caller's convention; the computation never suspends.
    async fn calculate_optimal_price(
        &self,
        factors: &PricingFactors,
        services: &[String],
        location: &str,
    ) -> Result<PricingRecommendation, PricingEngineError>;
}

pub struct DeterministicOptimalPriceEngine<M = StaticLocalFactors> {
    intel: M,
}

impl Default for DeterministicOptimalPriceEngine<StaticLocalFactors> {
    fn default() -> Self {
        Self { intel: StaticLocalFactors }
    }
}

impl<M: MarketIntelligence> DeterministicOptimalPriceEngine<M> {
    pub fn with_intel(intel: M) -> Self {
        Self { intel }
    }
}

#[async_trait]
impl<M: MarketIntelligence> OptimalPriceEngine for DeterministicOptimalPriceEngine<M> {
    async fn calculate_optimal_price(
        &self,
        factors: &PricingFactors,
        services: &[String],
        location: &str,
    ) -> Result<PricingRecommendation, PricingEngineError> {
        calculate_optimal_price(factors, services, location, &self.intel)
    }
}

fn validate_factors(factors: &PricingFactors) -> Result<(), PricingEngineError> {
    let cost = &factors.cost_basis;
    let checked = [
        ("base_cost", cost.base_cost),
        ("equipment_margin", cost.margins.equipment),
        ("materials_margin", cost.margins.materials),
        ("labor_margin", cost.margins.labor),
    ];

    for (field, value) in checked {
        if !value.is_finite() {
            return Err(PricingEngineError::NonFiniteInput { field, value });
        }
    }

    Ok(())
}

/// Drive the full pipeline synchronously. The async trait above is a thin
/// wrapper over this function.
pub fn calculate_optimal_price<M: MarketIntelligence>(
    factors: &PricingFactors,
    services: &[String],
    location: &str,
    intel: &M,
) -> Result<PricingRecommendation, PricingEngineError> {
    validate_factors(factors)?;

    let base_price = markup::apply_markup(&factors.cost_basis, &MarkupWeights::default());

    let local_factors = intel.local_factors(location);
    let market = market::analyze_market_position(base_price, &factors.market_data, local_factors);
    let competitors =
        competitors::assess_competitors(base_price, services, &factors.competitor_pricing);
    let willingness = willingness::score_willingness(
        &factors.customer_profile,
        factors.market_data.demand_level,
    );
    let risk_multiplier = risk::risk_multiplier(&factors.project_complexity, services);
    let bundle = bundles::optimize_bundle(services, base_price, &factors.historical_win_rates);

    tracing::debug!(
        base_price,
        percentile = market.percentile,
        willingness = willingness.score,
        risk_multiplier,
        bundle = bundle.name.as_deref().unwrap_or("none"),
        "pricing signals assembled"
    );

    let mut strategies = strategy::generate_strategies(&StrategyInputs {
        base_price,
        willingness: &willingness,
        risk_multiplier,
        market: &market,
        bundle: &bundle,
    });

    for candidate in &mut strategies {
        candidate.win_probability = Some(probability::estimate_win_probability(
            candidate.price,
            &factors.historical_win_rates,
            market.percentile,
            willingness.score,
        ));
    }

    let (selected, alternatives) =
        selection::select_strategy(strategies, factors.customer_profile.priority);
    let win_probability = selected.win_probability.unwrap_or(DEFAULT_WIN_RATE);
    let insights = selection::compose_insights(&willingness, &market, win_probability, &competitors);

    tracing::debug!(
        strategy = selected.kind.label(),
        recommended_price = selected.price,
        win_probability,
        "strategy selected"
    );

    Ok(PricingRecommendation {
        id: RecommendationId::new(),
        generated_at: Utc::now(),
        base_price,
        recommended_price: selected.price,
        adjustments: selected.adjustments,
        confidence: selected.confidence,
        win_probability,
        alternative_strategies: alternatives,
        insights,
    })
}
