//! Customer willingness-to-pay scoring.
//!
//! Four fixed-table sub-scores are averaged into a 0-1 composite, nudged
//! by market demand, and paired with a confidence figure describing how
//! much of the customer profile actually backs the estimate.

use serde::{Deserialize, Serialize};

use crate::domain::customer::{BudgetIndicator, CustomerProfile, Priority};

/// Vendor-name fragments that mark a customer as used to premium service
/// levels.
const PREMIUM_VENDOR_MARKERS: &[&str] = &["premier", "elite", "national", "platinum"];

const BASE_CONFIDENCE: f64 = 70.0;
const CONFIDENCE_BONUS: f64 = 10.0;
const MAX_CONFIDENCE: f64 = 95.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WillingnessFactors {
    pub company_size: f64,
    pub urgency: f64,
    pub quality_expectation: f64,
    pub budget_flexibility: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WillingnessEstimate {
    /// 0-1 composite propensity to accept a higher price.
    pub score: f64,
    pub factors: WillingnessFactors,
    /// 0-95 confidence in the score.
    pub confidence: f64,
}

fn quality_expectation(previous_vendors: &[String]) -> f64 {
    let premium_history = previous_vendors.iter().any(|vendor| {
        let vendor = vendor.to_lowercase();
        PREMIUM_VENDOR_MARKERS.iter().any(|marker| vendor.contains(marker))
    });

    if premium_history {
        0.8
    } else {
        0.5
    }
}

/// A priority that matches the stated budget posture means the customer's
/// answers corroborate each other.
fn priority_budget_consistent(profile: &CustomerProfile) -> bool {
    matches!(
        (profile.priority, profile.budget_indicators),
        (Priority::Price, BudgetIndicator::Tight) | (Priority::Quality, BudgetIndicator::Premium)
    )
}

pub fn score_willingness(profile: &CustomerProfile, demand_level: f64) -> WillingnessEstimate {
    let factors = WillingnessFactors {
        company_size: profile.company_size.willingness_factor(),
        urgency: profile.timeline.urgency_factor(),
        quality_expectation: quality_expectation(&profile.previous_vendors),
        budget_flexibility: profile.budget_indicators.flexibility_factor(),
    };

    let base = (factors.company_size
        + factors.urgency
        + factors.quality_expectation
        + factors.budget_flexibility)
        / 4.0;

    let demand_multiplier = if demand_level > 70.0 {
        1.1
    } else if demand_level < 30.0 {
        0.9
    } else {
        1.0
    };

    let score = (base * demand_multiplier).min(1.0);

    let mut confidence = BASE_CONFIDENCE;
    if profile.payment_history.is_some() {
        confidence += CONFIDENCE_BONUS;
    }
    if !profile.previous_vendors.is_empty() {
        confidence += CONFIDENCE_BONUS;
    }
    if priority_budget_consistent(profile) {
        confidence += CONFIDENCE_BONUS;
    }

    WillingnessEstimate { score, factors, confidence: confidence.min(MAX_CONFIDENCE) }
}

#[cfg(test)]
mod tests {
    use crate::domain::customer::{
        BudgetIndicator, CompanySize, CustomerProfile, Priority, Timeline,
    };

    use super::score_willingness;

    fn profile() -> CustomerProfile {
        CustomerProfile {
            company_size: CompanySize::Enterprise,
            timeline: Timeline::Urgent,
            budget_indicators: BudgetIndicator::Premium,
            previous_vendors: Vec::new(),
            priority: Priority::Relationship,
            payment_history: None,
        }
    }

    #[test]
    fn averages_the_four_lookup_factors() {
        // enterprise 0.9, urgent 0.9, no vendor history 0.5, premium 0.9.
        let estimate = score_willingness(&profile(), 50.0);

        assert!((estimate.score - 0.8).abs() < 1e-9);
        assert!((estimate.factors.quality_expectation - 0.5).abs() < 1e-9);
    }

    #[test]
    fn premium_vendor_history_raises_quality_expectation() {
        let mut customer = profile();
        customer.previous_vendors = vec!["Elite Grounds Management".to_string()];

        let estimate = score_willingness(&customer, 50.0);

        assert!((estimate.factors.quality_expectation - 0.8).abs() < 1e-9);
    }

    #[test]
    fn hot_demand_lifts_score_but_never_past_one() {
        let lifted = score_willingness(&profile(), 90.0);
        assert!((lifted.score - 0.88).abs() < 1e-9);

        let mut customer = profile();
        customer.previous_vendors = vec!["Premier Field Services".to_string()];
        let capped = score_willingness(&customer, 90.0);
        assert!(capped.score <= 1.0);
    }

    #[test]
    fn weak_demand_discounts_score() {
        let estimate = score_willingness(&profile(), 20.0);

        assert!((estimate.score - 0.72).abs() < 1e-9);
    }

    #[test]
    fn confidence_starts_at_seventy_with_a_sparse_profile() {
        let estimate = score_willingness(&profile(), 50.0);

        assert!((estimate.confidence - 70.0).abs() < 1e-9);
    }

    #[test]
    fn confidence_bonuses_are_capped_at_ninety_five() {
        let customer = CustomerProfile {
            company_size: CompanySize::Large,
            timeline: Timeline::Normal,
            budget_indicators: BudgetIndicator::Tight,
            previous_vendors: vec!["Northline".to_string()],
            priority: Priority::Price,
            payment_history: Some("prompt payer, three prior projects".to_string()),
        };

        // 70 + 10 (payment) + 10 (vendors) + 10 (price priority on a tight
        // budget) runs past the cap.
        let estimate = score_willingness(&customer, 50.0);

        assert!((estimate.confidence - 95.0).abs() < 1e-9);
    }

    #[test]
    fn quality_priority_with_premium_budget_is_consistent() {
        let mut customer = profile();
        customer.priority = Priority::Quality;

        let estimate = score_willingness(&customer, 50.0);

        assert!((estimate.confidence - 80.0).abs() < 1e-9);
    }
}
