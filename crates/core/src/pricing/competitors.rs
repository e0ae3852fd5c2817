use serde::{Deserialize, Serialize};

use crate::domain::competitor::CompetitorProfile;

/// How many relevant competitors it takes before the market reads as
/// crowded.
const CROWDED_MARKET_THRESHOLD: usize = 3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompetitorAssessment {
    pub relevant_count: usize,
    pub average_price: f64,
    /// Our price over the relevant competitor average.
    pub price_position: f64,
    /// Name of the relevant competitor holding the most market share.
    pub strongest_competitor: Option<String>,
    pub insights: Vec<String>,
}

/// Compare our price against the competitors that actually bid on the
/// requested services. An empty relevant roster compares us against
/// ourselves so the position reads as neutral rather than dividing by
/// zero.
pub fn assess_competitors(
    our_price: f64,
    services: &[String],
    roster: &[CompetitorProfile],
) -> CompetitorAssessment {
    let relevant: Vec<&CompetitorProfile> =
        roster.iter().filter(|competitor| competitor.offers_any(services)).collect();

    let average_price = if relevant.is_empty() {
        our_price
    } else {
        relevant.iter().map(|competitor| competitor.average_price).sum::<f64>()
            / relevant.len() as f64
    };

    let price_position = our_price / average_price;

    let strongest_competitor = relevant
        .iter()
        .fold(None::<&&CompetitorProfile>, |strongest, competitor| match strongest {
            Some(current) if current.market_share >= competitor.market_share => Some(current),
            _ => Some(competitor),
        })
        .map(|competitor| competitor.name.clone());

    let mut insights = Vec::new();
    if price_position > 1.2 {
        insights.push(
            "Quote is well above the competitor average; make the value proposition explicit"
                .to_string(),
        );
    } else if price_position < 0.8 {
        insights
            .push("Aggressive pricing relative to competitors; monitor job profitability".to_string());
    } else {
        insights.push("Quote is aligned with the competitor market".to_string());
    }

    if relevant.len() > CROWDED_MARKET_THRESHOLD {
        insights.push(
            "Several competitors bid on this work; expect a highly competitive market".to_string(),
        );
    }

    CompetitorAssessment {
        relevant_count: relevant.len(),
        average_price,
        price_position,
        strongest_competitor,
        insights,
    }
}
