//! Win-probability estimation.
//!
//! Nearest-neighbor over the historical corpus: the five records closest
//! in price to the candidate vote on the outcome, weighted by how close
//! they actually are. Market position and customer willingness then tilt
//! the estimate before it is clamped into its documented band.

use std::cmp::Ordering;

use crate::domain::history::WinRateRecord;
use crate::pricing::{DEFAULT_WIN_RATE, MAX_WIN_PROBABILITY, MIN_WIN_PROBABILITY, NEIGHBOR_COUNT};

/// Floor on a neighbor's vote weight so distant records still count a
/// little instead of vanishing.
const MIN_NEIGHBOR_WEIGHT: f64 = 0.1;

fn historical_win_rate(candidate_price: f64, history: &[WinRateRecord]) -> f64 {
    if history.is_empty() {
        return DEFAULT_WIN_RATE;
    }

    let mut nearest: Vec<&WinRateRecord> = history.iter().collect();
    nearest.sort_by(|a, b| {
        let da = (a.price_point - candidate_price).abs();
        let db = (b.price_point - candidate_price).abs();
        da.partial_cmp(&db).unwrap_or(Ordering::Equal)
    });
    nearest.truncate(NEIGHBOR_COUNT);

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for record in nearest {
        let relative_distance = (record.price_point - candidate_price).abs() / candidate_price;
        let weight = (1.0 - relative_distance).max(MIN_NEIGHBOR_WEIGHT);
        weighted_sum += record.win_rate * weight;
        total_weight += weight;
    }

    weighted_sum / total_weight
}

pub fn estimate_win_probability(
    candidate_price: f64,
    history: &[WinRateRecord],
    market_percentile: f64,
    willingness_score: f64,
) -> f64 {
    let mut probability = historical_win_rate(candidate_price, history);

    if market_percentile < 40.0 {
        probability *= 1.2;
    } else if market_percentile > 70.0 {
        probability *= 0.8;
    }

    if willingness_score > 0.7 {
        probability *= 1.1;
    } else if willingness_score < 0.3 {
        probability *= 0.9;
    }

    probability.clamp(MIN_WIN_PROBABILITY, MAX_WIN_PROBABILITY)
}

#[cfg(test)]
mod tests {
    use crate::domain::history::WinRateRecord;

    use super::estimate_win_probability;

    fn record(price_point: f64, win_rate: f64) -> WinRateRecord {
        WinRateRecord {
            price_point,
            services: vec!["installation".to_string()],
            win_rate,
            customer_type: "medium".to_string(),
            project_size: "standard".to_string(),
            margin: 30.0,
        }
    }

    #[test]
    fn empty_corpus_falls_back_to_default_rate() {
        // Neutral percentile and willingness leave the 0.6 default intact.
        let probability = estimate_win_probability(1000.0, &[], 50.0, 0.5);

        assert!((probability - 0.6).abs() < 1e-9);
    }

    #[test]
    fn exact_price_match_dominates_the_estimate() {
        let history = vec![record(1000.0, 0.9), record(5000.0, 0.1)];

        let probability = estimate_win_probability(1000.0, &history, 50.0, 0.5);

        // The 1000 record carries weight 1.0, the distant one only 0.1.
        let expected = (0.9 * 1.0 + 0.1 * 0.1) / 1.1;
        assert!((probability - expected).abs() < 1e-9);
    }

    #[test]
    fn only_the_five_nearest_records_vote() {
        let mut history: Vec<WinRateRecord> =
            (0..5).map(|i| record(1000.0 + i as f64, 0.5)).collect();
        // A wildly favorable but distant record must be cut by the
        // neighbor limit.
        history.push(record(100_000.0, 1.0));

        let probability = estimate_win_probability(1000.0, &history, 50.0, 0.5);

        assert!((probability - 0.5).abs() < 1e-3);
    }

    #[test]
    fn cheap_market_position_lifts_probability() {
        let history = vec![record(1000.0, 0.5)];

        let lifted = estimate_win_probability(1000.0, &history, 30.0, 0.5);
        let premium = estimate_win_probability(1000.0, &history, 80.0, 0.5);

        assert!((lifted - 0.6).abs() < 1e-9);
        assert!((premium - 0.4).abs() < 1e-9);
    }

    #[test]
    fn willingness_extremes_tilt_probability() {
        let history = vec![record(1000.0, 0.5)];

        let eager = estimate_win_probability(1000.0, &history, 50.0, 0.8);
        let reluctant = estimate_win_probability(1000.0, &history, 50.0, 0.2);

        assert!((eager - 0.55).abs() < 1e-9);
        assert!((reluctant - 0.45).abs() < 1e-9);
    }

    #[test]
    fn probability_is_clamped_to_its_band() {
        let sure_win = vec![record(1000.0, 1.0)];
        let sure_loss = vec![record(1000.0, 0.0)];

        let high = estimate_win_probability(1000.0, &sure_win, 30.0, 0.8);
        let low = estimate_win_probability(1000.0, &sure_loss, 80.0, 0.2);

        assert!((high - 0.95).abs() < 1e-9);
        assert!((low - 0.1).abs() < 1e-9);
    }
}
