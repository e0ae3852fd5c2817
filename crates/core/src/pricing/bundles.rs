//! Bundle optimization.
//!
//! A small fixed catalogue of named service bundles, each carrying a
//! nominal discount. A bundle only applies when the request contains every
//! member service; among applicable bundles the deepest discount wins,
//! then the discount is trimmed when history says the combination already
//! wins without it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::history::WinRateRecord;
use crate::pricing::DEFAULT_WIN_RATE;

#[derive(Clone, Copy, Debug)]
struct BundleSeed {
    name: &'static str,
    services: &'static [&'static str],
    discount_pct: f64,
}

const STANDARD_BUNDLES: &[BundleSeed] = &[
    BundleSeed {
        name: "Install & Protect",
        services: &["installation", "maintenance"],
        discount_pct: 10.0,
    },
    BundleSeed {
        name: "Full Site Package",
        services: &["installation", "maintenance", "inspection"],
        discount_pct: 15.0,
    },
    BundleSeed { name: "Repair Plus", services: &["repair", "inspection"], discount_pct: 8.0 },
    BundleSeed {
        name: "Site Preparation",
        services: &["demolition", "excavation"],
        discount_pct: 12.0,
    },
];

/// Win rate above which a bundle already sells itself and the discount is
/// shrunk to 80% of nominal.
const WINNING_BUNDLE_THRESHOLD: f64 = 0.7;
const DISCOUNT_SHRINK: f64 = 0.8;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BundleAssessment {
    pub applicable: bool,
    pub name: Option<String>,
    pub discount_pct: f64,
    /// Discount expressed in currency against the marked-up base.
    pub value: f64,
    /// Rough win-rate lift attributed to bundling.
    pub expected_lift: f64,
}

impl BundleAssessment {
    fn none() -> Self {
        Self { applicable: false, name: None, discount_pct: 0.0, value: 0.0, expected_lift: 0.0 }
    }
}

fn bundle_win_rate(bundle: &BundleSeed, history: &[WinRateRecord]) -> f64 {
    let bundle_set: HashSet<&str> = bundle.services.iter().copied().collect();

    let matching: Vec<f64> = history
        .iter()
        .filter(|record| {
            let record_set: HashSet<&str> =
                record.services.iter().map(String::as_str).collect();
            record_set == bundle_set
        })
        .map(|record| record.win_rate)
        .collect();

    if matching.is_empty() {
        DEFAULT_WIN_RATE
    } else {
        matching.iter().sum::<f64>() / matching.len() as f64
    }
}

pub fn optimize_bundle(
    services: &[String],
    base_price: f64,
    history: &[WinRateRecord],
) -> BundleAssessment {
    let requested: HashSet<&str> = services.iter().map(String::as_str).collect();

    let best = STANDARD_BUNDLES
        .iter()
        .filter(|bundle| bundle.services.iter().all(|service| requested.contains(service)))
        .fold(None::<&BundleSeed>, |best, bundle| match best {
            Some(current) if current.discount_pct >= bundle.discount_pct => Some(current),
            _ => Some(bundle),
        });

    let Some(bundle) = best else {
        return BundleAssessment::none();
    };

    let win_rate = bundle_win_rate(bundle, history);
    let discount_pct = if win_rate > WINNING_BUNDLE_THRESHOLD {
        bundle.discount_pct * DISCOUNT_SHRINK
    } else {
        bundle.discount_pct
    };

    BundleAssessment {
        applicable: true,
        name: Some(bundle.name.to_string()),
        discount_pct,
        value: base_price * discount_pct / 100.0,
        expected_lift: win_rate * 1.2,
    }
}
