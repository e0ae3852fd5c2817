//! Market intelligence seam.
//!
//! Local market color (labor supply, permitting, seasonal demand) comes
//! from an external intelligence service in production. The core only
//! depends on this trait; the shipped implementation returns fixed
//! illustrative strings keyed to the location text.

/// Supplies location-specific market factor strings for the analyzer.
pub trait MarketIntelligence: Send + Sync {
    fn local_factors(&self, location: &str) -> Vec<String>;
}

/// Stand-in provider used until a real market-intelligence integration
/// is wired up by the embedding workflow.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticLocalFactors;

impl MarketIntelligence for StaticLocalFactors {
    fn local_factors(&self, location: &str) -> Vec<String> {
        vec![
            format!("Seasonal demand around {} is tracking near its recent average", location),
            format!("Skilled-labor availability in {} remains steady", location),
            "Permit turnaround is adding one to two weeks to project starts".to_string(),
        ]
    }
}
