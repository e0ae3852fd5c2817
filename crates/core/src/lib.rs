pub mod domain;
pub mod errors;
pub mod intel;
pub mod pricing;

pub use domain::competitor::CompetitorProfile;
pub use domain::complexity::ComplexityScore;
pub use domain::cost::{CostBasis, MarginSchedule};
pub use domain::customer::{BudgetIndicator, CompanySize, CustomerProfile, Priority, Timeline};
pub use domain::history::WinRateRecord;
pub use domain::market::MarketAnalysis;
pub use domain::recommendation::{
    PricingAdjustment, PricingRecommendation, PricingStrategy, RecommendationId, StrategyKind,
};
pub use errors::PricingEngineError;
pub use intel::{MarketIntelligence, StaticLocalFactors};
pub use pricing::{
    calculate_optimal_price, DeterministicOptimalPriceEngine, OptimalPriceEngine, PricingFactors,
};
