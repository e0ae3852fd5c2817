use thiserror::Error;

/// The only error surface of the pricing core. Missing optional data is
/// never an error here: empty rosters, empty history, and unmatched
/// bundles all fall back to documented neutral defaults. What the engine
/// does refuse is non-finite numeric evidence, which would otherwise
/// poison every downstream multiplier.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PricingEngineError {
    #[error("pricing input `{field}` is non-finite (`{value}`)")]
    NonFiniteInput { field: &'static str, value: f64 },
}

impl PricingEngineError {
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::NonFiniteInput { .. } => "non_finite_input",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::NonFiniteInput { field, .. } => {
                format!("The supplied cost data is incomplete ({field}). Re-run the estimate and try again.")
            }
        }
    }
}
