use serde::{Deserialize, Serialize};

/// Project complexity sub-scores, each on a 1-10 scale. `overall` is the
/// caller's weighted average and is treated as given here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComplexityScore {
    pub technical: f64,
    pub access: f64,
    pub safety: f64,
    pub timeline: f64,
    pub coordination: f64,
    pub overall: f64,
}
