use serde::{Deserialize, Serialize};

/// Per-category margin percentages supplied by the estimation workflow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarginSchedule {
    pub equipment: f64,
    pub materials: f64,
    pub labor: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostBasis {
    pub base_cost: f64,
    pub margins: MarginSchedule,
}
