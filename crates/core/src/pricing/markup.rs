use crate::domain::cost::CostBasis;

/// Weights for blending the per-category margins into one markup figure.
/// Labor carries half the weight, equipment and materials the rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkupWeights {
    pub equipment: f64,
    pub materials: f64,
    pub labor: f64,
}

impl Default for MarkupWeights {
    fn default() -> Self {
        Self { equipment: 0.30, materials: 0.20, labor: 0.50 }
    }
}

/// Blend the margin schedule into a single weighted percentage and apply
/// it to the base cost.
pub fn apply_markup(cost: &CostBasis, weights: &MarkupWeights) -> f64 {
    let weighted_margin = weights.equipment * cost.margins.equipment
        + weights.materials * cost.margins.materials
        + weights.labor * cost.margins.labor;

    cost.base_cost * (1.0 + weighted_margin / 100.0)
}
