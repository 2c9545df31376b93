use crate::models::Link;
use crate::utils::Float;

/// Weights used to scalarize link attributes into a single composite weight.
///
/// No normalization is applied: magnitudes are up to the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptimizationWeights {
    /// Distance weight.
    pub distance: Float,
    /// Travel time weight.
    pub time: Float,
    /// Monetary cost weight.
    pub cost: Float,
    /// Spoilage risk weight.
    pub spoilage_risk: Float,
}

impl OptimizationWeights {
    /// Creates a new instance of `OptimizationWeights`.
    pub fn new(distance: Float, time: Float, cost: Float, spoilage_risk: Float) -> Self {
        Self { distance, time, cost, spoilage_risk }
    }

    /// Returns composite weight of the link.
    pub fn composite_weight(&self, link: &Link) -> Float {
        let distance = link.distance_km / 100.;
        let time = link.time_hours / 10.;
        let cost = link.cost / 1000.;
        let spoilage = link.spoilage_risk / 100.;

        self.distance * distance + self.time * time + self.cost * cost + self.spoilage_risk * spoilage
    }
}

impl Default for OptimizationWeights {
    fn default() -> Self {
        Self::new(0.3, 0.3, 0.2, 0.2)
    }
}
