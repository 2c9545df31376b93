use crate::models::Link;
use crate::utils::{Float, round_to};

/// A path between two facilities with aggregated metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    /// Source facility id.
    pub source: String,
    /// Target facility id.
    pub target: String,
    /// Facility ids from source to target.
    pub nodes: Vec<String>,
    /// Traversed links in order.
    pub links: Vec<Link>,
    /// Sum of link distances, km.
    pub total_distance: Float,
    /// Sum of link travel times, hours.
    pub total_time: Float,
    /// Sum of link costs.
    pub total_cost: Float,
    /// Maximum spoilage risk among traversed links, percent.
    pub total_spoilage_risk: Float,
    /// A heuristic quality flag, see [`PathResult::is_within_optimal_thresholds`].
    pub is_optimal: bool,
}

impl PathResult {
    /// Max total distance (km) of a path considered optimal.
    pub const OPTIMAL_MAX_DISTANCE: Float = 200.;
    /// Max total time (hours) of a path considered optimal.
    pub const OPTIMAL_MAX_TIME: Float = 8.;
    /// Max spoilage risk (percent) of a path considered optimal.
    pub const OPTIMAL_MAX_SPOILAGE_RISK: Float = 5.;

    /// Creates a path result from the sequence of traversed links.
    pub fn new(source: &str, target: &str, nodes: Vec<String>, links: Vec<Link>) -> Self {
        let (total_distance, total_time, total_cost) = links.iter().fold((0., 0., 0.), |(distance, time, cost), link| {
            (distance + link.distance_km, time + link.time_hours, cost + link.cost)
        });
        let total_spoilage_risk = links.iter().map(|link| link.spoilage_risk).fold(0., Float::max);
        let is_optimal = Self::is_within_optimal_thresholds(total_distance, total_time, total_spoilage_risk);

        Self {
            source: source.to_string(),
            target: target.to_string(),
            nodes,
            links,
            total_distance,
            total_time,
            total_cost,
            total_spoilage_risk,
            is_optimal,
        }
    }

    /// Checks fixed policy thresholds: the flag is a quality hint, not a proof of optimality.
    pub fn is_within_optimal_thresholds(distance: Float, time: Float, spoilage_risk: Float) -> bool {
        distance < Self::OPTIMAL_MAX_DISTANCE
            && time < Self::OPTIMAL_MAX_TIME
            && spoilage_risk < Self::OPTIMAL_MAX_SPOILAGE_RISK
    }

    /// Returns a copy with totals rounded for presentation.
    pub fn rounded(&self) -> Self {
        Self {
            total_distance: round_to(self.total_distance, 1),
            total_time: round_to(self.total_time, 1),
            total_cost: round_to(self.total_cost, 0),
            total_spoilage_risk: round_to(self.total_spoilage_risk, 1),
            ..self.clone()
        }
    }
}

/// A flow between a producer and a retailer.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowEntry {
    /// Producer id.
    pub producer: String,
    /// Retailer id.
    pub retailer: String,
    /// Shipped volume.
    pub volume: Float,
    /// A path used by the flow.
    pub path: PathResult,
}

/// Network wide flow statistics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowResult {
    /// Flows for every producer and retailer pair connected by a path.
    pub flows: Vec<FlowEntry>,
    /// Sum of path costs.
    pub total_cost: Float,
    /// Sum of path times, hours.
    pub total_time: Float,
    /// Mean of per path spoilage risk, percent.
    pub average_spoilage_risk: Float,
    /// A blended 0..100 score of success rate and path performance.
    pub network_efficiency: Float,
    /// Amount of pairs with a path.
    pub successful_pairs: usize,
    /// Amount of evaluated producer and retailer pairs.
    pub total_pairs: usize,
    /// Ratio of successful pairs.
    pub path_success_rate: Float,
    /// Path performance score.
    pub performance_score: Float,
}

impl FlowResult {
    /// Returns a copy with all metrics rounded for presentation.
    pub fn rounded(&self) -> Self {
        Self {
            flows: self
                .flows
                .iter()
                .map(|flow| FlowEntry { path: flow.path.rounded(), ..flow.clone() })
                .collect(),
            total_cost: round_to(self.total_cost, 0),
            total_time: round_to(self.total_time, 1),
            average_spoilage_risk: round_to(self.average_spoilage_risk, 1),
            network_efficiency: round_to(self.network_efficiency, 1),
            path_success_rate: round_to(self.path_success_rate, 3),
            performance_score: round_to(self.performance_score, 1),
            ..self.clone()
        }
    }
}
