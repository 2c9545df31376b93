#[cfg(test)]
#[path = "../../tests/unit/solver/flow_test.rs"]
mod flow_test;

use crate::algorithms::spoilage::ProductKind;
use crate::construction::synthesize_edges_for;
use crate::models::*;
use crate::solver::NetworkGraph;
use crate::utils::{Environment, Float, Parallelism, get_mean};

/// Default retail demand used when a retailer has no demand specified.
pub const DEFAULT_RETAIL_DEMAND: Float = 500.;

/// Aggregates independent producer to retailer paths into network wide statistics.
///
/// Paths are not constrained by link capacities against each other: each pair is optimized
/// on its own, so searches run in parallel according to environment settings.
pub struct FlowAggregator {
    environment: Environment,
    weights: OptimizationWeights,
    ambient_temp: Float,
    product: ProductKind,
}

impl FlowAggregator {
    /// Creates a new instance of `FlowAggregator` with default weights, temperature and product.
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            weights: OptimizationWeights::default(),
            ambient_temp: DEFAULT_AMBIENT_TEMPERATURE,
            product: ProductKind::default(),
        }
    }

    /// Sets optimization weights.
    pub fn with_weights(mut self, weights: OptimizationWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets ambient temperature in °C.
    pub fn with_ambient_temperature(mut self, ambient_temp: Float) -> Self {
        self.ambient_temp = ambient_temp;
        self
    }

    /// Sets transported product kind.
    pub fn with_product(mut self, product: ProductKind) -> Self {
        self.product = product;
        self
    }

    /// Synthesizes links and evaluates every producer and retailer pair.
    pub fn network_flow(&self, facilities: &[Facility]) -> FlowResult {
        let links = synthesize_edges_for(facilities, self.ambient_temp, self.product);
        let graph = NetworkGraph::new(facilities, links.as_slice());

        let producers = graph.facilities().filter(|f| f.kind == FacilityKind::Producer).collect::<Vec<_>>();
        let retailers = graph.facilities().filter(|f| f.kind == FacilityKind::Retail).collect::<Vec<_>>();
        let pairs = producers
            .iter()
            .flat_map(|&producer| retailers.iter().map(move |&retailer| (producer, retailer)))
            .collect::<Vec<_>>();

        let accumulator = self.environment.parallelism.map_reduce(
            pairs.as_slice(),
            |&(producer, retailer)| {
                graph
                    .find_path(producer.id.as_str(), retailer.id.as_str(), &self.weights)
                    .map(|path| FlowAccumulator::from_path(producer, retailer, path))
                    .unwrap_or_default()
            },
            FlowAccumulator::default,
            FlowAccumulator::merge,
        );

        let result = accumulator.into_result(pairs.len());

        (self.environment.logger)(
            format!(
                "network flow: {} facilities, {} links, {}/{} pairs connected, efficiency: {:.1}",
                graph.node_count(),
                graph.link_count(),
                result.successful_pairs,
                result.total_pairs,
                result.network_efficiency
            )
            .as_str(),
        );

        result.rounded()
    }

    /// Finds paths between every pair of distinct facilities where source can ship goods
    /// (producer to distributor) and target can receive them (collection to retail).
    /// Used to visualize network connectivity, no aggregation is performed.
    pub fn find_all_paths(&self, facilities: &[Facility]) -> Vec<PathResult> {
        let links = synthesize_edges_for(facilities, self.ambient_temp, self.product);
        let graph = NetworkGraph::new(facilities, links.as_slice());

        let sources = graph.facilities().filter(|f| f.kind != FacilityKind::Retail).collect::<Vec<_>>();
        let targets = graph.facilities().filter(|f| f.kind != FacilityKind::Producer).collect::<Vec<_>>();
        let pairs = sources
            .iter()
            .flat_map(|&source| {
                targets.iter().filter(move |target| target.id != source.id).map(move |&target| (source, target))
            })
            .collect::<Vec<_>>();

        let paths = self
            .environment
            .parallelism
            .collect(pairs.as_slice(), |&(source, target)| {
                graph.find_path(source.id.as_str(), target.id.as_str(), &self.weights).map(|path| path.rounded())
            })
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        (self.environment.logger)(format!("found {} paths among {} pairs", paths.len(), pairs.len()).as_str());

        paths
    }
}

/// Partial aggregation state. Merge is associative and preserves flow order.
#[derive(Default)]
struct FlowAccumulator {
    flows: Vec<FlowEntry>,
    total_cost: Float,
    total_time: Float,
    risks: Vec<Float>,
}

impl FlowAccumulator {
    fn from_path(producer: &Facility, retailer: &Facility, path: PathResult) -> Self {
        let volume = producer.production.unwrap_or(0.).min(retailer.demand.unwrap_or(DEFAULT_RETAIL_DEMAND));

        Self {
            total_cost: path.total_cost,
            total_time: path.total_time,
            risks: vec![path.total_spoilage_risk],
            flows: vec![FlowEntry { producer: producer.id.clone(), retailer: retailer.id.clone(), volume, path }],
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.flows.extend(other.flows);
        self.risks.extend(other.risks);
        self.total_cost += other.total_cost;
        self.total_time += other.total_time;

        self
    }

    fn into_result(self, total_pairs: usize) -> FlowResult {
        let successful_pairs = self.flows.len();
        let average_spoilage_risk = get_mean(self.risks.as_slice());

        let path_success_rate =
            if total_pairs > 0 { successful_pairs as Float / total_pairs as Float } else { 0. };

        let performance_score = if successful_pairs > 0 {
            (100. - average_spoilage_risk - 2. * (self.total_time / successful_pairs as Float)).max(0.)
        } else {
            0.
        };

        let network_efficiency = 50. * path_success_rate + 0.5 * performance_score;

        FlowResult {
            flows: self.flows,
            total_cost: self.total_cost,
            total_time: self.total_time,
            average_spoilage_risk,
            network_efficiency,
            successful_pairs,
            total_pairs,
            path_success_rate,
            performance_score,
        }
    }
}

fn create_silent_aggregator(ambient_temp: Float, weights: OptimizationWeights) -> FlowAggregator {
    FlowAggregator::new(Environment::new_silent(Parallelism::default()))
        .with_ambient_temperature(ambient_temp)
        .with_weights(weights)
}

/// Aggregates milk flows between all producers and retailers.
pub fn network_flow(facilities: &[Facility], ambient_temp: Float, weights: &OptimizationWeights) -> FlowResult {
    create_silent_aggregator(ambient_temp, *weights).network_flow(facilities)
}

/// Finds all source to target paths using default weights, see [`FlowAggregator::find_all_paths`].
pub fn find_all_paths(facilities: &[Facility], ambient_temp: Float) -> Vec<PathResult> {
    create_silent_aggregator(ambient_temp, OptimizationWeights::default()).find_all_paths(facilities)
}
