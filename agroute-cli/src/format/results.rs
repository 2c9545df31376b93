//! Routing results in pragmatic json format.

#[cfg(test)]
#[path = "../../tests/unit/format/results_test.rs"]
mod results_test;

use agroute_core::models::{FlowEntry, FlowResult, Link, PathResult};
use serde::Serialize;
use std::io::{BufWriter, Write};

/// A transport link.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkModel {
    /// Source facility id.
    pub from: String,
    /// Destination facility id.
    pub to: String,
    /// Distance in km.
    pub distance_km: f64,
    /// Travel time in hours.
    pub time_hours: f64,
    /// Transport cost.
    pub cost_currency: f64,
    /// Spoilage risk in percent.
    pub spoilage_risk_percent: f64,
    /// Vehicle kind.
    pub vehicle_type: String,
    /// Volume per trip.
    pub capacity: f64,
}

/// A path between two facilities.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathModel {
    /// Facility ids from source to target.
    pub path: Vec<String>,
    /// Traversed links.
    pub edges: Vec<LinkModel>,
    /// Total distance in km.
    pub total_distance: f64,
    /// Total time in hours.
    pub total_time: f64,
    /// Total cost.
    pub total_cost: f64,
    /// Max spoilage risk along the path.
    pub total_spoilage_risk: f64,
    /// True if path is within quality thresholds.
    pub is_optimal: bool,
}

/// A flow between producer and retailer.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowModel {
    /// Producer id.
    pub from: String,
    /// Retailer id.
    pub to: String,
    /// Shipped volume.
    pub volume: f64,
    /// Used path.
    pub path: PathModel,
}

/// Network flow statistics.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowResultModel {
    /// Producer to retailer flows.
    pub flows: Vec<FlowModel>,
    /// Total cost.
    pub total_cost: f64,
    /// Total time in hours.
    pub total_time: f64,
    /// Average spoilage risk in percent.
    pub average_spoilage_risk: f64,
    /// Network efficiency score.
    pub network_efficiency: f64,
    /// Amount of connected pairs.
    pub successful_pairs: usize,
    /// Amount of evaluated pairs.
    pub total_pairs: usize,
    /// Ratio of connected pairs.
    pub path_success_rate: f64,
    /// Path performance score.
    pub performance_score: f64,
}

impl From<&Link> for LinkModel {
    fn from(link: &Link) -> Self {
        Self {
            from: link.from.clone(),
            to: link.to.clone(),
            distance_km: link.distance_km,
            time_hours: link.time_hours,
            cost_currency: link.cost,
            spoilage_risk_percent: link.spoilage_risk,
            vehicle_type: link.vehicle.as_str().to_string(),
            capacity: link.capacity,
        }
    }
}

impl From<&PathResult> for PathModel {
    fn from(path: &PathResult) -> Self {
        Self {
            path: path.nodes.clone(),
            edges: path.links.iter().map(LinkModel::from).collect(),
            total_distance: path.total_distance,
            total_time: path.total_time,
            total_cost: path.total_cost,
            total_spoilage_risk: path.total_spoilage_risk,
            is_optimal: path.is_optimal,
        }
    }
}

impl From<&FlowEntry> for FlowModel {
    fn from(flow: &FlowEntry) -> Self {
        Self {
            from: flow.producer.clone(),
            to: flow.retailer.clone(),
            volume: flow.volume,
            path: PathModel::from(&flow.path),
        }
    }
}

impl From<&FlowResult> for FlowResultModel {
    fn from(result: &FlowResult) -> Self {
        Self {
            flows: result.flows.iter().map(FlowModel::from).collect(),
            total_cost: result.total_cost,
            total_time: result.total_time,
            average_spoilage_risk: result.average_spoilage_risk,
            network_efficiency: result.network_efficiency,
            successful_pairs: result.successful_pairs,
            total_pairs: result.total_pairs,
            path_success_rate: result.path_success_rate,
            performance_score: result.performance_score,
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(writer: BufWriter<W>, value: &T) -> Result<(), String> {
    serde_json::to_writer_pretty(writer, value).map_err(|err| format!("cannot write result: '{err}'"))
}

/// Writes links in json format.
pub fn write_links<W: Write>(writer: BufWriter<W>, links: &[Link]) -> Result<(), String> {
    write_json(writer, &links.iter().map(LinkModel::from).collect::<Vec<_>>())
}

/// Writes optional path in json format, missing path is written as `null`.
pub fn write_path<W: Write>(writer: BufWriter<W>, path: Option<&PathResult>) -> Result<(), String> {
    write_json(writer, &path.map(PathModel::from))
}

/// Writes list of paths in json format.
pub fn write_paths<W: Write>(writer: BufWriter<W>, paths: &[PathResult]) -> Result<(), String> {
    write_json(writer, &paths.iter().map(PathModel::from).collect::<Vec<_>>())
}

/// Writes flow result in json format.
pub fn write_flow<W: Write>(writer: BufWriter<W>, result: &FlowResult) -> Result<(), String> {
    write_json(writer, &FlowResultModel::from(result))
}
