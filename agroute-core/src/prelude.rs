//! This module reimports commonly used types.

pub use crate::algorithms::geo::distance_km;
pub use crate::algorithms::spoilage::{ProductKind, spoilage_risk, spoilage_risk_for};

pub use crate::construction::{TierPolicy, synthesize_edges, synthesize_edges_for};

pub use crate::models::{
    DEFAULT_AMBIENT_TEMPERATURE, Facility, FacilityKind, FlowEntry, FlowResult, Link, OptimizationWeights,
    PathResult, VehicleKind,
};

pub use crate::solver::{FlowAggregator, NetworkGraph, find_all_paths, network_flow, shortest_path};

pub use crate::utils::{Environment, Float, GenericError, GenericResult, InfoLogger};
