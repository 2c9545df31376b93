//! Contains path search over synthesized network and flow aggregation logic.

mod graph;
pub use self::graph::*;

mod flow;
pub use self::flow::*;
