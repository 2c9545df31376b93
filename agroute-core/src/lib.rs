//! Core crate contains building blocks to route perishable goods through a multi-echelon
//! supply network: producers, collection points, processing plants, distributors and retailers.
//!
//! The main entry points are:
//!
//! - [`construction::synthesize_edges`] to derive candidate links from facility geography
//! - [`solver::shortest_path`] to find a single pair path minimizing a composite weight
//! - [`solver::network_flow`] to aggregate paths between all producers and retailers
//!
//! # Examples
//!
//! ```
//! use agroute_core::prelude::*;
//!
//! let facilities = vec![
//!     Facility::new("p1", "Hill farm", FacilityKind::Producer, 0., 0., 1000.).with_production(800.),
//!     Facility::new("c1", "Valley collection", FacilityKind::Collection, 0.1, 0., 5000.),
//!     Facility::new("pl1", "Dairy plant", FacilityKind::Processing, 0.1, 0.1, 20000.),
//! ];
//!
//! let links = synthesize_edges(&facilities, DEFAULT_AMBIENT_TEMPERATURE);
//! let path = shortest_path(&facilities, &links, "p1", "pl1", &OptimizationWeights::default());
//!
//! assert_eq!(path.map(|path| path.nodes), Some(vec!["p1".to_string(), "c1".to_string(), "pl1".to_string()]));
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub mod algorithms;
pub mod construction;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
