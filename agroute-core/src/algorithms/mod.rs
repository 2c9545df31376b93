//! Contains domain independent formulas used to estimate link attributes.

pub mod geo;
pub mod spoilage;
