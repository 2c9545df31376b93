//! A collection of models to represent supply network and routing results.

mod network;
pub use self::network::*;

mod weights;
pub use self::weights::*;

mod results;
pub use self::results::*;

use crate::utils::Float;

/// Ambient temperature (°C) used when no weather information is available.
pub const DEFAULT_AMBIENT_TEMPERATURE: Float = 25.;
