//! Routing configuration.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

extern crate serde_json;

use crate::format::FormatError;
use agroute_core::algorithms::spoilage::ProductKind;
use agroute_core::models::{DEFAULT_AMBIENT_TEMPERATURE, OptimizationWeights};
use agroute_core::solver::FlowAggregator;
use agroute_core::utils::{Environment, InfoLogger, Parallelism, get_cpus};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A routing configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Ambient temperature in °C. Default is 25.
    pub ambient_temperature: Option<f64>,
    /// Transported product kind. Default is milk.
    pub product: Option<String>,
    /// Optimization weights.
    pub weights: Option<WeightsConfig>,
    /// Parallelism settings.
    pub parallelism: Option<ParallelismConfig>,
    /// Logging settings.
    pub logging: Option<LoggingConfig>,
}

/// Optimization weights configuration, missing weights use default values.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightsConfig {
    /// Distance weight. Default is 0.3.
    pub distance: Option<f64>,
    /// Time weight. Default is 0.3.
    pub time: Option<f64>,
    /// Cost weight. Default is 0.2.
    pub cost: Option<f64>,
    /// Spoilage risk weight. Default is 0.2.
    pub spoilage_risk: Option<f64>,
}

/// Parallelism configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallelismConfig {
    /// Enables parallel path searches.
    pub enabled: bool,
    /// Amount of threads, default is amount of CPUs.
    pub threads: Option<usize>,
}

/// Logging configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Enables logging.
    pub enabled: bool,
}

/// Keeps resolved settings used by routing operations.
#[derive(Clone)]
pub struct RoutingContext {
    /// Ambient temperature in °C.
    pub ambient_temp: f64,
    /// Transported product.
    pub product: ProductKind,
    /// Optimization weights.
    pub weights: OptimizationWeights,
    /// Execution environment.
    pub environment: Environment,
}

impl RoutingContext {
    /// Creates a flow aggregator using context settings.
    pub fn create_aggregator(&self) -> FlowAggregator {
        FlowAggregator::new(self.environment.clone())
            .with_ambient_temperature(self.ambient_temp)
            .with_product(self.product)
            .with_weights(self.weights)
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Validates config values.
pub fn validate_config(config: &Config) -> Result<(), Vec<FormatError>> {
    let weights = config.weights.clone().unwrap_or_default();
    let invalid_weights = [
        ("distance", weights.distance),
        ("time", weights.time),
        ("cost", weights.cost),
        ("spoilageRisk", weights.spoilage_risk),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_some_and(|value| !(value >= 0. && value.is_finite())))
    .map(|(name, _)| name)
    .collect::<Vec<_>>();

    let mut errors = Vec::default();

    if !invalid_weights.is_empty() {
        errors.push(FormatError::new(
            "E1200",
            format!("invalid optimization weights: {}", invalid_weights.join(", ")),
            "use non-negative finite weights",
        ));
    }

    if let Some(temperature) = config.ambient_temperature.filter(|temperature| !temperature.is_finite()) {
        errors.push(FormatError::new(
            "E1200",
            format!("invalid ambient temperature: {temperature}"),
            "use finite temperature in °C",
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Creates routing context from config. Unknown product falls back to milk.
pub fn create_routing_context(config: &Config) -> Result<RoutingContext, String> {
    validate_config(config).map_err(|errors| FormatError::format_many(&errors, "\n"))?;

    let logger = create_logger(config.logging.as_ref().is_some_and(|logging| logging.enabled));
    let parallelism = create_parallelism(config.parallelism.as_ref())?;

    let product = match config.product.as_deref().map(str::parse::<ProductKind>) {
        Some(Ok(product)) => product,
        Some(Err(err)) => {
            logger(format!("{err}, fallback to milk").as_str());
            ProductKind::Milk
        }
        None => ProductKind::default(),
    };

    let defaults = OptimizationWeights::default();
    let weights = config.weights.as_ref().map_or(defaults, |weights| OptimizationWeights {
        distance: weights.distance.unwrap_or(defaults.distance),
        time: weights.time.unwrap_or(defaults.time),
        cost: weights.cost.unwrap_or(defaults.cost),
        spoilage_risk: weights.spoilage_risk.unwrap_or(defaults.spoilage_risk),
    });

    Ok(RoutingContext {
        ambient_temp: config.ambient_temperature.unwrap_or(DEFAULT_AMBIENT_TEMPERATURE),
        product,
        weights,
        environment: Environment::new(parallelism, logger),
    })
}

fn create_logger(is_enabled: bool) -> InfoLogger {
    if is_enabled {
        return Arc::new(|msg: &str| eprintln!("{msg}"));
    }

    Arc::new(|_: &str| {})
}

fn create_parallelism(config: Option<&ParallelismConfig>) -> Result<Parallelism, String> {
    match config {
        Some(ParallelismConfig { enabled: false, .. }) => Ok(Parallelism::Sequential),
        Some(ParallelismConfig { enabled: true, threads }) => {
            Parallelism::new_with_threads(threads.unwrap_or_else(get_cpus)).map_err(|err| err.to_string())
        }
        None => Ok(Parallelism::default()),
    }
}
