//! Spoilage risk estimations for perishable products.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/spoilage_test.rs"]
mod spoilage_test;

use crate::utils::{Float, GenericError};
use std::str::FromStr;

/// Temperature (°C) at or below which transport is considered refrigerated.
pub const REFRIGERATION_THRESHOLD: Float = 4.;

/// Max spoilage risk, percent.
pub const MAX_SPOILAGE_RISK: Float = 100.;

const REFERENCE_TEMPERATURE: Float = 25.;
const TEMPERATURE_SCALE: Float = 10.;

/// Specifies a perishable product kind which has its own decay rates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProductKind {
    /// Raw milk.
    #[default]
    Milk,
    /// Yogurt.
    Yogurt,
    /// Cheese.
    Cheese,
    /// Butter.
    Butter,
    /// Cream.
    Cream,
    /// Ice cream.
    IceCream,
}

/// Decay rates in percent per hour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecayRates {
    /// A rate when transported above refrigeration threshold.
    pub ambient: Float,
    /// A rate when transported refrigerated.
    pub refrigerated: Float,
}

impl ProductKind {
    /// Returns decay rates of the product.
    pub fn decay_rates(&self) -> DecayRates {
        let (ambient, refrigerated) = match self {
            Self::Milk => (2.0, 0.2),
            Self::Yogurt => (1.5, 0.15),
            Self::Cheese => (0.5, 0.05),
            Self::Butter => (0.8, 0.08),
            Self::Cream => (2.5, 0.25),
            Self::IceCream => (5.0, 0.5),
        };

        DecayRates { ambient, refrigerated }
    }

    /// Parses product name falling back to milk for unknown names.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Returns a snake case name of the product.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Milk => "milk",
            Self::Yogurt => "yogurt",
            Self::Cheese => "cheese",
            Self::Butter => "butter",
            Self::Cream => "cream",
            Self::IceCream => "ice_cream",
        }
    }

    /// Estimates spoilage risk (percent) for given transit time and temperature.
    ///
    /// At or below 4°C refrigerated rate is used as is. Above it, ambient rate grows
    /// exponentially with temperature relative to 25°C. The result is capped at 100.
    pub fn spoilage_risk(&self, time_hours: Float, temperature: Float) -> Float {
        let rates = self.decay_rates();

        let (rate, multiplier) = if temperature <= REFRIGERATION_THRESHOLD {
            (rates.refrigerated, 1.)
        } else {
            (rates.ambient, ((temperature - REFERENCE_TEMPERATURE) / TEMPERATURE_SCALE).exp())
        };

        (rate * time_hours * multiplier).min(MAX_SPOILAGE_RISK)
    }
}

impl FromStr for ProductKind {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "milk" => Ok(Self::Milk),
            "yogurt" => Ok(Self::Yogurt),
            "cheese" => Ok(Self::Cheese),
            "butter" => Ok(Self::Butter),
            "cream" => Ok(Self::Cream),
            "ice_cream" | "icecream" | "ice-cream" => Ok(Self::IceCream),
            _ => Err(format!("unknown product kind: '{value}'").into()),
        }
    }
}

/// Estimates spoilage risk of milk.
pub fn spoilage_risk(time_hours: Float, temperature: Float) -> Float {
    ProductKind::Milk.spoilage_risk(time_hours, temperature)
}

/// Estimates spoilage risk of the product given by name, unknown names are treated as milk.
pub fn spoilage_risk_for(time_hours: Float, temperature: Float, product: &str) -> Float {
    ProductKind::from_name(product).spoilage_risk(time_hours, temperature)
}
