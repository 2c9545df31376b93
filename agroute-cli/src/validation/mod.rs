//! This module provides functionality to validate network definition for logical correctness.
//! Routing algorithms do not check their input, so malformed values are rejected here.

#[cfg(test)]
#[path = "../../tests/unit/validation/validation_test.rs"]
mod validation_test;

use crate::format::network::{FacilityModel, FacilityType, Network};
use crate::format::FormatError;
use std::collections::HashSet;

/// Keeps network definition to validate.
pub struct ValidationContext<'a> {
    /// A network definition.
    pub network: &'a Network,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    /// Validates network on set of rules.
    pub fn validate(&self) -> Result<(), Vec<FormatError>> {
        let errors = [
            check_e1000_no_facilities_with_duplicate_ids(self),
            check_e1001_coordinates_are_valid(self),
            check_e1002_amounts_are_not_negative(self),
            check_e1003_production_and_demand_types(self),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect::<Vec<_>>();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Get list of facilities from the network.
    fn facilities(&self) -> impl Iterator<Item = &FacilityModel> {
        self.network.facilities.iter()
    }
}

/// Checks that network has no facilities with duplicate ids.
fn check_e1000_no_facilities_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    let mut ids = HashSet::new();
    let duplicates = ctx
        .facilities()
        .filter(|facility| !ids.insert(facility.id.as_str()))
        .map(|facility| facility.id.clone())
        .collect::<HashSet<_>>();

    to_result("E1000", "duplicated facility ids", "remove duplicated facilities or change their ids", duplicates)
}

/// Checks that coordinates are finite and within allowed ranges.
fn check_e1001_coordinates_are_valid(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = get_ids(ctx, |facility| {
        let (lat, lng) = (facility.location.lat, facility.location.lng);
        !((-90. ..=90.).contains(&lat) && (-180. ..=180.).contains(&lng))
    });

    to_result("E1001", "invalid coordinates", "use latitude in [-90, 90] and longitude in [-180, 180]", ids)
}

/// Checks that capacity, production and demand are not negative.
fn check_e1002_amounts_are_not_negative(ctx: &ValidationContext) -> Result<(), FormatError> {
    let is_invalid = |value: f64| !(value >= 0.);
    let ids = get_ids(ctx, |facility| {
        is_invalid(facility.capacity)
            || facility.production.is_some_and(is_invalid)
            || facility.demand.is_some_and(is_invalid)
    });

    to_result("E1002", "negative or invalid amounts", "use non-negative capacity, production and demand", ids)
}

/// Checks that production is set only for producers and demand only for retailers.
fn check_e1003_production_and_demand_types(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = get_ids(ctx, |facility| {
        (facility.production.is_some() && facility.type_field != FacilityType::Producer)
            || (facility.demand.is_some() && facility.type_field != FacilityType::Retail)
    });

    to_result("E1003", "misplaced production or demand", "set production on producers and demand on retailers", ids)
}

fn get_ids<F>(ctx: &ValidationContext, is_invalid: F) -> Vec<String>
where
    F: Fn(&FacilityModel) -> bool,
{
    ctx.facilities().filter(|facility| is_invalid(facility)).map(|facility| facility.id.clone()).collect()
}

fn to_result<I>(code: &str, cause: &str, action: &str, ids: I) -> Result<(), FormatError>
where
    I: IntoIterator<Item = String>,
{
    let mut ids = ids.into_iter().collect::<Vec<_>>();
    ids.sort();

    if ids.is_empty() { Ok(()) } else { Err(FormatError::new(code, format!("{cause}: {}", ids.join(", ")), action)) }
}
