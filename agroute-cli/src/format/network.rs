//! Supply network model in pragmatic json format.

#[cfg(test)]
#[path = "../../tests/unit/format/network_test.rs"]
mod network_test;

use crate::format::{FormatError, Location};
use crate::validation::ValidationContext;
use agroute_core::models::{Facility, FacilityKind};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};

/// A facility type.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FacilityType {
    /// A farm.
    Producer,
    /// A collection point.
    Collection,
    /// A processing plant.
    Processing,
    /// A distribution center.
    Distributor,
    /// A retail point.
    Retail,
}

impl From<FacilityType> for FacilityKind {
    fn from(value: FacilityType) -> Self {
        match value {
            FacilityType::Producer => FacilityKind::Producer,
            FacilityType::Collection => FacilityKind::Collection,
            FacilityType::Processing => FacilityKind::Processing,
            FacilityType::Distributor => FacilityKind::Distributor,
            FacilityType::Retail => FacilityKind::Retail,
        }
    }
}

/// A supply network facility.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityModel {
    /// A unique facility id.
    pub id: String,
    /// A display name, defaults to id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// A facility type.
    #[serde(rename(deserialize = "type", serialize = "type"))]
    pub type_field: FacilityType,
    /// A facility location.
    pub location: Location,
    /// Storage or throughput capacity.
    pub capacity: f64,
    /// Daily production, producers only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production: Option<f64>,
    /// Daily demand, retailers only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demand: Option<f64>,
    /// Hidden facilities are excluded from routing. Default is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

/// A supply network definition.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Network facilities.
    pub facilities: Vec<FacilityModel>,
}

impl FacilityModel {
    /// Converts facility into core model.
    pub fn to_core(&self) -> Facility {
        Facility {
            id: self.id.clone(),
            name: self.name.clone().unwrap_or_else(|| self.id.clone()),
            kind: self.type_field.into(),
            latitude: self.location.lat,
            longitude: self.location.lng,
            capacity: self.capacity,
            production: self.production,
            demand: self.demand,
            visible: self.visible.unwrap_or(true),
        }
    }
}

/// Deserializes network in json format from [`BufReader`].
pub fn deserialize_network<R: Read>(reader: BufReader<R>) -> Result<Network, Vec<FormatError>> {
    serde_json::from_reader(reader)
        .map_err(|err| {
            vec![FormatError::new_with_details(
                "E0000",
                "cannot deserialize network".to_string(),
                "check input json",
                err.to_string(),
            )]
        })
}

/// Reads, validates and converts network into list of core facilities.
pub fn read_network<R: Read>(reader: BufReader<R>) -> Result<Vec<Facility>, Vec<FormatError>> {
    let network = deserialize_network(reader)?;

    ValidationContext::new(&network).validate()?;

    Ok(network.facilities.iter().map(|facility| facility.to_core()).collect())
}
