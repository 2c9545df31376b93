#[cfg(test)]
#[path = "../../tests/unit/models/network_test.rs"]
mod network_test;

use crate::utils::Float;
use std::fmt;

/// Specifies a stage (echelon) of the supply chain. Variants are ordered from upstream to downstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacilityKind {
    /// A farm which produces raw goods.
    Producer,
    /// A collection point which gathers goods from nearby producers.
    Collection,
    /// A processing plant.
    Processing,
    /// A distribution center.
    Distributor,
    /// A retail point with end consumer demand.
    Retail,
}

impl FacilityKind {
    /// All kinds in supply chain order.
    pub const ALL: [FacilityKind; 5] = [
        FacilityKind::Producer,
        FacilityKind::Collection,
        FacilityKind::Processing,
        FacilityKind::Distributor,
        FacilityKind::Retail,
    ];

    /// Returns a zero based echelon index.
    pub fn echelon(&self) -> usize {
        *self as usize
    }

    /// Returns the adjacent downstream kind, if any.
    pub fn next(&self) -> Option<FacilityKind> {
        Self::ALL.get(self.echelon() + 1).copied()
    }

    /// Returns true if a link from this kind to the `other` one is allowed.
    pub fn is_adjacent_to(&self, other: FacilityKind) -> bool {
        self.next() == Some(other)
    }

    /// Returns a lowercase name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Producer => "producer",
            Self::Collection => "collection",
            Self::Processing => "processing",
            Self::Distributor => "distributor",
            Self::Retail => "retail",
        }
    }
}

impl fmt::Display for FacilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a geolocated facility of the supply network.
#[derive(Clone, Debug, PartialEq)]
pub struct Facility {
    /// A unique facility id.
    pub id: String,
    /// A display name.
    pub name: String,
    /// A supply chain stage.
    pub kind: FacilityKind,
    /// Latitude in degrees.
    pub latitude: Float,
    /// Longitude in degrees.
    pub longitude: Float,
    /// Storage or throughput capacity.
    pub capacity: Float,
    /// Daily output, producers only.
    pub production: Option<Float>,
    /// Daily requirement, retailers only.
    pub demand: Option<Float>,
    /// Hidden facilities are excluded from any computation.
    pub visible: bool,
}

impl Facility {
    /// Creates a visible facility without production and demand.
    pub fn new(id: &str, name: &str, kind: FacilityKind, latitude: Float, longitude: Float, capacity: Float) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            latitude,
            longitude,
            capacity,
            production: None,
            demand: None,
            visible: true,
        }
    }

    /// Sets daily production.
    pub fn with_production(mut self, production: Float) -> Self {
        self.production = Some(production);
        self
    }

    /// Sets daily demand.
    pub fn with_demand(mut self, demand: Float) -> Self {
        self.demand = Some(demand);
        self
    }

    /// Sets visibility flag.
    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Specifies a vehicle used on a link. Each supply chain tier has its own vehicle kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    /// Farm pickup tanker.
    MilkTanker,
    /// Insulated bulk truck.
    InsulatedTruck,
    /// Refrigerated long haul truck.
    RefrigeratedTruck,
    /// Small delivery van for the last mile.
    DeliveryVan,
}

impl VehicleKind {
    /// Returns a snake case name of the vehicle kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MilkTanker => "milk_tanker",
            Self::InsulatedTruck => "insulated_truck",
            Self::RefrigeratedTruck => "refrigerated_truck",
            Self::DeliveryVan => "delivery_van",
        }
    }
}

/// A directed transport link between facilities of adjacent echelons.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    /// Source facility id.
    pub from: String,
    /// Destination facility id.
    pub to: String,
    /// Great-circle distance in km.
    pub distance_km: Float,
    /// Travel time in hours.
    pub time_hours: Float,
    /// Transport cost in currency units.
    pub cost: Float,
    /// Spoilage risk in percent, 0..=100.
    pub spoilage_risk: Float,
    /// A vehicle kind serving the link.
    pub vehicle: VehicleKind,
    /// Volume per trip.
    pub capacity: Float,
}
