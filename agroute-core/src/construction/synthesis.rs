#[cfg(test)]
#[path = "../../tests/unit/construction/synthesis_test.rs"]
mod synthesis_test;

use crate::algorithms::geo::distance_km;
use crate::algorithms::spoilage::ProductKind;
use crate::models::{Facility, FacilityKind, Link, VehicleKind};
use crate::utils::Float;

/// Specifies how link capacity is derived from its endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LinkCapacity {
    /// Source production (zero when unknown) capped by the given value.
    SourceProductionCapped(Float),
    /// Destination storage capacity.
    DestinationCapacity,
    /// A share of source capacity.
    SourceCapacityShare(Float),
    /// Destination demand or the given default.
    DestinationDemandOr(Float),
}

impl LinkCapacity {
    fn evaluate(&self, source: &Facility, destination: &Facility) -> Float {
        match *self {
            Self::SourceProductionCapped(cap) => source.production.unwrap_or(0.).min(cap),
            Self::DestinationCapacity => destination.capacity,
            Self::SourceCapacityShare(share) => source.capacity * share,
            Self::DestinationDemandOr(default) => destination.demand.unwrap_or(default),
        }
    }
}

/// A transport policy between two adjacent echelons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierPolicy {
    /// Source facility kind.
    pub from: FacilityKind,
    /// Destination facility kind.
    pub to: FacilityKind,
    /// Max link distance, inclusive.
    pub radius_km: Float,
    /// Average vehicle speed.
    pub speed_kmh: Float,
    /// Transport cost per km.
    pub rate_per_km: Float,
    /// A vehicle kind serving the tier.
    pub vehicle: VehicleKind,
    /// A link capacity rule.
    pub capacity: LinkCapacity,
}

/// Tier policies in supply chain order.
pub const TIER_POLICIES: [TierPolicy; 4] = [
    TierPolicy {
        from: FacilityKind::Producer,
        to: FacilityKind::Collection,
        radius_km: 50.,
        speed_kmh: 40.,
        rate_per_km: 15.,
        vehicle: VehicleKind::MilkTanker,
        capacity: LinkCapacity::SourceProductionCapped(2000.),
    },
    TierPolicy {
        from: FacilityKind::Collection,
        to: FacilityKind::Processing,
        radius_km: 100.,
        speed_kmh: 50.,
        rate_per_km: 20.,
        vehicle: VehicleKind::InsulatedTruck,
        capacity: LinkCapacity::DestinationCapacity,
    },
    TierPolicy {
        from: FacilityKind::Processing,
        to: FacilityKind::Distributor,
        radius_km: 150.,
        speed_kmh: 60.,
        rate_per_km: 18.,
        vehicle: VehicleKind::RefrigeratedTruck,
        capacity: LinkCapacity::SourceCapacityShare(0.1),
    },
    TierPolicy {
        from: FacilityKind::Distributor,
        to: FacilityKind::Retail,
        radius_km: 75.,
        speed_kmh: 45.,
        rate_per_km: 12.,
        vehicle: VehicleKind::DeliveryVan,
        capacity: LinkCapacity::DestinationDemandOr(500.),
    },
];

impl TierPolicy {
    /// Returns a policy for links starting at the given kind.
    pub fn for_source(kind: FacilityKind) -> Option<&'static TierPolicy> {
        TIER_POLICIES.iter().find(|policy| policy.from == kind)
    }

    /// Creates a link between two facilities if they are within the tier radius.
    pub fn create_link(
        &self,
        source: &Facility,
        destination: &Facility,
        ambient_temp: Float,
        product: ProductKind,
    ) -> Option<Link> {
        let distance_km = distance_km(source.latitude, source.longitude, destination.latitude, destination.longitude);

        // NOTE NaN distance fails the comparison, so malformed coordinates produce no link
        if !(distance_km <= self.radius_km) {
            return None;
        }

        let time_hours = distance_km / self.speed_kmh;

        Some(Link {
            from: source.id.clone(),
            to: destination.id.clone(),
            distance_km,
            time_hours,
            cost: distance_km * self.rate_per_km,
            spoilage_risk: product.spoilage_risk(time_hours, ambient_temp),
            vehicle: self.vehicle,
            capacity: self.capacity.evaluate(source, destination),
        })
    }
}

/// Synthesizes candidate links for milk transport.
pub fn synthesize_edges(facilities: &[Facility], ambient_temp: Float) -> Vec<Link> {
    synthesize_edges_for(facilities, ambient_temp, ProductKind::Milk)
}

/// Synthesizes candidate links between every pair of visible facilities of adjacent echelons
/// which are within the tier radius. The full link set is derived on each call.
pub fn synthesize_edges_for(facilities: &[Facility], ambient_temp: Float, product: ProductKind) -> Vec<Link> {
    let of_kind = |kind: FacilityKind| facilities.iter().filter(move |f| f.visible && f.kind == kind);

    TIER_POLICIES
        .iter()
        .flat_map(move |policy| {
            of_kind(policy.from).flat_map(move |source| {
                of_kind(policy.to).filter_map(move |destination| {
                    policy.create_link(source, destination, ambient_temp, product)
                })
            })
        })
        .collect()
}
