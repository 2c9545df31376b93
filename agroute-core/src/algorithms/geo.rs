//! Great-circle distance estimations.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/geo_test.rs"]
mod geo_test;

use crate::utils::Float;

/// Mean Earth radius in km.
pub const EARTH_RADIUS_KM: Float = 6371.;

/// Gets distance in km between two points using haversine formula.
pub fn distance_km(lat1: Float, lng1: Float, lat2: Float, lng2: Float) -> Float {
    let d_lat = degree_rad(lat2 - lat1);
    let d_lng = degree_rad(lng2 - lng1);

    let lat1 = degree_rad(lat1);
    let lat2 = degree_rad(lat2);

    let a = (d_lat / 2.).sin().powi(2) + (d_lng / 2.).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Converts degrees to radians.
#[inline(always)]
fn degree_rad(degrees: Float) -> Float {
    std::f64::consts::PI * degrees / 180.
}
