use crate::models::Coordinate;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// The result is rounded to two decimal places; that rounded value is part of
/// the filtering contract, so callers compare against it directly.
///
/// # Arguments
/// * `reference` - The fixed point all customers are measured against
/// * `point` - The customer's position
///
/// # Returns
/// Distance in kilometers, rounded to 2 decimals
#[inline]
pub fn haversine_distance(reference: Coordinate, point: Coordinate) -> f64 {
    let ref_lat_rad = reference.latitude.to_radians();
    let point_lat_rad = point.latitude.to_radians();
    let delta_lat = (reference.latitude - point.latitude).to_radians();
    let delta_lon = (reference.longitude - point.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + ref_lat_rad.cos() * point_lat_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    round_2dp(EARTH_RADIUS_KM * c)
}

/// Round to two decimal places, halves away from zero
#[inline]
fn round_2dp(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
