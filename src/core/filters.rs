use crate::core::distance::haversine_distance;
use crate::models::{Coordinate, Customer};
use thiserror::Error;

/// Errors raised by the radius filter
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    // Historical message, kept verbatim: the accepted domain is any
    // non-negative real number, not just integers.
    #[error("Radius should be integer")]
    InvalidRadius,
}

/// Select the customers within `radius_km` of `reference`, sorted by
/// `user_id` ascending
///
/// The boundary is inclusive: a customer sitting exactly on the radius is
/// kept. The sort is stable, so customers sharing a `user_id` keep their
/// input order. The input slice is never mutated.
///
/// # Errors
/// `FilterError::InvalidRadius` when the radius is negative or NaN; no
/// customer is evaluated in that case. An infinite radius is a valid
/// non-negative value and invites every customer.
pub fn customers_within_radius(
    customers: &[Customer],
    reference: Coordinate,
    radius_km: f64,
) -> Result<Vec<Customer>, FilterError> {
    if radius_km.is_nan() || radius_km < 0.0 {
        return Err(FilterError::InvalidRadius);
    }

    let mut invited: Vec<Customer> = customers
        .iter()
        .filter(|customer| haversine_distance(reference, customer.coordinate()) <= radius_km)
        .cloned()
        .collect();

    // Stable sort: equal ids keep input order
    invited.sort_by_key(|customer| customer.user_id);

    tracing::debug!(
        "{} of {} customers within {} km",
        invited.len(),
        customers.len(),
        radius_km
    );

    Ok(invited)
}
