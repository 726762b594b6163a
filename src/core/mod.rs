// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod inviter;

pub use distance::haversine_distance;
pub use filters::{customers_within_radius, FilterError};
pub use inviter::{GeoInviter, InviteError, DEFAULT_RADIUS_KM, DUBLIN_OFFICE};
