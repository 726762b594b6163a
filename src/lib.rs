//! Geoinvite - customer invitations by geographic proximity
//!
//! Reads customer records from a newline-delimited JSON file, keeps the ones
//! within a given radius of a fixed reference point (great-circle distance),
//! and emits them sorted by user id ascending.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::Settings;
pub use core::{
    haversine_distance, customers_within_radius, FilterError, GeoInviter, InviteError,
    DEFAULT_RADIUS_KM, DUBLIN_OFFICE,
};
pub use models::{Coordinate, Customer};
pub use services::{load_customers, StoreError};
