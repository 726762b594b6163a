use crate::config::Settings;
use crate::core::filters::{customers_within_radius, FilterError};
use crate::models::{Coordinate, Customer};
use crate::services::reporter;
use crate::services::store::{load_customers, StoreError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default invitation radius in kilometers
pub const DEFAULT_RADIUS_KM: f64 = 100.0;

/// Default customer file, relative to the working directory
pub const DEFAULT_CUSTOMERS_FILE: &str = "common/customers.json";

/// Dublin office, the default reference point
pub const DUBLIN_OFFICE: Coordinate = Coordinate {
    latitude: 53.339428,
    longitude: -6.257664,
};

/// Errors surfaced by an invitation run
///
/// Store and filter errors pass through transparently so their messages reach
/// the caller unchanged.
#[derive(Debug, Error)]
pub enum InviteError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("failed to write invited list: {0}")]
    Io(#[from] std::io::Error),
}

/// Main invitation orchestrator - runs the load/filter/emit pipeline
///
/// # Pipeline stages
/// 1. Load customers from the configured file (fresh on every call)
/// 2. Keep those within the radius, sorted by `user_id` ascending
/// 3. Emit one line per invited customer to stdout
///
/// The invited list from the most recent successful run is kept for
/// inspection; a failed run leaves the previous list untouched.
#[derive(Debug, Clone)]
pub struct GeoInviter {
    file: PathBuf,
    reference: Coordinate,
    invited: Vec<Customer>,
}

impl Default for GeoInviter {
    fn default() -> Self {
        Self::new(DEFAULT_CUSTOMERS_FILE, DUBLIN_OFFICE)
    }
}

impl GeoInviter {
    pub fn new(file: impl Into<PathBuf>, reference: Coordinate) -> Self {
        Self {
            file: file.into(),
            reference,
            invited: Vec::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.customers.file.clone(), settings.reference())
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn reference(&self) -> Coordinate {
        self.reference
    }

    /// The invited list from the most recent successful `invite` call
    pub fn invited_customers(&self) -> &[Customer] {
        &self.invited
    }

    /// Invite every customer within `radius_km` of the reference point
    ///
    /// Loads the customer file, filters and sorts, prints the result to
    /// stdout and stores it. Any load or validation failure aborts before a
    /// single line of output is produced.
    pub fn invite(&mut self, radius_km: f64) -> Result<&[Customer], InviteError> {
        let invited = self.select(radius_km)?;
        reporter::print_invited(&invited)?;
        self.invited = invited;
        Ok(&self.invited)
    }

    /// Invite, emitting to the caller's writer instead of stdout
    pub fn invite_to<W: std::io::Write>(
        &mut self,
        radius_km: f64,
        out: &mut W,
    ) -> Result<&[Customer], InviteError> {
        let invited = self.select(radius_km)?;
        reporter::emit(out, &invited)?;
        self.invited = invited;
        Ok(&self.invited)
    }

    fn select(&self, radius_km: f64) -> Result<Vec<Customer>, InviteError> {
        let customers = load_customers(&self.file)?;
        tracing::debug!(
            "inviting within {} km of ({}, {})",
            radius_km,
            self.reference.latitude,
            self.reference.longitude
        );
        let invited = customers_within_radius(&customers, self.reference, radius_km)?;
        Ok(invited)
    }
}
