use crate::core::inviter::{DEFAULT_CUSTOMERS_FILE, DEFAULT_RADIUS_KM, DUBLIN_OFFICE};
use crate::models::domain::coerce_f64;
use crate::models::Coordinate;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
///
/// Every field has a default, so the binary runs with no config file and no
/// environment set: customer file, reference coordinate and the default
/// radius.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub customers: CustomersSettings,
    pub reference: ReferenceSettings,
    pub invite: InviteSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CustomersSettings {
    pub file: String,
}

impl Default for CustomersSettings {
    fn default() -> Self {
        Self {
            file: DEFAULT_CUSTOMERS_FILE.to_string(),
        }
    }
}

/// Reference point; latitude/longitude accept numbers or numeric strings,
/// same coercion as the customer records
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReferenceSettings {
    #[serde(deserialize_with = "coerce_f64")]
    pub latitude: f64,
    #[serde(deserialize_with = "coerce_f64")]
    pub longitude: f64,
}

impl Default for ReferenceSettings {
    fn default() -> Self {
        Self {
            latitude: DUBLIN_OFFICE.latitude,
            longitude: DUBLIN_OFFICE.longitude,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InviteSettings {
    pub radius_km: f64,
}

impl Default for InviteSettings {
    fn default() -> Self {
        Self {
            radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with GEOINVITE__)
    ///    e.g., GEOINVITE__INVITE__RADIUS_KM -> invite.radius_km
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("GEOINVITE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("GEOINVITE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// The configured reference point as a coordinate
    pub fn reference(&self) -> Coordinate {
        Coordinate::new(self.reference.latitude, self.reference.longitude)
    }
}
