use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees
///
/// Values are taken as-is; out-of-range coordinates still produce a numeric
/// distance rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One customer record as read from the input file
///
/// Latitude and longitude arrive either as JSON numbers or as numeric strings
/// (`"52.986375"`); both are coerced to `f64` at parse time. A value that is
/// not numeric after coercion fails the parse instead of degrading to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub user_id: i64,
    pub name: String,
    #[serde(deserialize_with = "coerce_f64")]
    pub latitude: f64,
    #[serde(deserialize_with = "coerce_f64")]
    pub longitude: f64,
}

impl Customer {
    /// The customer's position as a single value
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Accept a JSON number or a numeric string; reject everything else
pub(crate) fn coerce_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::String(text) => text.trim().parse::<f64>().map_err(|_| {
            de::Error::custom(format!("coordinate value is not numeric: {:?}", text))
        }),
    }
}
