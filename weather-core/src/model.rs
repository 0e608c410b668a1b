use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provider-assigned location id, stable across repeated lookups of the same place.
pub type LocationId = u64;

/// One snapshot of current conditions for a named place.
///
/// All measurements are stored in metric units (Celsius, m/s). Conversion to
/// Fahrenheit/mph happens only when rendering, see [`crate::units`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationWeather {
    pub id: LocationId,
    pub name: String,
    pub country: String,
    pub coord: Coordinates,
    pub temperature: Temperatures,
    pub pressure_hpa: f64,
    pub humidity_pct: u8,
    pub wind: Wind,
    pub conditions: Conditions,
    pub cloud_cover_pct: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
}

impl LocationWeather {
    /// The condition every consumer displays.
    pub fn condition(&self) -> &Condition {
        self.conditions.primary()
    }

    /// "Paris, FR"
    pub fn display_name(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Temperature metrics in Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperatures {
    pub current_c: f64,
    pub feels_like_c: f64,
    pub min_c: f64,
    pub max_c: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed_mps: f64,
    pub direction_deg: f64,
}

/// A weather condition descriptor, e.g. category "Rain" with description "light rain".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub code: u32,
    pub category: String,
    pub description: String,
    pub icon: String,
}

/// Non-empty, ordered list of condition descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Condition>", into = "Vec<Condition>")]
pub struct Conditions(Vec<Condition>);

impl Conditions {
    pub fn primary(&self) -> &Condition {
        // Non-empty by construction.
        &self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("location record has no weather conditions")]
pub struct EmptyConditions;

impl TryFrom<Vec<Condition>> for Conditions {
    type Error = EmptyConditions;

    fn try_from(value: Vec<Condition>) -> Result<Self, Self::Error> {
        if value.is_empty() {
            Err(EmptyConditions)
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Conditions> for Vec<Condition> {
    fn from(value: Conditions) -> Self {
        value.0
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A minimal record for tests; temperature in Celsius.
    pub fn location(id: LocationId, name: &str, country: &str, temp_c: f64) -> LocationWeather {
        LocationWeather {
            id,
            name: name.to_string(),
            country: country.to_string(),
            coord: Coordinates { lat: 48.85, lon: 2.35 },
            temperature: Temperatures {
                current_c: temp_c,
                feels_like_c: temp_c - 1.0,
                min_c: temp_c - 3.0,
                max_c: temp_c + 2.0,
            },
            pressure_hpa: 1015.0,
            humidity_pct: 72,
            wind: Wind { speed_mps: 10.0, direction_deg: 225.0 },
            conditions: Conditions::try_from(vec![Condition {
                code: 800,
                category: "Clear".to_string(),
                description: "clear sky".to_string(),
                icon: "01d".to_string(),
            }])
            .expect("fixture has one condition"),
            cloud_cover_pct: 0,
            observed_at: None,
        }
    }
}
