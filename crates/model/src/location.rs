use std::{error::Error, fmt};

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ExampleData;

/// A point on the earth in degrees.
///
/// The geofence operations expect finite values within
/// `[-90, 90]` / `[-180, 180]`. Use [`Coordinate::checked`] at the edges where
/// coordinates enter the system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn checked(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        let coordinate = Self::new(latitude, longitude);
        coordinate.validate()?;
        Ok(coordinate)
    }

    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(CoordinateError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

impl ExampleData for Coordinate {
    fn example_data() -> Self {
        // Kiel Hauptbahnhof
        Coordinate::new(54.3151, 10.1320)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    NotFinite,
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite => write!(f, "coordinate is not a finite number"),
            Self::LatitudeOutOfRange(latitude) => {
                write!(f, "latitude {} is outside of [-90, 90]", latitude)
            }
            Self::LongitudeOutOfRange(longitude) => {
                write!(f, "longitude {} is outside of [-180, 180]", longitude)
            }
        }
    }
}

impl Error for CoordinateError {}

/// A fix as reported by the platform location provider.
///
/// Only `coordinate` takes part in geofence checks, accuracy and timestamp
/// are passed along for display.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceLocation {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub accuracy_meters: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl DeviceLocation {
    pub fn new(coordinate: Coordinate, timestamp: DateTime<Utc>) -> Self {
        Self {
            coordinate,
            accuracy_meters: None,
            timestamp,
        }
    }

    pub fn with_accuracy(mut self, accuracy_meters: f64) -> Self {
        self.accuracy_meters = Some(accuracy_meters);
        self
    }
}

impl ExampleData for DeviceLocation {
    fn example_data() -> Self {
        DeviceLocation::new(Coordinate::example_data(), Utc::now()).with_accuracy(12.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_accepts_range_edges() {
        assert!(Coordinate::checked(90.0, 180.0).is_ok());
        assert!(Coordinate::checked(-90.0, -180.0).is_ok());
    }

    #[test]
    fn checked_rejects_bad_values() {
        assert_eq!(
            Coordinate::checked(f64::NAN, 0.0),
            Err(CoordinateError::NotFinite)
        );
        assert_eq!(
            Coordinate::checked(0.0, f64::INFINITY),
            Err(CoordinateError::NotFinite)
        );
        assert_eq!(
            Coordinate::checked(90.5, 0.0),
            Err(CoordinateError::LatitudeOutOfRange(90.5))
        );
        assert_eq!(
            Coordinate::checked(0.0, -181.0),
            Err(CoordinateError::LongitudeOutOfRange(-181.0))
        );
    }

    #[test]
    fn device_location_flattens_coordinate() {
        let timestamp = "2024-05-01T08:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let location = DeviceLocation::new(Coordinate::new(54.0, 10.0), timestamp);
        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["latitude"], 54.0);
        assert_eq!(json["longitude"], 10.0);
        assert!(json.get("accuracyMeters").is_none());
    }
}
