use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::Id;

use crate::{Coordinate, ExampleData};

/// Circular region around a site a guard has to be inside of to clock in or
/// out. Built on demand from a [`SiteRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeofenceSpec {
    pub identifier: Id<GeofenceSpec>,
    pub center: Coordinate,
    pub radius_meters: f64,
}

impl GeofenceSpec {
    pub fn new(
        identifier: Id<GeofenceSpec>,
        center: Coordinate,
        radius_meters: f64,
    ) -> Self {
        Self {
            identifier,
            center,
            radius_meters,
        }
    }
}

impl ExampleData for GeofenceSpec {
    fn example_data() -> Self {
        GeofenceSpec::new(
            Id::from_name("Kiel Hauptbahnhof"),
            Coordinate::example_data(),
            150.0,
        )
    }
}

/// A site as configured in the backend.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: Option<f64>,
    pub address: Option<String>,
}

impl SiteRecord {
    pub fn id(&self) -> Id<GeofenceSpec> {
        Id::from_name(&self.name)
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// The geofence for this site, `default_radius_meters` applies when the
    /// record has no radius of its own.
    pub fn to_geofence(&self, default_radius_meters: f64) -> GeofenceSpec {
        GeofenceSpec::new(
            self.id(),
            self.center(),
            self.radius_meters.unwrap_or(default_radius_meters),
        )
    }
}

impl ExampleData for SiteRecord {
    fn example_data() -> Self {
        SiteRecord {
            name: "Kiel Hauptbahnhof".to_owned(),
            latitude: 54.3151,
            longitude: 10.1320,
            radius_meters: Some(150.0),
            address: Some("Sophienblatt 25, 24103 Kiel".to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_without_radius_uses_default() {
        let record = SiteRecord {
            radius_meters: None,
            ..SiteRecord::example_data()
        };
        let geofence = record.to_geofence(100.0);
        assert_eq!(geofence.radius_meters, 100.0);
        assert_eq!(geofence.identifier.as_str(), "kiel-hauptbahnhof");
        assert_eq!(geofence.center, Coordinate::new(54.3151, 10.1320));
    }

    #[test]
    fn record_parses_from_camel_case_json() {
        let record: SiteRecord = serde_json::from_str(
            r#"{"name": "Werft Tor 3", "latitude": 54.33, "longitude": 10.15, "radiusMeters": 75}"#,
        )
        .unwrap();
        assert_eq!(record.radius_meters, Some(75.0));
        assert_eq!(record.address, None);
        assert_eq!(record.to_geofence(100.0).radius_meters, 75.0);
    }
}
