use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use serde_with;

pub mod eta;
pub mod geofence;
pub mod location;
pub mod validation;

pub use eta::{EtaEstimate, TransportMode};
pub use geofence::{GeofenceSpec, SiteRecord};
pub use location::{Coordinate, CoordinateError, DeviceLocation};
pub use validation::ValidationResult;

pub trait ExampleData {
    fn example_data() -> Self;
}

/// A value annotated with its distance to some reference coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WithDistance<T> {
    pub distance_meters: f64,
    #[serde(flatten)]
    pub content: T,
}

impl<T> WithDistance<T> {
    pub fn new(distance_meters: f64, content: T) -> Self {
        Self {
            distance_meters,
            content,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> WithDistance<U> {
        WithDistance::new(self.distance_meters, f(self.content))
    }
}
