use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ExampleData;

/// Outcome of checking a position against a geofence.
///
/// `distance_meters` is rounded to whole meters for display, `is_valid` was
/// decided on the exact distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub distance_meters: f64,
    pub required_radius_meters: f64,
}

impl ExampleData for ValidationResult {
    fn example_data() -> Self {
        ValidationResult {
            is_valid: true,
            distance_meters: 42.0,
            required_radius_meters: 150.0,
        }
    }
}

