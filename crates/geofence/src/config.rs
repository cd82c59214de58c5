use std::{env, path::PathBuf};

pub const DEFAULT_RADIUS_METERS: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GeofenceConfig {
    /// JSON array of site records.
    pub sites_file: PathBuf,
    /// Radius for sites that don't configure one.
    pub default_radius_meters: f64,
}

impl GeofenceConfig {
    pub fn new(sites_file: impl Into<PathBuf>) -> Self {
        Self {
            sites_file: sites_file.into(),
            default_radius_meters: DEFAULT_RADIUS_METERS,
        }
    }

    /// Reads `GEOFENCE_SITES_FILE` and the optional
    /// `GEOFENCE_DEFAULT_RADIUS_METERS`. `None` if the sites file is not set
    /// or the radius is not a positive number.
    pub fn from_env() -> Option<Self> {
        let sites_file = env::var_os("GEOFENCE_SITES_FILE")?;
        let default_radius_meters = match env::var("GEOFENCE_DEFAULT_RADIUS_METERS") {
            Ok(radius) => parse_radius(&radius)?,
            Err(_) => DEFAULT_RADIUS_METERS,
        };
        Some(Self {
            sites_file: sites_file.into(),
            default_radius_meters,
        })
    }
}

fn parse_radius(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|radius| radius.is_finite() && *radius > 0.0)
}
