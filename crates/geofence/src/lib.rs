pub use model;

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod registry;

pub use config::GeofenceConfig;
pub use engine::{
    calculate_distance, estimate_eta, is_within_geofence, locate, meters_outside, nearby,
    validate, GeofenceEngine,
};
pub use error::{ConfigError, ConfigResult};
pub use format::{format_distance, format_eta};
pub use registry::SiteRegistry;
