//! Distance, containment and travel time calculations.
//!
//! Every function here is pure: results depend on the arguments only, so they
//! can be called from any thread without coordination. Coordinates must be
//! finite and within range (see [`Coordinate::checked`]); passing anything
//! else is a bug in the caller and trips a debug assertion.

use itertools::Itertools;
use log::debug;
use model::{
    Coordinate, EtaEstimate, GeofenceSpec, TransportMode, ValidationResult, WithDistance,
};
use utility::geo;

/// Great-circle distance in meters (haversine, mean earth radius).
pub fn calculate_distance(a: &Coordinate, b: &Coordinate) -> f64 {
    debug_assert!(a.is_valid(), "invalid coordinate {:?}", a);
    debug_assert!(b.is_valid(), "invalid coordinate {:?}", b);
    geo::haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// The boundary itself counts as inside.
pub fn is_within_geofence(current: &Coordinate, spec: &GeofenceSpec) -> bool {
    calculate_distance(current, &spec.center) <= spec.radius_meters
}

pub fn validate(current: &Coordinate, spec: &GeofenceSpec) -> ValidationResult {
    let distance = calculate_distance(current, &spec.center);
    let is_valid = distance <= spec.radius_meters;
    debug!(
        "geofence {}: {} is {:.1} m from center (radius {} m, valid: {})",
        spec.identifier, current, distance, spec.radius_meters, is_valid
    );
    ValidationResult {
        is_valid,
        distance_meters: distance.round(),
        required_radius_meters: spec.radius_meters,
    }
}

/// How far `current` lies beyond the edge of the geofence, zero when inside.
/// Computed on the exact distance, so any rejected position is a positive
/// distance away.
pub fn meters_outside(current: &Coordinate, spec: &GeofenceSpec) -> f64 {
    (calculate_distance(current, &spec.center) - spec.radius_meters).max(0.0)
}

/// Whole minutes needed to cover `distance_meters` at the nominal speed of
/// `mode`.
pub fn eta_minutes(distance_meters: f64, mode: TransportMode) -> u32 {
    (distance_meters / mode.speed_mps() / 60.0).round() as u32
}

pub fn estimate_eta(
    current: &Coordinate,
    destination: &Coordinate,
    mode: TransportMode,
) -> EtaEstimate {
    let distance_meters = calculate_distance(current, destination);
    let eta_minutes = eta_minutes(distance_meters, mode);
    debug!(
        "eta {} -> {}: {:.0} m {} = {} min",
        current, destination, distance_meters, mode, eta_minutes
    );
    EtaEstimate {
        distance_meters,
        eta_minutes,
        transport_mode: mode,
    }
}

/// Geofences whose center lies within `radius_meters` of `current`,
/// closest first.
pub fn nearby<'a>(
    current: &Coordinate,
    sites: impl IntoIterator<Item = &'a GeofenceSpec>,
    radius_meters: f64,
) -> Vec<WithDistance<&'a GeofenceSpec>> {
    let ((min_lat, min_lon), (max_lat, max_lon)) =
        geo::calculate_bounding_box(current.latitude, current.longitude, radius_meters);

    sites
        .into_iter()
        .filter(|site| {
            (min_lat..=max_lat).contains(&site.center.latitude)
                && (min_lon..=max_lon).contains(&site.center.longitude)
        })
        .map(|site| WithDistance::new(calculate_distance(current, &site.center), site))
        .filter(|site| site.distance_meters <= radius_meters)
        .sorted_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters))
        .collect()
}

/// The closest geofence that contains `current`, i.e. the site a guard
/// standing there would clock in at.
pub fn locate<'a>(
    current: &Coordinate,
    sites: impl IntoIterator<Item = &'a GeofenceSpec>,
) -> Option<WithDistance<&'a GeofenceSpec>> {
    sites
        .into_iter()
        .map(|site| WithDistance::new(calculate_distance(current, &site.center), site))
        .filter(|site| site.distance_meters <= site.content.radius_meters)
        .min_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters))
}

/// Stateless handle over the functions of this module, for call sites that
/// prefer a value to hold on to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GeofenceEngine;

impl GeofenceEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_distance(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        calculate_distance(a, b)
    }

    pub fn is_within_geofence(&self, current: &Coordinate, spec: &GeofenceSpec) -> bool {
        is_within_geofence(current, spec)
    }

    pub fn validate(&self, current: &Coordinate, spec: &GeofenceSpec) -> ValidationResult {
        validate(current, spec)
    }

    pub fn meters_outside(&self, current: &Coordinate, spec: &GeofenceSpec) -> f64 {
        meters_outside(current, spec)
    }

    pub fn estimate_eta(
        &self,
        current: &Coordinate,
        destination: &Coordinate,
        mode: TransportMode,
    ) -> EtaEstimate {
        estimate_eta(current, destination, mode)
    }

    pub fn nearby<'a>(
        &self,
        current: &Coordinate,
        sites: impl IntoIterator<Item = &'a GeofenceSpec>,
        radius_meters: f64,
    ) -> Vec<WithDistance<&'a GeofenceSpec>> {
        nearby(current, sites, radius_meters)
    }

    pub fn locate<'a>(
        &self,
        current: &Coordinate,
        sites: impl IntoIterator<Item = &'a GeofenceSpec>,
    ) -> Option<WithDistance<&'a GeofenceSpec>> {
        locate(current, sites)
    }
}
