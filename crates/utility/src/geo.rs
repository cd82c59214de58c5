/// Mean earth radius used for all great-circle calculations.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
pub const EARTH_RADIUS_KM: f64 = EARTH_RADIUS_M / 1000.0;

pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Rectangle in degrees that contains every point within `radius_m` of the
/// given center. Used as a cheap pre-filter before the exact haversine check.
pub fn calculate_bounding_box(
    lat: f64,
    lon: f64,
    radius_m: f64,
) -> ((f64, f64), (f64, f64)) {
    let lat_rad = to_radians(lat);
    let lon_rad = to_radians(lon);
    let angular_radius = radius_m / EARTH_RADIUS_M;

    // Latitude bounds
    let min_lat = to_degrees(lat_rad - angular_radius).max(-90.0);
    let max_lat = to_degrees(lat_rad + angular_radius).min(90.0);

    // Longitude bounds. The circle is widest at a latitude poleward of the
    // center, where its half-width is asin(sin(r) / cos(lat)). If the circle
    // reaches a pole, or the box would wrap around, every longitude qualifies.
    let cos_lat = lat_rad.cos();
    let sin_radius = angular_radius.sin();
    if min_lat <= -90.0 || max_lat >= 90.0 || sin_radius >= cos_lat {
        return ((min_lat, -180.0), (max_lat, 180.0));
    }
    let delta_lon = (sin_radius / cos_lat).asin();
    let min_lon = to_degrees(lon_rad - delta_lon);
    let max_lon = to_degrees(lon_rad + delta_lon);
    if min_lon < -180.0 || max_lon > 180.0 {
        return ((min_lat, -180.0), (max_lat, 180.0));
    }

    ((min_lat, min_lon), (max_lat, max_lon))
}

/// Great-circle distance in meters between two points given in degrees.
pub fn haversine_distance(
    latitude_1: f64,
    longitude_1: f64,
    latitude_2: f64,
    longitude_2: f64,
) -> f64 {
    let lat1_rad = to_radians(latitude_1);
    let lat2_rad = to_radians(latitude_2);

    let dlat = lat2_rad - lat1_rad;
    let dlon = to_radians(longitude_2 - longitude_1);

    let h = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    // rounding can push h marginally past 1 for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}
