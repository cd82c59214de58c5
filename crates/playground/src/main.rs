use geofence::{
    format_distance, format_eta,
    model::{Coordinate, ExampleData, TransportMode},
    GeofenceConfig, GeofenceEngine, SiteRegistry,
};
use log::info;

/// `GEOFENCE_POSITION=lat,lon`, the example coordinate if unset.
fn position_from_env() -> Coordinate {
    let Ok(value) = std::env::var("GEOFENCE_POSITION") else {
        return Coordinate::example_data();
    };
    let (latitude, longitude) = value
        .split_once(',')
        .expect("expected GEOFENCE_POSITION as 'lat,lon'.");
    Coordinate::checked(
        latitude.trim().parse().expect("latitude is not a number."),
        longitude.trim().parse().expect("longitude is not a number."),
    )
    .expect("GEOFENCE_POSITION is not a valid coordinate.")
}

fn main() {
    env_logger::init();

    let config = GeofenceConfig::from_env().expect("expected GEOFENCE_SITES_FILE in env.");
    let registry = SiteRegistry::load(&config).expect("could not load sites.");
    let mode = std::env::var("GEOFENCE_TRANSPORT_MODE")
        .map(TransportMode::from)
        .unwrap_or_default();
    let position = position_from_env();
    info!("checking {} against {} site(s)", position, registry.len());

    let engine = GeofenceEngine::new();
    match engine.locate(&position, &registry) {
        Some(site) => println!(
            "inside '{}' ({} from center)",
            site.content.identifier,
            format_distance(site.distance_meters)
        ),
        None => println!("not inside any site"),
    }

    for site in &registry {
        let validation = engine.validate(&position, site);
        let eta = engine.estimate_eta(&position, &site.center, mode);
        println!(
            "{}: {}, {} {}",
            site.identifier,
            format_distance(validation.distance_meters),
            format_eta(eta.eta_minutes),
            eta.transport_mode
        );
        if !validation.is_valid {
            println!(
                "  {} outside the geofence",
                format_distance(engine.meters_outside(&position, site).ceil())
            );
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&validation).expect("serializable result")
        );
    }
}
