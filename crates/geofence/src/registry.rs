use std::{fs, path::Path};

use indexmap::IndexMap;
use log::{info, warn};
use model::{Coordinate, GeofenceSpec, SiteRecord, ValidationResult, WithDistance};
use utility::id::Id;

use crate::{engine, ConfigError, ConfigResult, GeofenceConfig};

/// Geofences of all configured sites, in the order they were configured.
#[derive(Debug, Clone, Default)]
pub struct SiteRegistry {
    sites: IndexMap<Id<GeofenceSpec>, GeofenceSpec>,
}

impl SiteRegistry {
    pub fn load(config: &GeofenceConfig) -> ConfigResult<Self> {
        let registry = Self::from_file(&config.sites_file, config.default_radius_meters)?;
        info!(
            "loaded {} site(s) from {}",
            registry.len(),
            config.sites_file.display()
        );
        Ok(registry)
    }

    pub fn from_file(path: impl AsRef<Path>, default_radius_meters: f64) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content, default_radius_meters)
    }

    pub fn from_json(json: &str, default_radius_meters: f64) -> ConfigResult<Self> {
        let records: Vec<SiteRecord> = serde_json::from_str(json)?;
        Self::from_records(records, default_radius_meters)
    }

    /// Fails on the first record with an invalid coordinate or radius, or
    /// whose id was already taken by an earlier record.
    pub fn from_records(
        records: impl IntoIterator<Item = SiteRecord>,
        default_radius_meters: f64,
    ) -> ConfigResult<Self> {
        let mut sites = IndexMap::new();
        for record in records {
            let geofence = Self::checked_geofence(&record, default_radius_meters)
                .inspect_err(|why| warn!("rejecting site record: {}", why))?;
            if sites.contains_key(&geofence.identifier) {
                let why = ConfigError::invalid_site(
                    record.name,
                    format!("duplicate site id '{}'", geofence.identifier),
                );
                warn!("rejecting site record: {}", why);
                return Err(why);
            }
            sites.insert(geofence.identifier.clone(), geofence);
        }
        Ok(Self { sites })
    }

    fn checked_geofence(
        record: &SiteRecord,
        default_radius_meters: f64,
    ) -> ConfigResult<GeofenceSpec> {
        record
            .center()
            .validate()
            .map_err(|why| ConfigError::invalid_site(&record.name, why))?;
        let geofence = record.to_geofence(default_radius_meters);
        if geofence.identifier.as_str().is_empty() {
            return Err(ConfigError::invalid_site(
                &record.name,
                "name yields an empty site id",
            ));
        }
        if !(geofence.radius_meters.is_finite() && geofence.radius_meters > 0.0) {
            return Err(ConfigError::invalid_site(
                &record.name,
                format!("radius {} m is not a positive number", geofence.radius_meters),
            ));
        }
        Ok(geofence)
    }

    pub fn get(&self, id: &Id<GeofenceSpec>) -> Option<&GeofenceSpec> {
        self.sites.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeofenceSpec> {
        self.sites.values()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Validates `current` against the site with the given id, `None` if no
    /// such site is configured.
    pub fn validate_at(
        &self,
        current: &Coordinate,
        id: &Id<GeofenceSpec>,
    ) -> Option<ValidationResult> {
        self.get(id).map(|site| engine::validate(current, site))
    }

    pub fn nearby(
        &self,
        current: &Coordinate,
        radius_meters: f64,
    ) -> Vec<WithDistance<&GeofenceSpec>> {
        engine::nearby(current, self.iter(), radius_meters)
    }

    pub fn locate(&self, current: &Coordinate) -> Option<WithDistance<&GeofenceSpec>> {
        engine::locate(current, self.iter())
    }
}

impl<'a> IntoIterator for &'a SiteRegistry {
    type Item = &'a GeofenceSpec;
    type IntoIter = indexmap::map::Values<'a, Id<GeofenceSpec>, GeofenceSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.sites.values()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    const SITES: &str = r#"[
        {"name": "Haupttor", "latitude": 54.3151, "longitude": 10.1320, "radiusMeters": 150},
        {"name": "Lager Nord", "latitude": 54.3400, "longitude": 10.1200},
        {"name": "Werft", "latitude": 54.3290, "longitude": 10.1500, "address": "Werftstraße 1"}
    ]"#;

    fn record(name: &str, latitude: f64, longitude: f64) -> SiteRecord {
        SiteRecord {
            name: name.to_owned(),
            latitude,
            longitude,
            radius_meters: None,
            address: None,
        }
    }

    #[test]
    fn loads_json_in_order_with_default_radius() {
        let registry = SiteRegistry::from_json(SITES, 80.0).unwrap();
        let ids = registry
            .iter()
            .map(|site| site.identifier.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["haupttor", "lager-nord", "werft"]);

        let haupttor = registry.get(&Id::new("haupttor".to_owned())).unwrap();
        assert_eq!(haupttor.radius_meters, 150.0);
        let werft = registry.get(&Id::new("werft".to_owned())).unwrap();
        assert_eq!(werft.radius_meters, 80.0);
    }

    #[test]
    fn loads_from_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SITES.as_bytes()).unwrap();
        let config = GeofenceConfig::new(file.path());

        let registry = SiteRegistry::load(&config).unwrap();
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let config = GeofenceConfig::new("/nonexistent/sites.json");
        assert!(matches!(
            SiteRegistry::load(&config),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            SiteRegistry::from_json("{\"name\": 1}", 100.0),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_coordinate() {
        let result = SiteRegistry::from_records([record("Mond", 95.0, 0.0)], 100.0);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidSite { name, .. }) if name == "Mond"
        ));
    }

    #[test]
    fn rejects_non_positive_radius() {
        let mut zero = record("Zero", 54.0, 10.0);
        zero.radius_meters = Some(0.0);
        assert!(SiteRegistry::from_records([zero], 100.0).is_err());
        assert!(SiteRegistry::from_records([record("Nan", 54.0, 10.0)], f64::NAN).is_err());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = SiteRegistry::from_records(
            [record("Tor 1", 54.0, 10.0), record("tor-1", 54.1, 10.1)],
            100.0,
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidSite { name, .. }) if name == "tor-1"
        ));
    }

    #[test]
    fn rejects_names_without_id_characters() {
        assert!(SiteRegistry::from_records([record("???", 54.0, 10.0)], 100.0).is_err());
    }

    #[test]
    fn validate_locate_and_nearby() {
        let registry = SiteRegistry::from_json(SITES, 80.0).unwrap();
        let at_gate = Coordinate::new(54.3152, 10.1321);

        let result = registry
            .validate_at(&at_gate, &Id::new("haupttor".to_owned()))
            .unwrap();
        assert!(result.is_valid);
        assert!(registry
            .validate_at(&at_gate, &Id::new("unknown".to_owned()))
            .is_none());

        let located = registry.locate(&at_gate).unwrap();
        assert_eq!(located.content.identifier.as_str(), "haupttor");

        let close = registry.nearby(&at_gate, 3_000.0);
        assert_eq!(close[0].content.identifier.as_str(), "haupttor");
        assert_eq!(close.len(), 3);
    }
}
