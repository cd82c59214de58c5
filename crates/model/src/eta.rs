use std::{fmt, str::FromStr};

use chrono::{DateTime, Duration, TimeZone};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::ExampleData;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Walking,
    Driving,
    Cycling,
}

impl TransportMode {
    /// Nominal travel speed in meters per second.
    pub fn speed_mps(&self) -> f64 {
        match self {
            TransportMode::Walking => 1.4,
            TransportMode::Driving => 13.9,
            TransportMode::Cycling => 4.2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Walking => "walking",
            TransportMode::Driving => "driving",
            TransportMode::Cycling => "cycling",
        }
    }
}

/// Unknown modes fall back to walking.
impl From<&str> for TransportMode {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "driving" => TransportMode::Driving,
            "cycling" => TransportMode::Cycling,
            _ => TransportMode::Walking,
        }
    }
}

impl From<String> for TransportMode {
    fn from(value: String) -> Self {
        TransportMode::from(value.as_str())
    }
}

impl<'de> Deserialize<'de> for TransportMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(TransportMode::from)
    }
}

impl FromStr for TransportMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TransportMode::from(s))
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EtaEstimate {
    pub distance_meters: f64,
    pub eta_minutes: u32,
    pub transport_mode: TransportMode,
}

impl EtaEstimate {
    pub fn arrival_at<Tz: TimeZone>(&self, departure: DateTime<Tz>) -> DateTime<Tz> {
        departure + Duration::minutes(i64::from(self.eta_minutes))
    }
}

impl ExampleData for EtaEstimate {
    fn example_data() -> Self {
        EtaEstimate {
            distance_meters: 1400.0,
            eta_minutes: 17,
            transport_mode: TransportMode::Walking,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn unknown_mode_is_walking() {
        assert_eq!(TransportMode::from("teleport"), TransportMode::Walking);
        assert_eq!("".parse::<TransportMode>(), Ok(TransportMode::Walking));
        assert_eq!(TransportMode::from(" Driving "), TransportMode::Driving);
    }

    #[test]
    fn mode_json_is_lowercase_and_lossy() {
        assert_eq!(
            serde_json::to_string(&TransportMode::Cycling).unwrap(),
            "\"cycling\""
        );
        let mode: TransportMode = serde_json::from_str("\"hoverboard\"").unwrap();
        assert_eq!(mode, TransportMode::Walking);
        let mode: TransportMode = serde_json::from_str("\"driving\"").unwrap();
        assert_eq!(mode, TransportMode::Driving);
    }

    #[test]
    fn arrival_adds_eta() {
        let departure = "2024-05-01T08:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let arrival = EtaEstimate::example_data().arrival_at(departure);
        assert_eq!(arrival.to_rfc3339(), "2024-05-01T08:17:00+00:00");
    }
}
