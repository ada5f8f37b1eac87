//! Stationboard wire types and the departure they map to.

use serde::{Deserialize, Serialize};

/// Response body of `GET /stationboard`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationBoard {
    pub stationboard: Vec<StationBoardEntry>,
}

/// One journey leaving the station.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StationBoardEntry {
    /// Line or train designation, e.g. "IC 1"
    #[serde(default)]
    pub name: Option<String>,
    /// Final destination
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub stop: StopInfo,
}

/// The journey's stop at the queried station.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StopInfo {
    #[serde(default)]
    pub platform: Option<String>,
    /// Scheduled departure in upstream format
    #[serde(default)]
    pub departure: Option<String>,
}

// == Departure ==
/// An upcoming departure as returned by a fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    pub name: String,
    pub to: String,
    pub platform: Option<String>,
    /// Scheduled departure, kept in upstream's native text form
    pub departure_time: String,
}

impl From<StationBoardEntry> for Departure {
    fn from(entry: StationBoardEntry) -> Self {
        Self {
            name: entry.name.unwrap_or_default(),
            to: entry.to.unwrap_or_default(),
            platform: entry.stop.platform,
            departure_time: entry.stop.departure.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_stationboard() {
        let json = r#"{
            "station": {"id": "8503000", "name": "Zürich HB"},
            "stationboard": [
                {
                    "name": "IC 1",
                    "to": "St. Gallen",
                    "category": "IC",
                    "stop": {"platform": "31", "departure": "2024-05-01T12:34:00+0200"}
                },
                {
                    "name": "S 3",
                    "to": "Wetzikon",
                    "stop": {"platform": null, "departure": null}
                }
            ]
        }"#;

        let board: StationBoard = serde_json::from_str(json).unwrap();
        let deps: Vec<Departure> = board.stationboard.into_iter().map(Departure::from).collect();

        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0].name, "IC 1");
        assert_eq!(deps[0].to, "St. Gallen");
        assert_eq!(deps[0].platform.as_deref(), Some("31"));
        assert_eq!(deps[0].departure_time, "2024-05-01T12:34:00+0200");

        assert_eq!(deps[1].platform, None);
        assert_eq!(deps[1].departure_time, "");
    }

    #[test]
    fn missing_stationboard_is_an_error() {
        let result: Result<StationBoard, _> = serde_json::from_str(r#"{"errors": []}"#);
        assert!(result.is_err());
    }
}
