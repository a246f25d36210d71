//! Team listing and per-team season statistics endpoints

use std::collections::HashMap;

use serde::Deserialize;

use crate::features::{DEFAULT_POSSESSION, DEFAULT_SHOTS_ON_TARGET};

/// Response from the `teams` endpoint
#[derive(Debug, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub response: Vec<TeamEntry>,
}

#[derive(Debug, Deserialize)]
pub struct TeamEntry {
    pub team: TeamInfo,
}

#[derive(Debug, Deserialize)]
pub struct TeamInfo {
    pub id: u32,
    pub name: String,
}

/// Vendor team name -> vendor team id
pub fn team_id_map(response: TeamsResponse) -> HashMap<String, u32> {
    response
        .response
        .into_iter()
        .map(|entry| (entry.team.name, entry.team.id))
        .collect()
}

/// Response from the `teams/statistics` endpoint, reduced to the fields the
/// feature vector needs
#[derive(Debug, Deserialize)]
pub struct TeamStatisticsResponse {
    #[serde(default)]
    pub response: TeamSeasonStats,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamSeasonStats {
    #[serde(default)]
    pub fixtures: SeasonAverages,
}

#[derive(Debug, Default, Deserialize)]
pub struct SeasonAverages {
    #[serde(default)]
    pub possession: PossessionStats,
    #[serde(default)]
    pub shots: ShotStats,
}

#[derive(Debug, Default, Deserialize)]
pub struct PossessionStats {
    pub average: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ShotStats {
    pub on: Option<f64>,
}

impl TeamSeasonStats {
    /// Average ball possession, defaulting when the source omits it
    pub fn possession_average(&self) -> f64 {
        self.fixtures
            .possession
            .average
            .unwrap_or(DEFAULT_POSSESSION)
    }

    /// Average shots on target, defaulting when the source omits them
    pub fn shots_on_target(&self) -> f64 {
        self.fixtures.shots.on.unwrap_or(DEFAULT_SHOTS_ON_TARGET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_map() {
        let json = r#"{
            "response": [
                {"team": {"id": 570, "name": "APOEL Nicosia FC"}},
                {"team": {"id": 571, "name": "AEK Larnaca"}}
            ]
        }"#;
        let response: TeamsResponse = serde_json::from_str(json).unwrap();
        let ids = team_id_map(response);
        assert_eq!(ids.get("APOEL Nicosia FC"), Some(&570));
        assert_eq!(ids.get("AEK Larnaca"), Some(&571));
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_season_stats_full() {
        let json = r#"{
            "response": {
                "fixtures": {
                    "possession": {"average": 53.5},
                    "shots": {"on": 4.7}
                }
            }
        }"#;
        let stats: TeamStatisticsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(stats.response.possession_average(), 53.5);
        assert_eq!(stats.response.shots_on_target(), 4.7);
    }

    #[test]
    fn test_season_stats_missing_fields_default() {
        let stats: TeamStatisticsResponse = serde_json::from_str(r#"{"response": {}}"#).unwrap();
        assert_eq!(stats.response.possession_average(), 50.0);
        assert_eq!(stats.response.shots_on_target(), 4.0);
    }

    #[test]
    fn test_season_stats_null_values_default() {
        let json = r#"{
            "response": {
                "fixtures": {
                    "possession": {"average": null},
                    "shots": {"on": null}
                }
            }
        }"#;
        let stats: TeamStatisticsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(stats.response.possession_average(), 50.0);
        assert_eq!(stats.response.shots_on_target(), 4.0);
    }
}
