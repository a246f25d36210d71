//! Finished fixtures endpoint

use serde::Deserialize;

/// Response from the `fixtures` endpoint
#[derive(Debug, Deserialize)]
pub struct FixturesResponse {
    #[serde(default)]
    pub response: Vec<FixtureEntry>,
}

#[derive(Debug, Deserialize)]
pub struct FixtureEntry {
    pub teams: FixtureTeams,
    pub goals: FixtureGoals,
}

#[derive(Debug, Deserialize)]
pub struct FixtureTeams {
    pub home: FixtureTeam,
    pub away: FixtureTeam,
}

#[derive(Debug, Deserialize)]
pub struct FixtureTeam {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct FixtureGoals {
    pub home: Option<f64>,
    pub away: Option<f64>,
}

/// A finished match reduced to names and goals
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureRecord {
    pub home: String,
    pub away: String,
    pub home_goals: f64,
    pub away_goals: f64,
}

/// Flatten the vendor shape. Fixtures missing a goal count score it as zero.
pub fn to_records(response: FixturesResponse) -> Vec<FixtureRecord> {
    response
        .response
        .into_iter()
        .map(|entry| FixtureRecord {
            home: entry.teams.home.name,
            away: entry.teams.away.name,
            home_goals: entry.goals.home.unwrap_or(0.0),
            away_goals: entry.goals.away.unwrap_or(0.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_records() {
        let json = r#"{
            "response": [
                {
                    "teams": {
                        "home": {"name": "APOEL Nicosia FC"},
                        "away": {"name": "AEK Larnaca"}
                    },
                    "goals": {"home": 2, "away": 1}
                }
            ]
        }"#;
        let records = to_records(serde_json::from_str(json).unwrap());
        assert_eq!(
            records,
            vec![FixtureRecord {
                home: "APOEL Nicosia FC".to_string(),
                away: "AEK Larnaca".to_string(),
                home_goals: 2.0,
                away_goals: 1.0,
            }]
        );
    }

    #[test]
    fn test_missing_goals_count_as_zero() {
        let json = r#"{
            "response": [
                {
                    "teams": {
                        "home": {"name": "Paphos FC"},
                        "away": {"name": "Omonia Nicosia"}
                    },
                    "goals": {"home": null, "away": 3}
                }
            ]
        }"#;
        let records = to_records(serde_json::from_str(json).unwrap());
        assert_eq!(records[0].home_goals, 0.0);
        assert_eq!(records[0].away_goals, 3.0);
    }

    #[test]
    fn test_empty_response() {
        let records = to_records(serde_json::from_str("{}").unwrap());
        assert!(records.is_empty());
    }
}
