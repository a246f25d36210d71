//! League listing endpoint

use serde::Deserialize;

/// Response from the `leagues` endpoint
#[derive(Debug, Deserialize)]
pub struct LeaguesResponse {
    #[serde(default)]
    pub response: Vec<LeagueEntry>,
}

#[derive(Debug, Deserialize)]
pub struct LeagueEntry {
    pub league: LeagueInfo,
}

#[derive(Debug, Deserialize)]
pub struct LeagueInfo {
    pub id: u32,
    pub name: String,
}

/// Find a league id by exact name
pub fn find_league_id(response: &LeaguesResponse, name: &str) -> Option<u32> {
    response
        .response
        .iter()
        .find(|entry| entry.league.name == name)
        .map(|entry| entry.league.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "response": [
            {"league": {"id": 201, "name": "Cup"}},
            {"league": {"id": 203, "name": "1. Division"}}
        ]
    }"#;

    #[test]
    fn test_find_league_id() {
        let response: LeaguesResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(find_league_id(&response, "1. Division"), Some(203));
    }

    #[test]
    fn test_find_league_id_missing() {
        let response: LeaguesResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(find_league_id(&response, "2. Division"), None);
    }

    #[test]
    fn test_empty_response_decodes() {
        let response: LeaguesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.response.is_empty());
    }
}
