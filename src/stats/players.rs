//! Player statistics endpoint

use serde::Deserialize;

use crate::models::TopScorer;

/// How many squad members feed the goal average
pub const SQUAD_SAMPLE_SIZE: usize = 5;

/// Response from the `players` endpoint
#[derive(Debug, Deserialize)]
pub struct PlayersResponse {
    #[serde(default)]
    pub response: Vec<PlayerEntry>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerEntry {
    pub player: PlayerInfo,
    #[serde(default)]
    pub statistics: Vec<PlayerSeasonStats>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerInfo {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerSeasonStats {
    #[serde(default)]
    pub goals: GoalStats,
}

#[derive(Debug, Default, Deserialize)]
pub struct GoalStats {
    pub total: Option<f64>,
}

fn goals_total(entry: &PlayerEntry) -> f64 {
    entry
        .statistics
        .first()
        .and_then(|stats| stats.goals.total)
        .unwrap_or(0.0)
}

/// Goal average over the first `SQUAD_SAMPLE_SIZE` players as returned by the
/// source. The divisor is the sample size even when fewer players are listed.
pub fn squad_goal_average(entries: &[PlayerEntry]) -> f64 {
    entries
        .iter()
        .take(SQUAD_SAMPLE_SIZE)
        .map(goals_total)
        .sum::<f64>()
        / SQUAD_SAMPLE_SIZE as f64
}

/// The squad's leading scorer
pub fn top_scorer(entries: &[PlayerEntry]) -> Option<TopScorer> {
    entries
        .iter()
        .max_by(|a, b| goals_total(a).total_cmp(&goals_total(b)))
        .map(|entry| TopScorer {
            name: entry.player.name.clone(),
            goals: goals_total(entry),
        })
}
