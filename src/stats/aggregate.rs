//! Reduction of fetched records into feature values
//!
//! Form is computed only from the qualifying matches inside the bounded
//! recent-results window; there is no rolling window or opponent-strength
//! adjustment.

use crate::features::MatchFeatures;
use crate::stats::fixtures::FixtureRecord;

/// Multiplier applied to the squad goal average
pub const PLAYER_GOALS_BOOST: f64 = 1.2;

/// Per-match form score: win 0.8, draw 0.5, loss 0.3
pub fn form_score(goals_for: f64, goals_against: f64) -> f64 {
    if goals_for > goals_against {
        0.8
    } else if goals_for == goals_against {
        0.5
    } else {
        0.3
    }
}

/// Goal and form averages over a team's qualifying matches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamAverages {
    pub goals: f64,
    pub form: f64,
}

/// Average goals and form for one team across its qualifying matches.
///
/// A match qualifies when either side's name equals `canonical` — the
/// statistics source's name for the team, not the user-facing one. Returns
/// `None` when no match qualifies.
pub fn team_averages(canonical: &str, fixtures: &[FixtureRecord]) -> Option<TeamAverages> {
    let mut goals = Vec::new();
    let mut form = Vec::new();

    for fixture in fixtures {
        if fixture.home == canonical {
            goals.push(fixture.home_goals);
            form.push(form_score(fixture.home_goals, fixture.away_goals));
        } else if fixture.away == canonical {
            goals.push(fixture.away_goals);
            form.push(form_score(fixture.away_goals, fixture.home_goals));
        }
    }

    if goals.is_empty() {
        return None;
    }

    let n = goals.len() as f64;
    Some(TeamAverages {
        goals: goals.iter().sum::<f64>() / n,
        form: form.iter().sum::<f64>() / n,
    })
}

/// Boosted squad goal average, substituting for plain goal averages
pub fn boosted_goals(squad_average: f64) -> f64 {
    squad_average * PLAYER_GOALS_BOOST
}

/// One side's aggregated inputs
#[derive(Debug, Clone, Copy)]
pub struct TeamSide {
    pub goals: f64,
    pub form: f64,
    pub possession: f64,
    pub shots_on_target: f64,
}

/// Assemble the feature vector from both sides
pub fn build_features(home: &TeamSide, away: &TeamSide) -> MatchFeatures {
    MatchFeatures {
        home_goals: home.goals,
        away_goals: away.goals,
        home_form: home.form,
        away_form: away.form,
        home_possession: home.possession,
        away_possession: away.possession,
        home_shots: home.shots_on_target,
        away_shots: away.shots_on_target,
    }
}
