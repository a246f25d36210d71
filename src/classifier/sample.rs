//! Embedded training sample
//!
//! A small hand-curated set of historical match aggregates. It is a constant:
//! recreated identically every run, never mutated, and deliberately tiny.

use crate::models::Outcome;

/// A fixed, ordered training sample
#[derive(Debug, Clone, Copy)]
pub struct TrainingSample {
    pub feature_names: &'static [&'static str],
    pub rows: &'static [(&'static [f64], Outcome)],
}

impl TrainingSample {
    /// Number of feature columns
    pub fn width(&self) -> usize {
        self.feature_names.len()
    }
}

/// Production sample: goals, form, possession and shots on target for both
/// sides
pub const EXTENDED_SAMPLE: TrainingSample = TrainingSample {
    feature_names: &[
        "home_goals",
        "away_goals",
        "home_form",
        "away_form",
        "home_possession",
        "away_possession",
        "home_shots",
        "away_shots",
    ],
    rows: &[
        (
            &[2.5, 1.0, 0.8, 0.5, 55.0, 50.0, 4.5, 3.5],
            Outcome::HomeWin,
        ),
        (
            &[1.2, 2.0, 0.6, 0.7, 50.0, 52.0, 3.8, 4.0],
            Outcome::AwayWin,
        ),
        (
            &[3.0, 0.5, 0.9, 0.3, 52.0, 48.0, 5.0, 3.0],
            Outcome::HomeWin,
        ),
        (&[0.8, 1.5, 0.4, 0.6, 48.0, 51.0, 3.0, 3.8], Outcome::Draw),
        (
            &[2.0, 1.2, 0.7, 0.5, 53.0, 49.0, 4.2, 3.2],
            Outcome::HomeWin,
        ),
        (&[1.5, 1.8, 0.5, 0.65, 51.0, 50.0, 3.5, 3.6], Outcome::Draw),
        (
            &[2.8, 0.9, 0.85, 0.4, 54.0, 47.0, 4.8, 3.1],
            Outcome::HomeWin,
        ),
        (
            &[1.0, 1.3, 0.3, 0.55, 49.0, 52.0, 3.2, 3.9],
            Outcome::AwayWin,
        ),
    ],
};

/// Reduced sample with goals and form only
pub const BASIC_SAMPLE: TrainingSample = TrainingSample {
    feature_names: &["home_goals", "away_goals", "home_form", "away_form"],
    rows: &[
        (&[2.5, 1.0, 0.8, 0.5], Outcome::HomeWin),
        (&[1.2, 2.0, 0.6, 0.7], Outcome::AwayWin),
        (&[3.0, 0.5, 0.9, 0.3], Outcome::HomeWin),
        (&[0.8, 1.5, 0.4, 0.6], Outcome::Draw),
        (&[2.0, 1.2, 0.7, 0.5], Outcome::HomeWin),
        (&[1.5, 1.8, 0.5, 0.65], Outcome::Draw),
        (&[2.8, 0.9, 0.85, 0.4], Outcome::HomeWin),
        (&[1.0, 1.3, 0.3, 0.55], Outcome::AwayWin),
    ],
};
