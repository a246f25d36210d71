//! Match outcome classifier
//!
//! A multinomial logistic regression fit once per process on the embedded
//! training sample. The fitted model is an immutable value: it owns its
//! scaler and weights and is passed to callers explicitly, never reached
//! through globals.
//!
//! # Example
//!
//! ```
//! use matchcast::classifier::{ClassifierModel, TrainOptions, EXTENDED_SAMPLE};
//! use matchcast::features::MatchFeatures;
//!
//! let model = ClassifierModel::fit(&EXTENDED_SAMPLE, &TrainOptions::default()).unwrap();
//! let result = model.predict(&MatchFeatures::fallback().to_vector()).unwrap();
//! println!("{:?}: {:?}", result.outcome, result.probabilities);
//! ```

mod sample;
mod scaler;
mod train;

pub use sample::{TrainingSample, BASIC_SAMPLE, EXTENDED_SAMPLE};
pub use scaler::StandardScaler;
pub use train::TrainOptions;

use thiserror::Error;

use crate::models::{Outcome, OutcomeProbabilities, PredictionResult};

/// Classifier contract violations
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("training sample is empty")]
    EmptySample,

    #[error("training row {index} has {actual} columns, expected {expected}")]
    InconsistentRow {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("training sample is missing outcome {0:?}")]
    MissingOutcome(Outcome),

    #[error("feature vector has {actual} columns, model expects {expected}")]
    Arity { expected: usize, actual: usize },
}

/// Fitted scaler + multinomial decision rule
#[derive(Debug, Clone)]
pub struct ClassifierModel {
    scaler: StandardScaler,
    weights: Vec<f64>,
    bias: Vec<f64>,
    n_features: usize,
}

impl ClassifierModel {
    /// Fit scaler and weights on a training sample.
    ///
    /// The sample must be non-empty, rectangular, and carry every outcome
    /// label at least once; a sample missing a class would silently produce
    /// an incomplete probability mapping, so it is rejected here instead.
    pub fn fit(sample: &TrainingSample, options: &TrainOptions) -> Result<Self, ClassifierError> {
        if sample.rows.is_empty() {
            return Err(ClassifierError::EmptySample);
        }
        let width = sample.width();
        for (index, (row, _)) in sample.rows.iter().enumerate() {
            if row.len() != width {
                return Err(ClassifierError::InconsistentRow {
                    index,
                    expected: width,
                    actual: row.len(),
                });
            }
        }
        for outcome in Outcome::ALL {
            if !sample.rows.iter().any(|(_, label)| *label == outcome) {
                return Err(ClassifierError::MissingOutcome(outcome));
            }
        }

        let rows: Vec<&[f64]> = sample.rows.iter().map(|(row, _)| *row).collect();
        let scaler = StandardScaler::fit(&rows);

        let x: Vec<Vec<f64>> = rows.iter().map(|row| scaler.transform(row)).collect();
        let y: Vec<usize> = sample
            .rows
            .iter()
            .map(|(_, label)| label.index())
            .collect();

        let (weights, bias) = train::train_multinomial(&x, &y, Outcome::ALL.len(), options);

        Ok(ClassifierModel {
            scaler,
            weights,
            bias,
            n_features: width,
        })
    }

    /// Number of feature columns the model expects
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Classify one feature vector.
    ///
    /// Returns the most likely outcome plus a percentage for every outcome.
    /// A wrong-width vector is a programming error at the call site and is
    /// rejected rather than truncated.
    pub fn predict(&self, features: &[f64]) -> Result<PredictionResult, ClassifierError> {
        if features.len() != self.n_features {
            return Err(ClassifierError::Arity {
                expected: self.n_features,
                actual: features.len(),
            });
        }

        let scaled = self.scaler.transform(features);
        let scores = train::logits(&self.weights, &self.bias, &scaled);
        let probs = train::softmax(&scores);

        let best = probs
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i)
            .unwrap_or(0);

        let percent = |i: usize| (probs[i] * 100.0 * 100.0).round() / 100.0;
        let probabilities = OutcomeProbabilities {
            home_win: percent(Outcome::HomeWin.index()),
            draw: percent(Outcome::Draw.index()),
            away_win: percent(Outcome::AwayWin.index()),
        };

        Ok(PredictionResult {
            outcome: Outcome::ALL[best],
            probabilities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::MatchFeatures;

    fn assert_well_formed(probs: &OutcomeProbabilities) {
        for outcome in Outcome::ALL {
            let p = probs.get(outcome);
            assert!((0.0..=100.0).contains(&p), "{:?} out of range: {}", outcome, p);
        }
        assert!((probs.total() - 100.0).abs() < 0.1, "sum {}", probs.total());
    }

    #[test]
    fn test_fallback_vector_prediction_is_well_formed() {
        let model = ClassifierModel::fit(&EXTENDED_SAMPLE, &TrainOptions::default()).unwrap();
        let result = model
            .predict(&MatchFeatures::fallback().to_vector())
            .unwrap();
        assert_well_formed(&result.probabilities);
        assert!(Outcome::ALL.contains(&result.outcome));
    }

    #[test]
    fn test_basic_sample_end_to_end() {
        let model = ClassifierModel::fit(&BASIC_SAMPLE, &TrainOptions::default()).unwrap();
        assert_eq!(model.n_features(), 4);
        let result = model.predict(&[1.0, 1.0, 0.5, 0.5]).unwrap();
        assert_well_formed(&result.probabilities);
        assert!(Outcome::ALL.contains(&result.outcome));
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let options = TrainOptions::default();
        let a = ClassifierModel::fit(&EXTENDED_SAMPLE, &options).unwrap();
        let b = ClassifierModel::fit(&EXTENDED_SAMPLE, &options).unwrap();

        let vector = MatchFeatures::fallback().to_vector();
        let ra = a.predict(&vector).unwrap();
        let rb = b.predict(&vector).unwrap();
        assert_eq!(ra.outcome, rb.outcome);
        assert_eq!(ra.probabilities, rb.probabilities);

        // Repeated calls on the same model as well
        let again = a.predict(&vector).unwrap();
        assert_eq!(ra.probabilities, again.probabilities);
    }

    #[test]
    fn test_outcome_matches_highest_probability() {
        let model = ClassifierModel::fit(&EXTENDED_SAMPLE, &TrainOptions::default()).unwrap();
        // A strongly home-flavored vector
        let result = model
            .predict(&[3.0, 0.5, 0.9, 0.3, 55.0, 47.0, 5.0, 3.0])
            .unwrap();
        let best = Outcome::ALL
            .iter()
            .copied()
            .max_by(|a, b| {
                result
                    .probabilities
                    .get(*a)
                    .total_cmp(&result.probabilities.get(*b))
            })
            .unwrap();
        assert_eq!(result.outcome, best);
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        let model = ClassifierModel::fit(&EXTENDED_SAMPLE, &TrainOptions::default()).unwrap();
        let err = model.predict(&[1.0, 1.0, 0.5, 0.5]).unwrap_err();
        match err {
            ClassifierError::Arity { expected, actual } => {
                assert_eq!(expected, 8);
                assert_eq!(actual, 4);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_outcome_is_rejected() {
        const NO_DRAWS: TrainingSample = TrainingSample {
            feature_names: &["home_goals", "away_goals"],
            rows: &[
                (&[2.0, 1.0], Outcome::HomeWin),
                (&[1.0, 2.0], Outcome::AwayWin),
            ],
        };
        let err = ClassifierModel::fit(&NO_DRAWS, &TrainOptions::default()).unwrap_err();
        match err {
            ClassifierError::MissingOutcome(outcome) => assert_eq!(outcome, Outcome::Draw),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
