//! Multinomial logistic regression training
//!
//! Full-batch gradient descent with L2 regularization over the scaled
//! training sample. Weight initialization draws from a seeded RNG so that
//! repeated fits of the same sample produce identical models.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Training options for the outcome classifier
#[derive(Debug, Clone)]
pub struct TrainOptions {
    pub epochs: usize,
    pub learning_rate: f64,
    pub l2: f64,
    pub seed: u64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            epochs: 500,
            learning_rate: 0.1,
            l2: 1e-4,
            seed: 42,
        }
    }
}

/// Numerically stable softmax
pub(crate) fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().cloned().fold(f64::MIN, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&z| (z - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Linear scores for one input, one per class
pub(crate) fn logits(weights: &[f64], bias: &[f64], x: &[f64]) -> Vec<f64> {
    let dim = x.len();
    bias.iter()
        .enumerate()
        .map(|(class, &b)| {
            let base = class * dim;
            x.iter()
                .enumerate()
                .fold(b, |acc, (i, &v)| acc + weights[base + i] * v)
        })
        .collect()
}

/// Fit class weights and biases on scaled rows.
///
/// `x` rows are already standardized; `y` holds class indices below
/// `n_classes`. Returns `(weights, bias)` with weights laid out row-major per
/// class.
pub(crate) fn train_multinomial(
    x: &[Vec<f64>],
    y: &[usize],
    n_classes: usize,
    options: &TrainOptions,
) -> (Vec<f64>, Vec<f64>) {
    let dim = x.first().map(|r| r.len()).unwrap_or(0);
    let n = x.len() as f64;

    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut weights = vec![0.0f64; n_classes * dim];
    let mut bias = vec![0.0f64; n_classes];
    for w in &mut weights {
        *w = (rng.gen::<f64>() - 0.5) * 0.01;
    }

    let lr = options.learning_rate;
    let l2 = options.l2.max(0.0);

    for _epoch in 0..options.epochs {
        let mut grad_w = vec![0.0f64; weights.len()];
        let mut grad_b = vec![0.0f64; bias.len()];

        for (row, &label) in x.iter().zip(y.iter()) {
            let probs = softmax(&logits(&weights, &bias, row));
            for class in 0..n_classes {
                let err = probs[class] - if class == label { 1.0 } else { 0.0 };
                let base = class * dim;
                for (i, &v) in row.iter().enumerate() {
                    grad_w[base + i] += err * v;
                }
                grad_b[class] += err;
            }
        }

        for (w, g) in weights.iter_mut().zip(grad_w.iter()) {
            *w -= lr * (g / n + l2 * *w);
        }
        for (b, g) in bias.iter_mut().zip(grad_b.iter()) {
            *b -= lr * g / n;
        }
    }

    (weights, bias)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[1.0, 2.0, 3.0]);
        let sum: f64 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!(probs.iter().all(|&p| p > 0.0));
        assert!(probs[2] > probs[1] && probs[1] > probs[0]);
    }

    #[test]
    fn test_softmax_handles_large_logits() {
        let probs = softmax(&[1000.0, 1000.0, -1000.0]);
        assert!((probs[0] - 0.5).abs() < 1e-9);
        assert!((probs[1] - 0.5).abs() < 1e-9);
        assert!(probs[2] < 1e-9);
    }

    #[test]
    fn test_training_separates_toy_classes() {
        // Two well-separated clusters on one axis
        let x = vec![
            vec![-1.0, 0.0],
            vec![-1.2, 0.1],
            vec![-0.8, -0.1],
            vec![1.0, 0.0],
            vec![1.2, -0.1],
            vec![0.8, 0.1],
        ];
        let y = vec![0, 0, 0, 1, 1, 1];
        let (weights, bias) = train_multinomial(&x, &y, 2, &TrainOptions::default());

        for (row, &label) in x.iter().zip(y.iter()) {
            let probs = softmax(&logits(&weights, &bias, row));
            assert!(probs[label] > 0.9, "row {:?} got {:?}", row, probs);
        }
    }

    #[test]
    fn test_training_is_deterministic() {
        let x = vec![vec![0.5, -0.5], vec![-0.5, 0.5], vec![1.0, 1.0]];
        let y = vec![0, 1, 2];
        let options = TrainOptions::default();
        let (w1, b1) = train_multinomial(&x, &y, 3, &options);
        let (w2, b2) = train_multinomial(&x, &y, 3, &options);
        assert_eq!(w1, w2);
        assert_eq!(b1, b2);
    }

    #[test]
    fn test_different_seed_changes_initialization() {
        let x = vec![vec![0.5, -0.5], vec![-0.5, 0.5]];
        let y = vec![0, 1];
        let a = train_multinomial(&x, &y, 2, &TrainOptions { epochs: 1, ..Default::default() });
        let b = train_multinomial(
            &x,
            &y,
            2,
            &TrainOptions {
                epochs: 1,
                seed: 7,
                ..Default::default()
            },
        );
        assert_ne!(a.0, b.0);
    }
}
