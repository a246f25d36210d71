//! Per-column standardization
//!
//! Means and standard deviations are computed once from the training sample
//! and reused for every transform. The standard deviation is the population
//! deviation; a constant column scales by 1.0 rather than dividing by zero.

/// Fitted column scaler
#[derive(Debug, Clone)]
pub struct StandardScaler {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl StandardScaler {
    /// Fit means and deviations from sample rows. Rows must be non-empty and
    /// rectangular; the caller validates that.
    pub fn fit(rows: &[&[f64]]) -> Self {
        let n = rows.len() as f64;
        let width = rows.first().map(|r| r.len()).unwrap_or(0);

        let mut means = vec![0.0; width];
        for row in rows {
            for (m, v) in means.iter_mut().zip(row.iter()) {
                *m += v;
            }
        }
        for m in &mut means {
            *m /= n;
        }

        let mut stds = vec![0.0; width];
        for row in rows {
            for (col, (s, v)) in stds.iter_mut().zip(row.iter()).enumerate() {
                let d = v - means[col];
                *s += d * d;
            }
        }
        for s in &mut stds {
            *s = (*s / n).sqrt();
            if *s < f64::EPSILON {
                *s = 1.0;
            }
        }

        StandardScaler { means, stds }
    }

    /// Standardize one vector using the fitted parameters
    pub fn transform(&self, values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (v - self.means[i]) / self.stds[i])
            .collect()
    }

    pub fn width(&self) -> usize {
        self.means.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_means_and_stds() {
        let rows: Vec<&[f64]> = vec![&[1.0, 10.0], &[3.0, 10.0]];
        let scaler = StandardScaler::fit(&rows);
        assert_eq!(scaler.width(), 2);

        let a = scaler.transform(&[1.0, 10.0]);
        let b = scaler.transform(&[3.0, 10.0]);
        // First column: mean 2, std 1
        assert!((a[0] + 1.0).abs() < 1e-12);
        assert!((b[0] - 1.0).abs() < 1e-12);
        // Constant column stays centered without blowing up
        assert_eq!(a[1], 0.0);
        assert_eq!(b[1], 0.0);
    }

    #[test]
    fn test_transformed_sample_is_zero_mean_unit_variance() {
        let data = [
            [2.5, 1.0, 0.8],
            [1.2, 2.0, 0.6],
            [3.0, 0.5, 0.9],
            [0.8, 1.5, 0.4],
        ];
        let rows: Vec<&[f64]> = data.iter().map(|r| r.as_slice()).collect();
        let scaler = StandardScaler::fit(&rows);

        let scaled: Vec<Vec<f64>> = rows.iter().map(|r| scaler.transform(r)).collect();
        for col in 0..3 {
            let mean: f64 = scaled.iter().map(|r| r[col]).sum::<f64>() / scaled.len() as f64;
            let var: f64 =
                scaled.iter().map(|r| (r[col] - mean).powi(2)).sum::<f64>() / scaled.len() as f64;
            assert!(mean.abs() < 1e-9);
            assert!((var - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_transform_is_stable_across_calls() {
        let rows: Vec<&[f64]> = vec![&[1.0, 2.0], &[2.0, 4.0], &[3.0, 6.0]];
        let scaler = StandardScaler::fit(&rows);
        let first = scaler.transform(&[2.5, 5.0]);
        let second = scaler.transform(&[2.5, 5.0]);
        assert_eq!(first, second);
    }
}
