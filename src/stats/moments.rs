use crate::data::model::Dataset;
use crate::error::StatsError;

/// Relative resolution below which the second central moment counts as zero.
const ZERO_VARIANCE_RESOLUTION: f64 = 1e-15;

// ---------------------------------------------------------------------------
// Moments – the four summary statistics of one column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub mean: f64,
    /// Sample standard deviation (N−1).
    pub stddev: f64,
    /// Fisher-Pearson coefficient `m3 / m2^1.5` over population moments.
    pub skewness: f64,
    /// `m4 / m2^2 − 3` over population moments.
    pub excess_kurtosis: f64,
}

impl Moments {
    /// Compute the moments of a slice of finite values.
    ///
    /// `column` is only used to label errors.
    pub fn from_values(column: &str, values: &[f64]) -> Result<Self, StatsError> {
        let n = values.len();
        if n < 2 {
            return Err(StatsError::InsufficientData {
                column: column.to_string(),
                count: n,
            });
        }
        let nf = n as f64;
        let mean = values.iter().sum::<f64>() / nf;

        let (mut s2, mut s3, mut s4) = (0.0, 0.0, 0.0);
        for &v in values {
            let d = v - mean;
            let d2 = d * d;
            s2 += d2;
            s3 += d2 * d;
            s4 += d2 * d2;
        }
        let m2 = s2 / nf;
        let m3 = s3 / nf;
        let m4 = s4 / nf;

        if ![mean, m2, m3, m4].iter().all(|v| v.is_finite()) {
            return Err(StatsError::Overflow {
                column: column.to_string(),
            });
        }
        if m2 <= (ZERO_VARIANCE_RESOLUTION * mean).powi(2) {
            return Err(StatsError::ZeroVariance {
                column: column.to_string(),
                mean,
            });
        }

        let moments = Moments {
            mean,
            stddev: (s2 / (nf - 1.0)).sqrt(),
            skewness: m3 / m2.powf(1.5),
            excess_kurtosis: m4 / (m2 * m2) - 3.0,
        };
        let all_finite = [
            moments.stddev,
            moments.skewness,
            moments.excess_kurtosis,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(StatsError::Overflow {
                column: column.to_string(),
            });
        }
        Ok(moments)
    }
}

/// Mean, sample standard deviation, skewness and excess kurtosis of `column`.
///
/// Missing cells are dropped first; any other non-numeric cell is an error.
pub fn compute_moments(dataset: &Dataset, column: &str) -> Result<Moments, StatsError> {
    let numeric = dataset.numeric_column(column)?;
    if numeric.missing > 0 {
        log::warn!(
            "Dropped {} missing values from column '{column}'",
            numeric.missing
        );
    }

    let moments = Moments::from_values(column, &numeric.values)?;
    log::debug!("Moments of '{column}': {moments:?}");
    Ok(moments)
}
