use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy for the statistics core
// ---------------------------------------------------------------------------

/// Broad category of a [`StatsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested column is absent, non-numeric or too short.
    Input,
    /// The input is well-formed but the statistic is undefined for it.
    NumericDomain,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    #[error("column '{column}', row {row}: '{value}' is not numeric")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },

    #[error("column '{column}', row {row}: {value} is not a finite number")]
    NonFinite {
        column: String,
        row: usize,
        value: f64,
    },

    #[error("column '{column}' has {count} usable values, at least 2 are required")]
    InsufficientData { column: String, count: usize },

    #[error(
        "column '{column}' has zero variance (every value is {mean}); \
         skewness and kurtosis are undefined"
    )]
    ZeroVariance { column: String, mean: f64 },

    #[error("column '{column}': moments overflow the range of f64")]
    Overflow { column: String },
}

impl StatsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StatsError::ColumnNotFound { .. }
            | StatsError::NonNumeric { .. }
            | StatsError::NonFinite { .. }
            | StatsError::InsufficientData { .. } => ErrorKind::Input,
            StatsError::ZeroVariance { .. } | StatsError::Overflow { .. } => {
                ErrorKind::NumericDomain
            }
        }
    }
}
