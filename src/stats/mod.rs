/// Statistics layer: moment calculation and shape interpretation.
///
/// ```text
///   Dataset + column name
///        │
///        ▼
///   ┌──────────┐
///   │ moments   │  mean, std (N−1), skewness, excess kurtosis
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ interpret  │  threshold classification → text report
///   └───────────┘
/// ```

pub mod interpret;
pub mod moments;
