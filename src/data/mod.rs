/// Data layer: core types, loading, and the preprocessing summary.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  named columns, row-major CellValues
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  preview rows, describe table, missing count
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod summary;
