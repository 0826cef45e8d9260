use std::fmt;

use crate::error::StatsError;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring common Pandas dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "NaN"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// `Null` and float NaN both count as missing.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Float(v) => v.is_nan(),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// NumericColumn – the finite values of one column
// ---------------------------------------------------------------------------

/// Numeric view of a column after dropping missing cells.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn {
    pub values: Vec<f64>,
    /// How many `Null` / NaN cells were dropped.
    pub missing: usize,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// Row-major table with named columns. Every row has `column_names.len()` cells.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub column_names: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    /// Build a dataset, padding short rows with `Null`.
    pub fn new(column_names: Vec<String>, mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = column_names.len();
        for row in &mut rows {
            row.resize(width, CellValue::Null);
        }
        Dataset { column_names, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|c| c == name)
    }

    /// Iterate over the cells of a column, top to bottom.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a CellValue> + 'a> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    /// A column is numeric when every non-missing cell is an integer or a float.
    /// An all-missing column is not numeric.
    pub fn is_numeric_column(&self, name: &str) -> bool {
        let Some(cells) = self.column(name) else {
            return false;
        };
        let mut seen_number = false;
        for cell in cells {
            if cell.is_missing() {
                continue;
            }
            if cell.as_f64().is_none() {
                return false;
            }
            seen_number = true;
        }
        seen_number
    }

    /// Total number of missing cells across all columns.
    pub fn missing_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_missing())
            .count()
    }

    /// Extract the finite values of a numeric column, dropping missing cells.
    pub fn numeric_column(&self, name: &str) -> Result<NumericColumn, StatsError> {
        let cells = self.column(name).ok_or_else(|| StatsError::ColumnNotFound {
            column: name.to_string(),
        })?;

        let mut values = Vec::with_capacity(self.len());
        let mut missing = 0;
        for (row, cell) in cells.enumerate() {
            if cell.is_missing() {
                missing += 1;
                continue;
            }
            match cell.as_f64() {
                Some(v) if v.is_finite() => values.push(v),
                Some(v) => {
                    return Err(StatsError::NonFinite {
                        column: name.to_string(),
                        row,
                        value: v,
                    })
                }
                None => {
                    return Err(StatsError::NonNumeric {
                        column: name.to_string(),
                        row,
                        value: cell.to_string(),
                    })
                }
            }
        }
        Ok(NumericColumn { values, missing })
    }

    /// Build a dataset from `(name, cells)` pairs. Columns may differ in length.
    #[cfg(test)]
    pub fn from_columns(columns: Vec<(&str, Vec<CellValue>)>) -> Self {
        let n_rows = columns.iter().map(|(_, c)| c.len()).max().unwrap_or(0);
        let column_names = columns.iter().map(|(n, _)| n.to_string()).collect();
        let rows = (0..n_rows)
            .map(|r| {
                columns
                    .iter()
                    .map(|(_, cells)| cells.get(r).cloned().unwrap_or(CellValue::Null))
                    .collect()
            })
            .collect();
        Dataset::new(column_names, rows)
    }
}
