use std::fmt::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Per-column descriptive statistics (the `describe()` table)
// ---------------------------------------------------------------------------

/// Row labels of the describe table, in display order.
const DESCRIBE_ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (N−1); NaN with fewer than two values.
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Summarise finite values. Returns `None` when there is nothing to summarise.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        } else {
            f64::NAN
        };

        Some(ColumnSummary {
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }

    fn cells(&self) -> [String; 8] {
        [
            self.count.to_string(),
            format_stat(self.mean),
            format_stat(self.std),
            format_stat(self.min),
            format_stat(self.q25),
            format_stat(self.median),
            format_stat(self.q75),
            format_stat(self.max),
        ]
    }
}

/// Quantile of sorted data, interpolating linearly between closest ranks.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

fn format_stat(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.4}")
    }
}

// ---------------------------------------------------------------------------
// DatasetSummary – what the driver prints before the moments report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub column_names: Vec<String>,
    /// First rows of the table, already rendered as text.
    pub preview: Vec<Vec<String>>,
    /// `(column, summary)` for every numeric column; `None` if all cells are missing.
    pub numeric: Vec<(String, Option<ColumnSummary>)>,
    pub missing_total: usize,
}

impl DatasetSummary {
    pub fn compute(dataset: &Dataset, preview_rows: usize) -> Self {
        let preview = dataset
            .rows
            .iter()
            .take(preview_rows)
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect();

        let numeric = dataset
            .column_names
            .iter()
            .filter(|name| dataset.is_numeric_column(name))
            .filter_map(|name| {
                let col = dataset.numeric_column(name).ok()?;
                Some((name.clone(), ColumnSummary::compute(&col.values)))
            })
            .collect();

        DatasetSummary {
            column_names: dataset.column_names.clone(),
            preview,
            numeric,
            missing_total: dataset.missing_count(),
        }
    }

    /// Render the preview rows as a table.
    pub fn preview_table(&self) -> Result<String> {
        let columns: Vec<Vec<String>> = (0..self.column_names.len())
            .map(|c| self.preview.iter().map(|row| row[c].clone()).collect())
            .collect();
        render_table(&self.column_names, columns)
    }

    /// Render the describe table: one row per statistic, one column per numeric column.
    pub fn describe_table(&self) -> Result<String> {
        let mut headers = vec![String::new()];
        let mut columns: Vec<Vec<String>> = vec![DESCRIBE_ROWS.iter().map(|s| s.to_string()).collect()];
        for (name, summary) in &self.numeric {
            headers.push(name.clone());
            let cells: Vec<String> = match summary {
                Some(s) => s.cells().to_vec(),
                None => {
                    let mut blank = vec![String::new(); DESCRIBE_ROWS.len()];
                    blank[0] = "0".to_string();
                    blank
                }
            };
            columns.push(cells);
        }
        render_table(&headers, columns)
    }

    /// Preview, describe table and missing-value total as one block of text.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "First {} rows of data:", self.preview.len())?;
        writeln!(out, "{}", self.preview_table()?)?;
        writeln!(out)?;
        writeln!(out, "Summary statistics:")?;
        writeln!(out, "{}", self.describe_table()?)?;
        writeln!(out)?;
        writeln!(out, "Missing values per column:")?;
        write!(out, "{}", self.missing_total)?;
        Ok(out)
    }
}

/// Build a string-typed record batch and let arrow lay out the table.
fn render_table(headers: &[String], columns: Vec<Vec<String>>) -> Result<String> {
    if headers.is_empty() {
        return Ok(String::new());
    }
    let fields: Vec<Field> = headers
        .iter()
        .map(|h| Field::new(h.as_str(), DataType::Utf8, false))
        .collect();
    let arrays: Vec<ArrayRef> = columns
        .into_iter()
        .map(|cells| Arc::new(StringArray::from(cells)) as ArrayRef)
        .collect();

    let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)
        .context("building summary table")?;
    let table = pretty_format_batches(&[batch]).context("formatting summary table")?;
    Ok(table.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    #[test]
    fn test_quantile_linear_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&sorted, 0.0), 1.0);
        assert_eq!(quantile(&sorted, 0.5), 2.5);
        assert_eq!(quantile(&sorted, 0.25), 1.75);
        assert_eq!(quantile(&sorted, 1.0), 4.0);
        assert!(quantile(&[], 0.5).is_nan());
    }

    #[test]
    fn test_column_summary() {
        let s = ColumnSummary::compute(&[9.0, 2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0]).unwrap();
        assert_eq!(s.count, 8);
        assert_eq!(s.mean, 5.0);
        assert!((s.std - 2.138).abs() < 1e-3);
        assert_eq!(s.min, 2.0);
        assert_eq!(s.median, 4.5);
        assert_eq!(s.max, 9.0);
    }

    #[test]
    fn test_column_summary_single_value() {
        let s = ColumnSummary::compute(&[3.0]).unwrap();
        assert!(s.std.is_nan());
        assert!(ColumnSummary::compute(&[]).is_none());
    }

    #[test]
    fn test_dataset_summary() {
        let ds = Dataset::from_columns(vec![
            (
                "Workout_Type",
                vec![
                    CellValue::String("Yoga".into()),
                    CellValue::String("HIIT".into()),
                    CellValue::Null,
                ],
            ),
            (
                "Calories_Burned",
                vec![CellValue::Float(800.0), CellValue::Null, CellValue::Integer(1000)],
            ),
        ]);
        let summary = DatasetSummary::compute(&ds, 2);
        assert_eq!(summary.preview.len(), 2);
        assert_eq!(summary.missing_total, 2);
        assert_eq!(summary.numeric.len(), 1);

        let (name, stats) = &summary.numeric[0];
        assert_eq!(name, "Calories_Burned");
        assert_eq!(stats.as_ref().unwrap().mean, 900.0);

        let text = summary.render().unwrap();
        assert!(text.contains("Summary statistics:"));
        assert!(text.contains("Workout_Type"));
        assert!(text.contains("900.0000"));
        assert!(text.ends_with("2"));
    }
}
