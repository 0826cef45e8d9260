use std::io::Write;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::data::loader::load_file;
use crate::data::summary::DatasetSummary;
use crate::stats::interpret::interpret_and_report;
use crate::stats::moments::compute_moments;

// ---------------------------------------------------------------------------
// End-to-end pipeline
// ---------------------------------------------------------------------------

/// Load the table, print its summary, then the moments report for `config.column`.
pub fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    let dataset = load_file(&config.data_path)?;
    if dataset.is_empty() {
        log::warn!("{} contains no rows", config.data_path.display());
    }

    let summary = DatasetSummary::compute(&dataset, config.preview_rows);
    writeln!(out, "{}", summary.render()?)?;

    let moments = compute_moments(&dataset, &config.column)
        .with_context(|| format!("analysing column '{}'", config.column))?;
    log::info!("Computed moments for '{}'", config.column);

    writeln!(out)?;
    writeln!(out, "{}", interpret_and_report(moments, &config.column))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, StatsError};
    use std::path::PathBuf;

    fn csv_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn config(path: PathBuf, column: &str) -> Config {
        Config {
            data_path: path,
            column: column.to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_run_end_to_end() {
        let file = csv_file(
            "Workout_Type,Calories_Burned\n\
             Yoga,2\nHIIT,4\nCardio,4\nStrength,4\nYoga,5\nHIIT,5\nCardio,7\nStrength,9\n",
        );
        let mut out = Vec::new();
        run(&config(file.path().to_path_buf(), "Calories_Burned"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("First 5 rows of data:"));
        assert!(text.contains("Summary statistics:"));
        assert!(text.contains("Missing values per column:\n0"));
        assert!(text.contains("Mean = 5.00"));
        assert!(text.contains("Standard Deviation = 2.14"));
        assert!(text.ends_with("The data is right-skewed and mesokurtic (normal tails).\n"));
    }

    #[test]
    fn test_run_constant_column_fails_with_numeric_domain_error() {
        let file = csv_file("x\n5\n5\n5\n5\n");
        let mut out = Vec::new();
        let err = run(&config(file.path().to_path_buf(), "x"), &mut out).unwrap_err();

        let stats = err.downcast_ref::<StatsError>().unwrap();
        assert_eq!(stats.kind(), ErrorKind::NumericDomain);
        // The summary is printed before the report is aborted.
        assert!(String::from_utf8(out).unwrap().contains("Summary statistics:"));
    }

    #[test]
    fn test_run_infinite_cell_fails_with_input_error() {
        let file = csv_file("x\n1\n2\ninf\n");
        let err = run(&config(file.path().to_path_buf(), "x"), &mut Vec::new()).unwrap_err();
        let stats = err.downcast_ref::<StatsError>().unwrap();
        assert_eq!(stats.kind(), ErrorKind::Input);
        assert!(matches!(stats, StatsError::NonFinite { row: 2, .. }));
    }

    #[test]
    fn test_run_missing_column() {
        let file = csv_file("x\n1\n2\n");
        let err = run(&config(file.path().to_path_buf(), "y"), &mut Vec::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StatsError>(),
            Some(StatsError::ColumnNotFound { .. })
        ));
    }

    #[test]
    fn test_run_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&config(dir.path().join("absent.csv"), "x"), &mut Vec::new());
        assert!(err.is_err());
    }
}
