use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

pub const USAGE: &str = "\
Usage: rusty-moments [--config <FILE>] [DATA_FILE] [COLUMN]

Loads a .csv, .json or .parquet table, prints a preview and summary, then
reports mean, standard deviation, skewness and excess kurtosis of COLUMN.

Options:
  --config <FILE>   JSON file with any of: data_path, column, preview_rows
  -h, --help        Print this help

Set RUST_LOG=debug for diagnostic logging.";

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Table to analyse.
    pub data_path: PathBuf,
    /// Numeric column whose moments are reported.
    pub column: String,
    /// Rows shown in the preview table.
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("Final_data.csv"),
            column: "Calories_Burned".to_string(),
            preview_rows: 5,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Config),
    Help,
}

impl Config {
    /// Read a JSON config file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Parse command-line arguments (without the program name).
    ///
    /// Defaults, then `--config`, then positional `DATA_FILE` and `COLUMN`.
    pub fn from_args<I>(args: I) -> Result<Command>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config_file: Option<PathBuf> = None;
        let mut positional: Vec<String> = Vec::new();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--config" => {
                    let path = args.next().context("--config requires a file path")?;
                    config_file = Some(PathBuf::from(path));
                }
                flag if flag.starts_with("--") => bail!("Unknown option: {flag}"),
                _ => positional.push(arg),
            }
        }

        if positional.len() > 2 {
            bail!("Expected at most 2 positional arguments, got {}", positional.len());
        }

        let mut config = match &config_file {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        let mut positional = positional.into_iter();
        if let Some(path) = positional.next() {
            config.data_path = PathBuf::from(path);
        }
        if let Some(column) = positional.next() {
            config.column = column;
        }
        Ok(Command::Run(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let cmd = Config::from_args(args(&[])).unwrap();
        assert_eq!(cmd, Command::Run(Config::default()));
        let Command::Run(config) = cmd else {
            unreachable!()
        };
        assert_eq!(config.data_path, PathBuf::from("Final_data.csv"));
        assert_eq!(config.column, "Calories_Burned");
    }

    #[test]
    fn test_positional_overrides() {
        let cmd = Config::from_args(args(&["gym.parquet", "Age"])).unwrap();
        let Command::Run(config) = cmd else {
            panic!("expected run")
        };
        assert_eq!(config.data_path, PathBuf::from("gym.parquet"));
        assert_eq!(config.column, "Age");
        assert_eq!(config.preview_rows, 5);
    }

    #[test]
    fn test_config_file_then_positional() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"column": "Age", "preview_rows": 10}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cmd = Config::from_args(vec!["--config".to_string(), path.clone()]).unwrap();
        let Command::Run(config) = cmd else {
            panic!("expected run")
        };
        assert_eq!(config.column, "Age");
        assert_eq!(config.preview_rows, 10);
        assert_eq!(config.data_path, PathBuf::from("Final_data.csv"));

        let cmd = Config::from_args(vec![
            "--config".to_string(),
            path,
            "other.csv".to_string(),
            "Calories_Burned".to_string(),
        ])
        .unwrap();
        let Command::Run(config) = cmd else {
            panic!("expected run")
        };
        assert_eq!(config.column, "Calories_Burned");
        assert_eq!(config.preview_rows, 10);
    }

    #[test]
    fn test_bad_arguments() {
        assert_eq!(Config::from_args(args(&["--help"])).unwrap(), Command::Help);
        assert!(Config::from_args(args(&["--config"])).is_err());
        assert!(Config::from_args(args(&["--verbose"])).is_err());
        assert!(Config::from_args(args(&["a.csv", "x", "extra"])).is_err());
    }

    #[test]
    fn test_unknown_config_field_rejected() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"colum": "Age"}}"#).unwrap();
        assert!(Config::from_file(file.path()).is_err());
    }
}
