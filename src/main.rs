mod app;
mod config;
mod data;
mod error;
mod stats;

use std::process::ExitCode;

use config::{Command, Config, USAGE};
use error::{ErrorKind, StatsError};

fn main() -> ExitCode {
    env_logger::init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {e:#}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    log::debug!("Running with {config:?}");
    let stdout = std::io::stdout();
    match app::run(&config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<StatsError>().map(StatsError::kind) {
                Some(ErrorKind::NumericDomain) => log::error!("Statistic undefined: {e:#}"),
                Some(ErrorKind::Input) => log::error!("Invalid input column: {e:#}"),
                None => log::error!("Analysis failed: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
