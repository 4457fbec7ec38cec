use std::path::PathBuf;

use clap::Subcommand;
use densitometry::{env, sampling::IntensitySampler};

use crate::error::CliError;

use self::{analyze::AnalyzeCommand, calibrate::CalibrateCommand};

pub mod analyze;
pub mod calibrate;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 🦴 Analyze
    ///
    /// Calibrate against both phantom folders and compute TMD and BMD of the body folder.
    Analyze(AnalyzeCommand),

    /// 📏 Calibrate
    ///
    /// Only build the phantom calibration line and print its slope and baseline.
    Calibrate(CalibrateCommand),
}

/// Flag value first, then the environment (or `.env`).
fn folder(
    arg: Option<PathBuf>,
    flag: &'static str,
    var: &'static str,
) -> Result<PathBuf, CliError> {
    match arg {
        Some(path) => Ok(path),
        None => env::path_var(var).ok_or(CliError::MissingFolder { flag, var }),
    }
}

fn sampler(extensions: Vec<String>) -> IntensitySampler {
    let extensions = if extensions.is_empty() {
        env::list_var(env::EXTENSIONS)
    } else {
        Some(
            extensions
                .into_iter()
                .map(|extension| extension.trim_start_matches('.').to_string())
                .collect(),
        )
    };

    match extensions {
        Some(extensions) => IntensitySampler::new().extensions(extensions),
        None => IntensitySampler::new(),
    }
}
