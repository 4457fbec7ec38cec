use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use densitometry::{env, pipeline::Pipeline};

use crate::error::CliError;

/// 📏 Calibrate Command
#[derive(Parser, Debug)]
#[command(name = "calibrate", about = "📏 Fit the phantom calibration line.", long_about = None)]
pub struct CalibrateCommand {
    /// 🧪 Folder with the first phantom images
    #[arg(long, value_name = "DIR")]
    pub phantom1: Option<PathBuf>,

    /// 🧪 Folder with the second phantom images
    #[arg(long, value_name = "DIR")]
    pub phantom2: Option<PathBuf>,

    /// 🖼️ Recognized image extension, repeatable
    #[arg(short, long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Print the model as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CalibrateCommand) -> Result<(), CliError> {
    let phantom1 = super::folder(args.phantom1, "phantom1", env::PHANTOM1_DIR)?;
    let phantom2 = super::folder(args.phantom2, "phantom2", env::PHANTOM2_DIR)?;

    let model = Pipeline::with_sampler(super::sampler(args.extensions))
        .calibrate(&phantom1, &phantom2)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&model)?);
        return Ok(());
    }

    println!("{} {}", "slope:".bold(), model.slope());
    println!("{} {}", "baseline:".bold(), model.baseline());
    println!(
        "  {} mean {} -> density {}",
        "low phantom:".dimmed(),
        model.low().mean_intensity,
        model.low().known_density
    );
    println!(
        "  {} mean {} -> density {}",
        "high phantom:".dimmed(),
        model.high().mean_intensity,
        model.high().known_density
    );
    Ok(())
}
