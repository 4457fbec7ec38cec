use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use densitometry::{dtos::analysis_report::AnalysisReport, env, pipeline::Pipeline};

use crate::error::CliError;

/// 🦴 Analyze Command
///
/// Computes tissue and bone mineral density of a body folder.
#[derive(Parser, Debug)]
#[command(name = "analyze", about = "🦴 Compute TMD and BMD from phantom and body folders.", long_about = None)]
pub struct AnalyzeCommand {
    /// 🧪 Folder with the first phantom images
    ///
    /// Falls back to TMD_BMD_PHANTOM1_DIR.
    #[arg(long, value_name = "DIR")]
    pub phantom1: Option<PathBuf>,

    /// 🧪 Folder with the second phantom images
    ///
    /// Falls back to TMD_BMD_PHANTOM2_DIR.
    #[arg(long, value_name = "DIR")]
    pub phantom2: Option<PathBuf>,

    /// 🦴 Folder with the body region images
    ///
    /// Falls back to TMD_BMD_BODY_DIR.
    #[arg(long, value_name = "DIR")]
    pub body: Option<PathBuf>,

    /// 🖼️ Recognized image extension, repeatable
    ///
    /// Falls back to TMD_BMD_EXTENSIONS, then to bmp.
    #[arg(short, long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Scan the three folders at the same time
    #[arg(long)]
    pub concurrent: bool,
}

pub async fn run(args: AnalyzeCommand) -> Result<(), CliError> {
    let phantom1 = super::folder(args.phantom1, "phantom1", env::PHANTOM1_DIR)?;
    let phantom2 = super::folder(args.phantom2, "phantom2", env::PHANTOM2_DIR)?;
    let body = super::folder(args.body, "body", env::BODY_DIR)?;

    let pipeline = Pipeline::with_sampler(super::sampler(args.extensions));
    let report = if args.concurrent {
        pipeline
            .analyze_concurrent(&phantom1, &phantom2, &body)
            .await?
    } else {
        pipeline.analyze(&phantom1, &phantom2, &body)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    println!("{} {}", "TMD:".bold(), report.density.tmd.to_string().green());
    println!("{} {}", "BMD:".bold(), report.density.bmd.to_string().green());

    let thresholds = [
        ("BMD13", report.breakdown.bmd13),
        ("BMD14", report.breakdown.bmd14),
        ("TMD30", report.breakdown.tmd30),
        ("TMD31", report.breakdown.tmd31),
    ];
    for (name, value) in thresholds {
        let value = match value {
            Some(value) => value.to_string(),
            None => "n/a".to_string(),
        };
        println!("  {} {}", format!("{name}:").dimmed(), value);
    }

    if let Some(body) = report.body {
        println!("  {} {} px, mean {}", "body:".dimmed(), body.count, body.mean);
    }
}
