use chrono::{DateTime, Utc};
use serde::Serialize;
use stats_rs::summary::Summary;

use crate::models::{
    calibration::linear_density_model::LinearDensityModel,
    density::{density_breakdown::DensityBreakdown, mineral_density::MineralDensity},
};

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub density: MineralDensity,
    pub model: LinearDensityModel,
    pub breakdown: DensityBreakdown,
    pub phantom1: Option<Summary>,
    pub phantom2: Option<Summary>,
    pub body: Option<Summary>,
    pub generated_at: DateTime<Utc>,
}
