use log::debug;
use stats_rs::summary::mean;

use crate::{
    calibration::to_attenuation,
    error::AnalysisError,
    models::{
        calibration::linear_density_model::LinearDensityModel,
        density::{density_breakdown::DensityBreakdown, mineral_density::MineralDensity},
        samples::IntensitySamples,
    },
    result::AnalysisResult,
};

/// Added to every body pixel to compensate for the inclusive `>= 13` sampling bound.
pub const INTENSITY_SHIFT: u16 = 1;
/// Shifted value from which a pixel counts as dense bone tissue.
pub const DENSE_THRESHOLD: u16 = 31;

const BREAKDOWN_TOTAL_THRESHOLDS: (u16, u16) = (13, 14);
const BREAKDOWN_DENSE_THRESHOLDS: (u16, u16) = (30, 31);

/// Body values widened to `u16` so 255 does not wrap.
fn shifted(body: &IntensitySamples) -> Vec<u16> {
    body.values()
        .iter()
        .map(|&value| u16::from(value) + INTENSITY_SHIFT)
        .collect()
}

fn at_least(values: &[u16], threshold: u16) -> Vec<u16> {
    values.iter().copied().filter(|&v| v >= threshold).collect()
}

pub fn evaluate(
    body: &IntensitySamples,
    model: &LinearDensityModel,
) -> AnalysisResult<MineralDensity> {
    let all = shifted(body);
    let mean_all = mean(&all).ok_or(AnalysisError::NoBodyData)?;

    let dense = at_least(&all, DENSE_THRESHOLD);
    let mean_dense = mean(&dense).ok_or(AnalysisError::EmptyDenseSubset)?;

    let body_attenuation = to_attenuation(mean_all);
    let dense_attenuation = to_attenuation(mean_dense);
    debug!(
        "Body means: all {} ({} px), dense {} ({} px)",
        mean_all,
        all.len(),
        mean_dense,
        dense.len()
    );
    debug!(
        "Body attenuation: all {}, dense {}",
        body_attenuation, dense_attenuation
    );

    Ok(MineralDensity::new(
        model.density(dense_attenuation),
        model.density(body_attenuation),
    ))
}

/// Densities at the neighbouring thresholds, never failing on empty subsets.
pub fn breakdown(body: &IntensitySamples, model: &LinearDensityModel) -> DensityBreakdown {
    let all = shifted(body);
    let density_at = |threshold| mean(&at_least(&all, threshold)).map(|m| model.density_of_mean(m));

    let (bmd13, bmd14) = BREAKDOWN_TOTAL_THRESHOLDS;
    let (tmd30, tmd31) = BREAKDOWN_DENSE_THRESHOLDS;

    let breakdown = DensityBreakdown {
        bmd13: density_at(bmd13),
        bmd14: density_at(bmd14),
        tmd30: density_at(tmd30),
        tmd31: density_at(tmd31),
        low_phantom_attenuation: to_attenuation(model.low().mean_intensity),
        high_phantom_attenuation: to_attenuation(model.high().mean_intensity),
        body_attenuation: mean(&all).map(to_attenuation),
        dense_attenuation: mean(&at_least(&all, DENSE_THRESHOLD)).map(to_attenuation),
    };
    debug!("{:?}", breakdown);
    breakdown
}
