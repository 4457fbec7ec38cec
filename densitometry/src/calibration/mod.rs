use log::debug;

use crate::{
    error::{AnalysisError, Phantom},
    models::{calibration::linear_density_model::LinearDensityModel, samples::IntensitySamples},
    result::AnalysisResult,
};

/// Attenuation per intensity step of the scanner.
pub const ATTENUATION_SCALE: f64 = 0.00038235294118;
/// Attenuation at intensity zero.
pub const ATTENUATION_OFFSET: f64 = 0.0025;

pub const LOW_PHANTOM_DENSITY: f64 = 0.0;
pub const HIGH_PHANTOM_DENSITY: f64 = 50.0;
pub const PHANTOM_DENSITY_SPAN: f64 = HIGH_PHANTOM_DENSITY - LOW_PHANTOM_DENSITY;

/// Density assumed for the low phantom when anchoring the baseline.
pub const BASELINE_DENSITY_OFFSET: f64 = 25.0;
/// Full calibration span used when inverting attenuation to density.
pub const DENSITY_SCALE_FACTOR: f64 = 100.0;

pub fn to_attenuation(mean_intensity: f64) -> f64 {
    ATTENUATION_SCALE * mean_intensity + ATTENUATION_OFFSET
}

/// Builds the calibration line from the two phantom samples. Input order does
/// not matter, the darker phantom always becomes the density 0 reference.
pub fn build_model(
    phantom1: &IntensitySamples,
    phantom2: &IntensitySamples,
) -> AnalysisResult<LinearDensityModel> {
    let first_mean = phantom1
        .mean()
        .ok_or(AnalysisError::EmptyPhantomSet {
            phantom: Phantom::First,
        })?;
    let second_mean = phantom2
        .mean()
        .ok_or(AnalysisError::EmptyPhantomSet {
            phantom: Phantom::Second,
        })?;
    debug!("Phantom means: {} and {}", first_mean, second_mean);

    let model = LinearDensityModel::from_means(first_mean, second_mean)?;
    debug!(
        "Phantom attenuation: {} and {}, slope {}, baseline {}",
        to_attenuation(model.low().mean_intensity),
        to_attenuation(model.high().mean_intensity),
        model.slope(),
        model.baseline()
    );
    Ok(model)
}
