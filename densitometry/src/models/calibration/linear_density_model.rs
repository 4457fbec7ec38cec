use serde::Serialize;

use crate::{
    calibration::{
        to_attenuation, BASELINE_DENSITY_OFFSET, DENSITY_SCALE_FACTOR, HIGH_PHANTOM_DENSITY,
        LOW_PHANTOM_DENSITY, PHANTOM_DENSITY_SPAN,
    },
    error::AnalysisError,
    result::AnalysisResult,
};

use super::calibration_point::CalibrationPoint;

/// Two point line from attenuation to density.
///
/// Only built through [`LinearDensityModel::from_means`], which refuses a zero
/// slope, so [`LinearDensityModel::density`] never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearDensityModel {
    low: CalibrationPoint,
    high: CalibrationPoint,
    slope: f64,
    baseline: f64,
}

impl LinearDensityModel {
    /// The lower mean is always the density 0 phantom, whichever input it came from.
    pub fn from_means(first_mean: f64, second_mean: f64) -> AnalysisResult<Self> {
        let (low_mean, high_mean) = if first_mean > second_mean {
            (second_mean, first_mean)
        } else {
            (first_mean, second_mean)
        };

        let low_attenuation = to_attenuation(low_mean);
        let high_attenuation = to_attenuation(high_mean);

        let slope = (high_attenuation - low_attenuation) / PHANTOM_DENSITY_SPAN;
        if slope == 0.0 {
            return Err(AnalysisError::DegenerateCalibration { mean: low_mean });
        }
        let baseline = low_attenuation - slope * BASELINE_DENSITY_OFFSET;

        Ok(Self {
            low: CalibrationPoint::new(low_mean, LOW_PHANTOM_DENSITY),
            high: CalibrationPoint::new(high_mean, HIGH_PHANTOM_DENSITY),
            slope,
            baseline,
        })
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn low(&self) -> CalibrationPoint {
        self.low
    }

    pub fn high(&self) -> CalibrationPoint {
        self.high
    }

    pub fn density(&self, attenuation: f64) -> f64 {
        (attenuation - self.baseline) / (DENSITY_SCALE_FACTOR * self.slope)
    }

    pub fn density_of_mean(&self, mean_intensity: f64) -> f64 {
        self.density(to_attenuation(mean_intensity))
    }
}
