use serde::{Deserialize, Serialize};

/// Densities at neighbouring thresholds, for inspecting how sensitive the
/// result is to the threshold choice. Thresholds apply to shifted values.
/// An entry is `None` when no pixel reaches its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityBreakdown {
    pub bmd13: Option<f64>,
    pub bmd14: Option<f64>,
    pub tmd30: Option<f64>,
    pub tmd31: Option<f64>,
    pub low_phantom_attenuation: f64,
    pub high_phantom_attenuation: f64,
    pub body_attenuation: Option<f64>,
    pub dense_attenuation: Option<f64>,
}
