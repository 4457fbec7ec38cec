use serde::{Deserialize, Serialize};

/// Calibrated densities, in the same units as the phantom densities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MineralDensity {
    /// Tissue mineral density, dense bone only.
    pub tmd: f64,
    /// Bone mineral density over every bone pixel.
    pub bmd: f64,
}

impl MineralDensity {
    pub fn new(tmd: f64, bmd: f64) -> Self {
        Self { tmd, bmd }
    }
}
