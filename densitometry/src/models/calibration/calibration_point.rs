use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationPoint {
    pub mean_intensity: f64,
    pub known_density: f64,
}

impl CalibrationPoint {
    pub fn new(mean_intensity: f64, known_density: f64) -> Self {
        Self {
            mean_intensity,
            known_density,
        }
    }
}
