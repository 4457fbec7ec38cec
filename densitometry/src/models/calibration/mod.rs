pub mod calibration_point;
pub mod linear_density_model;
