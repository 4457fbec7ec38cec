pub mod calibration;
pub mod density;
pub mod predicate;
pub mod samples;
