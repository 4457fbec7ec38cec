pub mod calibration;
pub mod dtos;
pub mod env;
pub mod error;
pub mod evaluation;
pub mod imaging;
pub mod logger;
pub mod models;
pub mod pipeline;
pub mod result;
pub mod sampling;
