use std::{fmt, io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phantom {
    First,
    Second,
}

impl fmt::Display for Phantom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phantom::First => write!(f, "phantom1"),
            Phantom::Second => write!(f, "phantom2"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no data for analysis, the body folder has no pixel >= 13")]
    NoBodyData,

    #[error("degenerate calibration: both phantoms average {mean} so the slope is zero")]
    DegenerateCalibration { mean: f64 },

    #[error("{phantom} has no pixel above zero, its mean is undefined")]
    EmptyPhantomSet { phantom: Phantom },

    #[error("no body pixel reaches the dense tissue threshold, TMD is undefined")]
    EmptyDenseSubset,

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode image {}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("directory scan task failed")]
    Join(#[from] tokio::task::JoinError),
}
