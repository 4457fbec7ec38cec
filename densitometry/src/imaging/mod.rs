use std::path::Path;

use image::GrayImage;

use crate::{error::AnalysisError, result::AnalysisResult};

/// Turns an image file into an 8-bit grayscale raster.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> AnalysisResult<GrayImage>;
}

/// Decodes through the `image` crate, converting color sources to luma.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, path: &Path) -> AnalysisResult<GrayImage> {
        let image = image::open(path).map_err(|source| AnalysisError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(image.into_luma8())
    }
}
