use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, warn};

use crate::{
    error::AnalysisError,
    imaging::{ImageCrateDecoder, ImageDecoder},
    models::{predicate::IntensityPredicate, samples::IntensitySamples},
    result::AnalysisResult,
};

pub const DEFAULT_EXTENSION: &str = "bmp";

/// Collects every qualifying pixel of every recognized image in a directory.
#[derive(Debug, Clone)]
pub struct IntensitySampler<D = ImageCrateDecoder> {
    decoder: D,
    extensions: Vec<String>,
}

impl IntensitySampler {
    pub fn new() -> Self {
        Self::with_decoder(ImageCrateDecoder)
    }
}

impl Default for IntensitySampler {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ImageDecoder> IntensitySampler<D> {
    pub fn with_decoder(decoder: D) -> Self {
        Self {
            decoder,
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }

    /// Replaces the recognized extensions, given without the leading dot.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn recognizes(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|extension| {
            file_name
                .strip_suffix(extension.as_str())
                .is_some_and(|stem| stem.ends_with('.'))
        })
    }

    pub fn sample(
        &self,
        directory: &Path,
        predicate: IntensityPredicate,
    ) -> AnalysisResult<IntensitySamples> {
        let files = self.recognized_files(directory)?;

        let mut values = Vec::new();
        for path in &files {
            let image = self.decoder.decode(path)?;
            let before = values.len();
            values.extend(image.as_raw().iter().copied().filter(|&v| predicate.accepts(v)));
            debug!(
                "{}: {} of {} pixels pass {:?}",
                path.display(),
                values.len() - before,
                image.as_raw().len(),
                predicate
            );
        }

        debug!(
            "Sampled {} pixels from {} files in {}",
            values.len(),
            files.len(),
            directory.display()
        );
        Ok(IntensitySamples::new(values))
    }

    /// Recognized files, sorted by file name.
    fn recognized_files(&self, directory: &Path) -> AnalysisResult<Vec<PathBuf>> {
        let io_error = |source: std::io::Error| AnalysisError::Io {
            path: directory.to_path_buf(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(directory).map_err(io_error)? {
            let entry = entry.map_err(io_error)?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => warn!("Skipping non UTF-8 file name {:?}", name),
            }
        }
        names.sort();

        Ok(names
            .into_iter()
            .filter(|name| self.recognizes(name))
            .map(|name| directory.join(name))
            .filter(|path| path.is_file())
            .collect())
    }
}
