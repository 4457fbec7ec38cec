use std::path::Path;

use log::info;
use tokio::task::JoinHandle;

use crate::{
    calibration::build_model,
    dtos::analysis_report::AnalysisReport,
    error::AnalysisError,
    evaluation::{breakdown, evaluate},
    imaging::{ImageCrateDecoder, ImageDecoder},
    models::{
        calibration::linear_density_model::LinearDensityModel,
        density::mineral_density::MineralDensity, predicate::IntensityPredicate,
        samples::IntensitySamples,
    },
    result::AnalysisResult,
    sampling::IntensitySampler,
};

/// TMD and BMD of `body_dir`, calibrated against the two phantom folders,
/// using the default `.bmp` sampler.
pub fn run(
    phantom1_dir: &Path,
    phantom2_dir: &Path,
    body_dir: &Path,
) -> AnalysisResult<MineralDensity> {
    Pipeline::new().run(phantom1_dir, phantom2_dir, body_dir)
}

struct Scans {
    phantom1: IntensitySamples,
    phantom2: IntensitySamples,
    body: IntensitySamples,
}

#[derive(Debug, Clone)]
pub struct Pipeline<D = ImageCrateDecoder> {
    sampler: IntensitySampler<D>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::with_sampler(IntensitySampler::new())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ImageDecoder> Pipeline<D> {
    pub fn with_sampler(sampler: IntensitySampler<D>) -> Self {
        Self { sampler }
    }

    pub fn run(
        &self,
        phantom1_dir: &Path,
        phantom2_dir: &Path,
        body_dir: &Path,
    ) -> AnalysisResult<MineralDensity> {
        let scans = self.scan(phantom1_dir, phantom2_dir, body_dir)?;
        let (_, density) = Self::finish(&scans)?;
        Ok(density)
    }

    /// Same as [`Pipeline::run`] plus the diagnostics the CLI reports.
    pub fn analyze(
        &self,
        phantom1_dir: &Path,
        phantom2_dir: &Path,
        body_dir: &Path,
    ) -> AnalysisResult<AnalysisReport> {
        let scans = self.scan(phantom1_dir, phantom2_dir, body_dir)?;
        Self::report(&scans)
    }

    /// Only the phantom half of the pipeline.
    pub fn calibrate(
        &self,
        phantom1_dir: &Path,
        phantom2_dir: &Path,
    ) -> AnalysisResult<LinearDensityModel> {
        let phantom1 = self.sampler.sample(phantom1_dir, IntensityPredicate::PHANTOM)?;
        let phantom2 = self.sampler.sample(phantom2_dir, IntensityPredicate::PHANTOM)?;
        info!("Phantom pixels: {} and {}", phantom1.len(), phantom2.len());
        build_model(&phantom1, &phantom2)
    }

    fn scan(
        &self,
        phantom1_dir: &Path,
        phantom2_dir: &Path,
        body_dir: &Path,
    ) -> AnalysisResult<Scans> {
        Ok(Scans {
            phantom1: self.sampler.sample(phantom1_dir, IntensityPredicate::PHANTOM)?,
            phantom2: self.sampler.sample(phantom2_dir, IntensityPredicate::PHANTOM)?,
            body: self.sampler.sample(body_dir, IntensityPredicate::BODY)?,
        })
    }

    fn finish(scans: &Scans) -> AnalysisResult<(LinearDensityModel, MineralDensity)> {
        info!(
            "Sampled pixels: phantom1 {}, phantom2 {}, body {}",
            scans.phantom1.len(),
            scans.phantom2.len(),
            scans.body.len()
        );
        if scans.body.is_empty() {
            return Err(AnalysisError::NoBodyData);
        }

        let model = build_model(&scans.phantom1, &scans.phantom2)?;
        let density = evaluate(&scans.body, &model)?;
        info!("TMD: {} BMD: {}", density.tmd, density.bmd);
        Ok((model, density))
    }

    fn report(scans: &Scans) -> AnalysisResult<AnalysisReport> {
        let (model, density) = Self::finish(scans)?;
        Ok(AnalysisReport {
            density,
            model,
            breakdown: breakdown(&scans.body, &model),
            phantom1: scans.phantom1.summary(),
            phantom2: scans.phantom2.summary(),
            body: scans.body.summary(),
            generated_at: chrono::Utc::now(),
        })
    }
}

impl<D> Pipeline<D>
where
    D: ImageDecoder + Clone + Send + 'static,
{
    /// Scans the three folders on blocking tasks at the same time.
    pub async fn run_concurrent(
        &self,
        phantom1_dir: &Path,
        phantom2_dir: &Path,
        body_dir: &Path,
    ) -> AnalysisResult<MineralDensity> {
        let scans = self
            .scan_concurrent(phantom1_dir, phantom2_dir, body_dir)
            .await?;
        let (_, density) = Self::finish(&scans)?;
        Ok(density)
    }

    pub async fn analyze_concurrent(
        &self,
        phantom1_dir: &Path,
        phantom2_dir: &Path,
        body_dir: &Path,
    ) -> AnalysisResult<AnalysisReport> {
        let scans = self
            .scan_concurrent(phantom1_dir, phantom2_dir, body_dir)
            .await?;
        Self::report(&scans)
    }

    async fn scan_concurrent(
        &self,
        phantom1_dir: &Path,
        phantom2_dir: &Path,
        body_dir: &Path,
    ) -> AnalysisResult<Scans> {
        let (phantom1, phantom2, body) = tokio::join!(
            self.spawn_sample(phantom1_dir, IntensityPredicate::PHANTOM),
            self.spawn_sample(phantom2_dir, IntensityPredicate::PHANTOM),
            self.spawn_sample(body_dir, IntensityPredicate::BODY),
        );

        Ok(Scans {
            phantom1: phantom1??,
            phantom2: phantom2??,
            body: body??,
        })
    }

    fn spawn_sample(
        &self,
        directory: &Path,
        predicate: IntensityPredicate,
    ) -> JoinHandle<AnalysisResult<IntensitySamples>> {
        let sampler = self.sampler.clone();
        let directory = directory.to_path_buf();
        tokio::task::spawn_blocking(move || sampler.sample(&directory, predicate))
    }
}
