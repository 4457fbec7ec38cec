use std::{fs, path::Path};

use densitometry::{
    error::{AnalysisError, Phantom},
    pipeline::{self, Pipeline},
    sampling::IntensitySampler,
};
use image::GrayImage;
use tempfile::TempDir;

const TOLERANCE: f64 = 1e-9;

fn write_image(dir: &Path, name: &str, width: u32, height: u32, pixels: Vec<u8>) {
    let image = GrayImage::from_raw(width, height, pixels).unwrap();
    image.save(dir.join(name)).unwrap();
}

fn folder(images: &[(&str, Vec<u8>)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, pixels) in images {
        write_image(dir.path(), name, 2, 2, pixels.clone());
    }
    dir
}

fn png_pipeline() -> Pipeline {
    Pipeline::with_sampler(IntensitySampler::new().extensions(["png"]))
}

struct Fixture {
    phantom1: TempDir,
    phantom2: TempDir,
    body: TempDir,
}

impl Fixture {
    fn new(body: Vec<u8>) -> Self {
        Self {
            phantom1: folder(&[("p1.png", vec![10; 4])]),
            phantom2: folder(&[("p2.png", vec![60; 4])]),
            body: folder(&[("slice.png", body)]),
        }
    }

    fn paths(&self) -> (&Path, &Path, &Path) {
        (self.phantom1.path(), self.phantom2.path(), self.body.path())
    }
}

#[test]
fn end_to_end_densities() {
    let fixture = Fixture::new(vec![13, 14, 30, 31]);
    let (p1, p2, body) = fixture.paths();

    let density = png_pipeline().run(p1, p2, body).unwrap();

    assert!((density.bmd - 0.38).abs() < TOLERANCE, "bmd = {}", density.bmd);
    assert!((density.tmd - 0.465).abs() < TOLERANCE, "tmd = {}", density.tmd);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let fixture = Fixture::new(vec![13, 14, 30, 31]);
    let (p1, p2, body) = fixture.paths();
    let pipeline = png_pipeline();

    let first = pipeline.run(p1, p2, body).unwrap();
    let second = pipeline.run(p1, p2, body).unwrap();

    assert_eq!(first.tmd.to_bits(), second.tmd.to_bits());
    assert_eq!(first.bmd.to_bits(), second.bmd.to_bits());
}

#[test]
fn swapped_phantom_folders_give_the_same_result() {
    let fixture = Fixture::new(vec![20, 40, 80, 200]);
    let (p1, p2, body) = fixture.paths();
    let pipeline = png_pipeline();

    assert_eq!(
        pipeline.run(p1, p2, body).unwrap(),
        pipeline.run(p2, p1, body).unwrap()
    );
}

#[test]
fn pixels_are_pooled_across_files() {
    let phantom1 = folder(&[("a.png", vec![0, 0, 8, 8]), ("b.png", vec![12, 12, 0, 0])]);
    let phantom2 = folder(&[("a.png", vec![60; 4])]);
    let body = folder(&[("a.png", vec![0, 13, 14, 0]), ("b.png", vec![30, 31, 5, 5])]);

    let density = png_pipeline()
        .run(phantom1.path(), phantom2.path(), body.path())
        .unwrap();

    // phantom1 mean is 10 and the body pool is 13 14 30 31, as in the single file case
    assert!((density.bmd - 0.38).abs() < TOLERANCE);
    assert!((density.tmd - 0.465).abs() < TOLERANCE);
}

#[test]
fn dark_body_is_no_data() {
    let fixture = Fixture::new(vec![0, 5, 12, 12]);
    let (p1, p2, body) = fixture.paths();

    let err = png_pipeline().run(p1, p2, body).unwrap_err();
    assert!(matches!(err, AnalysisError::NoBodyData));
}

#[test]
fn body_without_dense_tissue_has_no_tmd() {
    let fixture = Fixture::new(vec![13, 20, 25, 29]);
    let (p1, p2, body) = fixture.paths();

    let err = png_pipeline().run(p1, p2, body).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyDenseSubset));
}

#[test]
fn black_phantom_is_reported() {
    let phantom1 = folder(&[("p1.png", vec![0; 4])]);
    let phantom2 = folder(&[("p2.png", vec![60; 4])]);
    let body = folder(&[("slice.png", vec![13, 14, 30, 31])]);

    let err = png_pipeline()
        .run(phantom1.path(), phantom2.path(), body.path())
        .unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::EmptyPhantomSet {
            phantom: Phantom::First
        }
    ));
}

#[test]
fn identical_phantoms_are_degenerate() {
    let phantom1 = folder(&[("p1.png", vec![40; 4])]);
    let phantom2 = folder(&[("p2.png", vec![40; 4])]);
    let body = folder(&[("slice.png", vec![13, 14, 30, 31])]);

    let err = png_pipeline()
        .run(phantom1.path(), phantom2.path(), body.path())
        .unwrap_err();
    assert!(matches!(err, AnalysisError::DegenerateCalibration { .. }));
}

#[test]
fn folders_without_bitmaps_count_as_empty() {
    // default sampler only recognizes .bmp, so every folder samples to nothing
    let fixture = Fixture::new(vec![13, 14, 30, 31]);
    let (p1, p2, body) = fixture.paths();
    fs::write(body.join("notes.txt"), "not an image").unwrap();

    let err = pipeline::run(p1, p2, body).unwrap_err();
    assert!(matches!(err, AnalysisError::NoBodyData));
}

#[test]
fn unreadable_image_is_a_decode_error() {
    let fixture = Fixture::new(vec![13, 14, 30, 31]);
    let (p1, p2, body) = fixture.paths();
    let broken = body.join("zz_broken.png");
    fs::write(&broken, b"definitely not a png").unwrap();

    let err = png_pipeline().run(p1, p2, body).unwrap_err();
    assert!(matches!(err, AnalysisError::Image { path, .. } if path == broken));
}

#[test]
fn calibration_only_uses_phantoms() {
    let fixture = Fixture::new(vec![0; 4]);
    let (p1, p2, _) = fixture.paths();

    let model = png_pipeline().calibrate(p2, p1).unwrap();

    assert_eq!(model.low().mean_intensity, 10.0);
    assert_eq!(model.high().mean_intensity, 60.0);
    assert!(model.slope() > 0.0);
}

#[test]
fn report_carries_counts_and_breakdown() {
    let fixture = Fixture::new(vec![13, 14, 30, 31]);
    let (p1, p2, body) = fixture.paths();

    let report = png_pipeline().analyze(p1, p2, body).unwrap();

    assert_eq!(report.body.unwrap().count, 4);
    assert_eq!(report.phantom1.unwrap().mean, 10.0);
    assert_eq!(report.breakdown.tmd31, Some(report.density.tmd));
    assert_eq!(report.breakdown.bmd13, Some(report.density.bmd));

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["density"]["tmd"].is_number());
    assert!(json["generated_at"].is_string());
}

#[tokio::test]
async fn concurrent_scan_matches_sequential() {
    let fixture = Fixture::new(vec![13, 14, 30, 31]);
    let (p1, p2, body) = fixture.paths();
    let pipeline = png_pipeline();

    let sequential = pipeline.run(p1, p2, body).unwrap();
    let concurrent = pipeline.run_concurrent(p1, p2, body).await.unwrap();

    assert_eq!(sequential, concurrent);
}

#[tokio::test]
async fn concurrent_scan_surfaces_errors() {
    let fixture = Fixture::new(vec![1, 2, 3, 4]);
    let (p1, p2, body) = fixture.paths();

    let err = png_pipeline()
        .run_concurrent(p1, p2, body)
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::NoBodyData));
}
