use derma_detect::common::{DermaImage, ModelConfig};
use derma_detect::detector::DermaDetector;
use derma_detect::inference_process::InferenceBackend;
use derma_detect::DetectError;
use image::DynamicImage;
use ndarray::{Array, Array3, ArrayD, Ix4};

struct CannedBackend {
    output: ArrayD<f32>,
}

impl InferenceBackend for CannedBackend {
    fn infer(&mut self, _input: Array<f32, Ix4>) -> anyhow::Result<ArrayD<f32>> {
        Ok(self.output.clone())
    }
}

struct FailingBackend;

impl InferenceBackend for FailingBackend {
    fn infer(&mut self, _input: Array<f32, Ix4>) -> anyhow::Result<ArrayD<f32>> {
        anyhow::bail!("inference session lost")
    }
}

fn quiet_output() -> ArrayD<f32> {
    // every anchor at or below the default confidence threshold
    let rows: Vec<Vec<f32>> = vec![
        vec![320., 320., 100., 100., 0.10, 0., 0., 1., 0., 0.],
        vec![100., 100., 50., 50., 0.20, 1., 0., 0., 0., 0.],
        vec![500., 500., 50., 50., 0.25, 0., 1., 0., 0., 0.],
    ];
    let flat: Vec<f32> = rows.iter().flatten().copied().collect();
    Array3::from_shape_vec((1, 3, 10), flat).unwrap().into_dyn()
}

#[test]
fn no_detections() {
    let backend = CannedBackend { output: quiet_output() };
    let mut detector = DermaDetector::new(backend, ModelConfig::default());

    let image = DermaImage::new(DynamicImage::new_rgb8(640, 640));

    let mut count = 0;
    while count < 3 {
        let result = derma_detect::run_detection(&mut detector, &image).unwrap();
        assert_eq!(result.len(), 0);
        count += 1;
    }
}

#[test]
fn per_image_threshold_overrides_config() {
    let rows: Vec<Vec<f32>> =
        vec![vec![320., 320., 100., 100., 0.9, 0., 0., 0., 1., 0.]];
    let flat: Vec<f32> = rows.iter().flatten().copied().collect();
    let output = Array3::from_shape_vec((1, 1, 10), flat).unwrap().into_dyn();

    let mut detector =
        DermaDetector::new(CannedBackend { output }, ModelConfig::default());

    let image = DermaImage::new(DynamicImage::new_rgb8(640, 640));
    assert_eq!(detector.detect(&image).unwrap().len(), 1);

    let strict = image.with_threshold(0.95);
    assert!(detector.detect(&strict).unwrap().is_empty());
}

#[test]
fn backend_failure_surfaces_as_model_unavailable() {
    let mut detector = DermaDetector::new(FailingBackend, ModelConfig::default());

    let image = DermaImage::new(DynamicImage::new_rgb8(640, 640));
    let err = detector.detect(&image).unwrap_err();

    assert!(matches!(err, DetectError::ModelUnavailable(_)));
}
