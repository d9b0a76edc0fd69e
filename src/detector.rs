use std::time::Instant;

use crate::common::{DermaDetection, DermaImage, ModelConfig};
use crate::error::DetectError;
use crate::inference_process::InferenceBackend;
use crate::{postprocess, preprocess, utils, Result};

/// The full classification pipeline: preprocess, infer, postprocess, map
/// boxes back to source image coordinates.
#[derive(Debug)]
pub struct DermaDetector<B: InferenceBackend> {
    backend: B,
    config: ModelConfig,
}

impl<B: InferenceBackend> DermaDetector<B> {
    pub fn new(backend: B, config: ModelConfig) -> Self {
        log::info!("Initializing detector\n{}", config.summary());
        Self { backend, config }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Runs one image through the pipeline. Detections come back in source
    /// image coordinates, sorted by descending confidence.
    pub fn detect(&mut self, image: &DermaImage) -> Result<Vec<DermaDetection>> {
        self.forward(image, false)
    }

    /// Same as [`detect`](Self::detect), with per-stage timing printed when
    /// `profile` is set (logged at trace level otherwise).
    pub fn forward(&mut self, image: &DermaImage, profile: bool) -> Result<Vec<DermaDetection>> {
        let detect_time = Instant::now();

        let (img_width, img_height, input) =
            preprocess::to_model_input(&image.image, self.config.width, self.config.height);
        let mut _detect_elapsed = detect_time.elapsed();
        _detect_elapsed = utils::trace(profile, "TIME", "Preprocessing input", detect_time, _detect_elapsed);

        let output = self
            .backend
            .infer(input)
            .map_err(DetectError::ModelUnavailable)?;
        _detect_elapsed = utils::trace(profile, "TIME", "Detection run", detect_time, _detect_elapsed);

        let conf_threshold = image.threshold.unwrap_or(self.config.conf_threshold);
        let (mut detections, stats) = postprocess::process_with_stats(
            output.view(),
            &self.config.classes,
            conf_threshold,
            self.config.iou_threshold,
        )?;

        // suppression runs in model grid space; survivors map to source pixels
        let scale_x = img_width as f32 / self.config.width as f32;
        let scale_y = img_height as f32 / self.config.height as f32;
        for detection in &mut detections {
            detection.bbox = detection.bbox.scale_xy(scale_x, scale_y);
        }
        _detect_elapsed = utils::trace(profile, "TIME", "Postprocessing", detect_time, _detect_elapsed);

        log::debug!(
            "Kept {} of {} candidates over {} anchors",
            stats.accepted, stats.candidates, stats.anchors
        );

        Ok(detections)
    }
}
