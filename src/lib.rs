mod utils;
pub mod common;
pub mod detector;
pub mod error;
pub mod inference_process;
pub mod postprocess;
pub mod preprocess;
pub mod send_channels;

use std::time::Instant;

use crate::common::{DermaDetection, DermaImage};
use crate::detector::DermaDetector;
use crate::inference_process::InferenceBackend;

pub use error::DetectError;

pub type Result<T, E = DetectError> = std::result::Result<T, E>;

/// Runs one classification request through the full pipeline and logs the
/// wall-clock time taken.
pub fn run_detection<B: InferenceBackend>(
    detector: &mut DermaDetector<B>,
    image: &DermaImage,
) -> Result<Vec<DermaDetection>> {
    let now = Instant::now();

    let detections = detector.detect(image)?;

    log::debug!("Processing time: {:?}", now.elapsed());

    Ok(detections)
}
