use crossbeam_channel::{Receiver, Sender};

use crate::common::{DermaDetection, DermaImage, ModelConfig};
use crate::detector::DermaDetector;
use crate::inference_process::InferenceBackend;

/// Detection-side endpoints: receives images, replies with detections.
#[derive(Debug)]
pub struct DetectionState {
    pub img_rx: Receiver<Box<DermaImage>>,
    pub det_tx: Sender<Vec<DermaDetection>>,
}

/// Caller-side endpoints, the mirror of [`DetectionState`].
#[derive(Debug)]
pub struct SendState {
    pub img_tx: Sender<Box<DermaImage>>,
    pub det_rx: Receiver<Vec<DermaDetection>>,
}

/// Builds the paired channel endpoints for one detection worker.
pub fn channel_states() -> (SendState, DetectionState) {
    let (img_tx, img_rx) = crossbeam_channel::unbounded();
    let (det_tx, det_rx) = crossbeam_channel::unbounded();
    (SendState { img_tx, det_rx }, DetectionState { img_rx, det_tx })
}

/// Serves classification requests until the request channel disconnects.
///
/// A failed frame answers with an empty detection list and is logged; it
/// must not take the whole service down with it.
pub fn run_detection_loop<B: InferenceBackend>(
    backend: B,
    config: ModelConfig,
    state: DetectionState,
) {
    let mut detector = DermaDetector::new(backend, config);

    loop {
        // MESSAGE LOOP STARTS HERE
        let image = match state.img_rx.recv() {
            Ok(msg) => msg,
            Err(_) => {
                log::info!("derma_detect: request channel disconnected, stopping");
                break;
            }
        };

        let detections = match detector.detect(&image) {
            Ok(detections) => detections,
            Err(err) => {
                log::error!("derma_detect: detection failed: {err}");
                Vec::new()
            }
        };

        if state.det_tx.send(detections).is_err() {
            log::info!("derma_detect: result channel disconnected, stopping");
            break;
        }
    }
}
