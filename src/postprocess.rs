//! Decodes the detector's raw output tensor into classified lesion boxes.
//!
//! The pipeline is decode (objectness gate, class argmax, box conversion)
//! followed by greedy class-agnostic NMS. Pure and synchronous; the only
//! side effects are `log` diagnostics.

mod decode;
mod nms;
mod raw_output;

pub use decode::{decode, PostprocessStats};
pub use nms::{nms, Nms};
pub use raw_output::RawOutput;

use ndarray::ArrayViewD;

use crate::common::{ClassTable, DermaDetection};
use crate::error::DetectError;
use crate::Result;

/// Decodes `view`, filters by `conf_threshold`, suppresses duplicates and
/// returns the survivors sorted by descending confidence.
///
/// Coordinates are in the model's input grid; callers map them to source
/// image space afterwards.
pub fn process(
    view: ArrayViewD<f32>,
    classes: &ClassTable,
    conf_threshold: f32,
    iou_threshold: f32,
) -> Result<Vec<DermaDetection>> {
    process_with_stats(view, classes, conf_threshold, iou_threshold)
        .map(|(detections, _)| detections)
}

/// Same as [`process`], additionally returning the intermediate counters.
pub fn process_with_stats(
    view: ArrayViewD<f32>,
    classes: &ClassTable,
    conf_threshold: f32,
    iou_threshold: f32,
) -> Result<(Vec<DermaDetection>, PostprocessStats)> {
    if classes.is_empty() {
        return Err(DetectError::EmptyClassTable);
    }
    let raw = RawOutput::from_view(view, classes.len())?;

    let mut detections = decode(&raw, classes, conf_threshold);
    let candidates = detections.len();
    log::debug!("{} of {} anchors above confidence {}", candidates, raw.num_anchors(), conf_threshold);

    nms(&mut detections, iou_threshold);
    log::debug!("{} detections kept after nms", detections.len());

    let stats = PostprocessStats {
        anchors: raw.num_anchors(),
        candidates,
        accepted: detections.len(),
    };
    Ok((detections, stats))
}
