use ndarray::{s, ArrayView1, Axis};
use rayon::prelude::*;

use crate::common::{ClassTable, DermaDetection};
use crate::postprocess::RawOutput;

/// Counters from one postprocessing pass, returned alongside the detections
/// so callers can observe the funnel without console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostprocessStats {
    /// Anchor rows in the tensor.
    pub anchors: usize,
    /// Rows that survived the confidence gate.
    pub candidates: usize,
    /// Detections left after NMS.
    pub accepted: usize,
}

/// Decodes every anchor row into a candidate detection.
///
/// The objectness gate uses strict `>` against `conf_threshold` and runs
/// before class weighting; the emitted confidence is
/// `class_score * objectness`. Rows are processed in parallel but the
/// returned vector preserves row order, so later tie-handling stays
/// deterministic.
pub fn decode(
    raw: &RawOutput,
    classes: &ClassTable,
    conf_threshold: f32,
) -> Vec<DermaDetection> {
    raw.anchors()
        .axis_iter(Axis(0))
        .into_par_iter()
        .filter_map(|row| {
            let objectness = row[4];
            if objectness <= conf_threshold {
                return None;
            }

            let (class_id, class_score) = argmax_first(row.slice(s![5..]));
            let confidence = class_score * objectness;

            // cx, cy, w, h are already in input grid pixels
            let detection = DermaDetection::default()
                .with_cxcy_wh(row[0], row[1], row[2], row[3])
                .with_confidence(confidence)
                .with_class_id(class_id)
                .with_label(&classes[class_id]);

            Some(detection)
        })
        .collect()
}

/// Index and value of the first maximum. Ties break toward the lowest index.
fn argmax_first(scores: ArrayView1<f32>) -> (usize, f32) {
    let mut best_id = 0;
    let mut best_score = f32::NEG_INFINITY;
    for (class_id, &score) in scores.iter().enumerate() {
        if score > best_score {
            best_id = class_id;
            best_score = score;
        }
    }
    (best_id, best_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn argmax_breaks_ties_toward_lowest_index() {
        let scores = array![0.2_f32, 0.5, 0.5, 0.1];
        assert_eq!(argmax_first(scores.view()), (1, 0.5));
    }

    #[test]
    fn argmax_takes_single_maximum() {
        let scores = array![0.1_f32, 0.1, 0.1, 0.6, 0.1];
        assert_eq!(argmax_first(scores.view()), (3, 0.6));
    }
}
