use serde::{Deserialize, Serialize};
use crate::common::DermaBox;
use crate::postprocess::Nms;

/// One classified lesion: class, confidence and bounding box. Produced by the
/// postprocessor and owned by the caller; nothing mutates it afterwards.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DermaDetection {
    pub class_id: usize,
    pub bbox: DermaBox,
    pub label: Option<String>,
    pub confidence: f32,
}

impl Nms for DermaDetection {
    fn iou(&self, other: &Self) -> f32 {
        self.bbox.iou(&other.bbox)
    }

    fn confidence(&self) -> f32 {
        self.confidence
    }
}

impl DermaDetection {
    pub fn new(class_id: usize, bbox: DermaBox, label: Option<String>, confidence: f32) -> Self {
        Self {
            class_id,
            bbox,
            label,
            confidence,
        }
    }

    /// Sets the bounding box from `(x1, y1, x2, y2)` corners.
    pub fn with_x1y1_x2y2(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.bbox = DermaBox::default().with_x1y1_x2y2(x1, y1, x2, y2);
        self
    }

    /// Sets the bounding box from top-left corner and size.
    pub fn with_x1y1_wh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.bbox = DermaBox::default().with_x1y1_wh(x, y, w, h);
        self
    }

    /// Sets the bounding box from center point and size.
    pub fn with_cxcy_wh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.bbox = DermaBox::default().with_cxcy_wh(cx, cy, w, h);
        self
    }

    /// Sets the confidence score of the detection.
    pub fn with_confidence(mut self, conf: f32) -> Self {
        self.confidence = conf;
        self
    }

    /// Sets the class ID of the detection.
    pub fn with_class_id(mut self, class_id: usize) -> Self {
        self.class_id = class_id;
        self
    }

    /// Sets the human-readable label of the detection.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn get_label(&self) -> String {
        self.label.clone().unwrap_or("unknown".to_string())
    }

    /// Computes the intersection area between this detection and another.
    pub fn intersect(&self, other: &DermaDetection) -> f32 {
        self.bbox.intersect(&other.bbox)
    }

    /// Computes the union area between this detection and another.
    pub fn union(&self, other: &DermaDetection) -> f32 {
        self.bbox.union(&other.bbox)
    }
}

/// Serializes a detection list for the presentation boundary.
pub fn detections_to_json(detections: &[DermaDetection]) -> serde_json::Result<String> {
    serde_json::to_string(detections)
}
