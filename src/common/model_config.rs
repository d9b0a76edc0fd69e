use crate::common::ClassTable;

/// Detector configuration: the model's fixed input grid, the two thresholds
/// and the class table.
///
/// `conf_threshold` is the single confidence cutoff applied during decode.
/// It compares against the raw objectness score with strict `>`, before
/// class weighting; a row exactly at the threshold is discarded.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub width: u32,
    pub height: u32,
    pub conf_threshold: f32,
    pub iou_threshold: f32,
    pub classes: ClassTable,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 640,
            conf_threshold: 0.25,
            iou_threshold: 0.5,
            classes: ClassTable::acne(),
        }
    }
}

impl ModelConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_conf_threshold(mut self, conf_threshold: f32) -> Self {
        self.conf_threshold = conf_threshold;
        self
    }

    pub fn with_iou_threshold(mut self, iou_threshold: f32) -> Self {
        self.iou_threshold = iou_threshold;
        self
    }

    pub fn with_classes(mut self, classes: ClassTable) -> Self {
        self.classes = classes;
        self
    }

    pub fn summary(&self) -> String {
        format!("Model Input Resolution: {}x{}\n\
        Confidence Threshold: {}\n\
        IoU Threshold: {}\n\
        Classes: {:?}",
                self.width, self.height, self.conf_threshold,
                self.iou_threshold, self.classes.names())
    }
}
