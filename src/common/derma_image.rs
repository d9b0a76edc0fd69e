use image::{DynamicImage, GenericImageView};

/// One classification request: the source image plus an optional per-request
/// confidence threshold overriding the configured one.
#[derive(Debug, Clone)]
pub struct DermaImage {
    pub image: DynamicImage,
    pub img_width: u32,
    pub img_height: u32,
    pub threshold: Option<f32>,
}

impl DermaImage {
    pub fn new(image: DynamicImage) -> Self {
        let (img_width, img_height) = image.dimensions();
        Self {
            image,
            img_width,
            img_height,
            threshold: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn get_ratio(&self) -> f32 {
        self.img_width as f32 / self.img_height as f32
    }
}
