//! Prepares a source image for the inference backend.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use ndarray::{Array, Ix4};

/// Resizes `image` to the model grid and fills a `(1, 3, H, W)` float tensor
/// normalized to `[0, 1]`. Returns the source dimensions alongside, for
/// mapping detections back afterwards.
pub fn to_model_input(image: &DynamicImage, width: u32, height: u32) -> (u32, u32, Array<f32, Ix4>) {
    let (img_width, img_height) = image.dimensions();

    let mut resizer = fast_image_resize::Resizer::new();
    let options = fast_image_resize::ResizeOptions {
        algorithm: fast_image_resize::ResizeAlg::Convolution(
            fast_image_resize::FilterType::Bilinear,
        ),
        ..Default::default()
    };

    let mut resized = DynamicImage::new(width, height, image.color());
    if let Err(err) = resizer.resize(image, &mut resized, &options) {
        log::warn!("fast_image_resize failed ({err}), falling back to imageops");
        resized = image::imageops::resize(image, width, height, FilterType::Nearest).into();
    }

    let mut input: Array<f32, Ix4> = Array::zeros((1, 3, height as usize, width as usize));
    for pixel in resized.pixels() {
        let x = pixel.0 as usize;
        let y = pixel.1 as usize;
        let [r, g, b, _] = pixel.2 .0;
        input[[0, 0, y, x]] = (r as f32) / 255.;
        input[[0, 1, y, x]] = (g as f32) / 255.;
        input[[0, 2, y, x]] = (b as f32) / 255.;
    }

    (img_width, img_height, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn solid_image_normalizes_per_channel() {
        let mut img = RgbImage::new(10, 10);
        for pixel in img.pixels_mut() {
            *pixel = Rgb([255, 0, 127]);
        }
        let (w, h, input) = to_model_input(&DynamicImage::ImageRgb8(img), 8, 8);

        assert_eq!((w, h), (10, 10));
        assert_eq!(input.shape(), &[1, 3, 8, 8]);
        assert!((input[[0, 0, 4, 4]] - 1.0).abs() < 1e-6);
        assert!(input[[0, 1, 4, 4]].abs() < 1e-6);
        assert!((input[[0, 2, 4, 4]] - 127. / 255.).abs() < 0.05);
    }
}
