use image::Rgb;

pub(crate) fn get_class_colour(class: usize) -> Rgb<u8> {
    match class {
        0 => Rgb([128, 0, 128]),   // purple (comedone)
        1 => Rgb([255, 0, 0]),     // red (nodule)
        2 => Rgb([255, 165, 0]),   // orange (pustule)
        3 => Rgb([0, 255, 0]),     // green (papule)
        _ => Rgb([0, 0, 255]),     // blue (cyst)
    }
}
