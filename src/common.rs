mod class_table;
mod derma_box;
mod derma_detection;
mod derma_image;
mod model_config;

pub use class_table::*;
pub use derma_box::*;
pub use derma_detection::*;
pub use derma_image::*;
pub use model_config::*;
