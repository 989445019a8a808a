use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::error::Result;
use crate::geometry::ImageSize;

/// Decode any format the `image` crate supports into 8-bit RGBA.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)?.to_rgba8();
    info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Loaded image"
    );
    Ok(img)
}

/// Dimensions of a decoded image; fails for empty images.
pub fn image_size(img: &RgbaImage) -> Result<ImageSize> {
    let (w, h) = img.dimensions();
    ImageSize::new(w, h)
}

/// Save as PNG regardless of the file extension.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
