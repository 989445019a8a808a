use image::{Rgba, RgbaImage};
use tempfile::NamedTempFile;
use zoomview_core::io::image_io::{image_size, load_image, save_png};

#[test]
fn test_png_save_and_load() {
    let img = RgbaImage::from_fn(5, 3, |x, y| Rgba([x as u8 * 40, y as u8 * 80, 7, 255]));
    let file = NamedTempFile::with_suffix(".png").unwrap();

    save_png(&img, file.path()).unwrap();
    let loaded = load_image(file.path()).unwrap();

    assert_eq!(loaded.dimensions(), (5, 3));
    assert_eq!(loaded.get_pixel(4, 2), &Rgba([160, 160, 7, 255]));

    let size = image_size(&loaded).unwrap();
    assert_eq!((size.width, size.height), (5, 3));
}

#[test]
fn test_empty_image_has_no_size() {
    let img = RgbaImage::new(0, 0);
    assert!(image_size(&img).is_err());
}

#[test]
fn test_load_missing_file_fails() {
    assert!(load_image(std::path::Path::new("/nonexistent/image.png")).is_err());
}
