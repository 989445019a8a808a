use image::{imageops, Rgba, RgbaImage};

use crate::config::{ResampleFilter, ViewerConfig};
use crate::consts::DEFAULT_OVERLAY_COLOR;
use crate::geometry::{ImageSize, PixelRect, ViewportSize, WidgetPos};
use crate::render::RenderSurface;

/// Off-screen surface that renders into an RGBA buffer the size of the viewport.
pub struct RasterSurface {
    canvas: RgbaImage,
    filter: ResampleFilter,
    overlay: Rgba<u8>,
}

impl RasterSurface {
    pub fn new(viewport: ViewportSize, background: [u8; 4]) -> Self {
        Self {
            canvas: RgbaImage::from_pixel(viewport.width, viewport.height, Rgba(background)),
            filter: ResampleFilter::default(),
            overlay: Rgba(DEFAULT_OVERLAY_COLOR),
        }
    }

    pub fn from_config(viewport: ViewportSize, config: &ViewerConfig) -> Self {
        Self::new(viewport, config.background_color)
            .with_filter(config.filter)
            .with_overlay_color(config.overlay_color)
    }

    pub fn with_filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_overlay_color(mut self, color: [u8; 4]) -> Self {
        self.overlay = Rgba(color);
        self
    }

    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn into_canvas(self) -> RgbaImage {
        self.canvas
    }

    fn put_overlay(&mut self, x: i64, y: i64) {
        let inside = x >= 0
            && y >= 0
            && x < i64::from(self.canvas.width())
            && y < i64::from(self.canvas.height());
        if inside {
            self.canvas.put_pixel(x as u32, y as u32, self.overlay);
        }
    }
}

impl RenderSurface for RasterSurface {
    type Image = RgbaImage;
    type Bitmap = RgbaImage;

    fn viewport_size(&self) -> ViewportSize {
        ViewportSize::new(self.canvas.width(), self.canvas.height())
    }

    fn resample(&mut self, image: &RgbaImage, size: ImageSize) -> RgbaImage {
        if image.dimensions() == (size.width, size.height) {
            return image.clone();
        }
        imageops::resize(image, size.width, size.height, self.filter.filter_type())
    }

    fn blit(&mut self, bitmap: &RgbaImage, source: PixelRect, dest: PixelRect) {
        // Rounding can push the source one pixel past the bitmap edge.
        let source = source.clipped_to(bitmap.width(), bitmap.height());
        let dest = dest.clipped_to(self.canvas.width(), self.canvas.height());
        if source.is_empty() || dest.is_empty() {
            return;
        }

        let region =
            imageops::crop_imm(bitmap, source.x, source.y, source.width, source.height).to_image();
        let stretched = if (source.width, source.height) == (dest.width, dest.height) {
            region
        } else {
            imageops::resize(&region, dest.width, dest.height, self.filter.filter_type())
        };
        imageops::replace(
            &mut self.canvas,
            &stretched,
            i64::from(dest.x),
            i64::from(dest.y),
        );
    }

    fn stroke_rect(&mut self, from: WidgetPos, to: WidgetPos) {
        let (x0, x1) = (i64::from(from.x.min(to.x)), i64::from(from.x.max(to.x)));
        let (y0, y1) = (i64::from(from.y.min(to.y)), i64::from(from.y.max(to.y)));

        // Keep the loops bounded when the pointer wanders far off the surface.
        let w = i64::from(self.canvas.width());
        let h = i64::from(self.canvas.height());
        for x in x0.max(-1)..=x1.min(w) {
            self.put_overlay(x, y0);
            self.put_overlay(x, y1);
        }
        for y in y0.max(-1)..=y1.min(h) {
            self.put_overlay(x0, y);
            self.put_overlay(x1, y);
        }
    }
}
