#![allow(dead_code)]

use zoomview_core::geometry::{ImageSize, PixelRect, ViewportSize, WidgetPos};
use zoomview_core::render::RenderSurface;

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    Resample(ImageSize),
    Blit { source: PixelRect, dest: PixelRect },
    Stroke { from: WidgetPos, to: WidgetPos },
}

/// Surface that only records what it was asked to draw.
pub struct RecordingSurface {
    pub viewport: ViewportSize,
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: ViewportSize::new(width, height),
            calls: Vec::new(),
        }
    }
}

impl RenderSurface for RecordingSurface {
    type Image = ();
    type Bitmap = ImageSize;

    fn viewport_size(&self) -> ViewportSize {
        self.viewport
    }

    fn resample(&mut self, _image: &(), size: ImageSize) -> ImageSize {
        self.calls.push(SurfaceCall::Resample(size));
        size
    }

    fn blit(&mut self, _bitmap: &ImageSize, source: PixelRect, dest: PixelRect) {
        self.calls.push(SurfaceCall::Blit { source, dest });
    }

    fn stroke_rect(&mut self, from: WidgetPos, to: WidgetPos) {
        self.calls.push(SurfaceCall::Stroke { from, to });
    }
}

pub fn image(width: u32, height: u32) -> ImageSize {
    ImageSize::new(width, height).unwrap()
}

pub fn rect(x: u32, y: u32, width: u32, height: u32) -> zoomview_core::geometry::SourceRect {
    zoomview_core::geometry::SourceRect::new(x, y, width, height).unwrap()
}
