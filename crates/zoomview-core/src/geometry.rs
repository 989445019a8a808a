use std::fmt;

use crate::error::{Result, ZoomViewError};

/// Pixel dimensions of a decoded image. Both sides are at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ZoomViewError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Size of the drawing surface. Either side may be 0 while the widget is collapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for ViewportSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Pointer position in widget-local pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidgetPos {
    pub x: i32,
    pub y: i32,
}

impl WidgetPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Position in image pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImagePos {
    pub x: u32,
    pub y: u32,
}

impl ImagePos {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// The region of the image currently mapped onto the viewport.
///
/// Width and height are always non-zero; the constructors return `None`
/// rather than building a degenerate rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceRect {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl SourceRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// The rectangle covering the whole image.
    pub fn full(image: ImageSize) -> Self {
        Self {
            x: 0,
            y: 0,
            width: image.width,
            height: image.height,
        }
    }

    /// Normalized rectangle spanning two corners given in any order.
    pub fn from_corners(a: ImagePos, b: ImagePos) -> Option<Self> {
        Self::new(
            a.x.min(b.x),
            a.y.min(b.y),
            a.x.abs_diff(b.x),
            a.y.abs_diff(b.y),
        )
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Intersect with the image bounds. `None` if nothing of the rect lies inside.
    pub fn clamped_to(&self, image: ImageSize) -> Option<Self> {
        let x0 = self.x.min(image.width);
        let y0 = self.y.min(image.height);
        let x1 = self.x.saturating_add(self.width).min(image.width);
        let y1 = self.y.saturating_add(self.height).min(image.height);
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    pub fn is_full(&self, image: ImageSize) -> bool {
        *self == Self::full(image)
    }
}

impl fmt::Display for SourceRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}

/// Axis-aligned pixel rectangle used for blit source and destination areas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clip to a `width` x `height` area anchored at the origin.
    pub fn clipped_to(&self, width: u32, height: u32) -> Self {
        let x = self.x.min(width);
        let y = self.y.min(height);
        Self {
            x,
            y,
            width: self.width.min(width - x),
            height: self.height.min(height - y),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for PixelRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}
