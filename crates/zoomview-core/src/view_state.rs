use crate::consts::DEFAULT_RESOLUTION_SCALE;
use crate::geometry::{ImageSize, SourceRect};

/// What part of the image is shown and at which sampling resolution.
///
/// The viewport size is not stored; it is read from the host on
/// every render and event.
#[derive(Clone, Debug)]
pub struct ViewState {
    image: Option<ImageSize>,
    source_rect: Option<SourceRect>,
    resolution_scale: f64,
    dirty: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            image: None,
            source_rect: None,
            resolution_scale: DEFAULT_RESOLUTION_SCALE,
            dirty: false,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the image and show all of it.
    pub fn set_image(&mut self, image: ImageSize) {
        self.image = Some(image);
        self.source_rect = Some(SourceRect::full(image));
        self.dirty = true;
    }

    pub fn clear_image(&mut self) {
        self.image = None;
        self.source_rect = None;
        self.dirty = true;
    }

    /// Accepts any value; anything outside `[0, 1]` is clamped and NaN falls
    /// back to the default.
    pub fn set_resolution_scale(&mut self, value: f64) {
        self.resolution_scale = if value.is_nan() {
            DEFAULT_RESOLUTION_SCALE
        } else {
            value.clamp(0.0, 1.0)
        };
        self.dirty = true;
    }

    pub fn reset_to_full(&mut self) {
        if let Some(image) = self.image {
            self.source_rect = Some(SourceRect::full(image));
            self.dirty = true;
        }
    }

    /// Replace the source rectangle as-is. Bounds are the caller's business.
    pub fn set_source_rect(&mut self, rect: SourceRect) {
        self.source_rect = Some(rect);
        self.dirty = true;
    }

    pub fn image(&self) -> Option<ImageSize> {
        self.image
    }

    pub fn source_rect(&self) -> Option<SourceRect> {
        self.source_rect
            .or_else(|| self.image.map(SourceRect::full))
    }

    pub fn resolution_scale(&self) -> f64 {
        self.resolution_scale
    }

    /// Return whether anything changed since the last call, clearing the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
