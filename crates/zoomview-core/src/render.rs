use crate::controller::ZoomSelectionController;
use crate::geometry::{ImageSize, PixelRect, ViewportSize, WidgetPos};
use crate::transform::{compute_blit, BlitParams};
use crate::view_state::ViewState;

/// A drawing target that can resample an image and blit part of it.
///
/// `resample` must use a smooth (bilinear or better) filter unless the host
/// explicitly configures otherwise. `blit` stretches `source` of the bitmap
/// into `dest`; the two generally differ in size.
pub trait RenderSurface {
    type Image;
    type Bitmap;

    fn viewport_size(&self) -> ViewportSize;

    fn resample(&mut self, image: &Self::Image, size: ImageSize) -> Self::Bitmap;

    fn blit(&mut self, bitmap: &Self::Bitmap, source: PixelRect, dest: PixelRect);

    /// Unfilled rectangle outline between two widget-space corners.
    fn stroke_rect(&mut self, from: WidgetPos, to: WidgetPos);
}

/// Draw the current view onto `surface`.
///
/// Draws nothing and returns `None` when there is no image or the viewport is
/// collapsed.
pub fn render<S: RenderSurface>(
    state: &ViewState,
    controller: &ZoomSelectionController,
    image: Option<&S::Image>,
    surface: &mut S,
) -> Option<BlitParams> {
    let image = image?;
    let size = state.image()?;
    let source = state.source_rect()?;
    let viewport = surface.viewport_size();

    let params = compute_blit(source, state.resolution_scale(), viewport, size)?;

    let bitmap = surface.resample(image, params.resampled);
    surface.blit(&bitmap, params.blit_source, params.dest);

    if let Some(drag) = controller.drag_session() {
        surface.stroke_rect(drag.press_widget, drag.move_widget);
    }

    Some(params)
}
