//! Mapping between widget pixels and image pixels.
//!
//! Rendering is a two-stage operation: the whole image is first resampled to
//! [`BlitParams::resampled`], then [`BlitParams::blit_source`] of that bitmap
//! is stretched into [`BlitParams::dest`]. The resolution scale only ever
//! shrinks the intermediate bitmap; it never upsamples.
//!
//! All rounding uses round-half-to-even.

use crate::geometry::{ImagePos, ImageSize, PixelRect, SourceRect, ViewportSize, WidgetPos};

/// Everything a surface needs to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlitParams {
    /// Destination in widget space; always the whole viewport.
    pub dest: PixelRect,
    /// Size the full image is resampled to before blitting.
    pub resampled: ImageSize,
    /// Area of the resampled bitmap that is blitted into `dest`.
    pub blit_source: PixelRect,
    pub xscale: f64,
    pub yscale: f64,
}

/// How a fractional image coordinate is snapped to a pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    /// Used for the corner where a drag starts.
    Floor,
    /// Used for the corner where a drag ends, so a press and release on the
    /// same pixel still cover it.
    Ceil,
}

/// Downsampling factor along one axis.
///
/// `budget` is the number of samples the throttle allows; the factor is
/// capped at 1.0.
pub fn axis_scale(resolution_scale: f64, viewport_extent: u32, source_extent: u32) -> f64 {
    let budget = resolution_scale * f64::from(viewport_extent);
    let extent = f64::from(source_extent);
    if budget < extent {
        budget / extent
    } else {
        1.0
    }
}

fn scaled(scale: f64, value: u32) -> u32 {
    (scale * f64::from(value)).round_ties_even() as u32
}

/// Compute the blit parameters for one frame.
///
/// Returns `None` for a collapsed viewport, in which case nothing is drawn.
/// Resampled and blitted extents never drop below one pixel, so a zero
/// throttle still shows a single averaged colour.
pub fn compute_blit(
    source: SourceRect,
    resolution_scale: f64,
    viewport: ViewportSize,
    image: ImageSize,
) -> Option<BlitParams> {
    if viewport.is_empty() {
        return None;
    }

    let xscale = axis_scale(resolution_scale, viewport.width, source.width());
    let yscale = axis_scale(resolution_scale, viewport.height, source.height());

    let resampled = ImageSize {
        width: scaled(xscale, image.width).max(1),
        height: scaled(yscale, image.height).max(1),
    };

    let blit_source = PixelRect::new(
        scaled(xscale, source.x()),
        scaled(yscale, source.y()),
        scaled(xscale, source.width()).max(1),
        scaled(yscale, source.height()).max(1),
    );

    Some(BlitParams {
        dest: PixelRect::new(0, 0, viewport.width, viewport.height),
        resampled,
        blit_source,
        xscale,
        yscale,
    })
}

/// Whether a widget position lies on the viewport, edges included.
pub fn in_bounds(pos: WidgetPos, viewport: ViewportSize) -> bool {
    pos.x >= 0
        && pos.y >= 0
        && i64::from(pos.x) <= i64::from(viewport.width)
        && i64::from(pos.y) <= i64::from(viewport.height)
}

/// Map a widget position to the image pixel under it.
///
/// Returns `None` for positions off the viewport or a collapsed viewport.
pub fn widget_to_image(
    pos: WidgetPos,
    viewport: ViewportSize,
    source: SourceRect,
    rounding: Rounding,
) -> Option<ImagePos> {
    if viewport.is_empty() || !in_bounds(pos, viewport) {
        return None;
    }

    let xr = f64::from(pos.x) / f64::from(viewport.width);
    let yr = f64::from(pos.y) / f64::from(viewport.height);
    let fx = xr * f64::from(source.width());
    let fy = yr * f64::from(source.height());

    let (dx, dy) = match rounding {
        Rounding::Floor => (fx.floor(), fy.floor()),
        Rounding::Ceil => (fx.ceil(), fy.ceil()),
    };

    Some(ImagePos::new(
        source.x().saturating_add(dx as u32),
        source.y().saturating_add(dy as u32),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_scale_caps_at_one() {
        assert_eq!(axis_scale(1.0, 800, 400), 1.0);
        assert_eq!(axis_scale(0.5, 800, 400), 1.0);
    }

    #[test]
    fn test_axis_scale_downsamples_when_budget_is_short() {
        assert_eq!(axis_scale(0.5, 400, 400), 0.5);
        assert_eq!(axis_scale(0.0, 400, 400), 0.0);
    }

    #[test]
    fn test_scaled_rounds_half_to_even() {
        assert_eq!(scaled(0.5, 5), 2);
        assert_eq!(scaled(0.5, 7), 4);
        assert_eq!(scaled(0.5, 3), 2);
    }
}
