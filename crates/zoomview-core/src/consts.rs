/// Resolution scale used when the throttle has not been touched.
pub const DEFAULT_RESOLUTION_SCALE: f64 = 1.0;

/// Upper end of the resolution slider; slider value `v` maps to `v / 100`.
pub const RESOLUTION_PERCENT_MAX: u8 = 100;

/// Initial window size of the desktop viewer, in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 800.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 600.0;

/// Default RGBA colour of the selection-in-progress outline.
pub const DEFAULT_OVERLAY_COLOR: [u8; 4] = [255, 255, 0, 255];

/// Default RGBA colour behind the rendered image.
pub const DEFAULT_BACKGROUND_COLOR: [u8; 4] = [30, 30, 30, 255];

/// Viewport size the CLI renders into when none is given.
pub const DEFAULT_CLI_VIEWPORT: (u32, u32) = (800, 600);
