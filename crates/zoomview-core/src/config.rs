use std::fmt;
use std::path::Path;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::consts::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_OVERLAY_COLOR, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
    RESOLUTION_PERCENT_MAX,
};
use crate::error::{Result, ZoomViewError};

/// Filter used when the full image is resampled to the throttled size.
///
/// Config files spell these the way the CLI `--filter` flag does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Nearest,
    #[default]
    #[serde(rename = "bilinear")]
    Triangle,
    CatmullRom,
    Lanczos3,
}

impl ResampleFilter {
    pub const ALL: &[Self] = &[
        Self::Nearest,
        Self::Triangle,
        Self::CatmullRom,
        Self::Lanczos3,
    ];

    pub fn filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }

    /// Whether the filter interpolates between source pixels.
    pub fn is_smooth(self) -> bool {
        self != Self::Nearest
    }
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => write!(f, "Nearest"),
            Self::Triangle => write!(f, "Bilinear"),
            Self::CatmullRom => write!(f, "Catmull-Rom"),
            Self::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Viewer settings shared by the CLI and the desktop viewer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    /// Initial resolution slider position, 0..=100.
    pub resolution_percent: u8,
    pub filter: ResampleFilter,
    /// RGBA.
    pub overlay_color: [u8; 4],
    /// RGBA.
    pub background_color: [u8; 4],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            resolution_percent: RESOLUTION_PERCENT_MAX,
            filter: ResampleFilter::default(),
            overlay_color: DEFAULT_OVERLAY_COLOR,
            background_color: DEFAULT_BACKGROUND_COLOR,
        }
    }
}

impl ViewerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "Loaded viewer config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validated(self) -> Result<Self> {
        if self.resolution_percent > RESOLUTION_PERCENT_MAX {
            return Err(ZoomViewError::InvalidArgument(format!(
                "resolution_percent must be within 0..={RESOLUTION_PERCENT_MAX}, got {}",
                self.resolution_percent
            )));
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(ZoomViewError::InvalidArgument(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        Ok(self)
    }
}
