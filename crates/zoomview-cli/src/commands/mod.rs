pub mod config;
pub mod info;
pub mod render;

use std::path::Path;

use anyhow::{Context, Result};
use zoomview_core::config::ViewerConfig;
use zoomview_core::geometry::{ViewportSize, WidgetPos};

/// Parse `WIDTHxHEIGHT`.
pub fn parse_viewport(s: &str) -> std::result::Result<ViewportSize, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width = w.trim().parse::<u32>().map_err(|e| format!("width: {e}"))?;
    let height = h.trim().parse::<u32>().map_err(|e| format!("height: {e}"))?;
    Ok(ViewportSize::new(width, height))
}

/// A drag gesture in widget pixels, `X0,Y0,X1,Y1`.
#[derive(Clone, Copy, Debug)]
pub struct DragArg {
    pub from: WidgetPos,
    pub to: WidgetPos,
}

pub fn parse_drag(s: &str) -> std::result::Result<DragArg, String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<i32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid coordinate in '{s}': {e}"))?;
    match values[..] {
        [x0, y0, x1, y1] => Ok(DragArg {
            from: WidgetPos::new(x0, y0),
            to: WidgetPos::new(x1, y1),
        }),
        _ => Err(format!("expected X0,Y0,X1,Y1, got '{s}'")),
    }
}

pub fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    match path {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(ViewerConfig::default()),
    }
}
