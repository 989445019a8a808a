use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use zoomview_core::consts::DEFAULT_CLI_VIEWPORT;
use zoomview_core::geometry::{SourceRect, ViewportSize};
use zoomview_core::io::image_io::{image_size, load_image};
use zoomview_core::transform::compute_blit;
use zoomview_core::view_state::ViewState;

use super::parse_viewport;
use crate::summary::print_blit_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    /// Viewport size as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_viewport)]
    pub viewport: Option<ViewportSize>,

    /// Resolution scale in [0.0, 1.0]
    #[arg(long, default_value = "1.0")]
    pub scale: f64,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let img = load_image(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    let size = image_size(&img)?;
    let viewport = args
        .viewport
        .unwrap_or(ViewportSize::new(DEFAULT_CLI_VIEWPORT.0, DEFAULT_CLI_VIEWPORT.1));
    // Same clamping and NaN handling as an interactive viewer.
    let mut state = ViewState::new();
    state.set_image(size);
    state.set_resolution_scale(args.scale);
    let scale = state.resolution_scale();
    let source = SourceRect::full(size);

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}", size);
    let raw_mb = f64::from(size.width) * f64::from(size.height) * 4.0 / (1024.0 * 1024.0);
    println!("RGBA size:   {:.1} MB", raw_mb);

    match compute_blit(source, scale, viewport, size) {
        Some(params) => print_blit_summary(&source, viewport, scale, &params),
        None => println!("Viewport {viewport} is empty; nothing would be drawn"),
    }

    Ok(())
}
