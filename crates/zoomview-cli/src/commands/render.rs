use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::info;
use zoomview_core::config::ResampleFilter;
use zoomview_core::consts::DEFAULT_CLI_VIEWPORT;
use zoomview_core::controller::{PointerButton, PointerEvent};
use zoomview_core::geometry::ViewportSize;
use zoomview_core::io::image_io::{image_size, load_image, save_png};
use zoomview_core::io::raster::RasterSurface;
use zoomview_core::viewer::Viewer;

use super::{load_config, parse_drag, parse_viewport, DragArg};
use crate::summary::{print_blit_summary, print_drag_result};

#[derive(Clone, ValueEnum)]
pub enum FilterArg {
    /// Nearest neighbour (fast, blocky)
    Nearest,
    /// Bilinear (default)
    Bilinear,
    /// Catmull-Rom bicubic
    CatmullRom,
    /// Lanczos with a 3-lobe window
    Lanczos3,
}

impl From<&FilterArg> for ResampleFilter {
    fn from(arg: &FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => ResampleFilter::Nearest,
            FilterArg::Bilinear => ResampleFilter::Triangle,
            FilterArg::CatmullRom => ResampleFilter::CatmullRom,
            FilterArg::Lanczos3 => ResampleFilter::Lanczos3,
        }
    }
}

#[derive(Args)]
pub struct RenderArgs {
    /// Input image file
    pub file: PathBuf,

    /// Output PNG file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Viewport size as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_viewport)]
    pub viewport: Option<ViewportSize>,

    /// Resolution scale in [0.0, 1.0]
    #[arg(long, conflicts_with = "percent")]
    pub scale: Option<f64>,

    /// Resolution as a slider position, 0-100
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub percent: Option<u8>,

    /// Zoom drag in viewport pixels as X0,Y0,X1,Y1 (repeatable, applied in order)
    #[arg(long = "drag", value_parser = parse_drag)]
    pub drags: Vec<DragArg>,

    /// Reset to the full image after replaying the drags
    #[arg(long)]
    pub reset: bool,

    /// Leave a selection in progress as X0,Y0,X1,Y1 so its outline is drawn
    #[arg(long, value_parser = parse_drag)]
    pub overlay: Option<DragArg>,

    /// Resampling filter (overrides the config)
    #[arg(long, value_enum)]
    pub filter: Option<FilterArg>,

    /// Viewer config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(ref filter) = args.filter {
        config.filter = filter.into();
    }

    let img = load_image(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    let size = image_size(&img)?;
    let viewport = args
        .viewport
        .unwrap_or(ViewportSize::new(DEFAULT_CLI_VIEWPORT.0, DEFAULT_CLI_VIEWPORT.1));

    let mut viewer = Viewer::new();
    viewer.set_image(size);
    viewer.set_resolution_percent(args.percent.unwrap_or(config.resolution_percent));
    if let Some(scale) = args.scale {
        viewer.set_resolution_scale(scale);
    }

    for (i, drag) in args.drags.iter().enumerate() {
        replay_drag(&mut viewer, drag, viewport);
        print_drag_result(i + 1, drag.from, drag.to, viewer.state().source_rect());
    }

    if args.reset {
        viewer.reset();
        info!("View reset to full image");
    }

    if let Some(ref overlay) = args.overlay {
        begin_drag(&mut viewer, overlay, viewport);
    }

    let mut surface = RasterSurface::from_config(viewport, &config);
    let params = viewer
        .render(Some(&img), &mut surface)
        .with_context(|| format!("Nothing to render into a {viewport} viewport"))?;

    save_png(&surface.into_canvas(), &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if let Some(source) = viewer.state().source_rect() {
        print_blit_summary(&source, viewport, viewer.state().resolution_scale(), &params);
    }
    println!("Saved to {}", args.output.display());
    Ok(())
}

fn begin_drag(viewer: &mut Viewer, drag: &DragArg, viewport: ViewportSize) {
    viewer.handle_event(
        PointerEvent::Press {
            button: PointerButton::Primary,
            pos: drag.from,
        },
        viewport,
    );
    viewer.handle_event(PointerEvent::Move { pos: drag.to }, viewport);
}

fn replay_drag(viewer: &mut Viewer, drag: &DragArg, viewport: ViewportSize) {
    begin_drag(viewer, drag, viewport);
    viewer.handle_event(
        PointerEvent::Release {
            button: PointerButton::Primary,
            pos: drag.to,
        },
        viewport,
    );
}
