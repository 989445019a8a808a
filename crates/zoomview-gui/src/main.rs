mod app;
mod messages;
mod panels;
mod state;
mod surface;
mod worker;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use zoomview_core::config::ViewerConfig;

#[derive(Parser)]
#[command(name = "zoomview-gui", about = "Interactive zooming image viewer")]
#[command(version)]
struct Args {
    /// Image to open on startup
    image: Option<PathBuf>,

    /// Viewer config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = match args.config {
        Some(ref path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ViewerConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([200.0, 150.0])
            .with_title("Zoomview"),
        ..Default::default()
    };

    eframe::run_native(
        "Zoomview",
        options,
        Box::new(move |cc| {
            let app = app::ZoomViewApp::new(&cc.egui_ctx, config, args.image)?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
