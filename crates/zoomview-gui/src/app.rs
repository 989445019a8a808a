use std::path::PathBuf;
use std::sync::mpsc;

use image::RgbaImage;
use zoomview_core::config::ViewerConfig;
use zoomview_core::io::image_io::image_size;
use zoomview_core::viewer::Viewer;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::UIState;
use crate::surface::TextureCache;
use crate::worker;

pub struct ZoomViewApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub viewer: Viewer,
    /// Decoded pixels of the current image.
    pub image: Option<RgbaImage>,
    /// Bumped on every new image so cached textures are not reused.
    pub image_generation: u64,
    pub textures: TextureCache,
    pub ui_state: UIState,
    pub config: ViewerConfig,
    pub show_about: bool,
}

impl ZoomViewApp {
    pub fn new(
        ctx: &egui::Context,
        config: ViewerConfig,
        initial_image: Option<PathBuf>,
    ) -> std::io::Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone())?;

        let mut viewer = Viewer::new();
        viewer.set_resolution_percent(config.resolution_percent);
        let ui_state = UIState {
            resolution_percent: config.resolution_percent,
            ..UIState::default()
        };

        let mut app = Self {
            cmd_tx,
            result_rx,
            viewer,
            image: None,
            image_generation: 0,
            textures: TextureCache::default(),
            ui_state,
            config,
            show_about: false,
        };

        if let Some(path) = initial_image {
            app.open(path);
        }

        Ok(app)
    }

    pub fn open(&mut self, path: PathBuf) {
        self.ui_state.loading = true;
        self.send_command(WorkerCommand::LoadImage { path });
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded { path, image } => {
                    self.ui_state.loading = false;
                    match image_size(&image) {
                        Ok(size) => {
                            self.ui_state
                                .add_log(format!("Opened: {} ({size})", path.display()));
                            self.viewer.set_image(size);
                            self.image = Some(image);
                            self.image_generation += 1;
                            self.ui_state.file_path = Some(path);
                        }
                        Err(e) => {
                            self.ui_state
                                .add_log(format!("ERROR: {}: {e}", path.display()));
                        }
                    }
                }
                WorkerResult::Error { message } => {
                    self.ui_state.loading = false;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for ZoomViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.viewer.take_redraw_request() {
            ctx.request_repaint();
        }

        if self.show_about {
            egui::Window::new("About Zoomview")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Zoomview");
                        ui.label("Drag to zoom, right-click to reset");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
