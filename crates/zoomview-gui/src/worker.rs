use std::sync::mpsc;

use tracing::warn;
use zoomview_core::io::image_io::load_image;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the decoding thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("zoomview-worker".into())
        .spawn(move || worker_loop(cmd_rx, result_tx, ctx))?;

    Ok(cmd_tx)
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage { path } => match load_image(&path) {
                Ok(image) => send(&result_tx, &ctx, WorkerResult::ImageLoaded { path, image }),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to load image");
                    send(
                        &result_tx,
                        &ctx,
                        WorkerResult::Error {
                            message: format!("Failed to open {}: {e}", path.display()),
                        },
                    );
                }
            },
        }
    }
}
