use zoomview_core::controller::{PointerButton, PointerEvent};

use crate::app::ZoomViewApp;
use crate::surface::{viewport_in_pixels, widget_pos, EguiSurface};

pub fn show(ctx: &egui::Context, app: &mut ZoomViewApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            let [r, g, b, a] = app.config.background_color;
            ui.painter()
                .rect_filled(rect, 0.0, egui::Color32::from_rgba_unmultiplied(r, g, b, a));

            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
            let pixels_per_point = ctx.pixels_per_point();

            if app.image.is_none() {
                show_placeholder(ui, rect);
                return;
            }

            forward_pointer_events(ui, &response, app, rect, pixels_per_point);

            let [r, g, b, a] = app.config.overlay_color;
            let painter = ui.painter_at(rect);
            let mut surface = EguiSurface {
                ctx,
                painter: &painter,
                rect,
                pixels_per_point,
                generation: app.image_generation,
                filter: app.config.filter,
                overlay: egui::Color32::from_rgba_unmultiplied(r, g, b, a),
                cache: &mut app.textures,
            };
            app.viewer.render(app.image.as_ref(), &mut surface);
        });
}

/// Translate raw egui pointer events into viewer events in panel pixels.
fn forward_pointer_events(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut ZoomViewApp,
    rect: egui::Rect,
    pixels_per_point: f32,
) {
    let viewport = viewport_in_pixels(rect, pixels_per_point);
    let events = ui.input(|i| i.events.clone());

    for event in events {
        let pointer_event = match event {
            egui::Event::PointerMoved(pos) => {
                if !app.viewer.is_dragging() {
                    continue;
                }
                PointerEvent::Move {
                    pos: widget_pos(pos, rect, pixels_per_point),
                }
            }
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => {
                let button = match button {
                    egui::PointerButton::Primary => PointerButton::Primary,
                    egui::PointerButton::Secondary => PointerButton::Secondary,
                    _ => continue,
                };
                let pos = widget_pos(pos, rect, pixels_per_point);
                if pressed {
                    // Presses over menus or windows stacked on the panel are not ours.
                    if !response.hovered() {
                        continue;
                    }
                    PointerEvent::Press { button, pos }
                } else {
                    PointerEvent::Release { button, pos }
                }
            }
            _ => continue,
        };

        app.viewer.handle_event(pointer_event, viewport);
    }
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Open an image to begin",
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}
