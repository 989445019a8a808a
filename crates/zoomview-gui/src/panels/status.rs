use zoomview_core::config::ResampleFilter;
use zoomview_core::consts::RESOLUTION_PERCENT_MAX;

use crate::app::ZoomViewApp;

pub fn show(ctx: &egui::Context, app: &mut ZoomViewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        ui.horizontal(|ui| {
            ui.label("Resolution");
            let slider = egui::Slider::new(
                &mut app.ui_state.resolution_percent,
                0..=RESOLUTION_PERCENT_MAX,
            )
            .suffix("%");
            if ui.add(slider).changed() {
                app.viewer
                    .set_resolution_percent(app.ui_state.resolution_percent);
            }

            ui.separator();

            ui.label("Filter");
            let before = app.config.filter;
            egui::ComboBox::from_id_salt("resample_filter")
                .selected_text(app.config.filter.to_string())
                .show_ui(ui, |ui| {
                    for &filter in ResampleFilter::ALL {
                        ui.selectable_value(&mut app.config.filter, filter, filter.to_string());
                    }
                });
            if app.config.filter != before {
                ctx.request_repaint();
            }
        });

        // Log area, fixed at 3 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            let state = app.viewer.state();
            match state.image() {
                Some(size) => {
                    ui.label(size.to_string());
                    ui.separator();
                    if let Some(rect) = state.source_rect() {
                        let label = if rect.is_full(size) {
                            "Full image".to_string()
                        } else {
                            format!("Showing {rect}")
                        };
                        ui.label(label);
                        ui.separator();
                    }
                }
                None => {
                    ui.label("No image");
                    ui.separator();
                }
            }
            ui.label(format!(
                "Resolution: {:.0}%",
                state.resolution_scale() * 100.0
            ));
            if app.viewer.is_dragging() {
                ui.separator();
                ui.label("Selecting");
            }
            if app.ui_state.loading {
                ui.separator();
                ui.spinner();
            }
            if let Some(ref path) = app.ui_state.file_path {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(path.display().to_string());
                });
            }
        });

        ui.add_space(2.0);
    });
}
