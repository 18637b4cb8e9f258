use eframe::egui;

use crate::state::{AppState, AppView};
use crate::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let editing = state.editor.editing_id.is_some();

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(if editing { "Edit hotel" } else { "Add a hotel" })
                .size(20.0)
                .strong(),
        );
        if ui.button("Cancel").clicked() {
            state.editor = Default::default();
            state.view = if editing { AppView::Detail } else { AppView::Feed };
            return;
        }
    });

    ui.add_space(8.0);

    if let Some(error) = state.editor.error.clone() {
        ui.label(egui::RichText::new(error).color(colors::ERROR));
        ui.add_space(6.0);
    }
    if let Some(notice) = state.editor.notice.clone() {
        ui.label(egui::RichText::new(notice).color(colors::SUCCESS));
        ui.add_space(6.0);
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        let label = |ui: &mut egui::Ui, text: &str| {
            ui.label(egui::RichText::new(text).color(colors::TEXT_SECONDARY));
        };

        label(ui, "Name");
        ui.add(egui::TextEdit::singleline(&mut state.editor.name).desired_width(360.0));
        ui.add_space(6.0);

        label(ui, "Description");
        ui.add(
            egui::TextEdit::multiline(&mut state.editor.description)
                .desired_width(500.0)
                .desired_rows(3),
        );
        ui.add_space(10.0);

        ui.label(egui::RichText::new("Address").strong().color(colors::TEXT_LIGHT));
        ui.add_space(4.0);

        label(ui, "Street");
        ui.add(egui::TextEdit::singleline(&mut state.editor.street).desired_width(360.0));
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                label(ui, "City");
                ui.add(egui::TextEdit::singleline(&mut state.editor.city).desired_width(170.0));
            });
            ui.vertical(|ui| {
                label(ui, "State");
                ui.add(egui::TextEdit::singleline(&mut state.editor.state).desired_width(170.0));
            });
        });
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                label(ui, "Zip code");
                ui.add(
                    egui::TextEdit::singleline(&mut state.editor.zip_code).desired_width(170.0),
                );
            });
            ui.vertical(|ui| {
                label(ui, "Country");
                ui.add(
                    egui::TextEdit::singleline(&mut state.editor.country).desired_width(170.0),
                );
            });
        });
        ui.add_space(10.0);

        label(ui, "Amenities (comma separated)");
        ui.add(
            egui::TextEdit::singleline(&mut state.editor.amenities_input)
                .hint_text("wifi, pool, parking")
                .desired_width(360.0),
        );
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                label(ui, "Price from");
                ui.add(
                    egui::TextEdit::singleline(&mut state.editor.price_min_input)
                        .desired_width(100.0),
                );
            });
            ui.vertical(|ui| {
                label(ui, "Price to");
                ui.add(
                    egui::TextEdit::singleline(&mut state.editor.price_max_input)
                        .desired_width(100.0),
                );
            });
        });
        ui.add_space(10.0);

        label(ui, "Image URLs (one per line)");
        ui.add(
            egui::TextEdit::multiline(&mut state.editor.images_input)
                .desired_width(500.0)
                .desired_rows(3),
        );

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.editor.upload_path)
                    .hint_text("/path/to/image.jpg")
                    .desired_width(300.0),
            );
            if ui.button("⬆ Upload image").clicked() {
                state.start_upload();
            }
            if state.editor.uploading {
                ui.spinner();
            }
        });

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            let submit_label = if editing { "Save Changes" } else { "Create Hotel" };
            if ui
                .add_enabled(
                    !state.editor.submitting,
                    egui::Button::new(
                        egui::RichText::new(submit_label).color(colors::TEXT_LIGHT),
                    )
                    .fill(colors::ACCENT)
                    .min_size(egui::vec2(150.0, 32.0)),
                )
                .clicked()
            {
                state.submit_editor();
            }
            if state.editor.submitting {
                ui.spinner();
                ui.label(egui::RichText::new("Saving...").color(colors::TEXT_SECONDARY));
            }
        });
    });
}
