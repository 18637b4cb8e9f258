use eframe::egui;

use crate::state::{AppState, AppView};
use crate::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(hotel) = state.selected.clone() else {
        state.view = AppView::Feed;
        return;
    };

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("← Back").clicked() {
            state.selected = None;
            state.view = AppView::Feed;
            return;
        }
        if state.detail_loading {
            ui.spinner();
        }
    });

    if let Some(error) = state.detail_error.clone() {
        ui.label(egui::RichText::new(error).color(colors::ERROR));
    }

    ui.add_space(8.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.label(
            egui::RichText::new(&hotel.name)
                .size(26.0)
                .strong()
                .color(colors::TEXT_LIGHT),
        );
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("★ {:.1}", hotel.rating)).color(colors::RATING));
            ui.label(
                egui::RichText::new(format!(
                    "₹{} – ₹{} per night",
                    hotel.price_range.min, hotel.price_range.max
                ))
                .color(colors::TEXT_SECONDARY),
            );
        });

        ui.add_space(10.0);
        ui.label(egui::RichText::new(&hotel.description).color(colors::TEXT_LIGHT));

        ui.add_space(12.0);
        ui.group(|ui| {
            ui.label(egui::RichText::new("Address").strong().color(colors::TEXT_LIGHT));
            ui.label(
                egui::RichText::new(format!(
                    "{}\n{}, {} {}\n{}",
                    hotel.address.street,
                    hotel.address.city,
                    hotel.address.state,
                    hotel.address.zip_code,
                    hotel.address.country
                ))
                .color(colors::TEXT_SECONDARY),
            );
        });

        if !hotel.amenities.is_empty() {
            ui.add_space(10.0);
            ui.label(egui::RichText::new("Amenities").strong().color(colors::TEXT_LIGHT));
            ui.horizontal_wrapped(|ui| {
                for amenity in &hotel.amenities {
                    ui.label(
                        egui::RichText::new(format!("· {amenity}")).color(colors::TEXT_SECONDARY),
                    );
                }
            });
        }

        if !hotel.images.is_empty() {
            ui.add_space(10.0);
            ui.label(egui::RichText::new("Images").strong().color(colors::TEXT_LIGHT));
            for url in &hotel.images {
                ui.hyperlink(url);
            }
        }

        if state.can_edit(&hotel) {
            ui.add_space(16.0);
            ui.separator();
            ui.horizontal(|ui| {
                if ui
                    .button(egui::RichText::new("✏ Edit").color(colors::TEXT_LIGHT))
                    .clicked()
                {
                    state.open_editor_for(&hotel);
                }
                if ui
                    .button(egui::RichText::new("🗑 Delete").color(colors::ERROR))
                    .clicked()
                {
                    state.request_delete(hotel.id.clone());
                }
            });
        }
    });
}
