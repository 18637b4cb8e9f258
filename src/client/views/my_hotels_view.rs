use eframe::egui;

use crate::state::AppState;
use crate::theme::colors;
use crate::types::HotelDto;

enum Action {
    View(HotelDto),
    Edit(HotelDto),
    Delete(String),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    state.ensure_my();

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("My hotels").size(20.0).strong());
        if ui.button("⟳ Refresh").clicked() {
            state.refresh_my();
        }
        if ui.button("➕ Add Hotel").clicked() {
            state.open_editor_new();
        }
        if state.my.loading {
            ui.spinner();
        }
    });

    if let Some(error) = state.my.error.clone() {
        ui.add_space(8.0);
        ui.label(egui::RichText::new(error).color(colors::ERROR));
        if ui.button("Retry").clicked() {
            state.refresh_my();
        }
        return;
    }

    ui.add_space(8.0);
    ui.separator();

    let mut action: Option<Action> = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        if state.my.loaded && state.my.hotels.is_empty() {
            ui.add_space(16.0);
            ui.label(
                egui::RichText::new("You have not listed any hotels yet.")
                    .color(colors::TEXT_SECONDARY),
            );
        }

        for hotel in &state.my.hotels {
            ui.add_space(6.0);
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(&hotel.name)
                                .size(16.0)
                                .strong()
                                .color(colors::TEXT_LIGHT),
                        );
                        ui.label(
                            egui::RichText::new(format!(
                                "{}, {} · ★ {:.1}",
                                hotel.address.city, hotel.address.country, hotel.rating
                            ))
                            .color(colors::TEXT_SECONDARY),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button(egui::RichText::new("Delete").color(colors::ERROR))
                            .clicked()
                        {
                            action = Some(Action::Delete(hotel.id.clone()));
                        }
                        if ui.button("Edit").clicked() {
                            action = Some(Action::Edit(hotel.clone()));
                        }
                        if ui.button("View").clicked() {
                            action = Some(Action::View(hotel.clone()));
                        }
                    });
                });
            });
        }
    });

    match action {
        Some(Action::View(hotel)) => state.open_detail(hotel),
        Some(Action::Edit(hotel)) => state.open_editor_for(&hotel),
        Some(Action::Delete(id)) => state.request_delete(id),
        None => {}
    }
}
