use eframe::egui;

use crate::state::AppState;
use crate::theme::colors;
use crate::types::HotelDto;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    state.ensure_feed();

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Browse hotels").size(20.0).strong());
        if ui.button("⟳ Refresh").clicked() {
            state.refresh_feed();
        }
        if state.feed.loading {
            ui.spinner();
        }
    });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.add(
            egui::TextEdit::singleline(&mut state.feed_filter)
                .hint_text("name or description")
                .desired_width(220.0),
        );
        ui.label("City:");
        ui.add(
            egui::TextEdit::singleline(&mut state.feed_city_filter)
                .hint_text("e.g. Pune")
                .desired_width(140.0),
        );
        if ui.small_button("Clear").clicked() {
            state.feed_filter.clear();
            state.feed_city_filter.clear();
        }
    });

    if let Some(error) = state.feed.error.clone() {
        ui.add_space(8.0);
        ui.label(egui::RichText::new(error).color(colors::ERROR));
        if ui.button("Retry").clicked() {
            state.refresh_feed();
        }
        return;
    }

    ui.add_space(8.0);
    ui.separator();

    let mut open: Option<HotelDto> = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        let hotels = state.filtered_feed();

        if hotels.is_empty() && state.feed.loaded {
            ui.add_space(16.0);
            ui.label(
                egui::RichText::new("No hotels match your search.")
                    .color(colors::TEXT_SECONDARY),
            );
        }

        for hotel in hotels {
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
                                "{}, {}",
                                hotel.address.city, hotel.address.country
                            ))
                            .color(colors::TEXT_SECONDARY),
                        );

                        let description: String =
                            hotel.description.chars().take(120).collect();
                        ui.label(egui::RichText::new(description).color(colors::TEXT_SECONDARY));
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("View").clicked() {
                            open = Some(hotel.clone());
                        }
                        ui.label(
                            egui::RichText::new(format!(
                                "₹{} – ₹{}",
                                hotel.price_range.min, hotel.price_range.max
                            ))
                            .color(colors::TEXT_LIGHT),
                        );
                        ui.label(
                            egui::RichText::new(format!("★ {:.1}", hotel.rating))
                                .color(colors::RATING),
                        );
                    });
                });
            });
        }
    });

    if let Some(hotel) = open {
        state.open_detail(hotel);
    }
}
