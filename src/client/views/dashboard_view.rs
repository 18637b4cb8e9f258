use eframe::egui;

use crate::state::{AppState, AppView};
use crate::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(24.0);

    ui.vertical_centered(|ui| {
        let greeting = state
            .auth
            .user
            .as_ref()
            .map(|user| format!("Welcome, {}!", user.name))
            .unwrap_or_else(|| "Welcome!".to_string());

        ui.label(
            egui::RichText::new(greeting)
                .size(28.0)
                .strong()
                .color(colors::TEXT_LIGHT),
        );
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Find a place to stay, or list your own.")
                .color(colors::TEXT_SECONDARY),
        );

        ui.add_space(32.0);

        let button = |label: &str| {
            egui::Button::new(egui::RichText::new(label).size(16.0).color(colors::TEXT_LIGHT))
                .min_size(egui::vec2(220.0, 44.0))
                .fill(colors::CARD_BG)
        };

        if ui.add(button("🔍  Browse hotels")).clicked() {
            state.ensure_feed();
            state.view = AppView::Feed;
        }
        ui.add_space(10.0);
        if ui.add(button("🏨  My hotels")).clicked() {
            state.ensure_my();
            state.view = AppView::MyHotels;
        }
        ui.add_space(10.0);
        if ui.add(button("➕  Add a hotel")).clicked() {
            state.open_editor_new();
        }

        if state.feed.loaded {
            ui.add_space(24.0);
            ui.label(
                egui::RichText::new(format!("{} hotels listed", state.feed.hotels.len()))
                    .color(colors::TEXT_SECONDARY),
            );
        }
    });
}
