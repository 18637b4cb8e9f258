pub mod auth_view;
pub mod dashboard_view;
pub mod detail_view;
pub mod editor_view;
pub mod feed_view;
pub mod my_hotels_view;

use eframe::egui;

use crate::state::{AppState, AppView};
use crate::theme::colors;

pub fn nav_bar(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("🏨 StayHub")
                .strong()
                .size(18.0)
                .color(colors::ACCENT),
        );
        ui.separator();

        if ui
            .selectable_label(state.view == AppView::Dashboard, "Dashboard")
            .clicked()
        {
            state.view = AppView::Dashboard;
        }
        if ui
            .selectable_label(state.view == AppView::Feed, "Browse")
            .clicked()
        {
            state.ensure_feed();
            state.view = AppView::Feed;
        }
        if ui
            .selectable_label(state.view == AppView::MyHotels, "My Hotels")
            .clicked()
        {
            state.ensure_my();
            state.view = AppView::MyHotels;
        }
        if ui.button("➕ Add Hotel").clicked() {
            state.open_editor_new();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Logout").clicked() {
                state.logout();
            }
            if let Some(user) = &state.auth.user {
                ui.label(egui::RichText::new(&user.name).color(colors::TEXT_SECONDARY));
            }
        });
    });

    if let Some(notice) = state.notice.clone() {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(notice).color(colors::SUCCESS));
            if ui.small_button("✕").clicked() {
                state.notice = None;
            }
        });
    }
}
