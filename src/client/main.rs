mod api;
mod config;
mod session;
mod state;
mod theme;
mod types;
mod views;

use eframe::egui;
use state::{AppState, AppView};

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "StayHub",
        options,
        Box::new(|_cc| Ok(Box::new(StayHubApp::default()))),
    )
}

struct StayHubApp {
    state: AppState,
}

impl Default for StayHubApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for StayHubApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        if self.state.auth.user.is_some() {
            egui::TopBottomPanel::top("nav").show(ctx, |ui| {
                views::nav_bar(ui, &mut self.state);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            AppView::Auth => views::auth_view::render(ui, &mut self.state),
            AppView::Dashboard => views::dashboard_view::render(ui, &mut self.state),
            AppView::Feed => views::feed_view::render(ui, &mut self.state),
            AppView::Detail => views::detail_view::render(ui, &mut self.state),
            AppView::Editor => views::editor_view::render(ui, &mut self.state),
            AppView::MyHotels => views::my_hotels_view::render(ui, &mut self.state),
        });

        // Worker threads report through channels; keep repainting so their
        // results are picked up without user input.
        ctx.request_repaint_after(std::time::Duration::from_millis(200));
    }
}
