use eframe::egui;

use crate::state::AppState;
use crate::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = if state.signup_mode { 380.0 } else { 280.0 };
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("🏨 StayHub")
                    .size(32.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(16.0);

            ui.label(
                egui::RichText::new(if state.signup_mode {
                    "Create Account"
                } else {
                    "Welcome Back"
                })
                .size(22.0)
                .color(colors::TEXT_LIGHT),
            );
            ui.add_space(16.0);

            if let Some(ref error) = state.auth.error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(10.0);
            }

            let input_width = 280.0;
            let label_width = 80.0;

            let field = |ui: &mut egui::Ui, label: &str, value: &mut String, password: bool| {
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                    ui.add_sized(
                        [label_width, 24.0],
                        egui::Label::new(
                            egui::RichText::new(label).color(colors::TEXT_SECONDARY),
                        ),
                    );
                    ui.add_sized(
                        [input_width, 28.0],
                        egui::TextEdit::singleline(value)
                            .password(password)
                            .text_color(colors::TEXT_LIGHT),
                    );
                });
                ui.add_space(8.0);
            };

            if state.signup_mode {
                field(ui, "Name:", &mut state.name_input, false);
            }
            field(ui, "Email:", &mut state.email_input, false);
            field(ui, "Password:", &mut state.password_input, true);
            if state.signup_mode {
                field(ui, "Phone:", &mut state.phone_input, false);
            }

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                let button_width = 130.0;
                let total_buttons_width = button_width * 2.0 + 10.0;
                ui.add_space((available_rect.width() - total_buttons_width) / 2.0);

                if ui
                    .add_sized(
                        [button_width, 32.0],
                        egui::Button::new(
                            egui::RichText::new(if state.signup_mode {
                                "Sign Up"
                            } else {
                                "Login"
                            })
                            .color(colors::TEXT_LIGHT),
                        )
                        .fill(colors::ACCENT),
                    )
                    .clicked()
                {
                    state.auth.error = None;
                    if state.signup_mode {
                        state.handle_signup();
                    } else {
                        state.handle_login();
                    }
                }

                ui.add_space(10.0);

                if ui
                    .add_sized(
                        [button_width, 32.0],
                        egui::Button::new(
                            egui::RichText::new(if state.signup_mode {
                                "Back to Login"
                            } else {
                                "Create Account"
                            })
                            .color(colors::TEXT_SECONDARY),
                        ),
                    )
                    .clicked()
                {
                    state.signup_mode = !state.signup_mode;
                    state.auth.error = None;
                }
            });

            if state.auth.loading {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 100.0) / 2.0);
                    ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }
        });
    });
}
