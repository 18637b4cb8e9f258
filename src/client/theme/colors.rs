use eframe::egui::Color32;

pub const BG_DARK: Color32 = Color32::from_rgb(24, 26, 32);
pub const CARD_BG: Color32 = Color32::from_rgb(34, 37, 46);
pub const ACCENT: Color32 = Color32::from_rgb(66, 133, 244);
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(235, 235, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const ERROR: Color32 = Color32::from_rgb(235, 87, 87);
pub const SUCCESS: Color32 = Color32::from_rgb(90, 200, 120);
pub const RATING: Color32 = Color32::from_rgb(244, 180, 66);
