//! Light/dark visuals for the portal.

use eframe::egui;
use shared::domain::Theme;

pub const ACCENT_GREEN: egui::Color32 = egui::Color32::from_rgb(0, 122, 61);
pub const ACCENT_YELLOW: egui::Color32 = egui::Color32::from_rgb(252, 209, 22);
pub const ACCENT_RED: egui::Color32 = egui::Color32::from_rgb(218, 18, 26);

const PANEL_ROUNDING: u8 = 8;

pub fn visuals_for_theme(theme: Theme) -> egui::Visuals {
    let mut visuals = match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => {
            let mut v = egui::Visuals::dark();
            v.window_fill = egui::Color32::from_rgb(17, 24, 39);
            v.panel_fill = egui::Color32::from_rgb(17, 24, 39);
            v.extreme_bg_color = egui::Color32::from_rgb(31, 41, 55);
            v.faint_bg_color = egui::Color32::from_rgb(31, 41, 55);
            v
        }
    };

    visuals.hyperlink_color = ACCENT_GREEN;
    visuals.selection.bg_fill = ACCENT_GREEN;
    visuals.widgets.active.bg_fill = ACCENT_GREEN;
    visuals.widgets.hovered.bg_fill = ACCENT_GREEN.gamma_multiply(0.85);
    visuals.window_corner_radius = egui::CornerRadius::same(PANEL_ROUNDING);
    visuals.menu_corner_radius = egui::CornerRadius::same(PANEL_ROUNDING);
    visuals
}

/// Fill used for cards and stat tiles.
pub fn card_fill(theme: Theme) -> egui::Color32 {
    match theme {
        Theme::Light => egui::Color32::from_rgb(243, 244, 246),
        Theme::Dark => egui::Color32::from_rgb(31, 41, 55),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visuals_follow_the_session_theme() {
        assert!(visuals_for_theme(Theme::Dark).dark_mode);
        assert!(!visuals_for_theme(Theme::Light).dark_mode);
        assert_eq!(visuals_for_theme(Theme::Light).selection.bg_fill, ACCENT_GREEN);
    }
}
