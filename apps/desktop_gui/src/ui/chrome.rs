//! Page chrome shared by every view: official strip, navbar, status banner
//! and footer.

use eframe::egui;
use portal_core::SessionController;
use shared::domain::{Language, View};

use crate::controller::reducer::{StatusBanner, StatusBannerSeverity, UiAction};
use crate::ui::theme::{ACCENT_GREEN, ACCENT_RED, ACCENT_YELLOW};

pub const APP_NAME: &str = "CDAAS";

pub fn official_strip(ui: &mut egui::Ui, ctrl: &SessionController) {
    ui.horizontal(|ui| {
        for color in [ACCENT_GREEN, ACCENT_YELLOW, ACCENT_RED] {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(6.0, 12.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 1.0, color);
        }
        ui.small(ctrl.t("officialWebsite"));
    });
}

pub fn navbar(ui: &mut egui::Ui, ctrl: &SessionController, actions: &mut Vec<UiAction>) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(APP_NAME)
                .strong()
                .size(20.0)
                .color(ACCENT_GREEN),
        );
        ui.add_space(16.0);

        let current = ctrl.current_view();
        for view in [View::Home, View::About] {
            if ui
                .selectable_label(current == view, ctrl.t(view.label_key()))
                .clicked()
            {
                actions.push(UiAction::Navigate(view));
            }
        }
        if ctrl.user().is_authenticated() {
            if ui.button(ctrl.t("logout")).clicked() {
                actions.push(UiAction::Logout);
            }
        } else if ui
            .selectable_label(current == View::Login, ctrl.t("login"))
            .clicked()
        {
            actions.push(UiAction::Navigate(View::Login));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let theme_key = if ctrl.theme().is_dark() {
                "lightMode"
            } else {
                "darkMode"
            };
            if ui.button(ctrl.t(theme_key)).clicked() {
                actions.push(UiAction::ToggleTheme);
            }

            let mut selected = ctrl.language();
            egui::ComboBox::from_id_salt("language_selector")
                .selected_text(selected.native_name())
                .show_ui(ui, |ui| {
                    for language in Language::ALL {
                        ui.selectable_value(&mut selected, language, language.native_name());
                    }
                });
            if selected != ctrl.language() {
                actions.push(UiAction::SetLanguage(selected));
            }
        });
    });
}

pub fn status_banner(
    ui: &mut egui::Ui,
    ctrl: &SessionController,
    banner: &StatusBanner,
    actions: &mut Vec<UiAction>,
) {
    let (fill, stroke) = match banner.severity {
        StatusBannerSeverity::Success => (
            egui::Color32::from_rgb(22, 101, 52),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(74, 160, 104)),
        ),
        StatusBannerSeverity::Warning => (
            egui::Color32::from_rgb(133, 95, 12),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(196, 150, 48)),
        ),
        StatusBannerSeverity::Error => (
            egui::Color32::from_rgb(111, 53, 53),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
        ),
    };

    egui::Frame::NONE
        .fill(fill)
        .stroke(stroke)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(ctrl.t("dismiss")).clicked() {
                        actions.push(UiAction::DismissBanner);
                    }
                });
            });
        });
}

pub fn footer(ui: &mut egui::Ui, ctrl: &SessionController, actions: &mut Vec<UiAction>) {
    ui.add_space(6.0);
    ui.columns(3, |columns| {
        columns[0].label(egui::RichText::new(ctrl.t("quickLinks")).strong());
        for view in [View::Home, View::About, View::LearnMore] {
            if columns[0].link(ctrl.t(view.label_key())).clicked() {
                actions.push(UiAction::Navigate(view));
            }
        }

        columns[1].label(egui::RichText::new(ctrl.t("contactUs")).strong());
        for key in ["address", "email", "phone"] {
            columns[1].small(ctrl.t(key));
        }

        columns[2].label(egui::RichText::new(ctrl.t("legal")).strong());
        for key in ["privacyPolicy", "termsOfService"] {
            columns[2].small(ctrl.t(key));
        }
    });
    ui.separator();
    ui.vertical_centered(|ui| {
        ui.small(ctrl.t("copyright"));
    });
    ui.add_space(4.0);
}
