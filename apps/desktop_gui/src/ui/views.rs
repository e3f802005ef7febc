//! One render function per [`View`]. Views read the controller and push
//! [`UiAction`]s; only the login and sector views own input buffers.

use std::path::Path;

use eframe::egui;
use portal_core::{form::display_name, SessionController};
use shared::domain::{Role, Theme, View};

use crate::controller::reducer::{FileField, FormPhase, LoginForm, SectorForm, UiAction};
use crate::ui::theme::{card_fill, ACCENT_GREEN};

/// Number of sectors shown on the manager overview tile.
pub const CONNECTED_SECTORS: usize = 12;

fn card(ui: &mut egui::Ui, theme: Theme, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::new()
        .fill(card_fill(theme))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

fn text_card(ui: &mut egui::Ui, ctrl: &SessionController, title_key: &str, body_key: &str) {
    card(ui, ctrl.theme(), |ui| {
        ui.label(egui::RichText::new(ctrl.t(title_key)).strong().size(18.0));
        ui.add_space(4.0);
        ui.label(ctrl.t(body_key));
    });
    ui.add_space(10.0);
}

fn back_button(ui: &mut egui::Ui, ctrl: &SessionController, actions: &mut Vec<UiAction>) {
    if ui.button(format!("← {}", ctrl.t("back"))).clicked() {
        actions.push(UiAction::Navigate(View::Home));
    }
}

pub fn home(ui: &mut egui::Ui, ctrl: &SessionController, actions: &mut Vec<UiAction>) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(ctrl.t("title"))
                .strong()
                .size(30.0)
                .color(ACCENT_GREEN),
        );
        ui.add_space(6.0);
        ui.label(egui::RichText::new(ctrl.t("subtitle")).size(16.0));
        ui.add_space(14.0);
        ui.horizontal(|ui| {
            if ui
                .add(egui::Button::new(ctrl.t("getStarted")).fill(ACCENT_GREEN))
                .clicked()
            {
                actions.push(UiAction::Navigate(View::Login));
            }
            if ui.button(ctrl.t("learnMore")).clicked() {
                actions.push(UiAction::Navigate(View::LearnMore));
            }
        });
    });
    ui.add_space(24.0);

    ui.columns(2, |columns| {
        text_card(&mut columns[0], ctrl, "mission", "missionDesc");
        text_card(&mut columns[1], ctrl, "vision", "visionDesc");
    });
    text_card(ui, ctrl, "collisionHistory", "collisionDesc");
    text_card(ui, ctrl, "digitalEthiopia", "digitalEthiopiaDesc");
}

pub fn about(ui: &mut egui::Ui, ctrl: &SessionController, actions: &mut Vec<UiAction>) {
    ui.heading(ctrl.t("about"));
    ui.add_space(10.0);
    text_card(ui, ctrl, "problemStatement", "problemPara");
    text_card(ui, ctrl, "solutionStatement", "solutionPara");
    text_card(ui, ctrl, "collisionHistory", "collisionHistoryPara");
    back_button(ui, ctrl, actions);
}

pub fn guidelines(ui: &mut egui::Ui, ctrl: &SessionController, actions: &mut Vec<UiAction>) {
    ui.heading(ctrl.t("guidelineTitle"));
    ui.add_space(10.0);
    text_card(ui, ctrl, "howToUseTitle", "howToUseDesc");
    text_card(ui, ctrl, "purpose", "aiDesc");
    back_button(ui, ctrl, actions);
}

fn login_title_key(role: Role) -> &'static str {
    match role {
        Role::Manager => "managerLogin",
        Role::Sector => "sectorLogin",
    }
}

pub fn login(
    ui: &mut egui::Ui,
    ctrl: &SessionController,
    form: &mut LoginForm,
    actions: &mut Vec<UiAction>,
) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.set_max_width(440.0);
        card(ui, ctrl.theme(), |ui| {
            let mut selected = form.tab;
            ui.horizontal(|ui| {
                for role in Role::ALL {
                    ui.selectable_value(&mut selected, role, ctrl.t(login_title_key(role)));
                }
            });
            if selected != form.tab {
                actions.push(UiAction::SelectLoginTab(selected));
            }

            ui.add_space(8.0);
            ui.label(egui::RichText::new(ctrl.t(login_title_key(form.tab))).strong().size(20.0));
            ui.small(ctrl.t("credentialsDesc"));
            ui.add_space(8.0);

            ui.label(egui::RichText::new(ctrl.t("password")).strong());
            let response = ui.add(
                egui::TextEdit::singleline(&mut form.password)
                    .id_salt("login_password")
                    .password(true)
                    .hint_text(ctrl.t("enterPassword"))
                    .desired_width(f32::INFINITY),
            );
            ui.checkbox(&mut form.save_password, ctrl.t("savePassword"));

            ui.add_space(8.0);
            let submit = ui
                .add(
                    egui::Button::new(egui::RichText::new(ctrl.t("signIn")).strong())
                        .fill(ACCENT_GREEN)
                        .min_size(egui::vec2(ui.available_width(), 36.0)),
                )
                .clicked();
            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if submit || enter {
                actions.push(UiAction::SubmitLogin);
            }

            if !form.password.is_empty() && ui.small_button(ctrl.t("forgetPassword")).clicked() {
                actions.push(UiAction::ForgetSavedPassword);
            }
        });
    });
}

pub fn manager_dashboard(ui: &mut egui::Ui, ctrl: &SessionController, actions: &mut Vec<UiAction>) {
    ui.heading(ctrl.t("managerDashboard"));
    ui.label(ctrl.t("welcomeManager"));
    if ctrl.user().role() == Some(Role::Manager) {
        ui.small(egui::RichText::new(ctrl.t("managerActive")).color(ACCENT_GREEN));
    }
    ui.add_space(12.0);

    let total = ctrl.submissions().len().to_string();
    let connected = CONNECTED_SECTORS.to_string();
    let tiles = [
        ("collisionAnalysis", ctrl.t("activeStatus")),
        ("connectedSectors", connected.as_str()),
        ("totalSubmissions", total.as_str()),
    ];
    ui.columns(tiles.len(), |columns| {
        for (column, (label_key, value)) in columns.iter_mut().zip(tiles) {
            card(column, ctrl.theme(), |ui| {
                ui.small(ctrl.t(label_key));
                ui.label(egui::RichText::new(value).strong().size(24.0));
            });
        }
    });
    ui.add_space(16.0);

    ui.label(egui::RichText::new(ctrl.t("receivedInfo")).strong().size(18.0));
    ui.add_space(6.0);
    if ctrl.submissions().is_empty() {
        ui.weak(ctrl.t("noData"));
    } else {
        egui::Grid::new("submissions_table")
            .striped(true)
            .num_columns(4)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for key in ["sectorName", "documentHeader", "geodataHeader", "timestamp"] {
                    ui.label(egui::RichText::new(ctrl.t(key)).strong());
                }
                ui.end_row();
                for submission in ctrl.submissions() {
                    ui.label(&submission.sector_name);
                    ui.label(&submission.document_name);
                    ui.label(submission.geodata_label());
                    ui.label(&submission.submitted_at);
                    ui.end_row();
                }
            });
    }
    ui.add_space(12.0);
    back_button(ui, ctrl, actions);
}

fn file_row(
    ui: &mut egui::Ui,
    ctrl: &SessionController,
    editable: bool,
    label_key: &str,
    field: FileField,
    picked: Option<&Path>,
    actions: &mut Vec<UiAction>,
) {
    ui.label(egui::RichText::new(ctrl.t(label_key)).strong());
    ui.horizontal(|ui| {
        if ui.add_enabled(editable, egui::Button::new(ctrl.t("chooseFile"))).clicked() {
            if let Some(path) = rfd::FileDialog::new().pick_file() {
                actions.push(UiAction::FilePicked { field, path });
            }
        }
        match picked.and_then(display_name) {
            Some(name) => ui.label(name),
            None => ui.weak("-"),
        };
    });
    ui.add_space(6.0);
}

pub fn sector_dashboard(
    ui: &mut egui::Ui,
    ctrl: &SessionController,
    form: &mut SectorForm,
    actions: &mut Vec<UiAction>,
) {
    ui.heading(ctrl.t("sectorPortal"));
    ui.label(ctrl.t("sectorGreeting"));
    ui.add_space(10.0);

    let toggle = ui.add_enabled(
        form.phase != FormPhase::Submitting,
        egui::Button::new(ctrl.t("enterInfo")).fill(ACCENT_GREEN),
    );
    if toggle.clicked() {
        actions.push(match form.phase {
            FormPhase::Closed => UiAction::OpenSectorForm,
            FormPhase::Editing | FormPhase::Submitting => UiAction::CloseSectorForm,
        });
    }
    ui.add_space(10.0);

    if form.phase != FormPhase::Closed {
        let editable = form.accepts_input();
        card(ui, ctrl.theme(), |ui| {
            ui.label(egui::RichText::new(ctrl.t("sectorName")).strong());
            ui.add_enabled(
                editable,
                egui::TextEdit::singleline(&mut form.draft.sector_name)
                    .id_salt("sector_name")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);

            let draft = &form.draft;
            let files = [
                ("govLegality", FileField::Document, draft.document.as_deref()),
                ("longitude", FileField::Longitude, draft.longitude.as_deref()),
                ("latitude", FileField::Latitude, draft.latitude.as_deref()),
            ];
            for (label_key, field, picked) in files {
                file_row(ui, ctrl, editable, label_key, field, picked, actions);
            }

            ui.horizontal(|ui| {
                let label = if form.phase == FormPhase::Submitting {
                    ctrl.t("loading")
                } else {
                    ctrl.t("submit")
                };
                if ui
                    .add_enabled(editable, egui::Button::new(label).fill(ACCENT_GREEN))
                    .clicked()
                {
                    actions.push(UiAction::SubmitSectorForm);
                }
                if form.phase == FormPhase::Submitting {
                    ui.spinner();
                }
            });
        });
        ui.add_space(10.0);
    }
    back_button(ui, ctrl, actions);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_titles_cover_both_roles() {
        assert_eq!(login_title_key(Role::Manager), "managerLogin");
        assert_eq!(login_title_key(Role::Sector), "sectorLogin");
    }
}
