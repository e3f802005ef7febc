use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use eframe::egui;
use shared::domain::{Theme, View};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{self, FormPhase, ShellState, UiAction};
use crate::ui::{chrome, theme, views};

pub struct PortalApp {
    state: ShellState,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    applied_theme: Option<Theme>,
    backend_gone: bool,
}

impl PortalApp {
    pub fn new(state: ShellState, cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            state,
            cmd_tx,
            ui_rx,
            applied_theme: None,
            backend_gone: false,
        }
    }

    fn process_ui_events(&mut self) {
        loop {
            match self.ui_rx.try_recv() {
                Ok(event) => reducer::apply_event(&mut self.state, event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.backend_gone && self.state.sector_form.phase == FormPhase::Submitting {
                        reducer::command_failed(
                            &mut self.state,
                            &UiError::from_message(
                                UiErrorContext::BackendStartup,
                                "Backend worker stopped before finishing the submission",
                            ),
                        );
                    }
                    self.backend_gone = true;
                    break;
                }
            }
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        let theme = self.state.controller.theme();
        if self.applied_theme != Some(theme) {
            ctx.set_visuals(theme::visuals_for_theme(theme));
            self.applied_theme = Some(theme);
        }
    }

    fn apply_actions(&mut self, actions: Vec<UiAction>) {
        for action in actions {
            let Some(cmd) = reducer::reduce(&mut self.state, action) else {
                continue;
            };
            if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd) {
                reducer::command_failed(&mut self.state, &err);
            }
        }
    }

    fn show_view(&mut self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let ShellState {
            controller,
            login,
            sector_form,
            ..
        } = &mut self.state;
        match controller.current_view() {
            View::Home => views::home(ui, controller, actions),
            View::About => views::about(ui, controller, actions),
            View::LearnMore => views::guidelines(ui, controller, actions),
            View::Login => views::login(ui, controller, login, actions),
            View::ManagerDashboard => views::manager_dashboard(ui, controller, actions),
            View::SectorDashboard => views::sector_dashboard(ui, controller, sector_form, actions),
        }
    }
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("portal_header")
            .frame(
                egui::Frame::NONE
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                chrome::official_strip(ui, &self.state.controller);
                ui.separator();
                chrome::navbar(ui, &self.state.controller, &mut actions);
            });

        egui::TopBottomPanel::bottom("portal_footer")
            .frame(
                egui::Frame::NONE
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(egui::Margin::symmetric(16, 6)),
            )
            .show(ctx, |ui| chrome::footer(ui, &self.state.controller, &mut actions));

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(egui::Margin::symmetric(24, 16)),
            )
            .show(ctx, |ui| {
                if let Some(banner) = &self.state.banner {
                    chrome::status_banner(ui, &self.state.controller, banner, &mut actions);
                    ui.add_space(10.0);
                }
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.show_view(ui, &mut actions));
            });

        self.apply_actions(actions);

        if self.state.sector_form.phase == FormPhase::Submitting {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
