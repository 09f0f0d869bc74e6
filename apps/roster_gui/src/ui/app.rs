use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use roster::InputId;

use crate::config::Settings;
use crate::controller::{
    events::{ActionOutcome, UiAction},
    reducer::RosterSession,
};
use crate::ui::theme::{visuals_for_theme, ThemePreset};
use crate::ui::widgets::{show_roster, ContainerMemory, Controls};

pub struct RosterApp {
    action_tx: Sender<UiAction>,
    action_rx: Receiver<UiAction>,

    session: RosterSession,
    container: ContainerMemory,
    status: String,

    theme: ThemePreset,
    applied_theme: Option<ThemePreset>,
}

impl RosterApp {
    pub fn new(settings: &Settings) -> Self {
        let (action_tx, action_rx) = bounded::<UiAction>(settings.action_queue_capacity);
        Self {
            action_tx,
            action_rx,
            session: RosterSession::new(),
            container: ContainerMemory::default(),
            status: String::new(),
            theme: settings.theme,
            applied_theme: None,
        }
    }

    /// Drains everything clicked during the previous frame. Each action runs
    /// to completion, including its re-render, before the next one starts.
    fn process_actions(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            match self.session.apply(action) {
                ActionOutcome::TeamCreated(team_id) => {
                    tracing::info!(team_id = %team_id, "team created");
                }
                ActionOutcome::TeamDeleted(team_id) => {
                    tracing::info!(team_id = %team_id, "team deleted");
                }
                _ => {}
            }
            self.status.clear();
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme != Some(self.theme) {
            ctx.set_visuals(visuals_for_theme(self.theme));
            self.applied_theme = Some(self.theme);
        }
    }

    fn show_new_team_bar(&mut self, ctx: &egui::Context) {
        let palette = self.theme.palette();
        egui::TopBottomPanel::top("new_team_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Team name").strong());
                ui.add(
                    egui::TextEdit::singleline(self.session.new_team_name_mut())
                        .id_salt(InputId::NewTeamName.to_string())
                        .hint_text("New team name")
                        .desired_width(220.0),
                );

                let mut controls = Controls::new(&self.action_tx, &mut self.status, palette);
                controls.action_button(ui, "New Team", UiAction::NewTeam);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.selectable_value(&mut self.theme, ThemePreset::Light, "Light");
                    ui.selectable_value(&mut self.theme, ThemePreset::Dark, "Dark");
                    ui.separator();
                    ui.weak(format!("{} team(s)", self.session.roster().len()));
                });
            });
            if !self.status.is_empty() {
                ui.colored_label(egui::Color32::from_rgb(220, 53, 69), &self.status);
            }
            ui.add_space(6.0);
        });
    }

    fn show_teams_container(&mut self, ctx: &egui::Context) {
        let palette = self.theme.palette();
        let generation = self.session.generation();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let (view, drafts) = self.session.view_and_drafts_mut();
                    let mut controls = Controls::new(&self.action_tx, &mut self.status, palette);
                    show_roster(
                        ui,
                        &view.teams,
                        drafts,
                        generation,
                        &mut self.container,
                        &mut controls,
                    );
                });
        });
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_actions();
        self.apply_theme_if_needed(ctx);

        self.show_new_team_bar(ctx);
        self.show_teams_container(ctx);

        if !self.action_rx.is_empty() {
            ctx.request_repaint();
        }
    }
}
