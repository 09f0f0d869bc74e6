//! Paints a `RosterView` and routes button clicks into the action queue.

use crossbeam_channel::Sender;
use eframe::egui;
use roster::{
    view::{Button, MemberRow, TeamView},
    InputId,
};

use crate::controller::{events::UiAction, orchestration::dispatch_action, reducer::DraftInputs};
use crate::ui::theme::RosterPalette;

const DRAFT_FIELD_WIDTH: f32 = 180.0;

/// Click sink handed to widgets while one frame is painted.
pub struct Controls<'a> {
    action_tx: &'a Sender<UiAction>,
    status: &'a mut String,
    palette: RosterPalette,
}

impl<'a> Controls<'a> {
    pub fn new(
        action_tx: &'a Sender<UiAction>,
        status: &'a mut String,
        palette: RosterPalette,
    ) -> Self {
        Self {
            action_tx,
            status,
            palette,
        }
    }

    pub fn action_button(&mut self, ui: &mut egui::Ui, label: &str, action: UiAction) {
        if ui.add(accent_button(label, self.palette)).clicked() {
            dispatch_action(self.action_tx, action, self.status);
        }
    }

    fn button(&mut self, ui: &mut egui::Ui, button: &Button) {
        self.action_button(ui, button.label, button.action);
    }
}

pub fn accent_button(label: &str, palette: RosterPalette) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(label.to_owned()).color(palette.on_accent))
        .fill(palette.accent)
}

/// Stable egui id of a draft input; it does not depend on where it is painted.
pub fn input_widget_id(input: InputId) -> egui::Id {
    egui::Id::new(("roster-input", input))
}

/// Tracks which inputs the last render painted, so their egui state can be
/// dropped once the render they belong to is replaced.
#[derive(Debug, Default)]
pub struct ContainerMemory {
    generation: Option<u64>,
    painted_inputs: Vec<InputId>,
}

impl ContainerMemory {
    fn begin_frame(&mut self, ctx: &egui::Context, generation: u64) {
        if self.generation != Some(generation) {
            let stale = std::mem::take(&mut self.painted_inputs);
            ctx.memory_mut(|mem| {
                for input in &stale {
                    mem.surrender_focus(input_widget_id(*input));
                }
            });
            ctx.data_mut(|data| {
                for input in &stale {
                    data.remove::<egui::text_edit::TextEditState>(input_widget_id(*input));
                }
            });
            if !stale.is_empty() {
                tracing::trace!(inputs = stale.len(), generation, "dropped input state");
            }
            self.generation = Some(generation);
        }
        self.painted_inputs.clear();
    }
}

/// Paints the whole container. When `generation` differs from the last
/// painted one, every input of the old render loses focus and its egui state.
pub fn show_roster(
    ui: &mut egui::Ui,
    teams: &[TeamView],
    drafts: &mut DraftInputs,
    generation: u64,
    memory: &mut ContainerMemory,
    controls: &mut Controls<'_>,
) {
    memory.begin_frame(ui.ctx(), generation);

    if teams.is_empty() {
        ui.weak("No teams yet.");
        return;
    }

    for team in teams {
        show_team(ui, team, drafts, memory, controls);
        ui.add_space(12.0);
    }
}

fn show_team(
    ui: &mut egui::Ui,
    team: &TeamView,
    drafts: &mut DraftInputs,
    memory: &mut ContainerMemory,
    controls: &mut Controls<'_>,
) {
    ui.horizontal(|ui| {
        ui.heading(&team.heading.title);
        controls.button(ui, &team.heading.delete);
    });

    ui.group(|ui| {
        egui::Grid::new(("team-table", team.team_id))
            .striped(true)
            .num_columns(3)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for column in team.table.columns {
                    ui.label(egui::RichText::new(column).strong());
                }
                ui.label("");
                ui.end_row();

                let form = &team.table.form;
                draft_field(ui, drafts, memory, form.name_input, "Name");
                draft_field(ui, drafts, memory, form.position_input, "Position");
                controls.button(ui, &form.create);
                ui.end_row();

                for row in &team.table.rows {
                    show_member_row(ui, row, controls);
                }
            });
    });
}

fn show_member_row(ui: &mut egui::Ui, row: &MemberRow, controls: &mut Controls<'_>) {
    ui.label(&row.name);
    ui.label(&row.position);
    controls.button(ui, &row.delete);
    ui.end_row();
}

fn draft_field(
    ui: &mut egui::Ui,
    drafts: &mut DraftInputs,
    memory: &mut ContainerMemory,
    id: InputId,
    hint: &str,
) {
    match drafts.field_mut(id) {
        Some(value) => {
            ui.add(
                egui::TextEdit::singleline(value)
                    .id(input_widget_id(id))
                    .hint_text(hint)
                    .desired_width(DRAFT_FIELD_WIDTH),
            );
            memory.painted_inputs.push(id);
        }
        None => {
            tracing::debug!(input = %id, "input missing from current render");
            ui.label("");
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use roster::TeamId;

    use super::*;
    use crate::controller::{events::ActionOutcome, reducer::RosterSession};
    use crate::ui::theme::ThemePreset;

    struct Harness {
        ctx: egui::Context,
        session: RosterSession,
        memory: ContainerMemory,
        action_tx: Sender<UiAction>,
        _action_rx: crossbeam_channel::Receiver<UiAction>,
        status: String,
    }

    impl Harness {
        fn with_team(name: &str) -> (Self, TeamId) {
            let (action_tx, action_rx) = bounded(16);
            let mut session = RosterSession::new();
            *session.new_team_name_mut() = name.to_string();
            let ActionOutcome::TeamCreated(team_id) = session.apply(UiAction::NewTeam) else {
                panic!("expected a created team");
            };
            let harness = Self {
                ctx: egui::Context::default(),
                session,
                memory: ContainerMemory::default(),
                action_tx,
                _action_rx: action_rx,
                status: String::new(),
            };
            (harness, team_id)
        }

        fn paint(&mut self) {
            let Self {
                ctx,
                session,
                memory,
                action_tx,
                status,
                ..
            } = self;
            let generation = session.generation();
            let palette = ThemePreset::Dark.palette();
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let (view, drafts) = session.view_and_drafts_mut();
                    let mut controls = Controls::new(&*action_tx, &mut *status, palette);
                    show_roster(
                        ui,
                        &view.teams,
                        drafts,
                        generation,
                        &mut *memory,
                        &mut controls,
                    );
                });
            });
        }

        fn data_len(&self) -> usize {
            self.ctx.data(|data| data.len())
        }

        fn has_focus(&self, input: InputId) -> bool {
            self.ctx.memory(|mem| mem.has_focus(input_widget_id(input)))
        }
    }

    #[test]
    fn egui_memory_stays_bounded_across_rerenders() {
        let (mut harness, alpha) = Harness::with_team("Alpha");
        harness.paint();
        let baseline = harness.data_len();

        for _ in 0..100 {
            let ActionOutcome::MemberAdded(_, member_id) =
                harness.session.apply(UiAction::CreateMember(alpha))
            else {
                panic!("expected an added member");
            };
            harness.paint();
            harness.session.apply(UiAction::DeleteMember(alpha, member_id));
            harness.paint();
        }

        assert_eq!(harness.session.generation(), 201);
        assert!(
            harness.data_len() <= baseline,
            "egui data grew from {baseline} to {}",
            harness.data_len()
        );
    }

    #[test]
    fn focused_draft_input_loses_focus_after_rerender() {
        let (mut harness, alpha) = Harness::with_team("Alpha");
        let input = InputId::MemberName(alpha);
        harness.paint();

        harness
            .ctx
            .memory_mut(|mem| mem.request_focus(input_widget_id(input)));
        harness.paint();
        assert!(harness.has_focus(input));

        harness.session.apply(UiAction::CreateMember(alpha));
        harness.paint();
        assert!(!harness.has_focus(input));
    }

    #[test]
    fn focus_survives_frames_without_a_rerender() {
        let (mut harness, alpha) = Harness::with_team("Alpha");
        let input = InputId::MemberPosition(alpha);
        harness.paint();

        harness
            .ctx
            .memory_mut(|mem| mem.request_focus(input_widget_id(input)));
        harness.paint();
        harness.paint();
        assert!(harness.has_focus(input));
    }

    #[test]
    fn input_widget_ids_differ_per_team_and_field() {
        let ids = [
            input_widget_id(InputId::MemberName(TeamId(0))),
            input_widget_id(InputId::MemberPosition(TeamId(0))),
            input_widget_id(InputId::MemberName(TeamId(1))),
        ];
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[0], ids[2]);
        assert_ne!(ids[1], ids[2]);
    }
}
