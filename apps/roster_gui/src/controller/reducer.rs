//! Applies UI actions to the roster and rebuilds the view after each one.

use std::collections::HashMap;

use roster::{render, InputId, Roster, RosterError, RosterView, TeamId};

use crate::controller::events::{ActionOutcome, UiAction};

/// Text typed into the per-team inputs of the current render.
///
/// Only inputs that exist in the rendered container have an entry; a rebuild
/// replaces the whole store with empty fields.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DraftInputs {
    values: HashMap<InputId, String>,
}

impl DraftInputs {
    fn for_view(view: &RosterView) -> Self {
        Self {
            values: view.inputs().map(|id| (id, String::new())).collect(),
        }
    }

    pub fn get(&self, id: InputId) -> &str {
        self.values.get(&id).map(String::as_str).unwrap_or_default()
    }

    /// Mutable text for an input that is part of the current render.
    pub fn field_mut(&mut self, id: InputId) -> Option<&mut String> {
        self.values.get_mut(&id)
    }

    fn member_draft(&self, team_id: TeamId) -> (String, String) {
        (
            self.get(InputId::MemberName(team_id)).to_string(),
            self.get(InputId::MemberPosition(team_id)).to_string(),
        )
    }
}

/// Everything the controller owns: the model, the last render of it, and the
/// inputs that belong to that render.
#[derive(Debug)]
pub struct RosterSession {
    roster: Roster,
    view: RosterView,
    drafts: DraftInputs,
    new_team_name: String,
    generation: u64,
}

impl Default for RosterSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterSession {
    pub fn new() -> Self {
        let roster = Roster::init();
        let view = render(&roster);
        let drafts = DraftInputs::for_view(&view);
        Self {
            roster,
            view,
            drafts,
            new_team_name: String::new(),
            generation: 0,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn view(&self) -> &RosterView {
        &self.view
    }

    /// Split borrow for painting: the view is read while drafts are edited.
    pub fn view_and_drafts_mut(&mut self) -> (&RosterView, &mut DraftInputs) {
        (&self.view, &mut self.drafts)
    }

    pub fn new_team_name(&self) -> &str {
        &self.new_team_name
    }

    /// The page-level team name field. It lives outside the rendered
    /// container, so re-renders keep its text.
    pub fn new_team_name_mut(&mut self) -> &mut String {
        &mut self.new_team_name
    }

    /// Bumped by every re-render. The container widgets compare it with the
    /// last painted value to drop focus and egui state of the old render.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn apply(&mut self, action: UiAction) -> ActionOutcome {
        let outcome = match action {
            UiAction::NewTeam => {
                let team = self.roster.create_team(self.new_team_name.clone());
                ActionOutcome::TeamCreated(team.id())
            }
            UiAction::DeleteTeam(team_id) => match self.roster.delete_team(team_id) {
                Some(team) => ActionOutcome::TeamDeleted(team.id()),
                None => ActionOutcome::NoOp,
            },
            UiAction::CreateMember(team_id) => {
                let (name, position) = self.drafts.member_draft(team_id);
                match self.roster.add_member(team_id, name, position) {
                    Ok(member) => ActionOutcome::MemberAdded(team_id, member.id()),
                    Err(err) => ActionOutcome::Stale(err),
                }
            }
            UiAction::DeleteMember(team_id, member_id) => {
                match self.roster.delete_member(team_id, member_id) {
                    Ok(Some(_)) => ActionOutcome::MemberDeleted(team_id, member_id),
                    Ok(None) => ActionOutcome::NoOp,
                    Err(err) => ActionOutcome::Stale(err),
                }
            }
        };

        match &outcome {
            ActionOutcome::Stale(RosterError::UnknownTeam(team_id)) => {
                tracing::debug!(
                    action = action.name(),
                    team_id = %team_id,
                    "ignored stale action"
                );
            }
            ActionOutcome::NoOp => {
                tracing::debug!(action = action.name(), "action matched nothing");
            }
            _ => {}
        }

        self.rerender();
        outcome
    }

    fn rerender(&mut self) {
        self.view = render(&self.roster);
        self.drafts = DraftInputs::for_view(&self.view);
        self.generation = self.generation.wrapping_add(1);
        tracing::debug!(
            generation = self.generation,
            teams = self.view.teams.len(),
            "re-rendered roster"
        );
    }
}
