//! Render: builds the complete team/member view from roster state.
//!
//! The view is a retained tree of plain values. Every button carries the
//! action it triggers, so control bindings are recreated each time the tree
//! is rebuilt. Nothing here is patched in place: a re-render produces a fresh
//! `RosterView` that replaces the previous one.

use std::fmt;

use crate::{
    domain::{MemberId, TeamId},
    model::{Member, Roster, Team},
};

pub const DELETE_TEAM_LABEL: &str = "Delete Team";
pub const CREATE_MEMBER_LABEL: &str = "Create";
pub const DELETE_MEMBER_LABEL: &str = "Delete";
pub const TABLE_COLUMNS: [&str; 2] = ["Name", "Position"];

/// Identifiers of the text inputs. Per-team inputs embed the owning team's
/// id, so forms of different teams never share an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputId {
    NewTeamName,
    MemberName(TeamId),
    MemberPosition(TeamId),
}

impl InputId {
    pub fn team_id(&self) -> Option<TeamId> {
        match self {
            InputId::NewTeamName => None,
            InputId::MemberName(team_id) | InputId::MemberPosition(team_id) => Some(*team_id),
        }
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputId::NewTeamName => f.write_str("new-team-name"),
            InputId::MemberName(team_id) => write!(f, "name-input-{team_id}"),
            InputId::MemberPosition(team_id) => write!(f, "position-input-{team_id}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiAction {
    NewTeam,
    DeleteTeam(TeamId),
    CreateMember(TeamId),
    DeleteMember(TeamId, MemberId),
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::NewTeam => "new_team",
            UiAction::DeleteTeam(_) => "delete_team",
            UiAction::CreateMember(_) => "create_member",
            UiAction::DeleteMember(..) => "delete_member",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: UiAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamHeading {
    pub title: String,
    pub delete: Button,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberForm {
    pub name_input: InputId,
    pub position_input: InputId,
    pub create: Button,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRow {
    pub member_id: MemberId,
    pub name: String,
    pub position: String,
    pub delete: Button,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamTable {
    pub columns: [&'static str; 2],
    pub form: MemberForm,
    pub rows: Vec<MemberRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamView {
    pub team_id: TeamId,
    pub heading: TeamHeading,
    pub table: TeamTable,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterView {
    pub teams: Vec<TeamView>,
}

impl RosterView {
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn team(&self, team_id: TeamId) -> Option<&TeamView> {
        self.teams.iter().find(|team| team.team_id == team_id)
    }

    /// Every per-team input in the container, in display order.
    pub fn inputs(&self) -> impl Iterator<Item = InputId> + '_ {
        self.teams
            .iter()
            .flat_map(|team| [team.table.form.name_input, team.table.form.position_input])
    }

    /// Every action bound to a control in the container, in display order.
    pub fn actions(&self) -> Vec<UiAction> {
        let mut actions = Vec::new();
        for team in &self.teams {
            actions.push(team.heading.delete.action);
            actions.push(team.table.form.create.action);
            actions.extend(team.table.rows.iter().map(|row| row.delete.action));
        }
        actions
    }
}

pub fn render(roster: &Roster) -> RosterView {
    RosterView {
        teams: roster.teams().iter().map(render_team).collect(),
    }
}

fn render_team(team: &Team) -> TeamView {
    let team_id = team.id();
    TeamView {
        team_id,
        heading: TeamHeading {
            title: team.name().to_string(),
            delete: Button {
                label: DELETE_TEAM_LABEL,
                action: UiAction::DeleteTeam(team_id),
            },
        },
        table: TeamTable {
            columns: TABLE_COLUMNS,
            form: MemberForm {
                name_input: InputId::MemberName(team_id),
                position_input: InputId::MemberPosition(team_id),
                create: Button {
                    label: CREATE_MEMBER_LABEL,
                    action: UiAction::CreateMember(team_id),
                },
            },
            rows: team
                .members()
                .iter()
                .map(|member| render_member_row(team_id, member))
                .collect(),
        },
    }
}

fn render_member_row(team_id: TeamId, member: &Member) -> MemberRow {
    MemberRow {
        member_id: member.id(),
        name: member.name().to_string(),
        position: member.position().to_string(),
        delete: Button {
            label: DELETE_MEMBER_LABEL,
            action: UiAction::DeleteMember(team_id, member.id()),
        },
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
