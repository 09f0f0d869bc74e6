//! Owned roster state: teams in display order, each with its members.

use tracing::debug;

use crate::{
    domain::{MemberId, TeamId},
    error::RosterError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: MemberId,
    name: String,
    position: String,
}

impl Member {
    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &str {
        &self.position
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    name: String,
    members: Vec<Member>,
}

impl Team {
    fn new(id: TeamId, name: String) -> Self {
        Self {
            id,
            name,
            members: Vec::new(),
        }
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in display order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn member(&self, member_id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id == member_id)
    }

    fn push_member(&mut self, member: Member) -> &Member {
        self.members.push(member);
        &self.members[self.members.len() - 1]
    }

    fn remove_member(&mut self, member_id: MemberId) -> Option<Member> {
        let index = self
            .members
            .iter()
            .position(|member| member.id == member_id)?;
        Some(self.members.remove(index))
    }
}

/// The whole application model. Ids come from counters that only ever grow,
/// so a deleted team's or member's id is never handed out again.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    teams: Vec<Team>,
    next_team_id: i64,
    next_member_id: i64,
}

impl Roster {
    pub fn init() -> Self {
        Self::default()
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == team_id)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn create_team(&mut self, name: impl Into<String>) -> &Team {
        let id = TeamId(self.next_team_id);
        self.next_team_id += 1;

        let team = Team::new(id, name.into());
        debug!(team_id = %id, name = %team.name, "created team");
        self.teams.push(team);
        &self.teams[self.teams.len() - 1]
    }

    /// Removes the team with `team_id`; `None` when no such team is live.
    pub fn delete_team(&mut self, team_id: TeamId) -> Option<Team> {
        let index = self.teams.iter().position(|team| team.id == team_id)?;
        let team = self.teams.remove(index);
        debug!(
            team_id = %team_id,
            members = team.members.len(),
            "deleted team"
        );
        Some(team)
    }

    pub fn add_member(
        &mut self,
        team_id: TeamId,
        name: impl Into<String>,
        position: impl Into<String>,
    ) -> Result<&Member, RosterError> {
        let member_id = MemberId(self.next_member_id);
        let team = self
            .teams
            .iter_mut()
            .find(|team| team.id == team_id)
            .ok_or(RosterError::UnknownTeam(team_id))?;
        self.next_member_id += 1;

        debug!(team_id = %team_id, member_id = %member_id, "added member");
        Ok(team.push_member(Member {
            id: member_id,
            name: name.into(),
            position: position.into(),
        }))
    }

    /// Removes the member by id. A member that is not in the team's list is a
    /// no-op and yields `Ok(None)`.
    pub fn delete_member(
        &mut self,
        team_id: TeamId,
        member_id: MemberId,
    ) -> Result<Option<Member>, RosterError> {
        let team = self
            .teams
            .iter_mut()
            .find(|team| team.id == team_id)
            .ok_or(RosterError::UnknownTeam(team_id))?;

        let removed = team.remove_member(member_id);
        if removed.is_some() {
            debug!(team_id = %team_id, member_id = %member_id, "deleted member");
        }
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
