use thiserror::Error;

use crate::domain::TeamId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("no team with id {0}")]
    UnknownTeam(TeamId),
}
