//! Actions raised by rendered controls and what applying them did.

use roster::{MemberId, RosterError, TeamId};

pub use roster::UiAction;

/// Every applied action is followed by a full re-render, whatever the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    TeamCreated(TeamId),
    TeamDeleted(TeamId),
    MemberAdded(TeamId, MemberId),
    MemberDeleted(TeamId, MemberId),
    /// The target was already gone; the model is unchanged.
    NoOp,
    /// The action named a team that no longer exists. Never shown to the user.
    Stale(RosterError),
}
