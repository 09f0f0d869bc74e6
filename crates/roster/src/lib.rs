//! In-memory team roster: the owned model and the view it renders to.

pub mod domain;
pub mod error;
pub mod model;
pub mod view;

pub use domain::{MemberId, TeamId};
pub use error::RosterError;
pub use model::{Member, Roster, Team};
pub use view::{render, InputId, RosterView, UiAction};
