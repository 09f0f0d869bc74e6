//! Controller layer: UI actions, the action queue, and state transitions.

pub mod events;
pub mod orchestration;
pub mod reducer;
