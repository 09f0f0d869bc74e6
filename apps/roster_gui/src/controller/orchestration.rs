//! Queueing helpers from activated controls to the controller.

use crossbeam_channel::{Sender, TrySendError};

use crate::controller::events::UiAction;

pub fn dispatch_action(action_tx: &Sender<UiAction>, action: UiAction, status: &mut String) {
    let action_name = action.name();

    match action_tx.try_send(action) {
        Ok(()) => tracing::debug!(action = action_name, "queued ui action"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(action = action_name, "ui action queue is full");
            *status = "Too many pending actions; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(action = action_name, "ui action queue disconnected");
            *status = "Action queue disconnected; restart the roster window".to_string();
        }
    }
}
