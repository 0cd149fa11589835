use serde::{Deserialize, Serialize};

use crate::types::ItemId;

/// What a card button does when clicked. Closed set: adding a variant forces
/// every handler below to cover it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardAction {
    /// Open the agent's detail page (internal route or external link).
    NavigateToAgent { url: String },
    /// Dismiss the card for the rest of the session.
    HideCard,
    /// Send the user to re-authenticate a connected service.
    NavigateToReauth { url: String },
}

/// Which of a card's two buttons was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaSlot {
    Primary,
    Secondary,
}

/// Result of dispatching a [`CardAction`], consumed by the routing layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    Navigate { url: String },
    Hidden { id: ItemId },
}

impl ActionOutcome {
    /// Resolve an action for the card `id`. The caller applies the hide side
    /// effect; this only decides what happened.
    pub fn for_action(action: &CardAction, id: &ItemId) -> Self {
        match action {
            CardAction::NavigateToAgent { url } | CardAction::NavigateToReauth { url } => {
                ActionOutcome::Navigate { url: url.clone() }
            }
            CardAction::HideCard => ActionOutcome::Hidden { id: id.clone() },
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            ActionOutcome::Navigate { url } => Some(url),
            ActionOutcome::Hidden { .. } => None,
        }
    }
}

/// Item shapes that carry clickable call-to-action buttons.
pub trait CardActions {
    fn action(&self, slot: CtaSlot) -> Option<&CardAction>;
    fn cta_label(&self, slot: CtaSlot) -> Option<&str>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("no item with id {0}")]
    UnknownItem(ItemId),
    #[error("item {0} has been dismissed")]
    Dismissed(ItemId),
    #[error("item {id} has no {slot:?} action")]
    NoAction { id: ItemId, slot: CtaSlot },
}
