use tracing::debug;

use super::OnMenuClicked;
use crate::menu::{Menu, MenuAction};
use crate::types::{Player, Slot};

/// Closes confirmation menus once accept or cancel is clicked, when the menu
/// asks for it. The accept/cancel callbacks themselves are plain `on_click`
/// handlers and run independently.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfirmationClickHandler;

impl ConfirmationClickHandler {
    pub fn new() -> Self {
        Self
    }
}

impl OnMenuClicked for ConfirmationClickHandler {
    fn on(&self, player: &Player, menu: &Menu, item_num_clicked: Slot) -> Vec<MenuAction> {
        let Some(confirmation) = menu.configuration().confirmation() else {
            return Vec::new();
        };

        match confirmation.action_at(item_num_clicked) {
            Some(action) if confirmation.close_on_action() => {
                debug!(
                    "Confirmation {:?} clicked by {} at slot {}, closing menu",
                    action, player.name, item_num_clicked
                );
                vec![MenuAction::Close]
            }
            _ => Vec::new(),
        }
    }
}
