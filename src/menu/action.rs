use std::fmt;
use std::sync::Arc;

use super::configuration::MenuConfiguration;

/// Command returned by a click or close handler.
///
/// Handlers never talk to the menu service themselves; the dispatcher applies
/// these in order once the handler returns.
#[derive(Clone)]
pub enum MenuAction {
    /// Close the player's current menu
    Close,
    /// Open another menu for the player, replacing the current one
    Open(Arc<MenuConfiguration>),
}

impl MenuAction {
    pub fn open(configuration: MenuConfiguration) -> Self {
        MenuAction::Open(Arc::new(configuration))
    }

    pub fn is_close(&self) -> bool {
        matches!(self, MenuAction::Close)
    }
}

impl fmt::Debug for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::Close => f.write_str("Close"),
            MenuAction::Open(configuration) => {
                f.debug_tuple("Open").field(&configuration.title()).finish()
            }
        }
    }
}
