pub mod confirmation_handler;

pub use confirmation_handler::ConfirmationClickHandler;

use crate::menu::{Menu, MenuAction};
use crate::types::{Player, Slot};

/// Menu-wide click hook run by the dispatcher on every click, after the
/// slot's own click handler.
pub trait OnMenuClicked: Send + Sync {
    fn on(&self, player: &Player, menu: &Menu, item_num_clicked: Slot) -> Vec<MenuAction>;
}
