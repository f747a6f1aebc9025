use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::menu::Menu;
use crate::types::Player;

/// Owner of the "which menu does this player have open" state.
///
/// Host integrations implement this on top of the server's inventory windows.
/// Close listeners are not run here; the dispatcher runs them for the menu
/// handed back by `open` and `close`.
pub trait MenuService: Send + Sync {
    /// Show `menu` to the player. Returns the menu it replaced, if any.
    fn open(&self, player: &Player, menu: Arc<Menu>) -> Option<Arc<Menu>>;

    /// Close the player's menu and return it. Closing with nothing open is a
    /// no-op returning `None`.
    fn close(&self, player: &Player) -> Option<Arc<Menu>>;

    fn current(&self, player: &Player) -> Option<Arc<Menu>>;
}

/// Menu registry kept in memory, keyed by player uuid
#[derive(Clone, Default)]
pub struct InMemoryMenuService {
    open_menus: Arc<RwLock<HashMap<Uuid, Arc<Menu>>>>,
}

impl InMemoryMenuService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of players with an open menu
    pub fn open_count(&self) -> usize {
        self.open_menus.read().len()
    }
}

impl MenuService for InMemoryMenuService {
    fn open(&self, player: &Player, menu: Arc<Menu>) -> Option<Arc<Menu>> {
        info!(
            "Opened menu \"{}\" ({}) for {}",
            menu.configuration().title(),
            menu.id(),
            player.name
        );

        let previous = self.open_menus.write().insert(player.uuid, menu);
        if let Some(previous) = &previous {
            debug!("Replaced menu {} for {}", previous.id(), player.name);
        }
        previous
    }

    fn close(&self, player: &Player) -> Option<Arc<Menu>> {
        let removed = self.open_menus.write().remove(&player.uuid);
        match &removed {
            Some(menu) => info!(
                "Closed menu {} for {} after {}ms",
                menu.id(),
                player.name,
                (Utc::now() - menu.opened_at()).num_milliseconds()
            ),
            None => debug!("Close requested for {} with no open menu", player.name),
        }
        removed
    }

    fn current(&self, player: &Player) -> Option<Arc<Menu>> {
        self.open_menus.read().get(&player.uuid).cloned()
    }
}
