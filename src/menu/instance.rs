use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use super::configuration::MenuConfiguration;

/// A menu opened for a player
#[derive(Debug, Clone)]
pub struct Menu {
    id: Uuid,
    configuration: Arc<MenuConfiguration>,
    opened_at: DateTime<Utc>,
}

impl Menu {
    pub fn new(configuration: Arc<MenuConfiguration>) -> Self {
        Self {
            id: Uuid::new_v4(),
            configuration,
            opened_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn configuration(&self) -> &MenuConfiguration {
        &self.configuration
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }
}

impl From<MenuConfiguration> for Menu {
    fn from(configuration: MenuConfiguration) -> Self {
        Menu::new(Arc::new(configuration))
    }
}
