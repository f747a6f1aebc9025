pub mod dispatcher;
pub mod menu_service;

pub use dispatcher::{ClickOutcome, MenuDispatcher};
pub use menu_service::{InMemoryMenuService, MenuService};
