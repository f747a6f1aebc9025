//! Declarative inventory menus for game server plugins
//!
//! Menus are described once with [`MenuConfiguration::builder`] and then
//! driven by a [`MenuDispatcher`], which routes the host's click and close
//! events to the registered handlers and applies the [`MenuAction`]s they
//! return through a [`MenuService`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod menu;
pub mod service;
pub mod types;
pub mod utils;

pub use error::{MenuError, MenuResult};
pub use handlers::{ConfirmationClickHandler, OnMenuClicked};
pub use menu::{
    ConfirmationAction, ConfirmationButton, ConfirmationConfiguration, Menu, MenuAction,
    MenuConfiguration, MenuConfigurationBuilder, MenuKind,
};
pub use service::{ClickOutcome, InMemoryMenuService, MenuDispatcher, MenuService};
pub use types::{ClickKind, ItemStack, Material, MenuClickEvent, MenuCloseEvent, Player, Slot};
