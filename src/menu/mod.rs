pub mod action;
pub mod configuration;
pub mod instance;
pub mod kind;

pub use action::MenuAction;
pub use configuration::{
    ClickHandler, CloseHandler, MenuConfiguration, MenuConfigurationBuilder, NO_BREAKPOINT,
};
pub use instance::Menu;
pub use kind::{ConfirmationAction, ConfirmationButton, ConfirmationConfiguration, MenuKind};
