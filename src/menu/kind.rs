use crate::config::ConfirmationDefaults;
use crate::types::{ItemStack, Slot};

/// What kind of menu a configuration describes
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MenuKind {
    #[default]
    Plain,
    /// Two-button accept/cancel menu
    Confirmation(ConfirmationConfiguration),
}

impl MenuKind {
    pub fn is_confirmation(&self) -> bool {
        matches!(self, MenuKind::Confirmation(_))
    }

    pub fn confirmation(&self) -> Option<&ConfirmationConfiguration> {
        match self {
            MenuKind::Confirmation(confirmation) => Some(confirmation),
            MenuKind::Plain => None,
        }
    }
}

/// One of the two buttons of a confirmation menu
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationButton {
    item_num: Slot,
    item: ItemStack,
}

impl ConfirmationButton {
    pub fn new(item_num: Slot, item: ItemStack) -> Self {
        Self { item_num, item }
    }

    /// Slot the button sits in
    pub fn item_num(&self) -> Slot {
        self.item_num
    }

    pub fn item(&self) -> &ItemStack {
        &self.item
    }
}

/// Which button of a confirmation menu was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationAction {
    Accept,
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationConfiguration {
    accept: ConfirmationButton,
    cancel: ConfirmationButton,
    close_on_action: bool,
}

impl ConfirmationConfiguration {
    pub fn new(accept: ConfirmationButton, cancel: ConfirmationButton, close_on_action: bool) -> Self {
        Self {
            accept,
            cancel,
            close_on_action,
        }
    }

    /// Buttons and close behaviour taken from the `[confirmation]` config section
    pub fn from_defaults(defaults: &ConfirmationDefaults) -> Self {
        let accept = ItemStack::new(defaults.accept_material.clone())
            .with_display_name(defaults.accept_name.clone());
        let cancel = ItemStack::new(defaults.cancel_material.clone())
            .with_display_name(defaults.cancel_name.clone());

        Self::new(
            ConfirmationButton::new(defaults.accept_slot, accept),
            ConfirmationButton::new(defaults.cancel_slot, cancel),
            defaults.close_on_action,
        )
    }

    pub fn accept(&self) -> &ConfirmationButton {
        &self.accept
    }

    pub fn cancel(&self) -> &ConfirmationButton {
        &self.cancel
    }

    pub fn close_on_action(&self) -> bool {
        self.close_on_action
    }

    /// Map a clicked slot to the button it hit, if any.
    ///
    /// Accept is checked first when both buttons share a slot.
    pub fn action_at(&self, slot: Slot) -> Option<ConfirmationAction> {
        if self.accept.item_num == slot {
            Some(ConfirmationAction::Accept)
        } else if self.cancel.item_num == slot {
            Some(ConfirmationAction::Cancel)
        } else {
            None
        }
    }
}
