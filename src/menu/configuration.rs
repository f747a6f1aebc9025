//! Menu configuration and its builder
//!
//! A `MenuConfiguration` is assembled once through `MenuConfigurationBuilder`
//! and never changes afterwards: `build` moves the builder's maps into the
//! value and no `&mut` accessor exists.
//!
//! Nothing here is validated. Repeated calls for the same slot overwrite the
//! previous item list or handler, and negative or out-of-range slots are kept
//! as-is for the inventory renderer to deal with.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::MenuDefaults;
use crate::types::{ItemStack, Material, MenuClickEvent, MenuCloseEvent, Slot};

use super::action::MenuAction;
use super::kind::{ConfirmationConfiguration, MenuKind};

/// Breakpoint value meaning "no pagination boundary"
pub const NO_BREAKPOINT: Slot = -1;

pub type ClickHandler = Arc<dyn Fn(&MenuClickEvent) -> Vec<MenuAction> + Send + Sync>;
pub type CloseHandler = Arc<dyn Fn(&MenuCloseEvent) -> Vec<MenuAction> + Send + Sync>;

pub struct MenuConfiguration {
    items: HashMap<Slot, Vec<ItemStack>>,
    on_click_event_listeners: HashMap<Slot, ClickHandler>,
    on_close_event_listener: Option<CloseHandler>,
    title: String,
    fixed_items: bool,
    breakpoint_item_num: Slot,
    kind: MenuKind,
}

impl MenuConfiguration {
    pub fn builder() -> MenuConfigurationBuilder {
        MenuConfigurationBuilder::new()
    }

    pub fn items(&self) -> &HashMap<Slot, Vec<ItemStack>> {
        &self.items
    }

    /// Items stacked in one slot
    pub fn items_at(&self, slot: Slot) -> Option<&[ItemStack]> {
        self.items.get(&slot).map(Vec::as_slice)
    }

    pub fn on_click_event_listeners(&self) -> &HashMap<Slot, ClickHandler> {
        &self.on_click_event_listeners
    }

    pub fn on_click_event_listener(&self, slot: Slot) -> Option<&ClickHandler> {
        self.on_click_event_listeners.get(&slot)
    }

    pub fn on_close_event_listener(&self) -> Option<&CloseHandler> {
        self.on_close_event_listener.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fixed_items(&self) -> bool {
        self.fixed_items
    }

    /// Raw breakpoint slot, `NO_BREAKPOINT` when unset
    pub fn breakpoint_item_num(&self) -> Slot {
        self.breakpoint_item_num
    }

    pub fn breakpoint(&self) -> Option<Slot> {
        (self.breakpoint_item_num != NO_BREAKPOINT).then_some(self.breakpoint_item_num)
    }

    pub fn kind(&self) -> &MenuKind {
        &self.kind
    }

    pub fn is_confirmation(&self) -> bool {
        self.kind.is_confirmation()
    }

    pub fn confirmation(&self) -> Option<&ConfirmationConfiguration> {
        self.kind.confirmation()
    }
}

impl fmt::Debug for MenuConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut click_slots: Vec<&Slot> = self.on_click_event_listeners.keys().collect();
        click_slots.sort();

        f.debug_struct("MenuConfiguration")
            .field("items", &self.items)
            .field("on_click_slots", &click_slots)
            .field("has_on_close", &self.on_close_event_listener.is_some())
            .field("title", &self.title)
            .field("fixed_items", &self.fixed_items)
            .field("breakpoint_item_num", &self.breakpoint_item_num)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Mutable half of the two-phase menu definition
pub struct MenuConfigurationBuilder {
    items: HashMap<Slot, Vec<ItemStack>>,
    on_click_event_listeners: HashMap<Slot, ClickHandler>,
    on_close_event_listener: Option<CloseHandler>,
    title: String,
    fixed_items: bool,
    breakpoint_item_num: Slot,
    kind: MenuKind,
}

impl MenuConfigurationBuilder {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            on_click_event_listeners: HashMap::new(),
            on_close_event_listener: None,
            title: String::new(),
            fixed_items: false,
            breakpoint_item_num: NO_BREAKPOINT,
            kind: MenuKind::Plain,
        }
    }

    /// Builder seeded with the `[menu]` section of the config file
    pub fn from_settings(defaults: &MenuDefaults) -> Self {
        let builder = Self::new().title(defaults.default_title.clone());
        if defaults.fixed_items {
            builder.fixed_items()
        } else {
            builder
        }
    }

    pub fn build(self) -> MenuConfiguration {
        MenuConfiguration {
            items: self.items,
            on_click_event_listeners: self.on_click_event_listeners,
            on_close_event_listener: self.on_close_event_listener,
            title: self.title,
            fixed_items: self.fixed_items,
            breakpoint_item_num: self.breakpoint_item_num,
            kind: self.kind,
        }
    }

    /// Players cannot move any item of the menu
    pub fn fixed_items(mut self) -> Self {
        self.fixed_items = true;
        self
    }

    pub fn item(mut self, item_num: Slot, item: ItemStack) -> Self {
        self.items.insert(item_num, vec![item]);
        self
    }

    pub fn items(mut self, item_num: Slot, items: Vec<ItemStack>) -> Self {
        self.items.insert(item_num, items);
        self
    }

    /// Place one item per slot
    pub fn items_from<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = (Slot, ItemStack)>,
    {
        for (item_num, item) in items {
            self.items.insert(item_num, vec![item]);
        }
        self
    }

    pub fn basic_item(self, item_num: Slot, material: Material) -> Self {
        self.item(item_num, ItemStack::new(material))
    }

    pub fn basic_items<I>(self, items: I) -> Self
    where
        I: IntoIterator<Item = (Slot, Material)>,
    {
        self.items_from(
            items
                .into_iter()
                .map(|(item_num, material)| (item_num, ItemStack::new(material))),
        )
    }

    pub fn on_click<F>(mut self, item_num: Slot, listener: F) -> Self
    where
        F: Fn(&MenuClickEvent) -> Vec<MenuAction> + Send + Sync + 'static,
    {
        self.on_click_event_listeners
            .insert(item_num, Arc::new(listener));
        self
    }

    pub fn on_close<F>(mut self, listener: F) -> Self
    where
        F: Fn(&MenuCloseEvent) -> Vec<MenuAction> + Send + Sync + 'static,
    {
        self.on_close_event_listener = Some(Arc::new(listener));
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn breakpoint(mut self, item_num: Slot) -> Self {
        self.breakpoint_item_num = item_num;
        self
    }

    pub fn breakpoint_with_material(self, item_num: Slot, material: Material) -> Self {
        self.breakpoint_with_item(item_num, ItemStack::new(material))
    }

    pub fn breakpoint_with_item(self, item_num: Slot, item: ItemStack) -> Self {
        self.breakpoint(item_num).item(item_num, item)
    }

    /// Turn the menu into a confirmation menu and place both buttons.
    ///
    /// Accept/cancel behaviour is still registered with `on_click`.
    pub fn confirmation(mut self, confirmation: ConfirmationConfiguration) -> Self {
        let accept = confirmation.accept().clone();
        let cancel = confirmation.cancel().clone();
        self.kind = MenuKind::Confirmation(confirmation);

        self.item(accept.item_num(), accept.item().clone())
            .item(cancel.item_num(), cancel.item().clone())
    }
}

impl Default for MenuConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
