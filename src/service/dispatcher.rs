//! Click and close dispatch
//!
//! Turns host events into handler calls and applies the `MenuAction`s the
//! handlers return against a `MenuService`:
//! - the clicked slot's `on_click` handler runs first,
//! - then every registered `OnMenuClicked` module (the confirmation module is
//!   always present),
//! - then the collected actions are applied in order.
//!
//! A `Close` only ever targets the menu that was clicked, so one click closes
//! at most once and never closes a menu opened by the same click. Whenever a
//! menu leaves the registry, closed or replaced, its close listener runs once.

use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{MenuError, MenuResult};
use crate::handlers::{ConfirmationClickHandler, OnMenuClicked};
use crate::menu::{Menu, MenuAction};
use crate::service::menu_service::MenuService;
use crate::types::{MenuClickEvent, MenuCloseEvent, Player};
use crate::utils::strip_color_codes;

/// What the host needs to know after a click was dispatched
#[derive(Debug, Clone)]
pub struct ClickOutcome {
    /// The host must cancel the item movement
    pub cancelled: bool,
    /// Actions that were applied, in order, including `Open`s issued by
    /// close listeners
    pub actions: Vec<MenuAction>,
}

impl ClickOutcome {
    pub fn closed(&self) -> bool {
        self.actions.iter().any(MenuAction::is_close)
    }
}

pub struct MenuDispatcher {
    service: Arc<dyn MenuService>,
    modules: Vec<Box<dyn OnMenuClicked>>,
}

impl MenuDispatcher {
    pub fn new(service: Arc<dyn MenuService>) -> Self {
        Self {
            service,
            modules: vec![Box::new(ConfirmationClickHandler::new())],
        }
    }

    /// Register an extra menu-wide click module
    pub fn with_module(mut self, module: impl OnMenuClicked + 'static) -> Self {
        self.modules.push(Box::new(module));
        self
    }

    pub fn service(&self) -> &Arc<dyn MenuService> {
        &self.service
    }

    /// Open a menu for a player through the underlying service.
    ///
    /// The close listener of a replaced menu runs, but whatever it tries to
    /// open is dropped: the player already has the new menu.
    pub fn open(&self, player: &Player, menu: impl Into<Menu>) -> Arc<Menu> {
        let menu = Arc::new(menu.into());
        if let Some(replaced) = self.service.open(player, Arc::clone(&menu)) {
            self.run_close_listener(&MenuCloseEvent::new(player.clone()), &replaced, false);
        }
        menu
    }

    pub fn handle_click(&self, event: &MenuClickEvent) -> MenuResult<ClickOutcome> {
        let menu = self.service.current(&event.player)
            .ok_or_else(|| no_open_menu(&event.player))?;
        let configuration = menu.configuration();

        debug!(
            "{} clicked slot {} ({:?}) in \"{}\"",
            event.player.name,
            event.slot,
            event.click,
            strip_color_codes(configuration.title())
        );

        let mut actions = Vec::new();
        if let Some(listener) = configuration.on_click_event_listener(event.slot) {
            actions.extend(listener(event));
        }
        for module in &self.modules {
            actions.extend(module.on(&event.player, &menu, event.slot));
        }

        Ok(ClickOutcome {
            cancelled: configuration.fixed_items(),
            actions: self.apply(&event.player, &menu, actions),
        })
    }

    /// Forget the player's menu and run its close handler.
    ///
    /// Only `Open` actions returned by the close handler have an effect.
    pub fn handle_close(&self, event: &MenuCloseEvent) -> MenuResult<Vec<MenuAction>> {
        let menu = self.service.close(&event.player)
            .ok_or_else(|| no_open_menu(&event.player))?;

        Ok(self.run_close_listener(event, &menu, true))
    }

    fn apply(&self, player: &Player, clicked: &Menu, actions: Vec<MenuAction>) -> Vec<MenuAction> {
        let mut applied = Vec::with_capacity(actions.len());

        for action in actions {
            match action {
                MenuAction::Close => {
                    let still_open = self.service
                        .current(player)
                        .is_some_and(|current| current.id() == clicked.id());
                    if !still_open {
                        debug!("Menu {} already left for {}, skipping close", clicked.id(), player.name);
                        continue;
                    }

                    let closed = self.service.close(player);
                    applied.push(MenuAction::Close);
                    if let Some(closed) = closed {
                        let event = MenuCloseEvent::new(player.clone());
                        applied.extend(self.run_close_listener(&event, &closed, true));
                    }
                }
                MenuAction::Open(configuration) => {
                    info!(
                        "Switching {} to menu \"{}\"",
                        player.name,
                        strip_color_codes(configuration.title())
                    );
                    self.open(player, Menu::new(Arc::clone(&configuration)));
                    applied.push(MenuAction::Open(configuration));
                }
            }
        }

        applied
    }

    /// Run `menu`'s close listener. Returns the `Open`s it applied; a `Close`
    /// from a close listener is meaningless and ignored.
    fn run_close_listener(&self, event: &MenuCloseEvent, menu: &Menu, follow_opens: bool) -> Vec<MenuAction> {
        let Some(listener) = menu.configuration().on_close_event_listener() else {
            return Vec::new();
        };

        let mut applied = Vec::new();
        for action in listener(event) {
            match action {
                MenuAction::Open(configuration) if follow_opens => {
                    self.open(&event.player, Menu::new(Arc::clone(&configuration)));
                    applied.push(MenuAction::Open(configuration));
                }
                other => debug!(
                    "Ignoring {:?} from close listener of menu {}",
                    other,
                    menu.id()
                ),
            }
        }
        applied
    }
}

fn no_open_menu(player: &Player) -> MenuError {
    MenuError::NoOpenMenu {
        uuid: player.uuid,
        name: player.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{ConfirmationButton, ConfirmationConfiguration, MenuConfiguration};
    use crate::service::InMemoryMenuService;
    use crate::types::{ClickKind, ItemStack, Material, Slot};
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    /// Service that counts close calls on top of the in-memory registry
    #[derive(Default)]
    struct RecordingService {
        inner: InMemoryMenuService,
        closes: AtomicUsize,
    }

    impl RecordingService {
        fn closes(&self) -> usize {
            self.closes.load(Ordering::SeqCst)
        }
    }

    impl MenuService for RecordingService {
        fn open(&self, player: &Player, menu: Arc<Menu>) -> Option<Arc<Menu>> {
            self.inner.open(player, menu)
        }

        fn close(&self, player: &Player) -> Option<Arc<Menu>> {
            self.closes.fetch_add(1, Ordering::SeqCst);
            self.inner.close(player)
        }

        fn current(&self, player: &Player) -> Option<Arc<Menu>> {
            self.inner.current(player)
        }
    }

    fn setup() -> (Arc<RecordingService>, MenuDispatcher, Player) {
        let service = Arc::new(RecordingService::default());
        let dispatcher = MenuDispatcher::new(service.clone());
        (service, dispatcher, Player::new(Uuid::new_v4(), "Steve"))
    }

    fn click(player: &Player, slot: Slot) -> MenuClickEvent {
        MenuClickEvent::new(player.clone(), slot, ClickKind::Left)
    }

    fn confirmation(close_on_action: bool) -> ConfirmationConfiguration {
        ConfirmationConfiguration::new(
            ConfirmationButton::new(3, ItemStack::new(Material::LIME_WOOL)),
            ConfirmationButton::new(5, ItemStack::new(Material::RED_WOOL)),
            close_on_action,
        )
    }

    #[test]
    fn test_click_without_menu_is_an_error() {
        let (service, dispatcher, player) = setup();

        let err = dispatcher.handle_click(&click(&player, 0)).unwrap_err();
        assert!(matches!(err, MenuError::NoOpenMenu { uuid, .. } if uuid == player.uuid));
        assert_eq!(service.closes(), 0);
    }

    #[test]
    fn test_click_runs_slot_handler() {
        let (_service, dispatcher, player) = setup();
        let clicked = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&clicked);

        dispatcher.open(
            &player,
            MenuConfiguration::builder()
                .on_click(2, move |event| {
                    sink.lock().push((event.slot, event.click));
                    Vec::new()
                })
                .build(),
        );

        let outcome = dispatcher.handle_click(&click(&player, 2)).unwrap();
        dispatcher.handle_click(&click(&player, 7)).unwrap();

        assert!(!outcome.cancelled);
        assert!(outcome.actions.is_empty());
        assert_eq!(*clicked.lock(), vec![(2, ClickKind::Left)]);
    }

    #[test]
    fn test_fixed_items_cancel_clicks() {
        let (_service, dispatcher, player) = setup();
        dispatcher.open(&player, MenuConfiguration::builder().fixed_items().build());

        let outcome = dispatcher.handle_click(&click(&player, 0)).unwrap();
        assert!(outcome.cancelled);
    }

    #[test]
    fn test_plain_menu_click_never_closes() {
        let (service, dispatcher, player) = setup();
        dispatcher.open(&player, MenuConfiguration::builder().basic_item(3, Material::STONE).build());

        for slot in [0, 3, 5] {
            dispatcher.handle_click(&click(&player, slot)).unwrap();
        }
        assert_eq!(service.closes(), 0);
    }

    #[test]
    fn test_confirmation_closes_on_accept_and_cancel() {
        for (slot, expected) in [(3, 1), (5, 1), (4, 0)] {
            let (service, dispatcher, player) = setup();
            dispatcher.open(
                &player,
                MenuConfiguration::builder().confirmation(confirmation(true)).build(),
            );

            let outcome = dispatcher.handle_click(&click(&player, slot)).unwrap();
            assert_eq!(service.closes(), expected, "slot {}", slot);
            assert_eq!(outcome.closed(), expected == 1);
        }
    }

    #[test]
    fn test_confirmation_without_close_on_action() {
        let (service, dispatcher, player) = setup();
        dispatcher.open(
            &player,
            MenuConfiguration::builder().confirmation(confirmation(false)).build(),
        );

        dispatcher.handle_click(&click(&player, 3)).unwrap();
        dispatcher.handle_click(&click(&player, 5)).unwrap();
        assert_eq!(service.closes(), 0);
        assert!(service.current(&player).is_some());
    }

    #[test]
    fn test_handler_close_and_confirmation_close_once() {
        let (service, dispatcher, player) = setup();
        dispatcher.open(
            &player,
            MenuConfiguration::builder()
                .confirmation(confirmation(true))
                .on_click(3, |_| vec![MenuAction::Close])
                .build(),
        );

        let outcome = dispatcher.handle_click(&click(&player, 3)).unwrap();
        assert_eq!(service.closes(), 1);
        assert_eq!(outcome.actions.len(), 1);
        assert!(service.current(&player).is_none());
    }

    #[test]
    fn test_open_action_replaces_menu() {
        let (_service, dispatcher, player) = setup();
        let next = Arc::new(MenuConfiguration::builder().title("Confirm").build());
        let target = Arc::clone(&next);

        let first = dispatcher.open(
            &player,
            MenuConfiguration::builder()
                .title("Shop")
                .on_click(0, move |_| vec![MenuAction::Open(Arc::clone(&target))])
                .build(),
        );

        dispatcher.handle_click(&click(&player, 0)).unwrap();

        let current = dispatcher.service().current(&player).unwrap();
        assert_ne!(current.id(), first.id());
        assert_eq!(current.configuration().title(), "Confirm");
    }

    #[test]
    fn test_close_event_runs_handler_once() {
        let (service, dispatcher, player) = setup();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        dispatcher.open(
            &player,
            MenuConfiguration::builder()
                .on_close(move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    vec![MenuAction::Close]
                })
                .build(),
        );

        let applied = dispatcher.handle_close(&MenuCloseEvent::new(player.clone())).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(applied.is_empty());
        assert_eq!(service.closes(), 1);
        assert!(service.current(&player).is_none());

        let err = dispatcher.handle_close(&MenuCloseEvent::new(player.clone()));
        assert!(err.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_close_without_handler() {
        let (service, dispatcher, player) = setup();
        dispatcher.open(&player, MenuConfiguration::builder().build());

        let applied = dispatcher.handle_close(&MenuCloseEvent::new(player.clone())).unwrap();
        assert!(applied.is_empty());
        assert!(service.current(&player).is_none());
    }

    #[test]
    fn test_close_handler_can_reopen() {
        let (_service, dispatcher, player) = setup();
        let main_menu = Arc::new(MenuConfiguration::builder().title("Main").build());
        let target = Arc::clone(&main_menu);

        dispatcher.open(
            &player,
            MenuConfiguration::builder()
                .title("Sub")
                .on_close(move |_| vec![MenuAction::Open(Arc::clone(&target))])
                .build(),
        );

        let applied = dispatcher.handle_close(&MenuCloseEvent::new(player.clone())).unwrap();
        assert_eq!(applied.len(), 1);
        let current = dispatcher.service().current(&player).unwrap();
        assert_eq!(current.configuration().title(), "Main");
    }

    fn counting_close_listener(calls: &Arc<AtomicUsize>) -> impl Fn(&MenuCloseEvent) -> Vec<MenuAction> + Send + Sync + 'static {
        let counter = Arc::clone(calls);
        move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Vec::new()
        }
    }

    #[test]
    fn test_close_action_runs_close_listener() {
        let (service, dispatcher, player) = setup();
        let calls = Arc::new(AtomicUsize::new(0));

        dispatcher.open(
            &player,
            MenuConfiguration::builder()
                .on_click(22, |_| vec![MenuAction::Close])
                .on_close(counting_close_listener(&calls))
                .build(),
        );

        let outcome = dispatcher.handle_click(&click(&player, 22)).unwrap();
        assert!(outcome.closed());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // the host's own close event for the same inventory finds nothing left
        let late = dispatcher.handle_close(&MenuCloseEvent::new(player.clone()));
        assert!(matches!(late, Err(MenuError::NoOpenMenu { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(service.closes(), 2);
    }

    #[test]
    fn test_replaced_menu_runs_close_listener() {
        let (_service, dispatcher, player) = setup();
        let calls = Arc::new(AtomicUsize::new(0));
        let elsewhere = Arc::new(MenuConfiguration::builder().title("Elsewhere").build());
        let next = Arc::new(MenuConfiguration::builder().title("Next").build());
        let target = Arc::clone(&next);
        let counter = Arc::clone(&calls);

        dispatcher.open(
            &player,
            MenuConfiguration::builder()
                .on_click(0, move |_| vec![MenuAction::Open(Arc::clone(&target))])
                .on_close(move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    vec![MenuAction::Open(Arc::clone(&elsewhere))]
                })
                .build(),
        );

        let outcome = dispatcher.handle_click(&click(&player, 0)).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(outcome.actions.len(), 1);
        let current = dispatcher.service().current(&player).unwrap();
        assert_eq!(current.configuration().title(), "Next");
    }

    #[test]
    fn test_close_listener_reopen_after_close_action() {
        let (_service, dispatcher, player) = setup();
        let main_menu = Arc::new(MenuConfiguration::builder().title("Main").build());
        let target = Arc::clone(&main_menu);

        dispatcher.open(
            &player,
            MenuConfiguration::builder()
                .on_click(1, |_| vec![MenuAction::Close])
                .on_close(move |_| vec![MenuAction::Open(Arc::clone(&target))])
                .build(),
        );

        let outcome = dispatcher.handle_click(&click(&player, 1)).unwrap();

        assert_eq!(outcome.actions.len(), 2);
        assert!(outcome.actions[0].is_close());
        let current = dispatcher.service().current(&player).unwrap();
        assert_eq!(current.configuration().title(), "Main");
    }

    #[test]
    fn test_accept_opening_next_menu_is_not_closed() {
        let (service, dispatcher, player) = setup();
        let receipt = Arc::new(MenuConfiguration::builder().title("Receipt").build());
        let target = Arc::clone(&receipt);

        dispatcher.open(
            &player,
            MenuConfiguration::builder()
                .confirmation(confirmation(true))
                .on_click(3, move |_| vec![MenuAction::Open(Arc::clone(&target))])
                .build(),
        );

        let outcome = dispatcher.handle_click(&click(&player, 3)).unwrap();

        assert_eq!(service.closes(), 0);
        assert!(!outcome.closed());
        let current = service.current(&player).unwrap();
        assert_eq!(current.configuration().title(), "Receipt");
    }

    #[test]
    fn test_close_then_open_closes_once() {
        let (service, dispatcher, player) = setup();
        let next = Arc::new(MenuConfiguration::builder().title("Next").build());
        let target = Arc::clone(&next);
        let calls = Arc::new(AtomicUsize::new(0));

        dispatcher.open(
            &player,
            MenuConfiguration::builder()
                .confirmation(confirmation(true))
                .on_click(3, move |_| {
                    vec![MenuAction::Close, MenuAction::Open(Arc::clone(&target))]
                })
                .on_close(counting_close_listener(&calls))
                .build(),
        );

        let outcome = dispatcher.handle_click(&click(&player, 3)).unwrap();

        assert_eq!(service.closes(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(outcome.actions.iter().filter(|a| a.is_close()).count(), 1);
        let current = service.current(&player).unwrap();
        assert_eq!(current.configuration().title(), "Next");
    }

    struct CloseEverything;

    impl OnMenuClicked for CloseEverything {
        fn on(&self, _player: &Player, _menu: &Menu, _slot: Slot) -> Vec<MenuAction> {
            vec![MenuAction::Close]
        }
    }

    #[test]
    fn test_extra_modules_run() {
        let service = Arc::new(RecordingService::default());
        let dispatcher = MenuDispatcher::new(service.clone()).with_module(CloseEverything);
        let player = Player::new(Uuid::new_v4(), "Alex");
        dispatcher.open(&player, MenuConfiguration::builder().build());

        let outcome = dispatcher.handle_click(&click(&player, 9)).unwrap();
        assert!(outcome.closed());
        assert_eq!(service.closes(), 1);
    }
}
