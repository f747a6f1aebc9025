use anyhow::Result;
use dialoguer::{Confirm, Input};
use inventory_menus::{
    config::{Config, ConfigLoader},
    logging::init_logger,
    utils::strip_color_codes,
    ClickKind, ConfirmationConfiguration, InMemoryMenuService, ItemStack, Material, Menu,
    MenuAction, MenuClickEvent, MenuCloseEvent, MenuConfiguration, MenuConfigurationBuilder,
    MenuDispatcher, Player,
};
use std::sync::Arc;
use tracing::{info, warn};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let config_loader = ConfigLoader::new();
    let fresh_config = !config_loader.exists();
    let config = config_loader.load()?;

    init_logger(&config.logging)?;
    info!("Starting inventory menus demo v{}", VERSION);
    if fresh_config {
        info!("Config file not found, wrote default config to {:?}", config_loader.path());
    } else {
        info!("Loaded configuration from {:?}", config_loader.path());
    }

    let name: String = Input::new()
        .with_prompt("Player name")
        .default(config.player_name.clone().unwrap_or_else(|| "Steve".to_string()))
        .interact_text()?;
    if config.player_name.as_deref() != Some(name.as_str()) {
        config_loader.update_property(|config| config.player_name = Some(name.clone()))?;
        info!("Remembered player name {}", name);
    }
    let player = Player::new(uuid::Uuid::new_v4(), name);

    let dispatcher = MenuDispatcher::new(Arc::new(InMemoryMenuService::new()));
    let shop = Arc::new(shop_menu(&config));

    loop {
        dispatcher.open(&player, Menu::new(Arc::clone(&shop)));

        while let Some(menu) = dispatcher.service().current(&player) {
            print_menu(&menu);

            let input: String = Input::new()
                .with_prompt("Slot to click (or 'close')")
                .interact_text()?;
            let input = input.trim();

            if input.eq_ignore_ascii_case("close") {
                if let Err(e) = dispatcher.handle_close(&MenuCloseEvent::new(player.clone())) {
                    warn!("{}", e);
                }
                continue;
            }

            let slot = match input.parse() {
                Ok(slot) => slot,
                Err(_) => {
                    warn!("'{}' is not a slot number", input);
                    continue;
                }
            };

            match dispatcher.handle_click(&MenuClickEvent::new(player.clone(), slot, ClickKind::Left)) {
                Ok(outcome) => info!(
                    "Click on slot {} applied {:?}{}",
                    slot,
                    outcome.actions,
                    if outcome.cancelled { " (item movement cancelled)" } else { "" }
                ),
                Err(e) => warn!("{}", e),
            }
        }

        let again = Confirm::new()
            .with_prompt("Open the shop again?")
            .default(false)
            .interact()?;
        if !again {
            break;
        }
    }

    info!("Bye");
    Ok(())
}

fn shop_menu(config: &Config) -> MenuConfiguration {
    let confirm_purchase = Arc::new(purchase_confirmation(config));

    MenuConfigurationBuilder::from_settings(&config.menu)
        .title("§6Shop")
        .item(
            13,
            ItemStack::new(Material::DIAMOND_SWORD)
                .with_display_name("§bDiamond Sword")
                .with_lore(["Costs 5 emeralds", "Click to buy"]),
        )
        .on_click(13, move |_| vec![MenuAction::Open(Arc::clone(&confirm_purchase))])
        .item(22, ItemStack::new(Material::BARRIER).with_display_name("§cClose"))
        .on_click(22, |_| vec![MenuAction::Close])
        .breakpoint_with_material(18, Material::GRAY_STAINED_GLASS_PANE)
        .on_close(|event| {
            info!("{} left the shop", event.player.name);
            Vec::new()
        })
        .build()
}

fn purchase_confirmation(config: &Config) -> MenuConfiguration {
    let confirmation = ConfirmationConfiguration::from_defaults(&config.confirmation);
    let accept_slot = confirmation.accept().item_num();
    let cancel_slot = confirmation.cancel().item_num();

    MenuConfigurationBuilder::from_settings(&config.menu)
        .title(config.confirmation.title.clone())
        .basic_item(13, Material::DIAMOND_SWORD)
        .confirmation(confirmation)
        .on_click(accept_slot, |event: &MenuClickEvent| {
            info!("{} bought a Diamond Sword", event.player.name);
            Vec::new()
        })
        .on_click(cancel_slot, |event: &MenuClickEvent| {
            info!("{} changed their mind", event.player.name);
            Vec::new()
        })
        .build()
}

fn print_menu(menu: &Menu) {
    let configuration = menu.configuration();
    info!("== {} ==", strip_color_codes(configuration.title()));

    let mut slots: Vec<_> = configuration.items().iter().collect();
    slots.sort_by_key(|(slot, _)| **slot);

    for (slot, items) in slots {
        let names: Vec<String> = items
            .iter()
            .map(|item| strip_color_codes(&item.shown_name()))
            .collect();
        let clickable = configuration.on_click_event_listener(*slot).is_some();
        info!(
            "  [{:>2}] {}{}",
            slot,
            names.join(", "),
            if clickable { " *" } else { "" }
        );
    }
}
