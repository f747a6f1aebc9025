use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::{Material, Slot};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Name the demo binary last played as
    #[serde(default)]
    pub player_name: Option<String>,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub menu: MenuDefaults,

    #[serde(default)]
    pub confirmation: ConfirmationDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for the rolling log file, executable directory when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,

    #[serde(default = "default_log_file_name")]
    pub file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuDefaults {
    #[serde(default = "default_menu_title")]
    pub default_title: String,

    #[serde(default = "default_true")]
    pub fixed_items: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationDefaults {
    #[serde(default = "default_confirmation_title")]
    pub title: String,

    #[serde(default = "default_accept_slot")]
    pub accept_slot: Slot,

    #[serde(default = "default_cancel_slot")]
    pub cancel_slot: Slot,

    #[serde(default = "default_accept_material")]
    pub accept_material: Material,

    #[serde(default = "default_cancel_material")]
    pub cancel_material: Material,

    #[serde(default = "default_accept_name")]
    pub accept_name: String,

    #[serde(default = "default_cancel_name")]
    pub cancel_name: String,

    #[serde(default = "default_true")]
    pub close_on_action: bool,
}

// Default values
fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file_name() -> String {
    "menus.log".to_string()
}

fn default_menu_title() -> String {
    "Menu".to_string()
}

fn default_confirmation_title() -> String {
    "Are you sure?".to_string()
}

fn default_accept_slot() -> Slot {
    11 // left-center of a 3-row chest
}

fn default_cancel_slot() -> Slot {
    15
}

fn default_accept_material() -> Material {
    Material::LIME_WOOL
}

fn default_cancel_material() -> Material {
    Material::RED_WOOL
}

fn default_accept_name() -> String {
    "§aConfirm".to_string()
}

fn default_cancel_name() -> String {
    "§cCancel".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
            file_name: default_log_file_name(),
        }
    }
}

impl Default for MenuDefaults {
    fn default() -> Self {
        Self {
            default_title: default_menu_title(),
            fixed_items: true,
        }
    }
}

impl Default for ConfirmationDefaults {
    fn default() -> Self {
        Self {
            title: default_confirmation_title(),
            accept_slot: default_accept_slot(),
            cancel_slot: default_cancel_slot(),
            accept_material: default_accept_material(),
            cancel_material: default_cancel_material(),
            accept_name: default_accept_name(),
            cancel_name: default_cancel_name(),
            close_on_action: true,
        }
    }
}
