use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use uuid::Uuid;

use crate::utils::to_title_case;

/// Index of one cell in an inventory grid.
///
/// Signed on purpose: `-1` is the "no breakpoint" sentinel and negative slots
/// are passed through untouched to whoever renders the inventory.
pub type Slot = i32;

const DEFAULT_NAMESPACE: &str = "minecraft";

/// Namespaced material id, e.g. `minecraft:green_wool`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Material(Cow<'static, str>);

impl Material {
    pub const STONE: Material = Material::from_static("minecraft:stone");
    pub const LIME_WOOL: Material = Material::from_static("minecraft:lime_wool");
    pub const RED_WOOL: Material = Material::from_static("minecraft:red_wool");
    pub const GRAY_STAINED_GLASS_PANE: Material =
        Material::from_static("minecraft:gray_stained_glass_pane");
    pub const ARROW: Material = Material::from_static("minecraft:arrow");
    pub const BARRIER: Material = Material::from_static("minecraft:barrier");
    pub const EMERALD: Material = Material::from_static("minecraft:emerald");
    pub const DIAMOND_SWORD: Material = Material::from_static("minecraft:diamond_sword");

    /// Build a material from an already namespaced id
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Parse a material id, adding the `minecraft:` namespace when missing
    pub fn new(id: impl Into<String>) -> Self {
        let id: String = id.into();
        let id = id.trim().to_lowercase();
        if id.contains(':') {
            Self(Cow::Owned(id))
        } else {
            Self(Cow::Owned(format!("{}:{}", DEFAULT_NAMESPACE, id)))
        }
    }

    pub fn id(&self) -> &str {
        &self.0
    }

    /// Path part of the id (`green_wool` for `minecraft:green_wool`)
    pub fn key(&self) -> &str {
        self.0.split_once(':').map(|(_, key)| key).unwrap_or(self.id())
    }

    /// Human readable name, `minecraft:lime_wool` -> `Lime Wool`
    pub fn display_name(&self) -> String {
        to_title_case(&self.key().replace('_', " "))
    }
}

impl From<String> for Material {
    fn from(id: String) -> Self {
        Material::new(id)
    }
}

impl From<&str> for Material {
    fn from(id: &str) -> Self {
        Material::new(id)
    }
}

impl From<Material> for String {
    fn from(material: Material) -> Self {
        material.0.into_owned()
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A display item placed in a menu slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub material: Material,

    #[serde(default = "default_amount")]
    pub amount: u8,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub lore: Vec<String>,

    /// Arbitrary plugin data carried along with the item
    #[serde(default)]
    pub custom_data: Option<serde_json::Value>,
}

fn default_amount() -> u8 {
    1
}

impl ItemStack {
    /// A single item of `material` with no extra metadata
    pub fn new(material: Material) -> Self {
        Self {
            material,
            amount: default_amount(),
            display_name: None,
            lore: Vec::new(),
            custom_data: None,
        }
    }

    pub fn with_amount(mut self, amount: u8) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_lore<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lore = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_custom_data(mut self, data: serde_json::Value) -> Self {
        self.custom_data = Some(data);
        self
    }

    /// Name shown to the player, falling back to the material name
    pub fn shown_name(&self) -> String {
        self.display_name
            .clone()
            .unwrap_or_else(|| self.material.display_name())
    }
}

impl From<Material> for ItemStack {
    fn from(material: Material) -> Self {
        ItemStack::new(material)
    }
}

/// A player as seen by the host server
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    pub uuid: Uuid,
    pub name: String,
}

impl Player {
    pub fn new(uuid: Uuid, name: impl Into<String>) -> Self {
        Self {
            uuid,
            name: name.into(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.uuid)
    }
}

/// How the player clicked a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    Left,
    Right,
    ShiftLeft,
    ShiftRight,
    Middle,
    DoubleClick,
    /// Hotbar swap with the given key (0-8)
    NumberKey(u8),
    Drop,
}

/// Click event forwarded from the host server
#[derive(Debug, Clone)]
pub struct MenuClickEvent {
    pub player: Player,
    pub slot: Slot,
    pub click: ClickKind,
}

impl MenuClickEvent {
    pub fn new(player: Player, slot: Slot, click: ClickKind) -> Self {
        Self {
            player,
            slot,
            click,
        }
    }
}

/// Inventory close event forwarded from the host server
#[derive(Debug, Clone)]
pub struct MenuCloseEvent {
    pub player: Player,
}

impl MenuCloseEvent {
    pub fn new(player: Player) -> Self {
        Self { player }
    }
}
