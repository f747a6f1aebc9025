//! String utility functions

use once_cell::sync::Lazy;
use regex::Regex;

static COLOR_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[§&][0-9a-fk-orA-FK-OR]").expect("color code pattern is valid"));

/// Remove Minecraft color codes (`§a`, `&l`, ...) from text
pub fn strip_color_codes(text: &str) -> String {
    COLOR_CODE.replace_all(text, "").into_owned()
}

/// Convert string to title case
pub fn to_title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
