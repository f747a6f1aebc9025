pub mod string;

pub use string::{strip_color_codes, to_title_case};
