//! 卡片元素模型

pub mod element;
pub mod json;

pub use element::*;
pub use json::{element_from_value, parse_card};
