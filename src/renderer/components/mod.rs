//! 各元素类型的渲染器
//! 每种类型独立文件，便于维护

mod base;
mod card;
mod container;
mod column_set;
mod column;
mod text;
mod image;
mod input;
mod action_set;

pub use base::*;
pub use card::CardRenderer;
pub use container::ContainerRenderer;
pub use column_set::ColumnSetRenderer;
pub use column::ColumnRenderer;
pub use text::TextBlockRenderer;
pub use image::ImageRenderer;
pub use input::TextInputRenderer;
pub use action_set::ActionSetRenderer;
