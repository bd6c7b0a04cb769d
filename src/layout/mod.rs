//! 布局 - 计算渲染输出在给定宽度下的位置和尺寸

mod flex_layout;

pub use flex_layout::{compute_layout, LayoutNode};
