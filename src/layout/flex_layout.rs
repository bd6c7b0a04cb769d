//! Flex 布局 (使用 Taffy)
//!
//! 把渲染输出的 [`UiElement`] 树映射为 Taffy 节点并计算每个节点的位置和尺寸。
//! 列宽映射：固定像素 → 固定宽度；权重 → 按权重分配剩余空间；
//! stretch → 权重为 1；auto → 内容宽度。

use crate::error::LayoutError;
use crate::geometry::Rect as FrameRect;
use crate::host_config::HostConfig;
use crate::model::{ColumnWidth, HeightType, VerticalAlignment};
use crate::renderer::{Orientation, UiElement, UiKind};
use taffy::prelude::*;

/// 布局结果，结构与 UiElement 树一一对应
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    /// 相对根节点的绝对位置
    pub frame: FrameRect,
    pub element_id: Option<String>,
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    pub fn find_by_id(&self, id: &str) -> Option<&LayoutNode> {
        if self.element_id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_id(id))
    }
}

/// 在给定可用宽度下计算布局
pub fn compute_layout(
    root: &UiElement,
    host: &HostConfig,
    available_width: f32,
) -> Result<LayoutNode, LayoutError> {
    let mut taffy: TaffyTree<()> = TaffyTree::new();
    let root_id = build_node(&mut taffy, root, Orientation::Vertical, host)?;

    let viewport = taffy
        .new_with_children(
            Style {
                size: Size { width: length(available_width), height: auto() },
                flex_direction: FlexDirection::Column,
                ..Default::default()
            },
            &[root_id],
        )
        .map_err(taffy_error)?;

    taffy
        .compute_layout(viewport, Size::MAX_CONTENT)
        .map_err(taffy_error)?;

    collect(&taffy, root_id, root, 0.0, 0.0)
}

fn taffy_error(e: impl std::fmt::Display) -> LayoutError {
    LayoutError::Taffy(e.to_string())
}

fn build_node(
    taffy: &mut TaffyTree<()>,
    node: &UiElement,
    parent: Orientation,
    host: &HostConfig,
) -> Result<NodeId, LayoutError> {
    let mut style = base_style(node, parent);

    match &node.kind {
        UiKind::Panel { orientation } => {
            style.flex_direction = match orientation {
                Orientation::Vertical => FlexDirection::Column,
                Orientation::Horizontal => FlexDirection::Row,
            };
            if *orientation == Orientation::Vertical {
                style.justify_content = Some(match node.style.vertical_alignment {
                    VerticalAlignment::Top => JustifyContent::FlexStart,
                    VerticalAlignment::Center => JustifyContent::Center,
                    VerticalAlignment::Bottom => JustifyContent::FlexEnd,
                });
            }
            let children = node
                .children
                .iter()
                .map(|child| build_node(taffy, child, *orientation, host))
                .collect::<Result<Vec<_>, _>>()?;
            return taffy.new_with_children(style, &children).map_err(taffy_error);
        }
        UiKind::Actionable { .. } => {
            style.flex_direction = FlexDirection::Column;
            let children = node
                .children
                .iter()
                .map(|child| {
                    let id = build_node(taffy, child, Orientation::Vertical, host)?;
                    // 被包装的节点填满包装节点
                    let mut inner = taffy.style(id).map_err(taffy_error)?.clone();
                    inner.flex_grow = 1.0;
                    inner.margin = zero();
                    taffy.set_style(id, inner).map_err(taffy_error)?;
                    Ok(id)
                })
                .collect::<Result<Vec<_>, LayoutError>>()?;
            return taffy.new_with_children(style, &children).map_err(taffy_error);
        }
        UiKind::Text { text, font_size, .. } => {
            // 简单估算文本宽度
            let char_width = font_size * 0.6;
            let width = text.chars().count() as f32 * char_width;
            set_leaf_size(&mut style, width, font_size + 4.0);
            style.max_size.width = percent(1.0);
        }
        UiKind::Image { width, height, .. } => {
            set_leaf_size(&mut style, *width, *height);
        }
        UiKind::TextInput { height, .. } => {
            style.size.height = length(*height);
        }
        UiKind::Button { title, height, .. } => {
            let width = title.chars().count() as f32 * host.font_sizes.default * 0.6 + 24.0;
            set_leaf_size(&mut style, width, *height);
        }
    }

    taffy.new_leaf(style).map_err(taffy_error)
}

/// 各类节点共用的样式：间距、分隔线、内边距、宽高提示
fn base_style(node: &UiElement, parent: Orientation) -> Style {
    let ns = &node.style;
    let mut style = Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        flex_shrink: 1.0,
        ..Default::default()
    };

    let leading = ns.spacing_before + ns.separator.map(|s| s.thickness).unwrap_or(0.0);
    style.margin = match parent {
        Orientation::Vertical => Rect { top: length(leading), right: zero(), bottom: zero(), left: zero() },
        Orientation::Horizontal => Rect { top: zero(), right: zero(), bottom: zero(), left: length(leading) },
    };

    style.padding = Rect {
        top: length(ns.padding),
        right: length(ns.padding),
        bottom: length(ns.padding),
        left: length(ns.padding),
    };

    if let Some(min_height) = ns.min_height {
        style.min_size.height = length(min_height);
    }

    match parent {
        Orientation::Horizontal => match ns.width {
            ColumnWidth::Pixels(px) => {
                style.size.width = length(px);
                style.flex_grow = 0.0;
                style.flex_shrink = 0.0;
            }
            ColumnWidth::Weighted(weight) => {
                style.flex_grow = weight;
                style.flex_basis = length(0.0);
            }
            ColumnWidth::Stretch => {
                style.flex_grow = 1.0;
                style.flex_basis = length(0.0);
            }
            ColumnWidth::Auto => {
                style.flex_grow = 0.0;
            }
        },
        Orientation::Vertical => {
            if ns.height == HeightType::Stretch {
                style.flex_grow = 1.0;
            }
        }
    }

    style
}

fn set_leaf_size(style: &mut Style, width: f32, height: f32) {
    style.size = Size { width: length(width), height: length(height) };
}

fn collect(
    taffy: &TaffyTree<()>,
    id: NodeId,
    node: &UiElement,
    offset_x: f32,
    offset_y: f32,
) -> Result<LayoutNode, LayoutError> {
    let layout = taffy.layout(id).map_err(taffy_error)?;
    let x = offset_x + layout.location.x;
    let y = offset_y + layout.location.y;

    let child_ids = taffy.children(id).map_err(taffy_error)?;
    let children = child_ids
        .into_iter()
        .zip(&node.children)
        .map(|(child_id, child)| collect(taffy, child_id, child, x, y))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LayoutNode {
        frame: FrameRect::new(x, y, layout.size.width, layout.size.height),
        element_id: node.element_id.clone(),
        children,
    })
}
