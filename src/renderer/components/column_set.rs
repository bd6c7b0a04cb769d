//! ColumnSet 渲染器 - 横向排列 Column

use super::base::*;
use crate::error::RenderError;
use crate::model::{CardElement, ElementBody};
use crate::renderer::context::{RenderArgs, RenderContext};

pub struct ColumnSetRenderer;

impl ElementRenderer for ColumnSetRenderer {
    fn render(
        &self,
        element: &CardElement,
        ctx: &mut RenderContext<'_>,
        args: &RenderArgs,
    ) -> Result<UiElement, RenderError> {
        let min_height = match &element.body {
            ElementBody::Container { min_height, .. } => *min_height,
            _ => None,
        };
        let style = current_style(ctx);

        let owns_action = keeps_select_action(ctx, element, args);
        // 非 Column 子元素在引擎里按 InvalidState 失败，走各自的回退
        let child_args = args.for_children(element, style, owns_action).for_columns();
        let children = render_items(ctx, &element.items, &child_args)?;

        let mut node = UiElement::panel(element, Orientation::Horizontal, children);
        node.style = NodeStyle {
            height: element.height,
            min_height,
            ..container_node_style(ctx.host_config(), style, args.parent_style)
        };

        Ok(apply_select_action(ctx, element, args, node))
    }
}
