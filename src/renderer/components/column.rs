//! Column 渲染器
//!
//! Column 只能作为 ColumnSet 的直接子元素出现，否则按 InvalidState 失败并交给回退处理。
//! 祖先帧由引擎在调用前压栈、返回后出栈，栈顶帧携带本列已解析的容器样式。

use super::base::*;
use crate::error::RenderError;
use crate::model::{tags, CardElement, ElementBody};
use crate::renderer::context::{RenderArgs, RenderContext};

pub struct ColumnRenderer;

impl ElementRenderer for ColumnRenderer {
    fn render(
        &self,
        element: &CardElement,
        ctx: &mut RenderContext<'_>,
        args: &RenderArgs,
    ) -> Result<UiElement, RenderError> {
        let ElementBody::Column { width, vertical_alignment, min_height } = &element.body else {
            return Err(RenderError::invalid_state(&element.describe(), "element is not a column"));
        };

        let in_column_set = ctx
            .ancestors()
            .parent()
            .is_some_and(|frame| frame.type_tag == tags::COLUMN_SET);
        if !in_column_set {
            return Err(RenderError::invalid_state(
                &element.describe(),
                "a Column must be a direct child of a ColumnSet",
            ));
        }

        let width = width.resolve();
        let style = current_style(ctx);

        let owns_action = keeps_select_action(ctx, element, args);
        let child_args = args.for_children(element, style, owns_action);
        let children = render_items(ctx, &element.items, &child_args)?;

        let mut node = UiElement::panel(element, Orientation::Vertical, children);
        node.style = NodeStyle {
            width,
            height: element.height,
            min_height: *min_height,
            vertical_alignment: *vertical_alignment,
            ..container_node_style(ctx.host_config(), style, args.parent_style)
        };

        Ok(apply_select_action(ctx, element, args, node))
    }
}
