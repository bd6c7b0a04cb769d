//! Container 渲染器 - 纵向容器

use super::base::*;
use crate::error::RenderError;
use crate::model::{CardElement, ElementBody};
use crate::renderer::context::{RenderArgs, RenderContext};

pub struct ContainerRenderer;

impl ElementRenderer for ContainerRenderer {
    fn render(
        &self,
        element: &CardElement,
        ctx: &mut RenderContext<'_>,
        args: &RenderArgs,
    ) -> Result<UiElement, RenderError> {
        let ElementBody::Container { vertical_alignment, min_height, .. } = &element.body else {
            return Err(RenderError::invalid_state(&element.describe(), "element is not a container"));
        };
        let style = current_style(ctx);

        let owns_action = keeps_select_action(ctx, element, args);
        let child_args = args.for_children(element, style, owns_action);
        let children = render_items(ctx, &element.items, &child_args)?;

        let mut node = UiElement::panel(element, Orientation::Vertical, children);
        node.style = NodeStyle {
            height: element.height,
            min_height: *min_height,
            vertical_alignment: *vertical_alignment,
            ..container_node_style(ctx.host_config(), style, args.parent_style)
        };

        Ok(apply_select_action(ctx, element, args, node))
    }
}
