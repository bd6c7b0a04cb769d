//! AdaptiveCard 根节点渲染器
//!
//! 根节点总是带内边距和背景；卡片级 actions 作为最后一个子节点追加。

use super::base::*;
use crate::error::RenderError;
use crate::model::{CardElement, ElementBody};
use crate::renderer::context::{RenderArgs, RenderContext};

pub struct CardRenderer;

impl ElementRenderer for CardRenderer {
    fn render(
        &self,
        element: &CardElement,
        ctx: &mut RenderContext<'_>,
        args: &RenderArgs,
    ) -> Result<UiElement, RenderError> {
        let ElementBody::Container { vertical_alignment, min_height, actions } = &element.body else {
            return Err(RenderError::invalid_state(&element.describe(), "element is not a card"));
        };
        let style = current_style(ctx);
        let host = ctx.host_config();

        let owns_action = keeps_select_action(ctx, element, args);
        let child_args = args.for_children(element, style, owns_action);
        let mut children = render_items(ctx, &element.items, &child_args)?;

        if !actions.is_empty() {
            let mut action_bar = render_action_buttons(ctx, element, actions);
            action_bar.element_id = None;
            if !children.is_empty() {
                action_bar.style.spacing_before = host.actions.button_spacing;
            }
            if !action_bar.children.is_empty() {
                children.push(action_bar);
            }
        }

        let definition = host.style_definition(style);
        let mut node = UiElement::panel(element, Orientation::Vertical, children);
        node.style = NodeStyle {
            container_style: Some(style),
            background_color: Some(definition.background_color),
            foreground_color: Some(definition.foreground_color),
            padding: host.spacing.padding,
            height: element.height,
            min_height: *min_height,
            vertical_alignment: *vertical_alignment,
            ..Default::default()
        };

        Ok(apply_select_action(ctx, element, args, node))
    }
}
