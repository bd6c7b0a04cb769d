//! ActionSet 渲染器 - 一行按钮

use super::base::*;
use crate::error::RenderError;
use crate::model::{CardElement, ElementBody};
use crate::renderer::context::{RenderArgs, RenderContext};

pub struct ActionSetRenderer;

impl ElementRenderer for ActionSetRenderer {
    fn render(
        &self,
        element: &CardElement,
        ctx: &mut RenderContext<'_>,
        _args: &RenderArgs,
    ) -> Result<UiElement, RenderError> {
        let ElementBody::ActionSet { actions } = &element.body else {
            return Err(RenderError::invalid_state(&element.describe(), "element is not an action set"));
        };
        let mut node = render_action_buttons(ctx, element, actions);
        node.style.height = element.height;
        Ok(node)
    }
}
