//! Input.Text 渲染器 - 文本输入框

use super::base::*;
use crate::error::RenderError;
use crate::model::{CardElement, ElementBody};
use crate::renderer::context::{RenderArgs, RenderContext};

pub struct TextInputRenderer;

impl ElementRenderer for TextInputRenderer {
    fn render(
        &self,
        element: &CardElement,
        ctx: &mut RenderContext<'_>,
        _args: &RenderArgs,
    ) -> Result<UiElement, RenderError> {
        let ElementBody::TextInput { placeholder, value, is_multiline } = &element.body else {
            return Err(RenderError::invalid_state(&element.describe(), "element is not a text input"));
        };
        if element.id.is_none() {
            return Err(RenderError::invalid_state(&element.describe(), "inputs require an id"));
        }

        let config = &ctx.host_config().text_input;
        let height = if *is_multiline { config.multiline_height } else { config.height };
        Ok(UiElement::new(
            UiKind::TextInput {
                placeholder: placeholder.clone(),
                value: value.clone(),
                multiline: *is_multiline,
                height,
            },
            element,
        ))
    }
}
