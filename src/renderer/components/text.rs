//! TextBlock 渲染器 - 文本显示

use super::base::*;
use crate::error::RenderError;
use crate::model::{CardElement, ElementBody, TextWeight};
use crate::renderer::context::{RenderArgs, RenderContext};

pub struct TextBlockRenderer;

impl ElementRenderer for TextBlockRenderer {
    fn render(
        &self,
        element: &CardElement,
        ctx: &mut RenderContext<'_>,
        _args: &RenderArgs,
    ) -> Result<UiElement, RenderError> {
        let ElementBody::TextBlock { text, wrap, size, weight } = &element.body else {
            return Err(RenderError::invalid_state(&element.describe(), "element is not a text block"));
        };
        let host = ctx.host_config();
        let style = current_style(ctx);

        let mut node = UiElement::new(
            UiKind::Text {
                text: text.clone(),
                font_size: host.font_size_for(*size),
                bold: *weight == TextWeight::Bolder,
                wrap: *wrap,
            },
            element,
        );
        // 文本颜色跟随所在容器的样式
        node.style.foreground_color = Some(host.style_definition(style).foreground_color);
        Ok(node)
    }
}
