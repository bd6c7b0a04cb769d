//! Image 渲染器
//!
//! 尺寸优先级：显式像素值 > 资源实际尺寸 > HostConfig 的 medium 尺寸。
//! 资源解析失败不算渲染失败，只记录警告并输出占位节点。

use super::base::*;
use crate::error::RenderError;
use crate::model::{CardElement, ElementBody};
use crate::renderer::context::{RenderArgs, RenderContext};
use crate::renderer::warning::WarningKind;

pub struct ImageRenderer;

impl ElementRenderer for ImageRenderer {
    fn render(
        &self,
        element: &CardElement,
        ctx: &mut RenderContext<'_>,
        args: &RenderArgs,
    ) -> Result<UiElement, RenderError> {
        let ElementBody::Image { url, alt_text, pixel_width, pixel_height } = &element.body else {
            return Err(RenderError::invalid_state(&element.describe(), "element is not an image"));
        };
        if url.is_empty() {
            return Err(RenderError::invalid_state(&element.describe(), "image url is empty"));
        }

        let fallback_size = ctx.host_config().image_sizes.medium;
        let (resolved, natural) = match ctx.resolver().resolve_image(url) {
            Ok(image) => (true, Some((image.width, image.height))),
            Err(e) => {
                ctx.add_warning(
                    WarningKind::ResourceUnavailable,
                    format!("image for {} could not be resolved: {}", element.describe(), e),
                );
                (false, None)
            }
        };

        let (width, height) = match (pixel_width, pixel_height, natural) {
            (Some(w), Some(h), _) => (*w, *h),
            // 只给了一边时按原图比例推算另一边
            (Some(w), None, Some((nw, nh))) if nw > 0.0 => (*w, *w * nh / nw),
            (None, Some(h), Some((nw, nh))) if nh > 0.0 => (*h * nw / nh, *h),
            (Some(w), None, _) => (*w, *w),
            (None, Some(h), _) => (*h, *h),
            (None, None, Some(size)) => size,
            (None, None, None) => (fallback_size, fallback_size),
        };

        let node = UiElement::new(
            UiKind::Image {
                uri: url.clone(),
                alt_text: alt_text.clone(),
                resolved,
                width,
                height,
            },
            element,
        );
        Ok(apply_select_action(ctx, element, args, node))
    }
}
