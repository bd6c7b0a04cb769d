//! 回退状态机
//!
//! `TryRender → TryDeclaredFallback → Drop`。回退内容使用同一个上下文渲染，
//! 失败节点自己的祖先帧会先出栈，回退内容占据同一深度。失败尝试期间记录的
//! 警告随失败的子树一起丢弃。

use super::components::UiElement;
use super::context::{AncestorFrame, RenderArgs, RenderContext};
use super::warning::WarningKind;
use crate::error::RenderError;
use crate::model::{tags, CardElement, Fallback};

/// 状态机的状态
#[derive(Debug)]
pub enum FallbackState<'e> {
    TryRender(&'e CardElement),
    TryDeclaredFallback {
        element: &'e CardElement,
        failure: RenderError,
    },
    Drop(RenderError),
}

/// 状态机的结果。不存在半成品节点：要么完整渲染，要么丢弃。
#[derive(Debug)]
pub enum Resolution {
    Rendered(UiElement),
    Dropped(RenderError),
}

pub struct FallbackResolver<'e> {
    original: &'e CardElement,
    args: RenderArgs,
}

impl<'e> FallbackResolver<'e> {
    pub fn new(original: &'e CardElement, args: RenderArgs) -> Self {
        Self { original, args }
    }

    pub fn resolve(self, ctx: &mut RenderContext<'_>) -> Resolution {
        let mut state = FallbackState::TryRender(self.original);
        let mut first_failure: Option<RenderError> = None;
        let mut used_fallback = false;

        loop {
            state = match state {
                FallbackState::TryRender(element) => {
                    let mark = ctx.warnings().len();
                    match invoke(ctx, element, &self.args) {
                        Ok(node) => return Resolution::Rendered(node),
                        Err(failure) => {
                            log::debug!("{} failed to render: {}", element.describe(), failure);
                            ctx.truncate_warnings(mark);
                            FallbackState::TryDeclaredFallback { element, failure }
                        }
                    }
                }
                FallbackState::TryDeclaredFallback { element, failure } => match &element.fallback {
                    Fallback::Content(content) => {
                        ctx.add_warning(
                            WarningKind::PerformingFallback,
                            format!(
                                "performing fallback for {} with {}: {}",
                                element.describe(),
                                content.describe(),
                                failure
                            ),
                        );
                        first_failure.get_or_insert(failure);
                        used_fallback = true;
                        FallbackState::TryRender(content.as_ref())
                    }
                    Fallback::Drop | Fallback::None => {
                        let first = first_failure.take().unwrap_or(failure);
                        if used_fallback {
                            FallbackState::Drop(RenderError::FallbackExhausted {
                                element: self.original.describe(),
                                original: Box::new(first),
                            })
                        } else {
                            FallbackState::Drop(first)
                        }
                    }
                },
                FallbackState::Drop(reason) => return Resolution::Dropped(reason),
            };
        }
    }
}

/// 查找渲染器并在一帧祖先范围内调用
fn invoke(
    ctx: &mut RenderContext<'_>,
    element: &CardElement,
    args: &RenderArgs,
) -> Result<UiElement, RenderError> {
    let renderer = ctx
        .registry()
        .lookup(&element.type_tag)
        .map_err(|_| RenderError::UnsupportedType {
            type_tag: element.type_tag.clone(),
        })?;
    if args.columns_only && element.type_tag != tags::COLUMN {
        return Err(RenderError::invalid_state(
            &element.describe(),
            "a ColumnSet may only contain columns",
        ));
    }

    let frame = AncestorFrame {
        type_tag: element.type_tag.clone(),
        style: ctx.resolve_style(element.style),
    };
    let mut scope = ctx.push_ancestor(frame);
    log::trace!(
        "rendering {} at depth {}",
        element.describe(),
        scope.ancestors().depth()
    );
    renderer.render(element, &mut scope, args)
}
