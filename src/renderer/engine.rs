//! 渲染引擎
//!
//! 前序深度优先遍历元素树：查找渲染器 → 调用 → 失败时交给回退状态机 → 组装输出树。
//! 单个节点的失败不会中止整次渲染。

use super::components::UiElement;
use super::context::{RenderArgs, RenderContext};
use super::fallback::{FallbackResolver, Resolution};
use super::registry::RendererRegistry;
use super::warning::Warning;
use crate::error::RenderError;
use crate::host_config::HostConfig;
use crate::model::CardElement;
use crate::resource::{NullResolver, ResourceResolver};

static NULL_RESOLVER: NullResolver = NullResolver;

/// 一次渲染的结果
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    /// 根节点被丢弃或不可见时为 None
    pub root: Option<UiElement>,
    pub warnings: Vec<Warning>,
}

pub struct RenderEngine<'a> {
    registry: &'a RendererRegistry,
    host_config: &'a HostConfig,
    resolver: &'a dyn ResourceResolver,
}

impl<'a> RenderEngine<'a> {
    pub fn new(registry: &'a RendererRegistry, host_config: &'a HostConfig) -> Self {
        Self {
            registry,
            host_config,
            resolver: &NULL_RESOLVER,
        }
    }

    /// 使用进程级注册表
    pub fn with_global_registry(host_config: &'a HostConfig) -> Self {
        Self::new(RendererRegistry::global(), host_config)
    }

    pub fn with_resolver(mut self, resolver: &'a dyn ResourceResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn host_config(&self) -> &'a HostConfig {
        self.host_config
    }

    /// 每次顶层渲染使用一个新的上下文
    pub fn new_context(&self) -> RenderContext<'a> {
        RenderContext::new(self.host_config, self.registry, self.resolver)
    }

    pub fn render(&self, root: &CardElement) -> RenderOutput {
        let mut ctx = self.new_context();
        let root = self.render_in(&mut ctx, root);
        RenderOutput {
            root,
            warnings: ctx.take_warnings(),
        }
    }

    /// 在调用方提供的上下文中渲染
    pub fn render_in(&self, ctx: &mut RenderContext<'_>, root: &CardElement) -> Option<UiElement> {
        log::debug!("render started for {}", root.describe());
        let result = render_node(ctx, root, &RenderArgs::root());
        debug_assert!(ctx.ancestors().is_empty(), "ancestor stack must be empty after a render");

        match result {
            Ok(node) => node,
            // 根节点没有祖先，不会向上升级失败
            Err(reason) => {
                log::error!("root {} escaped fallback resolution: {}", root.describe(), reason);
                None
            }
        }
    }
}

/// 渲染单个节点（含回退处理）
pub(crate) fn render_node(
    ctx: &mut RenderContext<'_>,
    element: &CardElement,
    args: &RenderArgs,
) -> Result<Option<UiElement>, RenderError> {
    if !element.is_visible {
        log::trace!("skipping invisible {}", element.describe());
        return Ok(None);
    }

    match FallbackResolver::new(element, *args).resolve(ctx) {
        Resolution::Rendered(node) => Ok(Some(node)),
        Resolution::Dropped(reason) => {
            if !element.fallback.is_declared() && args.ancestor_has_fallback {
                log::debug!(
                    "{} has no fallback, escalating to ancestor: {}",
                    element.describe(),
                    reason
                );
                return Err(reason);
            }
            ctx.add_warning(
                reason.kind(),
                format!("dropped {}: {}", element.describe(), reason),
            );
            Ok(None)
        }
    }
}
