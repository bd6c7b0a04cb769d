//! 渲染上下文
//!
//! 每次顶层渲染独占一个 [`RenderContext`]，贯穿整个递归过程。
//! 祖先栈在进入节点时压栈、离开时出栈，由 [`AncestorGuard`] 保证任何返回路径都会出栈。

use super::components::UiElement;
use super::engine;
use super::registry::RendererRegistry;
use super::warning::{Warning, WarningKind};
use crate::error::RenderError;
use crate::host_config::HostConfig;
use crate::model::{CardElement, ContainerStyle};
use crate::resource::ResourceResolver;
use std::ops::{Deref, DerefMut};

/// 祖先栈中的一帧
#[derive(Debug, Clone, PartialEq)]
pub struct AncestorFrame {
    pub type_tag: String,
    pub style: ContainerStyle,
}

/// 祖先栈，栈顶是当前正在渲染的节点
#[derive(Debug, Default, Clone)]
pub struct AncestorStack {
    frames: Vec<AncestorFrame>,
}

impl AncestorStack {
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// 当前节点
    pub fn current(&self) -> Option<&AncestorFrame> {
        self.frames.last()
    }

    /// 当前节点的父节点
    pub fn parent(&self) -> Option<&AncestorFrame> {
        self.frames.iter().rev().nth(1)
    }

    /// 最近一帧的已解析样式
    pub fn nearest_style(&self) -> Option<ContainerStyle> {
        self.frames.last().map(|f| f.style)
    }

    /// 从根到栈顶
    pub fn iter(&self) -> impl Iterator<Item = &AncestorFrame> {
        self.frames.iter()
    }

    fn push(&mut self, frame: AncestorFrame) {
        self.frames.push(frame);
    }

    fn pop(&mut self) -> Option<AncestorFrame> {
        self.frames.pop()
    }
}

/// 每次渲染调用的可变状态
pub struct RenderContext<'a> {
    host_config: &'a HostConfig,
    registry: &'a RendererRegistry,
    resolver: &'a dyn ResourceResolver,
    ancestors: AncestorStack,
    warnings: Vec<Warning>,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        host_config: &'a HostConfig,
        registry: &'a RendererRegistry,
        resolver: &'a dyn ResourceResolver,
    ) -> Self {
        Self {
            host_config,
            registry,
            resolver,
            ancestors: AncestorStack::default(),
            warnings: Vec::new(),
        }
    }

    pub fn host_config(&self) -> &'a HostConfig {
        self.host_config
    }

    pub fn registry(&self) -> &'a RendererRegistry {
        self.registry
    }

    pub fn resolver(&self) -> &'a dyn ResourceResolver {
        self.resolver
    }

    pub fn ancestors(&self) -> &AncestorStack {
        &self.ancestors
    }

    /// 压入一帧，返回的守卫在析构时出栈
    pub fn push_ancestor(&mut self, frame: AncestorFrame) -> AncestorGuard<'_, 'a> {
        self.ancestors.push(frame);
        let depth = self.ancestors.depth();
        AncestorGuard { ctx: self, depth }
    }

    /// 显式样式 > 最近祖先的样式 > HostConfig 默认样式
    pub fn resolve_style(&self, explicit: Option<ContainerStyle>) -> ContainerStyle {
        Self::resolve_style_with(explicit, self.ancestors.nearest_style())
    }

    pub fn resolve_style_with(
        explicit: Option<ContainerStyle>,
        inherited: Option<ContainerStyle>,
    ) -> ContainerStyle {
        explicit.or(inherited).unwrap_or_default()
    }

    pub fn add_warning(&mut self, kind: WarningKind, message: impl Into<String>) {
        let warning = Warning::new(kind, message);
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// 丢弃某次失败尝试期间记录的警告
    pub(crate) fn truncate_warnings(&mut self, len: usize) {
        if self.warnings.len() > len {
            log::debug!("discarding {} warnings from a failed subtree", self.warnings.len() - len);
            self.warnings.truncate(len);
        }
    }

    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    /// 递归渲染子元素
    ///
    /// `Ok(None)` 表示元素不可见或已被丢弃（警告已记录）。
    /// 只有在元素本身没有回退而某个祖先声明了回退时才返回 `Err`，交给祖先处理。
    pub fn render_child(
        &mut self,
        element: &CardElement,
        args: &RenderArgs,
    ) -> Result<Option<UiElement>, RenderError> {
        engine::render_node(self, element, args)
    }
}

/// 祖先帧守卫
pub struct AncestorGuard<'c, 'a> {
    ctx: &'c mut RenderContext<'a>,
    depth: usize,
}

impl<'a> Deref for AncestorGuard<'_, 'a> {
    type Target = RenderContext<'a>;

    fn deref(&self) -> &Self::Target {
        &*self.ctx
    }
}

impl<'a> DerefMut for AncestorGuard<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.ctx
    }
}

impl Drop for AncestorGuard<'_, '_> {
    fn drop(&mut self) {
        debug_assert_eq!(
            self.ctx.ancestors.depth(),
            self.depth,
            "ancestor frames must be popped in push order"
        );
        self.ctx.ancestors.pop();
    }
}

/// 单次调用的参数
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderArgs {
    /// 外层容器解析后的样式
    pub parent_style: ContainerStyle,
    /// 外层是 ColumnSet，只接受 Column
    pub columns_only: bool,
    /// 某个祖先已经持有 selectAction
    pub ancestor_has_select_action: bool,
    /// 某个祖先声明了回退
    pub ancestor_has_fallback: bool,
}

impl RenderArgs {
    pub fn root() -> Self {
        Self::default()
    }

    /// 子元素的参数
    pub fn for_children(
        &self,
        element: &CardElement,
        resolved_style: ContainerStyle,
        owns_select_action: bool,
    ) -> Self {
        Self {
            parent_style: resolved_style,
            columns_only: false,
            ancestor_has_select_action: self.ancestor_has_select_action || owns_select_action,
            ancestor_has_fallback: self.ancestor_has_fallback || element.fallback.is_declared(),
        }
    }

    /// ColumnSet 子元素的参数
    pub fn for_columns(self) -> Self {
        Self { columns_only: true, ..self }
    }
}
