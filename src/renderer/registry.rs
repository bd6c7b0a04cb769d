//! 渲染器注册表
//!
//! 类型标签到渲染器的映射。进程级注册表在第一次渲染前填充，之后只读。

use super::components::{
    ActionSetRenderer, CardRenderer, ColumnRenderer, ColumnSetRenderer, ContainerRenderer,
    ElementRenderer, ImageRenderer, TextBlockRenderer, TextInputRenderer,
};
use super::warning::{Warning, WarningKind};
use crate::error::RegistryError;
use crate::model::tags;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;

static GLOBAL_REGISTRY: OnceCell<RendererRegistry> = OnceCell::new();

#[derive(Default)]
pub struct RendererRegistry {
    renderers: HashMap<String, Arc<dyn ElementRenderer>>,
    registration_warnings: Vec<Warning>,
}

impl RendererRegistry {
    /// 空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册所有内置渲染器
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .register(tags::ADAPTIVE_CARD, CardRenderer)
            .register(tags::CONTAINER, ContainerRenderer)
            .register(tags::COLUMN_SET, ColumnSetRenderer)
            .register(tags::COLUMN, ColumnRenderer)
            .register(tags::TEXT_BLOCK, TextBlockRenderer)
            .register(tags::IMAGE, ImageRenderer)
            .register(tags::TEXT_INPUT, TextInputRenderer)
            .register(tags::ACTION_SET, ActionSetRenderer);
        registry
    }

    /// 绑定渲染器。同一标签再次注册会覆盖旧的绑定并记录警告。
    pub fn register<R>(&mut self, type_tag: &str, renderer: R) -> &mut Self
    where
        R: ElementRenderer + 'static,
    {
        self.register_shared(type_tag, Arc::new(renderer))
    }

    pub fn register_shared(&mut self, type_tag: &str, renderer: Arc<dyn ElementRenderer>) -> &mut Self {
        if self.renderers.insert(type_tag.to_string(), renderer).is_some() {
            let warning = Warning::new(
                WarningKind::DuplicateRenderer,
                format!("renderer for '{}' was replaced by a later registration", type_tag),
            );
            log::warn!("{}", warning);
            self.registration_warnings.push(warning);
        }
        self
    }

    pub fn lookup(&self, type_tag: &str) -> Result<&dyn ElementRenderer, RegistryError> {
        self.renderers
            .get(type_tag)
            .map(|r| r.as_ref())
            .ok_or_else(|| RegistryError::NotFound(type_tag.to_string()))
    }

    pub fn contains(&self, type_tag: &str) -> bool {
        self.renderers.contains_key(type_tag)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// 注册过程中产生的覆盖警告
    pub fn registration_warnings(&self) -> &[Warning] {
        &self.registration_warnings
    }

    /// 安装进程级注册表，只能安装一次
    pub fn install_global(registry: RendererRegistry) -> Result<(), RegistryError> {
        GLOBAL_REGISTRY
            .set(registry)
            .map_err(|_| RegistryError::AlreadyInstalled)
    }

    /// 进程级注册表；未安装时使用内置渲染器初始化
    pub fn global() -> &'static RendererRegistry {
        GLOBAL_REGISTRY.get_or_init(Self::with_defaults)
    }
}
