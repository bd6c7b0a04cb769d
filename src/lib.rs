//! Card Render - 卡片渲染引擎
//! 将声明式的卡片元素树渲染为平台无关的 UI 树，支持回退、样式继承和资源解析

mod color;
mod error;
mod geometry;

pub use color::Color;
pub use error::{ConfigError, LayoutError, ModelError, RegistryError, RenderError};
pub use geometry::Rect;

// 卡片元素模型
pub mod model;

// 宿主配置
pub mod host_config;
pub use host_config::HostConfig;

// 资源解析
pub mod resource;

// 渲染引擎
pub mod renderer;
pub use renderer::{RenderEngine, RenderOutput, RendererRegistry, UiElement, Warning, WarningKind};

// Flex 布局
pub mod layout;

// 单元测试
#[cfg(test)]
mod tests;
