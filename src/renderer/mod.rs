//! 渲染引擎 - 将卡片元素树渲染为平台无关的 UI 树

pub mod components;
mod context;
mod engine;
mod fallback;
mod registry;
mod warning;

pub use components::{ElementRenderer, NodeStyle, Orientation, SeparatorLine, UiElement, UiKind};
pub use context::{AncestorFrame, AncestorGuard, AncestorStack, RenderArgs, RenderContext};
pub use engine::{RenderEngine, RenderOutput};
pub use fallback::{FallbackResolver, FallbackState, Resolution};
pub use registry::RendererRegistry;
pub use warning::{Warning, WarningKind};
