//! 错误类型

use crate::renderer::WarningKind;

/// 单个节点渲染失败的原因
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// 类型标签没有注册渲染器
    #[error("no renderer registered for element type '{type_tag}'")]
    UnsupportedType { type_tag: String },

    /// 违反结构约束
    #[error("{element} is in an invalid state: {reason}")]
    InvalidState { element: String, reason: String },

    /// 声明的回退内容也渲染失败
    #[error("fallback for {element} could not be rendered (original failure: {original})")]
    FallbackExhausted {
        element: String,
        original: Box<RenderError>,
    },
}

impl RenderError {
    pub fn invalid_state(element: &str, reason: impl Into<String>) -> Self {
        RenderError::InvalidState {
            element: element.to_string(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> WarningKind {
        match self {
            RenderError::UnsupportedType { .. } => WarningKind::UnsupportedType,
            RenderError::InvalidState { .. } => WarningKind::InvalidState,
            RenderError::FallbackExhausted { .. } => WarningKind::FallbackExhausted,
        }
    }
}

/// 注册表错误
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("no renderer registered for '{0}'")]
    NotFound(String),

    #[error("the global renderer registry is already installed")]
    AlreadyInstalled,
}

/// HostConfig 加载错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// JSON 转换为元素树时的错误
#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object for {0}")]
    NotAnObject(String),

    #[error("element is missing a 'type' property")]
    MissingType,

    #[error("invalid value for '{field}': {value}")]
    InvalidValue { field: String, value: String },
}

/// 布局计算错误
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    #[error("layout engine error: {0}")]
    Taffy(String),
}
