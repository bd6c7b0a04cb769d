//! 渲染警告

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    UnsupportedType,
    InvalidState,
    FallbackExhausted,
    PerformingFallback,
    ActionConflict,
    InteractivityDisabled,
    MaxActionsExceeded,
    ResourceUnavailable,
    DuplicateRenderer,
}

/// 渲染过程中的非致命异常，按发生顺序记录
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.kind, self.message)
    }
}
