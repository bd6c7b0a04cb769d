//! 卡片元素模型
//!
//! 上游解析器产出的只读元素树。渲染引擎只读取，从不修改。

use serde::{Deserialize, Serialize};

/// 常用类型标签
pub mod tags {
    pub const ADAPTIVE_CARD: &str = "AdaptiveCard";
    pub const CONTAINER: &str = "Container";
    pub const COLUMN_SET: &str = "ColumnSet";
    pub const COLUMN: &str = "Column";
    pub const TEXT_BLOCK: &str = "TextBlock";
    pub const IMAGE: &str = "Image";
    pub const TEXT_INPUT: &str = "Input.Text";
    pub const ACTION_SET: &str = "ActionSet";
}

/// 容器样式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContainerStyle {
    #[default]
    Default,
    Emphasis,
    Good,
    Attention,
    Warning,
    Accent,
}

/// 元素前的间距
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Spacing {
    None,
    Small,
    #[default]
    Default,
    Medium,
    Large,
    #[serde(alias = "extralarge")]
    ExtraLarge,
    Padding,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeightType {
    #[default]
    Auto,
    Stretch,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerticalAlignment {
    #[default]
    Top,
    Center,
    Bottom,
}

/// 列宽声明
///
/// 文档里可能同时出现多个字段，实际生效的宽度由 [`ColumnWidthSpec::resolve`] 决定。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColumnWidthSpec {
    pub pixel_width: Option<f32>,
    pub weight: Option<f32>,
    pub stretch: bool,
}

/// 生效的列宽
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ColumnWidth {
    #[default]
    Auto,
    Stretch,
    Pixels(f32),
    Weighted(f32),
}

impl ColumnWidthSpec {
    pub fn auto() -> Self {
        Self::default()
    }

    pub fn stretch() -> Self {
        Self { stretch: true, ..Default::default() }
    }

    pub fn pixels(px: f32) -> Self {
        Self { pixel_width: Some(px), ..Default::default() }
    }

    pub fn weighted(weight: f32) -> Self {
        Self { weight: Some(weight), ..Default::default() }
    }

    /// 固定像素 > 权重 > stretch > auto。非正数的像素值和权重视为未声明。
    pub fn resolve(&self) -> ColumnWidth {
        if let Some(px) = self.pixel_width.filter(|px| *px > 0.0) {
            return ColumnWidth::Pixels(px);
        }
        if let Some(w) = self.weight.filter(|w| *w > 0.0) {
            return ColumnWidth::Weighted(w);
        }
        if self.stretch {
            return ColumnWidth::Stretch;
        }
        ColumnWidth::Auto
    }
}

/// 动作
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub action_type: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub id: Option<String>,
}

impl Action {
    pub fn open_url(url: &str) -> Self {
        Self {
            action_type: "Action.OpenUrl".into(),
            title: None,
            url: Some(url.into()),
            id: None,
        }
    }

    pub fn submit(title: &str) -> Self {
        Self {
            action_type: "Action.Submit".into(),
            title: Some(title.into()),
            url: None,
            id: None,
        }
    }
}

/// 回退声明
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Fallback {
    #[default]
    None,
    Drop,
    Content(Box<CardElement>),
}

impl Fallback {
    pub fn is_declared(&self) -> bool {
        !matches!(self, Fallback::None)
    }
}

/// 各类型特有的数据
#[derive(Debug, Clone, PartialEq)]
pub enum ElementBody {
    /// AdaptiveCard / Container / ColumnSet，子元素放在 `CardElement::items`
    Container {
        vertical_alignment: VerticalAlignment,
        min_height: Option<f32>,
        actions: Vec<Action>,
    },
    Column {
        width: ColumnWidthSpec,
        vertical_alignment: VerticalAlignment,
        min_height: Option<f32>,
    },
    TextBlock {
        text: String,
        wrap: bool,
        size: TextSize,
        weight: TextWeight,
    },
    Image {
        url: String,
        alt_text: Option<String>,
        pixel_width: Option<f32>,
        pixel_height: Option<f32>,
    },
    TextInput {
        placeholder: Option<String>,
        value: Option<String>,
        is_multiline: bool,
    },
    ActionSet {
        actions: Vec<Action>,
    },
    /// 未知类型，保留原始属性
    Custom(serde_json::Map<String, serde_json::Value>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextSize {
    Small,
    #[default]
    Default,
    Medium,
    Large,
    #[serde(alias = "extralarge")]
    ExtraLarge,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextWeight {
    Lighter,
    #[default]
    Default,
    Bolder,
}

/// 卡片元素
#[derive(Debug, Clone, PartialEq)]
pub struct CardElement {
    pub id: Option<String>,
    pub type_tag: String,
    pub is_visible: bool,
    pub spacing: Spacing,
    pub separator: bool,
    pub height: HeightType,
    pub style: Option<ContainerStyle>,
    pub select_action: Option<Action>,
    pub fallback: Fallback,
    pub items: Vec<CardElement>,
    pub body: ElementBody,
}

impl CardElement {
    pub fn new(type_tag: &str, body: ElementBody) -> Self {
        Self {
            id: None,
            type_tag: type_tag.to_string(),
            is_visible: true,
            spacing: Spacing::Default,
            separator: false,
            height: HeightType::Auto,
            style: None,
            select_action: None,
            fallback: Fallback::None,
            items: Vec::new(),
            body,
        }
    }

    fn container_body() -> ElementBody {
        ElementBody::Container {
            vertical_alignment: VerticalAlignment::Top,
            min_height: None,
            actions: Vec::new(),
        }
    }

    pub fn card(body: Vec<CardElement>) -> Self {
        Self::new(tags::ADAPTIVE_CARD, Self::container_body()).with_items(body)
    }

    pub fn container(items: Vec<CardElement>) -> Self {
        Self::new(tags::CONTAINER, Self::container_body()).with_items(items)
    }

    pub fn column_set(columns: Vec<CardElement>) -> Self {
        Self::new(tags::COLUMN_SET, Self::container_body()).with_items(columns)
    }

    pub fn column(width: ColumnWidthSpec, items: Vec<CardElement>) -> Self {
        Self::new(
            tags::COLUMN,
            ElementBody::Column {
                width,
                vertical_alignment: VerticalAlignment::Top,
                min_height: None,
            },
        )
        .with_items(items)
    }

    pub fn text(text: &str) -> Self {
        Self::new(
            tags::TEXT_BLOCK,
            ElementBody::TextBlock {
                text: text.to_string(),
                wrap: false,
                size: TextSize::Default,
                weight: TextWeight::Default,
            },
        )
    }

    pub fn image(url: &str) -> Self {
        Self::new(
            tags::IMAGE,
            ElementBody::Image {
                url: url.to_string(),
                alt_text: None,
                pixel_width: None,
                pixel_height: None,
            },
        )
    }

    pub fn action_set(actions: Vec<Action>) -> Self {
        Self::new(tags::ACTION_SET, ElementBody::ActionSet { actions })
    }

    /// 未注册渲染器的自定义类型
    pub fn custom(type_tag: &str) -> Self {
        Self::new(type_tag, ElementBody::Custom(serde_json::Map::new()))
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_items(mut self, items: Vec<CardElement>) -> Self {
        self.items = items;
        self
    }

    pub fn with_style(mut self, style: ContainerStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_separator(mut self) -> Self {
        self.separator = true;
        self
    }

    pub fn with_height(mut self, height: HeightType) -> Self {
        self.height = height;
        self
    }

    pub fn with_select_action(mut self, action: Action) -> Self {
        self.select_action = Some(action);
        self
    }

    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }

    /// 用于警告信息的可读名称
    pub fn describe(&self) -> String {
        match &self.id {
            Some(id) => format!("{} '{}'", self.type_tag, id),
            None => self.type_tag.clone(),
        }
    }
}
