//! 渲染器基础定义

use crate::color::Color;
use crate::error::RenderError;
use crate::host_config::HostConfig;
use crate::model::{Action, CardElement, ColumnWidth, ContainerStyle, HeightType, VerticalAlignment};
use crate::renderer::context::{RenderArgs, RenderContext};
use crate::renderer::warning::WarningKind;

/// 平台无关的输出节点
#[derive(Debug, Clone, PartialEq)]
pub struct UiElement {
    pub kind: UiKind,
    /// 来源元素的类型标签
    pub source_type: String,
    pub element_id: Option<String>,
    pub style: NodeStyle,
    pub children: Vec<UiElement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiKind {
    Panel {
        orientation: Orientation,
    },
    Text {
        text: String,
        font_size: f32,
        bold: bool,
        wrap: bool,
    },
    Image {
        uri: String,
        alt_text: Option<String>,
        /// 资源解析成功时为 true
        resolved: bool,
        width: f32,
        height: f32,
    },
    TextInput {
        placeholder: Option<String>,
        value: Option<String>,
        multiline: bool,
        height: f32,
    },
    Button {
        title: String,
        action: Action,
        height: f32,
    },
    /// 可点击包装，只有一个子节点
    Actionable {
        action: Action,
    },
}

/// 分隔线
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatorLine {
    pub thickness: f32,
    pub color: Color,
}

/// 节点样式与布局提示
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeStyle {
    pub container_style: Option<ContainerStyle>,
    pub background_color: Option<Color>,
    pub foreground_color: Option<Color>,
    pub padding: f32,
    /// 与前一个兄弟节点之间的间距
    pub spacing_before: f32,
    pub separator: Option<SeparatorLine>,
    /// 只在横向父容器中生效
    pub width: ColumnWidth,
    pub height: HeightType,
    pub min_height: Option<f32>,
    pub vertical_alignment: VerticalAlignment,
}

impl UiElement {
    pub fn new(kind: UiKind, element: &CardElement) -> Self {
        Self {
            kind,
            source_type: element.type_tag.clone(),
            element_id: element.id.clone(),
            style: NodeStyle {
                height: element.height,
                ..Default::default()
            },
            children: Vec::new(),
        }
    }

    pub fn panel(element: &CardElement, orientation: Orientation, children: Vec<UiElement>) -> Self {
        let mut node = Self::new(UiKind::Panel { orientation }, element);
        node.children = children;
        node
    }

    /// 用可点击节点包装，宽高提示移到包装节点上
    pub fn actionable(action: Action, inner: UiElement) -> Self {
        let style = NodeStyle {
            width: inner.style.width,
            height: inner.style.height,
            ..Default::default()
        };
        Self {
            kind: UiKind::Actionable { action },
            source_type: inner.source_type.clone(),
            element_id: inner.element_id.clone(),
            style,
            children: vec![inner],
        }
    }

    pub fn is_actionable(&self) -> bool {
        matches!(self.kind, UiKind::Actionable { .. })
    }

    /// 前序查找
    pub fn find_by_id(&self, id: &str) -> Option<&UiElement> {
        if self.element_id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_id(id))
    }

    /// 可读的树形文本，主要用于调试输出
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, indent: usize) {
        let label = match &self.kind {
            UiKind::Panel { orientation } => format!("Panel({:?})", orientation),
            UiKind::Text { text, .. } => format!("Text({:?})", text),
            UiKind::Image { uri, resolved, .. } => format!("Image({}, resolved={})", uri, resolved),
            UiKind::TextInput { .. } => "TextInput".to_string(),
            UiKind::Button { title, .. } => format!("Button({:?})", title),
            UiKind::Actionable { action } => format!("Actionable({})", action.action_type),
        };
        let id = self.element_id.as_deref().map(|id| format!(" #{}", id)).unwrap_or_default();
        out.push_str(&format!("{}{} <{}>{}\n", "  ".repeat(indent), label, self.source_type, id));
        for child in &self.children {
            child.dump_into(out, indent + 1);
        }
    }
}

/// 元素渲染器
///
/// 每种元素类型实现一次。不能修改元素模型；失败时返回错误而不是半成品节点。
pub trait ElementRenderer: Send + Sync {
    fn render(
        &self,
        element: &CardElement,
        ctx: &mut RenderContext<'_>,
        args: &RenderArgs,
    ) -> Result<UiElement, RenderError>;
}

/// 当前节点的已解析样式（栈顶帧）
pub fn current_style(ctx: &RenderContext<'_>) -> ContainerStyle {
    ctx.ancestors().nearest_style().unwrap_or_default()
}

/// 容器类节点的样式：样式与父节点不同才加背景和内边距
pub fn container_node_style(host: &HostConfig, style: ContainerStyle, parent_style: ContainerStyle) -> NodeStyle {
    let definition = host.style_definition(style);
    let differs = style != parent_style;
    NodeStyle {
        container_style: Some(style),
        background_color: differs.then_some(definition.background_color),
        foreground_color: Some(definition.foreground_color),
        padding: if differs { host.spacing.padding } else { 0.0 },
        ..Default::default()
    }
}

/// 按顺序渲染子元素
///
/// 不可见或被丢弃的子元素不产生节点，也不占间距；
/// 第一个产生节点的子元素之前没有间距和分隔线。
pub fn render_items<'e>(
    ctx: &mut RenderContext<'_>,
    items: impl IntoIterator<Item = &'e CardElement>,
    args: &RenderArgs,
) -> Result<Vec<UiElement>, RenderError> {
    let mut rendered = Vec::new();
    for item in items {
        let Some(mut node) = ctx.render_child(item, args)? else {
            continue;
        };
        if !rendered.is_empty() {
            apply_spacing(ctx.host_config(), item, &mut node);
        }
        rendered.push(node);
    }
    Ok(rendered)
}

fn apply_spacing(host: &HostConfig, item: &CardElement, node: &mut UiElement) {
    node.style.spacing_before = host.spacing_for(item.spacing);
    if item.separator {
        node.style.separator = Some(SeparatorLine {
            thickness: host.separator.line_thickness,
            color: host.separator.line_color,
        });
    }
}

/// 元素的 selectAction 是否会被保留
pub fn keeps_select_action(ctx: &RenderContext<'_>, element: &CardElement, args: &RenderArgs) -> bool {
    element.select_action.is_some()
        && !args.ancestor_has_select_action
        && ctx.host_config().supports_interactivity
}

/// 按需包装 selectAction；冲突或宿主不支持交互时丢弃并记录警告
pub fn apply_select_action(
    ctx: &mut RenderContext<'_>,
    element: &CardElement,
    args: &RenderArgs,
    node: UiElement,
) -> UiElement {
    let Some(action) = &element.select_action else {
        return node;
    };
    if args.ancestor_has_select_action {
        ctx.add_warning(
            WarningKind::ActionConflict,
            format!(
                "action conflict: selectAction on {} ignored because an ancestor already has one",
                element.describe()
            ),
        );
        return node;
    }
    if !ctx.host_config().supports_interactivity {
        ctx.add_warning(
            WarningKind::InteractivityDisabled,
            format!("selectAction on {} ignored: host does not support interactivity", element.describe()),
        );
        return node;
    }
    UiElement::actionable(action.clone(), node)
}

/// 将动作列表渲染为横向按钮面板
pub fn render_action_buttons(
    ctx: &mut RenderContext<'_>,
    owner: &CardElement,
    actions: &[Action],
) -> UiElement {
    let host = ctx.host_config();
    let max = host.actions.max_actions;
    if actions.len() > max {
        ctx.add_warning(
            WarningKind::MaxActionsExceeded,
            format!(
                "{} declares {} actions, only the first {} are shown",
                owner.describe(),
                actions.len(),
                max
            ),
        );
    }

    let mut buttons = Vec::new();
    if host.supports_interactivity {
        for (i, action) in actions.iter().take(max).enumerate() {
            let mut button = UiElement::new(
                UiKind::Button {
                    title: action.title.clone().unwrap_or_default(),
                    action: action.clone(),
                    height: host.actions.button_height,
                },
                owner,
            );
            button.element_id = action.id.clone();
            button.style.height = HeightType::Auto;
            if i > 0 {
                button.style.spacing_before = host.actions.button_spacing;
            }
            buttons.push(button);
        }
    } else if !actions.is_empty() {
        ctx.add_warning(
            WarningKind::InteractivityDisabled,
            format!("actions on {} ignored: host does not support interactivity", owner.describe()),
        );
    }

    UiElement::panel(owner, Orientation::Horizontal, buttons)
}
