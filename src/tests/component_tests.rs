//! 组件单元测试
//! 测试各元素渲染器的输出节点

use crate::host_config::HostConfig;
use crate::model::*;
use crate::renderer::{RenderEngine, RenderOutput, RendererRegistry, UiElement, UiKind, WarningKind};
use crate::resource::MapResolver;

/// 辅助函数：用给定配置渲染
fn render_with(root: &CardElement, host: &HostConfig) -> RenderOutput {
    let registry = RendererRegistry::with_defaults();
    RenderEngine::new(&registry, host).render(root)
}

/// 辅助函数：用默认配置渲染
fn render(root: &CardElement) -> RenderOutput {
    render_with(root, &HostConfig::default())
}

/// 辅助函数：带资源解析器渲染
fn render_with_images(root: &CardElement, resolver: &MapResolver) -> RenderOutput {
    let registry = RendererRegistry::with_defaults();
    let host = HostConfig::default();
    RenderEngine::new(&registry, &host).with_resolver(resolver).render(root)
}

/// 辅助函数：卡片的第一个子节点
fn first_child(output: &RenderOutput) -> &UiElement {
    &output.root.as_ref().expect("card should render").children[0]
}

/// 辅助函数：文本输入元素
fn text_input(id: Option<&str>, multiline: bool) -> CardElement {
    let mut input = CardElement::new(
        tags::TEXT_INPUT,
        ElementBody::TextInput {
            placeholder: Some("name".into()),
            value: None,
            is_multiline: multiline,
        },
    );
    input.id = id.map(str::to_string);
    input
}

/// 测试根卡片总是带背景和内边距
#[test]
fn test_card_has_background_and_padding() {
    let host = HostConfig::default();
    let output = render_with(&CardElement::card(vec![]), &host);
    let root = output.root.unwrap();

    assert!(matches!(root.kind, UiKind::Panel { .. }));
    assert_eq!(root.style.container_style, Some(ContainerStyle::Default));
    assert_eq!(root.style.background_color, Some(host.container_styles.default.background_color));
    assert_eq!(root.style.padding, host.spacing.padding);
}

/// 测试文本节点的字号和粗细
#[test]
fn test_text_block_size_and_weight() {
    let host = HostConfig::default();
    let text = CardElement::new(
        tags::TEXT_BLOCK,
        ElementBody::TextBlock {
            text: "Title".into(),
            wrap: true,
            size: TextSize::Large,
            weight: TextWeight::Bolder,
        },
    );
    let output = render_with(&CardElement::card(vec![text]), &host);

    match &first_child(&output).kind {
        UiKind::Text { text, font_size, bold, wrap } => {
            assert_eq!(text, "Title");
            assert_eq!(*font_size, host.font_sizes.large);
            assert!(*bold);
            assert!(*wrap);
        }
        other => panic!("expected text, got {:?}", other),
    }
}

/// 测试图片按原图比例计算高度
#[test]
fn test_image_keeps_aspect_ratio() {
    let resolver = MapResolver::new().with_image("cat.png", 200.0, 100.0);
    let mut image = CardElement::image("cat.png");
    image.body = ElementBody::Image {
        url: "cat.png".into(),
        alt_text: Some("a cat".into()),
        pixel_width: Some(50.0),
        pixel_height: None,
    };
    let output = render_with_images(&CardElement::card(vec![image]), &resolver);

    match &first_child(&output).kind {
        UiKind::Image { resolved, width, height, alt_text, .. } => {
            assert!(*resolved);
            assert_eq!(*width, 50.0);
            assert_eq!(*height, 25.0);
            assert_eq!(alt_text.as_deref(), Some("a cat"));
        }
        other => panic!("expected image, got {:?}", other),
    }
    assert!(output.warnings.is_empty());
}

/// 测试图片没有显式尺寸时使用原图尺寸
#[test]
fn test_image_uses_natural_size() {
    let resolver = MapResolver::new().with_image("dog.png", 64.0, 48.0);
    let output = render_with_images(&CardElement::card(vec![CardElement::image("dog.png")]), &resolver);

    match &first_child(&output).kind {
        UiKind::Image { width, height, .. } => assert_eq!((*width, *height), (64.0, 48.0)),
        other => panic!("expected image, got {:?}", other),
    }
}

/// 测试图片资源解析失败时输出占位节点并记录警告
#[test]
fn test_unresolved_image_is_placeholder() {
    let host = HostConfig::default();
    let output = render_with(&CardElement::card(vec![CardElement::image("missing.png")]), &host);

    match &first_child(&output).kind {
        UiKind::Image { resolved, width, height, .. } => {
            assert!(!*resolved);
            assert_eq!(*width, host.image_sizes.medium);
            assert_eq!(*height, host.image_sizes.medium);
        }
        other => panic!("expected image, got {:?}", other),
    }
    assert_eq!(output.warnings.len(), 1);
    assert_eq!(output.warnings[0].kind, WarningKind::ResourceUnavailable);
}

/// 测试空 url 的图片被丢弃
#[test]
fn test_image_without_url_is_dropped() {
    let output = render(&CardElement::card(vec![CardElement::image("")]));
    assert!(output.root.as_ref().unwrap().children.is_empty());
    assert_eq!(output.warnings[0].kind, WarningKind::InvalidState);
}

/// 测试文本输入框高度
#[test]
fn test_text_input_height() {
    let host = HostConfig::default();
    let card = CardElement::card(vec![text_input(Some("single"), false), text_input(Some("multi"), true)]);
    let output = render_with(&card, &host);
    let root = output.root.unwrap();

    match &root.find_by_id("single").unwrap().kind {
        UiKind::TextInput { height, multiline, .. } => {
            assert_eq!(*height, host.text_input.height);
            assert!(!*multiline);
        }
        other => panic!("expected input, got {:?}", other),
    }
    match &root.find_by_id("multi").unwrap().kind {
        UiKind::TextInput { height, .. } => assert_eq!(*height, host.text_input.multiline_height),
        other => panic!("expected input, got {:?}", other),
    }
}

/// 测试没有 id 的输入框被丢弃
#[test]
fn test_text_input_requires_id() {
    let output = render(&CardElement::card(vec![text_input(None, false)]));
    assert!(output.root.as_ref().unwrap().children.is_empty());
    assert_eq!(output.warnings.len(), 1);
    assert_eq!(output.warnings[0].kind, WarningKind::InvalidState);
}

/// 测试 ActionSet 生成按钮
#[test]
fn test_action_set_buttons() {
    let host = HostConfig::default();
    let actions = vec![Action::submit("Save"), Action::open_url("https://example.com")];
    let output = render_with(&CardElement::card(vec![CardElement::action_set(actions)]), &host);
    let bar = first_child(&output);

    assert!(matches!(bar.kind, UiKind::Panel { orientation: crate::renderer::Orientation::Horizontal }));
    assert_eq!(bar.children.len(), 2);
    match &bar.children[0].kind {
        UiKind::Button { title, height, .. } => {
            assert_eq!(title, "Save");
            assert_eq!(*height, host.actions.button_height);
        }
        other => panic!("expected button, got {:?}", other),
    }
    assert_eq!(bar.children[0].style.spacing_before, 0.0);
    assert_eq!(bar.children[1].style.spacing_before, host.actions.button_spacing);
}

/// 测试超过 maxActions 的按钮被截断
#[test]
fn test_max_actions_truncates() {
    let mut host = HostConfig::default();
    host.actions.max_actions = 2;
    let actions = vec![Action::submit("a"), Action::submit("b"), Action::submit("c")];
    let output = render_with(&CardElement::card(vec![CardElement::action_set(actions)]), &host);

    assert_eq!(first_child(&output).children.len(), 2);
    assert_eq!(output.warnings.len(), 1);
    assert_eq!(output.warnings[0].kind, WarningKind::MaxActionsExceeded);
}

/// 测试宿主不支持交互时不生成按钮
#[test]
fn test_actions_without_interactivity() {
    let host = HostConfig { supports_interactivity: false, ..Default::default() };
    let output = render_with(&CardElement::card(vec![CardElement::action_set(vec![Action::submit("a")])]), &host);

    assert!(first_child(&output).children.is_empty());
    assert_eq!(output.warnings.len(), 1);
    assert_eq!(output.warnings[0].kind, WarningKind::InteractivityDisabled);
}

/// 测试卡片级 actions 追加在最后
#[test]
fn test_card_actions_are_appended() {
    let host = HostConfig::default();
    let mut card = CardElement::card(vec![CardElement::text("body")]);
    card.body = ElementBody::Container {
        vertical_alignment: VerticalAlignment::Top,
        min_height: None,
        actions: vec![Action::submit("OK")],
    };
    let output = render_with(&card, &host);
    let root = output.root.unwrap();

    assert_eq!(root.children.len(), 2);
    let bar = &root.children[1];
    assert_eq!(bar.children.len(), 1);
    assert_eq!(bar.style.spacing_before, host.actions.button_spacing);
}
