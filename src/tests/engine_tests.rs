//! 渲染引擎单元测试
//! 测试注册表查找、祖先栈、样式继承和幂等性

use crate::error::{RegistryError, RenderError};
use crate::host_config::HostConfig;
use crate::model::*;
use crate::renderer::components::{render_items, ElementRenderer, Orientation, UiElement, UiKind};
use crate::renderer::{RenderArgs, RenderContext, RenderEngine, RenderOutput, RendererRegistry, WarningKind};
use std::sync::{Arc, Mutex};

/// 辅助函数：用内置渲染器和默认配置渲染
fn render(root: &CardElement) -> RenderOutput {
    let registry = RendererRegistry::with_defaults();
    let host = HostConfig::default();
    RenderEngine::new(&registry, &host).render(root)
}

/// 记录每个节点渲染时祖先栈深度的测试渲染器
struct DepthProbe {
    depths: Arc<Mutex<Vec<usize>>>,
}

impl ElementRenderer for DepthProbe {
    fn render(
        &self,
        element: &CardElement,
        ctx: &mut RenderContext<'_>,
        args: &RenderArgs,
    ) -> Result<UiElement, RenderError> {
        self.depths.lock().unwrap().push(ctx.ancestors().depth());
        let style = ctx.ancestors().nearest_style().unwrap_or_default();
        let children = render_items(ctx, &element.items, &args.for_children(element, style, false))?;
        Ok(UiElement::panel(element, Orientation::Vertical, children))
    }
}

/// 输出固定文本的测试渲染器
struct LabelRenderer(&'static str);

impl ElementRenderer for LabelRenderer {
    fn render(
        &self,
        element: &CardElement,
        _ctx: &mut RenderContext<'_>,
        _args: &RenderArgs,
    ) -> Result<UiElement, RenderError> {
        Ok(UiElement::new(
            UiKind::Text { text: self.0.into(), font_size: 14.0, bold: false, wrap: false },
            element,
        ))
    }
}

/// 测试未注册类型且无回退：不输出节点，恰好一条 UnsupportedType 警告
#[test]
fn test_unregistered_type_is_dropped_with_one_warning() {
    let card = CardElement::card(vec![CardElement::custom("Rating").with_id("rating")]);
    let output = render(&card);

    let root = output.root.expect("card should render");
    assert!(root.children.is_empty());
    assert_eq!(output.warnings.len(), 1);
    assert_eq!(output.warnings[0].kind, WarningKind::UnsupportedType);
    assert!(output.warnings[0].message.contains("Rating"));
}

/// 测试未注册的根节点
#[test]
fn test_unregistered_root_produces_no_tree() {
    let output = render(&CardElement::custom("Mystery"));
    assert!(output.root.is_none());
    assert_eq!(output.warnings.len(), 1);
    assert_eq!(output.warnings[0].kind, WarningKind::UnsupportedType);
}

/// 测试失败的兄弟节点不影响其余节点
#[test]
fn test_failed_sibling_does_not_abort_loop() {
    let card = CardElement::card(vec![
        CardElement::text("first").with_id("a"),
        CardElement::custom("Broken"),
        CardElement::text("second").with_id("b"),
    ]);
    let output = render(&card);
    let root = output.root.unwrap();

    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[0].element_id.as_deref(), Some("a"));
    assert_eq!(root.children[1].element_id.as_deref(), Some("b"));
    assert_eq!(output.warnings.len(), 1);
}

/// 测试同一棵树渲染两次结果完全相同
#[test]
fn test_render_is_idempotent() {
    let card = CardElement::card(vec![
        CardElement::container(vec![
            CardElement::text("hello"),
            CardElement::custom("Unknown"),
        ])
        .with_style(ContainerStyle::Accent),
        CardElement::column_set(vec![
            CardElement::column(ColumnWidthSpec::stretch(), vec![CardElement::text("a")]),
            CardElement::column(ColumnWidthSpec::pixels(80.0), vec![])
                .with_select_action(Action::open_url("https://example.com")),
        ]),
    ]);

    let registry = RendererRegistry::with_defaults();
    let host = HostConfig::default();
    let engine = RenderEngine::new(&registry, &host);

    let first = engine.render(&card);
    let second = engine.render(&card);
    assert_eq!(first, second);
    assert_eq!(first.warnings.len(), 1);
}

/// 测试渲染结束后祖先栈回到空
#[test]
fn test_ancestor_stack_is_empty_after_render() {
    let card = CardElement::card(vec![
        CardElement::column(ColumnWidthSpec::auto(), vec![]),
        CardElement::container(vec![CardElement::custom("Nope")]),
        CardElement::column_set(vec![CardElement::column(
            ColumnWidthSpec::auto(),
            vec![CardElement::text("deep")],
        )]),
    ]);

    let registry = RendererRegistry::with_defaults();
    let host = HostConfig::default();
    let engine = RenderEngine::new(&registry, &host);
    let mut ctx = engine.new_context();

    let root = engine.render_in(&mut ctx, &card);
    assert!(root.is_some());
    assert_eq!(ctx.ancestors().depth(), 0);
    assert_eq!(ctx.warnings().len(), 2);
}

/// 测试渲染时祖先栈深度等于节点在树中的深度
#[test]
fn test_ancestor_depth_matches_tree_depth() {
    let depths = Arc::new(Mutex::new(Vec::new()));
    let mut registry = RendererRegistry::new();
    registry.register("Probe", DepthProbe { depths: depths.clone() });

    let tree = CardElement::custom("Probe").with_items(vec![
        CardElement::custom("Probe").with_items(vec![CardElement::custom("Probe")]),
        CardElement::custom("Probe"),
    ]);

    let host = HostConfig::default();
    let output = RenderEngine::new(&registry, &host).render(&tree);

    assert!(output.warnings.is_empty());
    assert_eq!(*depths.lock().unwrap(), vec![1, 2, 3, 2]);
}

/// 测试没有显式样式的子元素继承最近祖先的样式
#[test]
fn test_child_inherits_nearest_ancestor_style() {
    let card = CardElement::card(vec![CardElement::container(vec![CardElement::column_set(vec![
        CardElement::column(ColumnWidthSpec::stretch(), vec![CardElement::text("inside").with_id("t")])
            .with_id("col"),
    ])])
    .with_style(ContainerStyle::Emphasis)]);

    let host = HostConfig::default();
    let output = render(&card);
    let root = output.root.unwrap();

    let column = root.find_by_id("col").unwrap();
    assert_eq!(column.style.container_style, Some(ContainerStyle::Emphasis));
    // 与父节点样式相同，不重复加背景和内边距
    assert_eq!(column.style.background_color, None);
    assert_eq!(column.style.padding, 0.0);

    let text = root.find_by_id("t").unwrap();
    assert_eq!(
        text.style.foreground_color,
        Some(host.container_styles.emphasis.foreground_color)
    );
}

/// 测试显式样式覆盖继承样式
#[test]
fn test_explicit_style_wins_over_inherited() {
    let card = CardElement::card(vec![CardElement::container(vec![
        CardElement::container(vec![]).with_id("inner").with_style(ContainerStyle::Good),
    ])
    .with_style(ContainerStyle::Emphasis)]);

    let host = HostConfig::default();
    let root = render(&card).root.unwrap();
    let inner = root.find_by_id("inner").unwrap();

    assert_eq!(inner.style.container_style, Some(ContainerStyle::Good));
    assert_eq!(inner.style.background_color, Some(host.container_styles.good.background_color));
    assert_eq!(inner.style.padding, host.spacing.padding);
}

/// 测试样式解析优先级
#[test]
fn test_resolve_style_precedence() {
    use ContainerStyle::*;
    assert_eq!(RenderContext::resolve_style_with(Some(Good), Some(Emphasis)), Good);
    assert_eq!(RenderContext::resolve_style_with(None, Some(Emphasis)), Emphasis);
    assert_eq!(RenderContext::resolve_style_with(None, None), Default);
}

/// 测试重复注册会覆盖并产生警告
#[test]
fn test_duplicate_registration_replaces_and_warns() {
    let mut registry = RendererRegistry::with_defaults();
    assert!(registry.registration_warnings().is_empty());

    registry.register("Label", LabelRenderer("first"));
    registry.register("Label", LabelRenderer("second"));

    assert_eq!(registry.registration_warnings().len(), 1);
    assert_eq!(registry.registration_warnings()[0].kind, WarningKind::DuplicateRenderer);

    let host = HostConfig::default();
    let output = RenderEngine::new(&registry, &host).render(&CardElement::custom("Label"));
    match output.root.unwrap().kind {
        UiKind::Text { text, .. } => assert_eq!(text, "second"),
        other => panic!("unexpected node {:?}", other),
    }
}

/// 测试查找失败返回 NotFound
#[test]
fn test_lookup_missing_returns_not_found() {
    let registry = RendererRegistry::with_defaults();
    assert!(registry.lookup(tags::COLUMN).is_ok());
    assert_eq!(
        registry.lookup("Input.Rating").err(),
        Some(RegistryError::NotFound("Input.Rating".into()))
    );
}

/// 测试进程级注册表只能安装一次
#[test]
fn test_global_registry_is_installed_once() {
    let global = RendererRegistry::global();
    assert!(global.contains(tags::COLUMN_SET));
    assert_eq!(
        RendererRegistry::install_global(RendererRegistry::new()),
        Err(RegistryError::AlreadyInstalled)
    );

    let host = HostConfig::default();
    let output = RenderEngine::with_global_registry(&host).render(&CardElement::card(vec![]));
    assert!(output.root.is_some());
}

/// 测试不可见元素不产生节点也不产生警告
#[test]
fn test_invisible_elements_render_nothing() {
    let card = CardElement::card(vec![
        CardElement::text("hidden").hidden(),
        CardElement::custom("AlsoHidden").hidden(),
    ]);
    let output = render(&card);
    assert!(output.root.unwrap().children.is_empty());
    assert!(output.warnings.is_empty());
}
