//! 卡片渲染命令行工具
//!
//! 用法: render-card <card.json> [host-config.json|toml] [width]

use card_render::layout::{compute_layout, LayoutNode};
use card_render::model::parse_card;
use card_render::resource::FileResolver;
use card_render::{HostConfig, RenderEngine, RendererRegistry};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let Some(card_path) = args.get(1) else {
        eprintln!("usage: {} <card.json> [host-config.json|toml] [width]", args[0]);
        std::process::exit(2);
    };

    let host_config = match args.get(2) {
        Some(path) => HostConfig::load_from_file(path)?,
        None => HostConfig::default(),
    };
    let width: f32 = match args.get(3) {
        Some(w) => w.parse()?,
        None => 400.0,
    };

    let card = parse_card(&std::fs::read_to_string(card_path)?)?;
    let base_dir = Path::new(card_path).parent().unwrap_or(Path::new("."));
    let resolver = FileResolver::new(base_dir);

    let registry = RendererRegistry::global();
    for warning in registry.registration_warnings() {
        println!("registry: {}", warning);
    }

    let engine = RenderEngine::new(registry, &host_config).with_resolver(&resolver);
    let output = engine.render(&card);

    match &output.root {
        Some(root) => {
            println!("{}", root.dump());
            let layout = compute_layout(root, &host_config, width)?;
            print_layout(&layout, 0);
        }
        None => println!("(card produced no output)"),
    }

    println!("✅ {} warning(s)", output.warnings.len());
    for warning in &output.warnings {
        println!("   - {}", warning);
    }
    Ok(())
}

fn print_layout(node: &LayoutNode, indent: usize) {
    let f = &node.frame;
    println!(
        "{}[{:.1}, {:.1}, {:.1} x {:.1}]{}",
        "  ".repeat(indent),
        f.x,
        f.y,
        f.width,
        f.height,
        node.element_id.as_deref().map(|id| format!(" #{}", id)).unwrap_or_default()
    );
    for child in &node.children {
        print_layout(child, indent + 1);
    }
}
