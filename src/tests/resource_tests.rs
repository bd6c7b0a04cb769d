//! 资源解析单元测试

use crate::resource::{FileResolver, MapResolver, NullResolver, ResolveError, ResourceResolver};

/// 测试内存解析器
#[test]
fn test_map_resolver() {
    let resolver = MapResolver::new().with_image("a.png", 10.0, 20.0);
    let image = resolver.resolve_image("a.png").unwrap();
    assert_eq!((image.width, image.height), (10.0, 20.0));
    assert!(matches!(resolver.resolve_image("b.png"), Err(ResolveError::NotFound(_))));
    assert!(NullResolver.resolve_image("a.png").is_err());
}

/// 测试读取本地图片尺寸
#[test]
fn test_file_resolver_reads_dimensions() {
    let dir = std::env::temp_dir().join(format!("card-render-images-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    image::RgbImage::new(3, 2).save(dir.join("tiny.png")).unwrap();

    let resolver = FileResolver::new(&dir);
    let image = resolver.resolve_image("tiny.png").unwrap();
    assert_eq!((image.width, image.height), (3.0, 2.0));

    let absolute = format!("file://{}", dir.join("tiny.png").display());
    assert!(resolver.resolve_image(&absolute).is_ok());

    assert!(matches!(resolver.resolve_image("nope.png"), Err(ResolveError::NotFound(_))));
    assert!(matches!(
        resolver.resolve_image("https://example.com/a.png"),
        Err(ResolveError::UnsupportedScheme(_))
    ));

    std::fs::write(dir.join("broken.png"), b"not an image").unwrap();
    assert!(matches!(resolver.resolve_image("broken.png"), Err(ResolveError::Decode { .. })));

    std::fs::remove_dir_all(&dir).ok();
}
