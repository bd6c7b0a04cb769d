//! 资源解析
//!
//! 图片等外部资源由平台提供的解析器查询。解析是同步的：
//! 节点在资源查询返回之前不算渲染完成。

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 已解析的图片
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedImage {
    pub uri: String,
    pub width: f32,
    pub height: f32,
}

#[derive(thiserror::Error, Debug)]
pub enum ResolveError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("unsupported resource scheme: {0}")]
    UnsupportedScheme(String),

    #[error("failed to decode image {uri}: {reason}")]
    Decode { uri: String, reason: String },
}

/// 资源解析器
pub trait ResourceResolver {
    fn resolve_image(&self, uri: &str) -> Result<ResolvedImage, ResolveError>;
}

/// 不解析任何资源
#[derive(Debug, Default, Clone, Copy)]
pub struct NullResolver;

impl ResourceResolver for NullResolver {
    fn resolve_image(&self, uri: &str) -> Result<ResolvedImage, ResolveError> {
        Err(ResolveError::NotFound(uri.to_string()))
    }
}

/// 内存中的 uri → 尺寸表
#[derive(Debug, Default, Clone)]
pub struct MapResolver {
    images: HashMap<String, (f32, f32)>,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, uri: &str, width: f32, height: f32) -> Self {
        self.images.insert(uri.to_string(), (width, height));
        self
    }
}

impl ResourceResolver for MapResolver {
    fn resolve_image(&self, uri: &str) -> Result<ResolvedImage, ResolveError> {
        let (width, height) = self
            .images
            .get(uri)
            .copied()
            .ok_or_else(|| ResolveError::NotFound(uri.to_string()))?;
        Ok(ResolvedImage { uri: uri.to_string(), width, height })
    }
}

/// 从本地文件读取图片尺寸
///
/// 支持相对路径（相对 `base_dir`）和 `file://` 前缀；网络地址不支持。
#[derive(Debug, Clone)]
pub struct FileResolver {
    base_dir: PathBuf,
}

impl FileResolver {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    fn local_path(&self, uri: &str) -> Result<PathBuf, ResolveError> {
        if uri.contains("://") && !uri.starts_with("file://") {
            return Err(ResolveError::UnsupportedScheme(uri.to_string()));
        }
        let raw = uri.trim_start_matches("file://");
        let path = Path::new(raw);
        Ok(if path.is_absolute() { path.to_path_buf() } else { self.base_dir.join(path) })
    }
}

impl ResourceResolver for FileResolver {
    fn resolve_image(&self, uri: &str) -> Result<ResolvedImage, ResolveError> {
        let path = self.local_path(uri)?;
        if !path.exists() {
            return Err(ResolveError::NotFound(uri.to_string()));
        }
        let (width, height) = image::image_dimensions(&path).map_err(|e| ResolveError::Decode {
            uri: uri.to_string(),
            reason: e.to_string(),
        })?;
        Ok(ResolvedImage {
            uri: uri.to_string(),
            width: width as f32,
            height: height as f32,
        })
    }
}
