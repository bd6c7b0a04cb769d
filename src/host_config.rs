//! 宿主配置
//!
//! 由嵌入方提供的只读样式与间距配置。所有字段都有默认值，
//! 文档里只需写出要覆盖的部分。

use crate::color::Color;
use crate::error::ConfigError;
use crate::model::{ContainerStyle, Spacing, TextSize};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostConfig {
    pub supports_interactivity: bool,
    pub spacing: SpacingConfig,
    pub separator: SeparatorConfig,
    pub container_styles: ContainerStylesConfig,
    pub font_sizes: FontSizesConfig,
    pub image_sizes: ImageSizesConfig,
    pub actions: ActionsConfig,
    pub text_input: TextInputConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            supports_interactivity: true,
            spacing: SpacingConfig::default(),
            separator: SeparatorConfig::default(),
            container_styles: ContainerStylesConfig::default(),
            font_sizes: FontSizesConfig::default(),
            image_sizes: ImageSizesConfig::default(),
            actions: ActionsConfig::default(),
            text_input: TextInputConfig::default(),
        }
    }
}

impl HostConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 按扩展名选择格式（.json / .toml）
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&contents),
            Some("toml") => Self::from_toml(&contents),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// 间距枚举对应的像素值
    pub fn spacing_for(&self, spacing: Spacing) -> f32 {
        let s = &self.spacing;
        match spacing {
            Spacing::None => 0.0,
            Spacing::Small => s.small,
            Spacing::Default => s.default,
            Spacing::Medium => s.medium,
            Spacing::Large => s.large,
            Spacing::ExtraLarge => s.extra_large,
            Spacing::Padding => s.padding,
        }
    }

    pub fn style_definition(&self, style: ContainerStyle) -> &ContainerStyleDefinition {
        let styles = &self.container_styles;
        match style {
            ContainerStyle::Default => &styles.default,
            ContainerStyle::Emphasis => &styles.emphasis,
            ContainerStyle::Good => &styles.good,
            ContainerStyle::Attention => &styles.attention,
            ContainerStyle::Warning => &styles.warning,
            ContainerStyle::Accent => &styles.accent,
        }
    }

    pub fn font_size_for(&self, size: TextSize) -> f32 {
        let f = &self.font_sizes;
        match size {
            TextSize::Small => f.small,
            TextSize::Default => f.default,
            TextSize::Medium => f.medium,
            TextSize::Large => f.large,
            TextSize::ExtraLarge => f.extra_large,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacingConfig {
    pub small: f32,
    pub default: f32,
    pub medium: f32,
    pub large: f32,
    pub extra_large: f32,
    pub padding: f32,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            small: 3.0,
            default: 8.0,
            medium: 20.0,
            large: 30.0,
            extra_large: 40.0,
            padding: 15.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeparatorConfig {
    pub line_thickness: f32,
    pub line_color: Color,
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        Self {
            line_thickness: 1.0,
            line_color: Color::new(0xB2, 0x00, 0x00, 0x00),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerStyleDefinition {
    pub background_color: Color,
    pub foreground_color: Color,
}

impl ContainerStyleDefinition {
    const fn new(background: u32, foreground: u32) -> Self {
        Self {
            background_color: Color::from_hex(background),
            foreground_color: Color::from_hex(foreground),
        }
    }
}

impl Default for ContainerStyleDefinition {
    fn default() -> Self {
        Self::new(0xFFFFFF, 0x333333)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerStylesConfig {
    pub default: ContainerStyleDefinition,
    pub emphasis: ContainerStyleDefinition,
    pub good: ContainerStyleDefinition,
    pub attention: ContainerStyleDefinition,
    pub warning: ContainerStyleDefinition,
    pub accent: ContainerStyleDefinition,
}

impl Default for ContainerStylesConfig {
    fn default() -> Self {
        Self {
            default: ContainerStyleDefinition::new(0xFFFFFF, 0x333333),
            emphasis: ContainerStyleDefinition::new(0xF0F0F0, 0x333333),
            good: ContainerStyleDefinition::new(0xCCFFCC, 0x1B5E20),
            attention: ContainerStyleDefinition::new(0xFFC5B2, 0xB71C1C),
            warning: ContainerStyleDefinition::new(0xFFE2B2, 0xE65100),
            accent: ContainerStyleDefinition::new(0xDCE5F7, 0x0D47A1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSizesConfig {
    pub small: f32,
    pub default: f32,
    pub medium: f32,
    pub large: f32,
    pub extra_large: f32,
}

impl Default for FontSizesConfig {
    fn default() -> Self {
        Self {
            small: 12.0,
            default: 14.0,
            medium: 17.0,
            large: 21.0,
            extra_large: 26.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageSizesConfig {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
}

impl Default for ImageSizesConfig {
    fn default() -> Self {
        Self {
            small: 40.0,
            medium: 80.0,
            large: 160.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionsConfig {
    pub max_actions: usize,
    pub button_spacing: f32,
    pub button_height: f32,
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self {
            max_actions: 5,
            button_spacing: 10.0,
            button_height: 32.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextInputConfig {
    pub height: f32,
    pub multiline_height: f32,
}

impl Default for TextInputConfig {
    fn default() -> Self {
        Self {
            height: 32.0,
            multiline_height: 96.0,
        }
    }
}
