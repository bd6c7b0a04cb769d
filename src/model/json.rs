//! 从已校验的 JSON 文档构建元素树
//!
//! 只做结构转换，不做 schema 校验。未知类型保留为 `ElementBody::Custom`。

use super::element::*;
use crate::error::ModelError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// 解析卡片 JSON 字符串
pub fn parse_card(json: &str) -> Result<CardElement, ModelError> {
    let value: Value = serde_json::from_str(json)?;
    element_from_value(&value)
}

/// 将一个 JSON 对象转换为元素
pub fn element_from_value(value: &Value) -> Result<CardElement, ModelError> {
    let obj = value
        .as_object()
        .ok_or_else(|| ModelError::NotAnObject("element".into()))?;
    let type_tag = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or(ModelError::MissingType)?;

    let body = match type_tag {
        tags::ADAPTIVE_CARD | tags::CONTAINER | tags::COLUMN_SET => ElementBody::Container {
            vertical_alignment: get_enum(obj, "verticalContentAlignment")?.unwrap_or_default(),
            min_height: get_pixels(obj, "minHeight")?,
            actions: get_actions(obj, "actions")?,
        },
        tags::COLUMN => ElementBody::Column {
            width: parse_column_width(obj)?,
            vertical_alignment: get_enum(obj, "verticalContentAlignment")?.unwrap_or_default(),
            min_height: get_pixels(obj, "minHeight")?,
        },
        tags::TEXT_BLOCK => ElementBody::TextBlock {
            text: get_str(obj, "text").unwrap_or_default(),
            wrap: get_bool(obj, "wrap").unwrap_or(false),
            size: get_enum(obj, "size")?.unwrap_or_default(),
            weight: get_enum(obj, "weight")?.unwrap_or_default(),
        },
        tags::IMAGE => ElementBody::Image {
            url: get_str(obj, "url").unwrap_or_default(),
            alt_text: get_str(obj, "altText"),
            pixel_width: get_pixels(obj, "width")?,
            pixel_height: get_pixels(obj, "height")?,
        },
        tags::TEXT_INPUT => ElementBody::TextInput {
            placeholder: get_str(obj, "placeholder"),
            value: get_str(obj, "value"),
            is_multiline: get_bool(obj, "isMultiline").unwrap_or(false),
        },
        tags::ACTION_SET => ElementBody::ActionSet {
            actions: get_actions(obj, "actions")?,
        },
        _ => ElementBody::Custom(obj.clone()),
    };

    let mut element = CardElement::new(type_tag, body);
    element.id = get_str(obj, "id");
    element.is_visible = get_bool(obj, "isVisible").unwrap_or(true);
    element.spacing = get_enum(obj, "spacing")?.unwrap_or_default();
    element.separator = get_bool(obj, "separator").unwrap_or(false);
    // Image 的 height 是像素值，不是 HeightType
    if type_tag != tags::IMAGE {
        element.height = get_enum(obj, "height")?.unwrap_or_default();
    }
    element.style = get_enum(obj, "style")?;
    element.select_action = match obj.get("selectAction") {
        Some(v) => Some(action_from_value(v)?),
        None => None,
    };
    element.fallback = parse_fallback(obj)?;

    let children_key = match type_tag {
        tags::ADAPTIVE_CARD => Some("body"),
        tags::CONTAINER | tags::COLUMN => Some("items"),
        tags::COLUMN_SET => Some("columns"),
        _ => None,
    };
    if let Some(key) = children_key {
        if let Some(children) = obj.get(key).and_then(Value::as_array) {
            element.items = children
                .iter()
                .map(element_from_value)
                .collect::<Result<Vec<_>, _>>()?;
        }
    }

    Ok(element)
}

fn action_from_value(value: &Value) -> Result<Action, ModelError> {
    let obj = value
        .as_object()
        .ok_or_else(|| ModelError::NotAnObject("action".into()))?;
    Ok(Action {
        action_type: get_str(obj, "type").ok_or(ModelError::MissingType)?,
        title: get_str(obj, "title"),
        url: get_str(obj, "url"),
        id: get_str(obj, "id"),
    })
}

fn get_actions(obj: &Map<String, Value>, key: &str) -> Result<Vec<Action>, ModelError> {
    match obj.get(key).and_then(Value::as_array) {
        Some(list) => list.iter().map(action_from_value).collect(),
        None => Ok(Vec::new()),
    }
}

fn parse_fallback(obj: &Map<String, Value>) -> Result<Fallback, ModelError> {
    match obj.get("fallback") {
        None => Ok(Fallback::None),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("drop") => Ok(Fallback::Drop),
        Some(v @ Value::Object(_)) => Ok(Fallback::Content(Box::new(element_from_value(v)?))),
        Some(other) => Err(ModelError::InvalidValue {
            field: "fallback".into(),
            value: other.to_string(),
        }),
    }
}

/// width 可以是 "auto"、"stretch"、"50px"、数字权重或数字字符串
fn parse_column_width(obj: &Map<String, Value>) -> Result<ColumnWidthSpec, ModelError> {
    let mut spec = ColumnWidthSpec::default();
    match obj.get("width") {
        None => {}
        Some(Value::Number(n)) => spec.weight = n.as_f64().map(|w| w as f32),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.eq_ignore_ascii_case("stretch") {
                spec.stretch = true;
            } else if s.eq_ignore_ascii_case("auto") {
                // 默认即 auto
            } else if let Some(px) = s.strip_suffix("px") {
                spec.pixel_width = Some(parse_number("width", px)?);
            } else {
                spec.weight = Some(parse_number("width", s)?);
            }
        }
        Some(other) => {
            return Err(ModelError::InvalidValue {
                field: "width".into(),
                value: other.to_string(),
            })
        }
    }
    if let Some(px) = get_pixels(obj, "pixelWidth")? {
        spec.pixel_width = Some(px);
    }
    Ok(spec)
}

fn parse_number(field: &str, s: &str) -> Result<f32, ModelError> {
    s.trim().parse().map_err(|_| ModelError::InvalidValue {
        field: field.into(),
        value: s.into(),
    })
}

/// "40px" 或数字；"auto" 等关键字返回 None
fn get_pixels(obj: &Map<String, Value>, key: &str) -> Result<Option<f32>, ModelError> {
    match obj.get(key) {
        Some(Value::Number(n)) => Ok(n.as_f64().map(|v| v as f32)),
        Some(Value::String(s)) => match s.trim().strip_suffix("px") {
            Some(px) => parse_number(key, px).map(Some),
            None => Ok(None),
        },
        _ => Ok(None),
    }
}

fn get_str(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn get_bool(obj: &Map<String, Value>, key: &str) -> Option<bool> {
    obj.get(key).and_then(Value::as_bool)
}

/// 枚举值大小写不敏感：先整体转小写再匹配，多词变体带小写别名
fn get_enum<T: DeserializeOwned>(obj: &Map<String, Value>, key: &str) -> Result<Option<T>, ModelError> {
    let Some(raw) = obj.get(key).and_then(Value::as_str) else {
        return Ok(None);
    };
    serde_json::from_value(Value::String(raw.to_lowercase()))
        .map(Some)
        .map_err(|_| ModelError::InvalidValue {
            field: key.into(),
            value: raw.into(),
        })
}
