// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scannable_url::ScannableUrl;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// 可扫描URL响应数据传输对象
///
/// 固定的线上字段集：内部表示中任何额外字段都不会出现在这里。
/// 三个派生字段可为 null 但永远存在（序列化为显式的 `null`，
/// 不会缺键），且要么同时为 null、要么同时有值。
#[derive(Debug, Serialize, Deserialize)]
pub struct ScannableUrlDto {
    /// 规范URL
    pub url: String,
    /// AMP版本URL
    pub amp_url: String,
    /// 语义类型
    #[serde(rename = "type")]
    pub page_type: String,
    /// 人类可读标签
    pub label: String,
    /// 验证记录引用，未验证过时为 null
    pub validated_url_post: Option<ValidatedUrlPostDto>,
    /// 验证错误列表，未验证过时为 null
    pub validation_errors: Option<Vec<serde_json::Value>>,
    /// 记录是否陈旧，未验证过时为 null
    pub stale: Option<bool>,
}

/// 验证记录引用数据传输对象
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidatedUrlPostDto {
    /// 记录唯一标识符
    pub id: i64,
    /// 记录编辑链接
    pub edit_link: String,
}

impl From<ScannableUrl> for ScannableUrlDto {
    /// 把领域项投影到线上表示
    ///
    /// 纯投影，单个字段异常不会使整批失败
    fn from(item: ScannableUrl) -> Self {
        let (validated_url_post, validation_errors, stale) = match item.validation {
            Some(validation) => (
                Some(ValidatedUrlPostDto {
                    id: validation.post.id,
                    edit_link: validation.post.edit_link,
                }),
                Some(validation.errors),
                Some(validation.stale),
            ),
            None => (None, None, None),
        };

        Self {
            url: item.url.into(),
            amp_url: item.amp_url.into(),
            page_type: item.page_type,
            label: item.label,
            validated_url_post,
            validation_errors,
            stale,
        }
    }
}

/// 可扫描URL条目的JSON Schema
///
/// 与端点实际产出的字段集一一对应，供模式描述操作独立返回，
/// 无任何副作用
pub fn item_schema() -> serde_json::Value {
    json!({
        "$schema": "http://json-schema.org/draft-04/schema#",
        "title": "amp-scannable-urls",
        "type": "object",
        "properties": {
            "url": {
                "description": "URL",
                "type": "string",
                "format": "uri",
                "readonly": true
            },
            "amp_url": {
                "description": "AMP URL",
                "type": "string",
                "format": "uri",
                "readonly": true
            },
            "type": {
                "description": "Type",
                "type": "string",
                "readonly": true
            },
            "label": {
                "description": "Label",
                "type": "string",
                "readonly": true
            },
            "validated_url_post": {
                "description": "Validated URL post if previously scanned.",
                "type": ["object", "null"],
                "properties": {
                    "id": {
                        "type": "integer"
                    },
                    "edit_link": {
                        "type": "string",
                        "format": "uri"
                    }
                },
                "readonly": true
            },
            "validation_errors": {
                "description": "Validation errors for validated URL if previously scanned.",
                "type": ["array", "null"],
                "readonly": true
            },
            "stale": {
                "description": "Whether the validated URL post is stale.",
                "type": ["boolean", "null"],
                "readonly": true
            }
        }
    })
}
