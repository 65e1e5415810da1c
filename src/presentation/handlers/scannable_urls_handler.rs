// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::scannable_url_dto::{self, ScannableUrlDto};
use crate::domain::services::correlation_service::CorrelationService;
use crate::infrastructure::metrics;
use crate::presentation::errors::AppError;
use axum::{extract::Extension, Json};
use std::sync::Arc;
use tracing::debug;

/// 可扫描URL查询处理器
///
/// 调用关联服务并把结果投影为线上表示。能力门禁已在中间件
/// 层完成，走到这里的请求一定是已授权的。
///
/// # 参数
///
/// * `service` - 关联服务
///
/// # 返回值
///
/// * `Ok(Json)` - 按提供者顺序排列的可扫描URL数组
/// * `Err(AppError)` - 存储访问失败
pub async fn get_scannable_urls(
    Extension(service): Extension<Arc<CorrelationService>>,
) -> Result<Json<Vec<ScannableUrlDto>>, AppError> {
    let items = service.list_scannable_urls().await?;
    debug!(count = items.len(), "Scannable URLs correlated");

    metrics::record_scannable_urls_query(items.len());

    Ok(Json(
        items.into_iter().map(ScannableUrlDto::from).collect(),
    ))
}

/// 模式描述处理器
///
/// 返回条目的JSON Schema，无任何副作用，不依赖查询的实际执行
pub async fn get_item_schema() -> Json<serde_json::Value> {
    Json(scannable_url_dto::item_schema())
}
