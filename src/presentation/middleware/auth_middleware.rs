// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::infrastructure::database::entities::api_key;
use crate::presentation::errors::AuthError;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::debug;

use std::sync::Arc;

/// 认证状态
#[derive(Clone)]
pub struct AuthState {
    /// 数据库连接
    pub db: Arc<DatabaseConnection>,
}

/// 能力门禁中间件
///
/// 验证请求中的API密钥并检查其验证数据访问能力。
/// 门禁在任何处理器之前执行：失败的请求带结构化错误对象返回，
/// 管道完全不会运行，不产生部分结果。
///
/// # 参数
///
/// * `state` - 认证状态
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
///
/// # 返回值
///
/// * `Ok(Response)` - 认证成功的响应
/// * `Err(AuthError)` - 带结构化错误体的授权失败
pub async fn auth_middleware(
    State(state): State<AuthState>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    // Allow public endpoints
    let path = req.uri().path();
    debug!("AuthMiddleware processing path: {}", path);
    if path == "/health" || path == "/v1/version" || path == "/v1/scannable-urls/schema" {
        return Ok(next.run(req).await);
    }

    let token_str = {
        let auth_header = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .ok_or_else(|| {
                AuthError::unauthorized("Sorry, you are not allowed to access validation data.")
            })?;

        if !auth_header.starts_with("Bearer ") {
            return Err(AuthError::unauthorized(
                "Sorry, you are not allowed to access validation data.",
            ));
        }

        auth_header[7..].to_string()
    };

    // Query DB to validate the key and its capability
    match api_key::Entity::find()
        .filter(api_key::Column::Key.eq(token_str.clone()))
        .one(state.db.as_ref())
        .await
    {
        Ok(Some(key)) if key.can_validate => Ok(next.run(req).await),
        Ok(Some(_)) => {
            tracing::warn!("API key lacks the validate capability");
            Err(AuthError::forbidden(
                "Sorry, you are not allowed to access validation data.",
            ))
        }
        Ok(None) => {
            tracing::warn!("API key not found");
            Err(AuthError::unauthorized(
                "Sorry, you are not allowed to access validation data.",
            ))
        }
        Err(e) => {
            tracing::error!("Database error checking API key: {}", e);
            Err(AuthError::internal("Could not verify the API key."))
        }
    }
}
