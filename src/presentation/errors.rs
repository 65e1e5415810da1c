// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::repositories::validation_store::RepositoryError;

/// 授权错误码，未授权响应的机器可读标识
pub const CODE_CANNOT_VALIDATE_URLS: &str = "amp_rest_cannot_validate_urls";

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = self.0.to_string();

        // 存储故障在逐项分类之外，统一以500暴露
        let status = match self.0.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::Database(_db_err)) => StatusCode::INTERNAL_SERVER_ERROR,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// 授权错误
///
/// 调用方缺少访问验证数据的能力。响应体是单个结构化错误对象，
/// 带机器可读错误码和人类可读消息；不携带任何结果数据。
#[derive(Debug)]
pub struct AuthError {
    /// HTTP状态码（401 未认证，403 无能力）
    pub status: StatusCode,
    /// 机器可读错误码
    pub code: &'static str,
    /// 人类可读消息
    pub message: String,
}

impl AuthError {
    /// 创建未认证错误（缺失或未知密钥）
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            code: CODE_CANNOT_VALIDATE_URLS,
            message: message.into(),
        }
    }

    /// 创建无能力错误（密钥有效但不具备所需能力）
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            code: CODE_CANNOT_VALIDATE_URLS,
            message: message.into(),
        }
    }

    /// 创建内部错误（门禁自身无法完成检查）
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "amp_rest_internal_error",
            message: message.into(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "code": self.code,
            "message": self.message,
            "data": { "status": self.status.as_u16() },
        }));
        (self.status, body).into_response()
    }
}
