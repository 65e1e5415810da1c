// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::validation_record::ValidationRecord;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
///
/// 记录缺失不是错误，由 `Ok(None)` 表达；这里只剩硬性存储故障
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// 验证存储特质
///
/// 按规范URL查找最近一次验证记录。存储由外部的验证器独占写入，
/// 本核心只读。记录缺失是正常结果而非错误。
#[async_trait]
pub trait ValidationStore: Send + Sync {
    /// 按规范URL查找验证记录
    ///
    /// # 参数
    ///
    /// * `url` - 规范URL
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(record))` - 找到记录
    /// * `Ok(None)` - 该URL从未被验证过
    /// * `Err(RepositoryError)` - 存储访问失败
    async fn find_by_url(&self, url: &str) -> Result<Option<ValidationRecord>, RepositoryError>;
}
