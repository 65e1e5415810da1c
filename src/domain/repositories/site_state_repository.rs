// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::validation_record::EnvironmentFingerprint;
use crate::domain::repositories::validation_store::RepositoryError;
use async_trait::async_trait;

/// 站点状态特质
///
/// 提供陈旧度判定所需的当前站点环境指纹。指纹在每次查询开始时
/// 取一次，之后作为显式值传入纯函数的陈旧度检查，使检查本身
/// 不读取任何全局状态。
#[async_trait]
pub trait SiteStateRepository: Send + Sync {
    /// 计算当前站点环境指纹
    async fn current_fingerprint(&self) -> Result<EnvironmentFingerprint, RepositoryError>;
}
