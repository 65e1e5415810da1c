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

use crate::domain::models::validation_record::EnvironmentFingerprint;
use crate::domain::repositories::site_state_repository::SiteStateRepository;
use crate::domain::repositories::validation_store::RepositoryError;
use crate::infrastructure::database::entities::site_option;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::collections::HashMap;
use std::sync::Arc;

/// 陈旧度判定读取的选项键
const OPTION_ACTIVE_THEME: &str = "active_theme";
const OPTION_ACTIVE_PLUGINS: &str = "active_plugins";
const OPTION_ENABLED_BLOCK_TYPES: &str = "enabled_block_types";
const OPTION_GLOBAL_STYLESHEET_HASH: &str = "global_stylesheet_hash";

/// 站点状态仓库实现
///
/// 从 site_options 键值表读取当前站点状态，折叠成环境指纹。
/// 集合类选项存储为JSON字符串数组，先排序再摘要，使存储顺序
/// 不影响指纹。
pub struct SiteStateRepoImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl SiteStateRepoImpl {
    /// 创建新的站点状态仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 把JSON数组文本解析为字符串集合；缺失或损坏降级为空集合
    fn parse_set(options: &HashMap<String, String>, name: &str) -> Vec<String> {
        options
            .get(name)
            .and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SiteStateRepository for SiteStateRepoImpl {
    async fn current_fingerprint(&self) -> Result<EnvironmentFingerprint, RepositoryError> {
        let options: HashMap<String, String> = site_option::Entity::find()
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(|row| (row.name, row.value))
            .collect();

        let plugins = Self::parse_set(&options, OPTION_ACTIVE_PLUGINS);
        let block_types = Self::parse_set(&options, OPTION_ENABLED_BLOCK_TYPES);

        Ok(EnvironmentFingerprint {
            theme_slug: options
                .get(OPTION_ACTIVE_THEME)
                .cloned()
                .unwrap_or_default(),
            plugins_digest: EnvironmentFingerprint::digest_set(&plugins),
            block_types_digest: EnvironmentFingerprint::digest_set(&block_types),
            stylesheet_digest: options
                .get(OPTION_GLOBAL_STYLESHEET_HASH)
                .cloned()
                .unwrap_or_default(),
        })
    }
}
