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

use crate::domain::models::validation_record::{EnvironmentFingerprint, ValidationRecord};
use crate::domain::repositories::validation_store::{RepositoryError, ValidationStore};
use crate::infrastructure::database::entities::validated_url;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

/// 验证存储实现
pub struct ValidationStoreImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ValidationStoreImpl {
    /// 创建新的验证存储实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<validated_url::Model> for ValidationRecord {
    fn from(model: validated_url::Model) -> Self {
        Self {
            id: model.id,
            url: model.url,
            edit_link: model.edit_link,
            error_payload: model.error_payload,
            captured_at: model.captured_at,
            captured_env: EnvironmentFingerprint {
                theme_slug: model.theme_slug,
                plugins_digest: model.plugins_digest,
                block_types_digest: model.block_types_digest,
                stylesheet_digest: model.stylesheet_digest,
            },
            content_modified_at: model.content_modified_at,
        }
    }
}

#[async_trait]
impl ValidationStore for ValidationStoreImpl {
    async fn find_by_url(&self, url: &str) -> Result<Option<ValidationRecord>, RepositoryError> {
        let model = validated_url::Entity::find()
            .filter(validated_url::Column::Url.eq(url))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(ValidationRecord::from))
    }
}
