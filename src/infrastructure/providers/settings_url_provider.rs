// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SiteSettings;
use crate::domain::repositories::url_provider::{UrlEntry, UrlProvider};
use std::collections::HashSet;

/// 配置驱动的URL提供者
///
/// 候选条目来自站点配置：首页条目在先，其后是配置声明的条目。
/// 按URL去重，保留先出现的条目，条目顺序即输出顺序。
pub struct SettingsUrlProvider {
    entries: Vec<UrlEntry>,
}

impl SettingsUrlProvider {
    /// 从站点配置构建提供者
    ///
    /// # 参数
    ///
    /// * `site` - 站点配置
    pub fn new(site: &SiteSettings) -> Self {
        let mut entries = vec![UrlEntry {
            url: Some(site.home_url.clone()),
            page_type: "home".to_string(),
            label: "Homepage".to_string(),
        }];

        for entry in &site.scannable_urls {
            entries.push(UrlEntry {
                url: entry.url.clone(),
                page_type: entry.page_type.clone().unwrap_or_default(),
                label: entry.label.clone().unwrap_or_default(),
            });
        }

        // 按URL去重，保留先出现的条目；无URL条目原样保留，
        // 交由关联阶段丢弃
        let mut seen = HashSet::new();
        entries.retain(|entry| match &entry.url {
            Some(url) => seen.insert(url.clone()),
            None => true,
        });

        Self { entries }
    }
}

impl UrlProvider for SettingsUrlProvider {
    fn entries(&self) -> Vec<UrlEntry> {
        self.entries.clone()
    }
}
