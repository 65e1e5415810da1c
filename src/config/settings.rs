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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含数据库、服务器、站点和配对路由等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// 站点配置
    pub site: SiteSettings,
    /// 配对路由配置
    pub paired_routing: PairedRoutingSettings,
}

/// 数据库配置设置
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
    /// 连接最大存活时间（秒），到期回收重建
    pub max_lifetime: Option<u64>,
    /// 是否打印底层SQL语句日志
    #[serde(default)]
    pub sqlx_logging: bool,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 站点配置设置
#[derive(Debug, Deserialize)]
pub struct SiteSettings {
    /// 站点首页URL
    pub home_url: String,
    /// 可扫描URL条目列表（首页之外的候选URL）
    #[serde(default)]
    pub scannable_urls: Vec<ScannableUrlEntrySettings>,
}

/// 可扫描URL条目配置
///
/// 字段均为可选：缺失URL的条目会在关联阶段被丢弃，
/// 缺失的类型和标签降级为空字符串
#[derive(Debug, Clone, Deserialize)]
pub struct ScannableUrlEntrySettings {
    /// 候选URL
    pub url: Option<String>,
    /// 语义类型（如 home、search、singular）
    #[serde(rename = "type")]
    pub page_type: Option<String>,
    /// 人类可读标签
    pub label: Option<String>,
}

/// 配对路由配置设置
#[derive(Debug, Deserialize)]
pub struct PairedRoutingSettings {
    /// 路由模式 (canonical, query_var, path_suffix, legacy_transitional)
    pub mode: String,
    /// 查询参数名 (当 mode=query_var 时使用)
    pub query_var: Option<String>,
    /// 路径后缀 (当 mode=path_suffix 时使用)
    pub path_suffix: Option<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default DB pool settings
            .set_default("database.url", "sqlite::memory:")?
            .set_default("database.max_connections", 100)?
            .set_default("database.min_connections", 10)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            .set_default("database.max_lifetime", 1800)?
            .set_default("database.sqlx_logging", false)?
            // Default site settings
            .set_default("site.home_url", "http://localhost")?
            // Default paired routing settings
            .set_default("paired_routing.mode", "query_var")?
            .set_default("paired_routing.query_var", "amp")?
            .set_default("paired_routing.path_suffix", "amp")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("AMPSCAN").separator("__"));

        builder.build()?.try_deserialize()
    }
}
