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

use ampscan::config::settings::Settings;
use ampscan::domain::repositories::paired_routing;
use ampscan::domain::services::correlation_service::CorrelationService;
use ampscan::infrastructure::database::connection;
use ampscan::infrastructure::providers::settings_url_provider::SettingsUrlProvider;
use ampscan::infrastructure::repositories::site_state_repo_impl::SiteStateRepoImpl;
use ampscan::infrastructure::repositories::validation_store_impl::ValidationStoreImpl;
use ampscan::presentation::middleware::auth_middleware::{auth_middleware, AuthState};
use ampscan::presentation::routes;
use ampscan::utils::telemetry;
use axum::{middleware, Extension};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use migration::{Migrator, MigratorTrait};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting ampscan...");

    // Initialize Prometheus Metrics
    ampscan::infrastructure::metrics::init_metrics();

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize collaborators
    let provider = Arc::new(SettingsUrlProvider::new(&settings.site));
    let store = Arc::new(ValidationStoreImpl::new(db.clone()));
    let site_state = Arc::new(SiteStateRepoImpl::new(db.clone()));

    let router = paired_routing::router_for_mode(
        &settings.paired_routing.mode,
        settings.paired_routing.query_var.as_deref(),
        settings.paired_routing.path_suffix.as_deref(),
    );
    info!(mode = %settings.paired_routing.mode, "Paired routing configured");

    let correlation_service = Arc::new(CorrelationService::new(
        provider,
        router,
        store,
        site_state,
    ));

    // 5. Build the application router
    let auth_state = AuthState { db: db.clone() };
    let app = routes::routes()
        .layer(Extension(correlation_service))
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .layer(TraceLayer::new_for_http());

    // 6. Start the server
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
