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

use account_service::config::settings::Settings;
use account_service::infrastructure::database::connection;
use account_service::infrastructure::repositories::account_repo_impl::AccountRepositoryImpl;
use account_service::presentation::routes;
use account_service::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// 数据库初始化失败时的退出码
const EXIT_DB_INIT_FAILED: i32 = 4;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    telemetry::log_banner();

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Connect to database and create tables
    let db = match connection::initialize(&settings.database).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            error!("{}: Cannot continue", e);
            std::process::exit(EXIT_DB_INIT_FAILED);
        }
    };

    // 4. Build routes
    let account_repo = Arc::new(AccountRepositoryImpl::new(db));
    let app = routes::create_app(account_repo, &settings.security);
    info!("Service initialized!");

    // 5. Start HTTP server
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
