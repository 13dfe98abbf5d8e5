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

use crate::config::settings::DatabaseSettings;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// 数据库初始化错误
#[derive(Error, Debug)]
pub enum InitError {
    /// 无法建立连接
    #[error("Cannot connect to database: {0}")]
    Connect(#[source] DbErr),
    /// 迁移执行失败
    #[error("Cannot create database tables: {0}")]
    Migrate(#[source] DbErr),
}

/// 创建数据库连接池
///
/// # 参数
///
/// * `settings` - 数据库配置
///
/// # 返回值
///
/// * `Ok(DatabaseConnection)` - 数据库连接
/// * `Err(DbErr)` - 连接过程中出现的错误
pub async fn create_pool(settings: &DatabaseSettings) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(settings.url.to_owned());

    if let Some(max) = settings.max_connections {
        opt.max_connections(max);
    }

    if let Some(min) = settings.min_connections {
        opt.min_connections(min);
    }

    if let Some(timeout) = settings.connect_timeout {
        opt.connect_timeout(Duration::from_secs(timeout));
        opt.acquire_timeout(Duration::from_secs(timeout));
    }

    if let Some(idle) = settings.idle_timeout {
        opt.idle_timeout(Duration::from_secs(idle));
    }

    opt.max_lifetime(Duration::from_secs(3600))
        .sqlx_logging(true);

    Database::connect(opt).await
}

/// 初始化数据库
///
/// 建立连接并执行全部迁移，进程启动时调用一次
///
/// # 参数
///
/// * `settings` - 数据库配置
///
/// # 返回值
///
/// * `Ok(DatabaseConnection)` - 已完成建表的数据库连接
/// * `Err(InitError)` - 连接或迁移失败
pub async fn initialize(settings: &DatabaseSettings) -> Result<DatabaseConnection, InitError> {
    let db = create_pool(settings).await.map_err(InitError::Connect)?;
    info!("Database connection established");

    Migrator::up(&db, None).await.map_err(InitError::Migrate)?;
    info!("Database migrations applied");

    Ok(db)
}
