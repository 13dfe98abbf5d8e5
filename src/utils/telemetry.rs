// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化日志订阅器
///
/// 未设置 `RUST_LOG` 时使用 `info,account_service=debug`
pub fn init_telemetry() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,account_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// 输出服务启动横幅
pub fn log_banner() {
    tracing::info!("{}", "*".repeat(70));
    tracing::info!(
        "{:*^70}",
        "  A C C O U N T   S E R V I C E   R U N N I N G  "
    );
    tracing::info!("{}", "*".repeat(70));
}
