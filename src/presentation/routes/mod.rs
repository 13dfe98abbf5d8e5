// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SecuritySettings;
use crate::domain::repositories::account_repository::AccountRepository;
use crate::presentation::handlers::account_handler::{
    self, create_account, delete_account, list_accounts, read_account, update_account,
};
use crate::presentation::middleware::error_envelope::{
    handle_panic, method_not_allowed_middleware, not_found_fallback,
};
use crate::presentation::middleware::security_headers::{
    security_headers_middleware, SecurityHeaders,
};
use axum::{middleware, routing::get, Extension, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// 创建账户路由
///
/// # 参数
///
/// * `repo` - 账户仓库
///
/// # 返回值
///
/// 返回未挂载中间件的路由表
pub fn routes<R>(repo: Arc<R>) -> Router
where
    R: AccountRepository + 'static,
{
    let item_path = format!("{}/{{id}}", account_handler::BASE_URL);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route(
            account_handler::BASE_URL,
            get(list_accounts::<R>).post(create_account::<R>),
        )
        .route(
            &item_path,
            get(read_account::<R>)
                .put(update_account::<R>)
                .delete(delete_account::<R>),
        )
        .layer(Extension(repo))
}

/// 为路由挂载兜底处理器与全局中间件
///
/// 包括统一错误响应、panic 捕获、安全响应头、CORS 以及请求追踪
pub fn with_middleware(router: Router, security: &SecuritySettings) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .fallback(not_found_fallback)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(method_not_allowed_middleware))
        .layer(middleware::from_fn_with_state(
            SecurityHeaders::from_settings(security),
            security_headers_middleware,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// 创建完整应用
pub fn create_app<R>(repo: Arc<R>, security: &SecuritySettings) -> Router
where
    R: AccountRepository + 'static,
{
    with_middleware(routes(repo), security)
}

/// 服务首页
pub async fn index() -> Json<Value> {
    Json(json!({
        "name": "Account REST API Service",
        "version": env!("CARGO_PKG_VERSION"),
        "paths": account_handler::BASE_URL,
    }))
}

/// 健康检查端点
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}
