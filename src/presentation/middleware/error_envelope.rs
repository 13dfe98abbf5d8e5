// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::errors::AppError;
use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::any::Any;

/// 405 响应包装中间件
///
/// 路由层对不允许的方法只返回空响应体，这里将其替换为统一错误响应，
/// 并保留 `Allow` 头
pub async fn method_not_allowed_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let response = next.run(req).await;

    if response.status() != StatusCode::METHOD_NOT_ALLOWED
        || response.headers().contains_key(header::CONTENT_TYPE)
    {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut rewritten = AppError::MethodNotAllowed(format!(
        "The method {} is not allowed for the requested URL {}",
        method, path
    ))
    .into_response();
    if let Some(allow) = allow {
        rewritten.headers_mut().insert(header::ALLOW, allow);
    }
    rewritten
}

/// 未匹配路由的兜底处理器
pub async fn not_found_fallback(req: Request) -> AppError {
    AppError::NotFound(format!(
        "The requested URL {} was not found on the server",
        req.uri().path()
    ))
}

/// 处理器 panic 时的响应
///
/// 配合 `CatchPanicLayer::custom` 使用，panic 信息原样写入 `message`
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    AppError::Internal(detail).into_response()
}
