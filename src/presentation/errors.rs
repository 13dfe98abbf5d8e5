// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::models::account::DataValidationError;
use crate::domain::repositories::account_repository::RepositoryError;

/// 应用错误类型
///
/// HTTP 边界上的全部错误情形，由 [`AppError::status_and_reason`]
/// 统一映射为状态码与错误短语
#[derive(Error, Debug)]
pub enum AppError {
    /// 请求负载校验失败
    #[error(transparent)]
    Validation(#[from] DataValidationError),
    /// 不支持的 Content-Type
    #[error("{0}")]
    UnsupportedMediaType(String),
    /// 资源或路由不存在
    #[error("{0}")]
    NotFound(String),
    /// 路由存在但方法不被允许
    #[error("{0}")]
    MethodNotAllowed(String),
    /// 未预期的内部错误
    #[error("{0}")]
    Internal(String),
}

/// 统一错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// HTTP 状态码
    pub status: u16,
    /// 错误短语
    pub error: &'static str,
    /// 错误详情
    pub message: String,
}

impl AppError {
    /// 返回错误对应的状态码与错误短语
    pub fn status_and_reason(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
            AppError::UnsupportedMediaType(_) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "Unsupported media type")
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            AppError::MethodNotAllowed(_) => (StatusCode::METHOD_NOT_ALLOWED, "Method not Allowed"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        }
    }

    /// 构造错误响应体
    pub fn body(&self) -> ErrorBody {
        let (status, reason) = self.status_and_reason();
        ErrorBody {
            status: status.as_u16(),
            error: reason,
            message: self.to_string(),
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => AppError::NotFound(err.to_string()),
            RepositoryError::Database(_) => AppError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_reason();
        let body = self.body();

        if status.is_server_error() {
            error!("{}", body.message);
        } else {
            warn!("{}", body.message);
        }

        (status, Json(body)).into_response()
    }
}
