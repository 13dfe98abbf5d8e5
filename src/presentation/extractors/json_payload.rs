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

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap};
use serde_json::Value;

use crate::domain::models::account::DataValidationError;
use crate::presentation::errors::AppError;

const JSON_MEDIA_TYPE: &str = "application/json";

/// JSON 请求体提取器
///
/// 先检查 Content-Type（不符合时返回 415），再解析请求体（失败时返回 400）。
/// 字段级校验交给领域模型完成。
pub struct JsonPayload(pub Value);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        check_content_type(req.headers(), JSON_MEDIA_TYPE)?;

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| DataValidationError::UnreadableBody(e.body_text()))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| DataValidationError::MalformedJson(e.to_string()))?;

        Ok(JsonPayload(value))
    }
}

/// 检查请求的媒体类型，忽略 `charset` 等参数
pub fn check_content_type(headers: &HeaderMap, content_type: &str) -> Result<(), AppError> {
    let expected =
        || AppError::UnsupportedMediaType(format!("Content-Type must be {}", content_type));

    let value = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(expected)?;

    let media_type = value.split(';').next().unwrap_or_default().trim();
    if media_type.eq_ignore_ascii_case(content_type) {
        Ok(())
    } else {
        Err(expected())
    }
}
