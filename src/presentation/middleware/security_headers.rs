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

use crate::config::settings::SecuritySettings;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::warn;

/// 安全响应头状态
///
/// 启动时由配置预先构建好全部头部值
#[derive(Clone)]
pub struct SecurityHeaders {
    headers: Arc<Vec<(HeaderName, HeaderValue)>>,
}

impl SecurityHeaders {
    /// 根据配置构建安全响应头
    ///
    /// 配置值不是合法头部值时跳过该头部并记录警告
    pub fn from_settings(settings: &SecuritySettings) -> Self {
        let mut headers = vec![
            (
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ),
            (
                header::REFERRER_POLICY,
                HeaderValue::from_static("strict-origin-when-cross-origin"),
            ),
        ];

        let configured = [
            (header::X_FRAME_OPTIONS, Some(settings.frame_options.clone())),
            (
                header::CONTENT_SECURITY_POLICY,
                Some(settings.content_security_policy.clone()),
            ),
            (
                header::STRICT_TRANSPORT_SECURITY,
                settings
                    .hsts_max_age
                    .map(|age| format!("max-age={}; includeSubDomains", age)),
            ),
        ];

        for (name, value) in configured {
            let Some(value) = value else { continue };
            match HeaderValue::from_str(&value) {
                Ok(v) => headers.push((name, v)),
                Err(_) => warn!("Ignoring invalid value for {}: {:?}", name, value),
            }
        }

        Self {
            headers: Arc::new(headers),
        }
    }

    fn apply(&self, target: &mut HeaderMap) {
        for (name, value) in self.headers.iter() {
            if !target.contains_key(name) {
                target.insert(name.clone(), value.clone());
            }
        }
    }
}

/// 安全响应头中间件
///
/// 为所有响应添加防 MIME 嗅探、点击劫持、CSP 等安全头
///
/// # 参数
///
/// * `state` - 预构建的安全响应头
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
pub async fn security_headers_middleware(
    State(state): State<SecurityHeaders>,
    req: Request,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;
    state.apply(response.headers_mut());
    response
}
