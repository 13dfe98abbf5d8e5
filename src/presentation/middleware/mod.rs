// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 中间件模块
///
/// 提供HTTP请求处理的中间件功能
/// 包括安全响应头、统一错误响应包装等功能
pub mod error_envelope;
pub mod security_headers;
