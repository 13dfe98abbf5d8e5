// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含账户实体、校验规则和仓库接口
pub mod domain;

/// 基础设施模块
///
/// 提供数据库连接、初始化和仓库实现
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器、提取器和中间件
pub mod presentation;

/// 工具模块
///
/// 提供日志初始化等通用功能
pub mod utils;
