// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节：
/// - 数据库（database）：提供数据库连接、初始化和实体映射
/// - 仓库实现（repositories）：提供领域仓库接口的具体实现
///
/// 基础设施层依赖于领域层的抽象接口，
/// 确保领域层保持纯粹的业务逻辑。
pub mod database;
pub mod repositories;
