// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统唯一的业务实体：账户（account）。
/// 包括实体的序列化、反序列化以及字段校验规则。
pub mod account;
