// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::account::Account;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 账户仓库特质
///
/// 定义账户数据访问接口
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// 创建账户，返回带有服务端分配ID的账户
    async fn create(&self, account: &Account) -> Result<Account, RepositoryError>;
    /// 按ID升序列出所有账户
    async fn find_all(&self) -> Result<Vec<Account>, RepositoryError>;
    /// 根据ID查找账户
    async fn find_by_id(&self, id: i32) -> Result<Option<Account>, RepositoryError>;
    /// 更新账户的可变字段
    async fn update(&self, account: &Account) -> Result<Account, RepositoryError>;
    /// 删除账户，返回是否有记录被删除
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}
