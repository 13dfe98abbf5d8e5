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

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::domain::models::account::Account;
use crate::domain::repositories::account_repository::AccountRepository;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::account_id::AccountId;
use crate::presentation::extractors::json_payload::JsonPayload;

/// 账户集合的基础路径
pub const BASE_URL: &str = "/accounts";

fn account_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Account with id [{}] could not be found.", id))
}

/// 列出所有账户
pub async fn list_accounts<R>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<Json<Vec<Account>>, AppError>
where
    R: AccountRepository + 'static,
{
    info!("Request to list Accounts");
    let accounts = repo.find_all().await?;
    info!("Returning [{}] accounts", accounts.len());

    Ok(Json(accounts))
}

/// 创建账户
///
/// 成功时返回 201 以及指向新资源的 `Location` 头
pub async fn create_account<R>(
    Extension(repo): Extension<Arc<R>>,
    JsonPayload(payload): JsonPayload,
) -> Result<impl IntoResponse, AppError>
where
    R: AccountRepository + 'static,
{
    info!("Request to create an Account");
    let mut account = Account::new();
    account.deserialize(&payload)?;

    let account = repo.create(&account).await?;
    let id = account.id.ok_or_else(|| {
        AppError::Internal("Created account was not assigned an id".to_string())
    })?;
    info!("Account with id [{}] created", id);

    let location = format!("{}/{}", BASE_URL, id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(account),
    ))
}

/// 读取单个账户
pub async fn read_account<R>(
    Extension(repo): Extension<Arc<R>>,
    AccountId(id): AccountId,
) -> Result<Json<Account>, AppError>
where
    R: AccountRepository + 'static,
{
    info!("Request to read an Account with id: {}", id);

    let account = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| account_not_found(id))?;

    Ok(Json(account))
}

/// 更新账户
///
/// 负载需包含全部必填字段，id 与加入日期保持不变
pub async fn update_account<R>(
    Extension(repo): Extension<Arc<R>>,
    AccountId(id): AccountId,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<Account>, AppError>
where
    R: AccountRepository + 'static,
{
    info!("Request to update an Account with id: {}", id);

    let mut account = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| account_not_found(id))?;
    account.deserialize(&payload)?;

    let account = repo.update(&account).await?;
    Ok(Json(account))
}

/// 删除账户
///
/// 账户不存在时同样返回 204
pub async fn delete_account<R>(
    Extension(repo): Extension<Arc<R>>,
    AccountId(id): AccountId,
) -> Result<StatusCode, AppError>
where
    R: AccountRepository + 'static,
{
    info!("Request to delete an Account with id: {}", id);

    if repo.delete(id).await? {
        info!("Account with id [{}] deleted", id);
    }

    Ok(StatusCode::NO_CONTENT)
}
