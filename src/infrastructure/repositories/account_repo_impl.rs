// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::account::Account;
use crate::domain::repositories::account_repository::{AccountRepository, RepositoryError};
use crate::infrastructure::database::entities::account;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 账户仓库实现
#[derive(Clone)]
pub struct AccountRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl AccountRepositoryImpl {
    /// 创建新的账户仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn create(&self, account: &Account) -> Result<Account, RepositoryError> {
        let model = account::ActiveModel {
            id: NotSet,
            name: Set(account.name.clone()),
            email: Set(account.email.clone()),
            address: Set(account.address.clone()),
            phone_number: Set(account.phone_number.clone()),
            date_joined: Set(account.date_joined),
        };

        let created = model.insert(self.db.as_ref()).await?;
        Ok(created.into())
    }

    async fn find_all(&self) -> Result<Vec<Account>, RepositoryError> {
        let models = account::Entity::find()
            .order_by_asc(account::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Account>, RepositoryError> {
        let model = account::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update(&self, account: &Account) -> Result<Account, RepositoryError> {
        let id = account.id.ok_or(RepositoryError::NotFound)?;

        // date_joined is immutable after creation
        let model = account::ActiveModel {
            id: Unchanged(id),
            name: Set(account.name.clone()),
            email: Set(account.email.clone()),
            address: Set(account.address.clone()),
            phone_number: Set(account.phone_number.clone()),
            date_joined: NotSet,
        };

        match model.update(self.db.as_ref()).await {
            Ok(updated) => Ok(updated.into()),
            Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => {
                Err(RepositoryError::NotFound)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        let result = account::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected > 0)
    }
}

impl From<account::Model> for Account {
    fn from(model: account::Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            email: model.email,
            address: model.address,
            phone_number: model.phone_number,
            date_joined: model.date_joined,
        }
    }
}
