// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_db;
use account_service::domain::models::account::Account;
use account_service::domain::repositories::account_repository::{
    AccountRepository, RepositoryError,
};
use account_service::infrastructure::repositories::account_repo_impl::AccountRepositoryImpl;
use chrono::NaiveDate;
use std::sync::Arc;

fn new_account(name: &str) -> Account {
    Account {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        address: Some("1 Test Rd".to_string()),
        ..Account::new()
    }
}

async fn setup_repo() -> AccountRepositoryImpl {
    AccountRepositoryImpl::new(create_test_db().await)
}

/// 测试仓库的CRUD操作
#[tokio::test]
async fn test_account_repository_crud() {
    let repo = setup_repo().await;

    let created = repo.create(&new_account("Alice")).await.unwrap();
    let id = created.id.expect("id should be assigned");
    assert_eq!(created.name, "Alice");

    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found, created);

    let mut changed = found.clone();
    changed.name = "Alice Cooper".to_string();
    changed.phone_number = Some("555-0199".to_string());
    let updated = repo.update(&changed).await.unwrap();
    assert_eq!(updated.name, "Alice Cooper");
    assert_eq!(updated.phone_number.as_deref(), Some("555-0199"));
    assert_eq!(updated.id, Some(id));

    assert!(repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(!repo.delete(id).await.unwrap());
}

#[tokio::test]
async fn test_find_all_orders_by_id() {
    let repo = setup_repo().await;
    assert!(repo.find_all().await.unwrap().is_empty());

    for name in ["Carol", "Alice", "Bob"] {
        repo.create(&new_account(name)).await.unwrap();
    }

    let all = repo.find_all().await.unwrap();
    let names: Vec<&str> = all.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn test_update_keeps_date_joined() {
    let repo = setup_repo().await;
    let original_date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let created = repo
        .create(&Account {
            date_joined: original_date,
            ..new_account("Dave")
        })
        .await
        .unwrap();

    let mut changed = created.clone();
    changed.date_joined = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
    let updated = repo.update(&changed).await.unwrap();

    assert_eq!(updated.date_joined, original_date);
}

#[tokio::test]
async fn test_update_missing_account_is_not_found() {
    let repo = Arc::new(setup_repo().await);

    let unsaved = new_account("Eve");
    assert!(matches!(
        repo.update(&unsaved).await,
        Err(RepositoryError::NotFound)
    ));

    let ghost = Account {
        id: Some(12345),
        ..new_account("Ghost")
    };
    assert!(matches!(
        repo.update(&ghost).await,
        Err(RepositoryError::NotFound)
    ));
}
