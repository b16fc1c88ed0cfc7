//! 메모리 기반 계정 저장소
//!
//! MongoDB 없이 서비스 계층을 실행하기 위한 [`AccountStore`] 구현입니다.
//! 질의 규칙(조건 순서, 정렬, 페이지네이션, 이메일 유니크)은 MongoDB 구현과 같습니다.

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::accounts::request::{AccountFilter, SearchField};
use crate::domain::entities::{Account, AccountState};
use super::{offset, AccountStore};

#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 계정 수 (삭제된 계정 포함)
    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }
}

fn visible(account: &Account, include_deleted: bool) -> bool {
    include_deleted || account.is_active()
}

fn matches(account: &Account, filter: &AccountFilter) -> bool {
    if filter.role.is_some_and(|role| account.role != role) {
        return false;
    }
    if filter.provider.is_some_and(|provider| account.provider != provider) {
        return false;
    }
    if filter.verified.is_some_and(|verified| account.verified != verified) {
        return false;
    }

    if let Some((field, term)) = filter.search_term() {
        let value = match field {
            SearchField::Name => &account.name,
            SearchField::Email => &account.email,
        };
        if !value.to_lowercase().contains(&term.to_lowercase()) {
            return false;
        }
    }

    visible(account, filter.include_deleted)
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn insert(&self, account: &Account) -> AppResult<()> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|existing| existing.email == account.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        accounts.insert(account.id, account.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid, include_deleted: bool) -> AppResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .get(&id)
            .filter(|account| visible(account, include_deleted))
            .cloned())
    }

    async fn find_by_email(&self, email: &str, include_deleted: bool) -> AppResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|account| account.email == email && visible(account, include_deleted))
            .cloned())
    }

    async fn list(&self, filter: &AccountFilter) -> AppResult<(Vec<Account>, u64)> {
        let accounts = self.accounts.read().await;

        let mut matched: Vec<Account> = accounts
            .values()
            .filter(|account| matches(account, filter))
            .cloned()
            .collect();
        let total = matched.len() as u64;

        matched.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.to_string().cmp(&b.id.to_string()))
        });

        let page = matched
            .into_iter()
            .skip(usize::try_from(offset(filter)).unwrap_or(usize::MAX))
            .take(filter.per_page.max(1) as usize)
            .collect();

        Ok((page, total))
    }

    async fn update_profile(&self, account: &Account) -> AppResult<bool> {
        let mut accounts = self.accounts.write().await;

        match accounts.get_mut(&account.id) {
            Some(stored) if stored.is_active() => {
                stored.name = account.name.clone();
                stored.role = account.role;
                stored.photo = account.photo.clone();
                stored.verified = account.verified;
                stored.updated_at = account.updated_at;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn soft_delete(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<bool> {
        let mut accounts = self.accounts.write().await;

        match accounts.get_mut(&id) {
            Some(stored) if stored.is_active() => {
                stored.state = AccountState::Deleted { at };
                stored.updated_at = at;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn restore(&self, id: Uuid) -> AppResult<bool> {
        let mut accounts = self.accounts.write().await;

        match accounts.get_mut(&id) {
            Some(stored) if stored.is_deleted() => {
                stored.state = AccountState::Active;
                stored.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn hard_delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.accounts.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::config::AuthProvider;
    use crate::domain::entities::{NewAccount, Role};

    fn account(name: &str, email: &str, minutes_ago: i64) -> Account {
        let mut account = Account::new(NewAccount {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: "$2b$04$digest".to_string(),
            role: Role::User,
            provider: AuthProvider::Local,
            photo: None,
            verified: false,
        });
        account.created_at = Utc::now() - Duration::minutes(minutes_ago);
        account
    }

    #[actix_web::test]
    async fn test_insert_rejects_duplicate_email() {
        let store = InMemoryAccountStore::new();
        store.insert(&account("Ann", "ann@example.com", 0)).await.unwrap();

        let result = store.insert(&account("Other Ann", "ann@example.com", 0)).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(store.len().await, 1);
    }

    #[actix_web::test]
    async fn test_list_sorts_newest_first_and_paginates() {
        let store = InMemoryAccountStore::new();
        for i in 0..5 {
            store
                .insert(&account(&format!("user{}", i), &format!("user{}@example.com", i), i))
                .await
                .unwrap();
        }

        let filter = AccountFilter { page: 2, per_page: 2, ..AccountFilter::default() };
        let (items, total) = store.list(&filter).await.unwrap();

        assert_eq!(total, 5);
        let names: Vec<&str> = items.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["user2", "user3"]);
    }

    #[actix_web::test]
    async fn test_equal_timestamps_page_in_id_order() {
        let store = InMemoryAccountStore::new();
        let created_at = Utc::now();
        let mut ids = Vec::new();
        for i in 0..4 {
            let mut same_time = account(&format!("user{}", i), &format!("user{}@example.com", i), 0);
            same_time.created_at = created_at;
            ids.push(same_time.id.to_string());
            store.insert(&same_time).await.unwrap();
        }
        ids.sort();

        let mut paged = Vec::new();
        for page in 1..=2 {
            let filter = AccountFilter { page, per_page: 2, ..AccountFilter::default() };
            let (items, _) = store.list(&filter).await.unwrap();
            paged.extend(items.into_iter().map(|a| a.id.to_string()));
        }

        assert_eq!(paged, ids);
    }

    #[actix_web::test]
    async fn test_search_is_case_insensitive_substring() {
        let store = InMemoryAccountStore::new();
        store.insert(&account("Ann Lee", "ann@example.com", 0)).await.unwrap();
        store.insert(&account("Bob", "bob@example.com", 1)).await.unwrap();

        let filter = AccountFilter {
            search: Some("LEE".to_string()),
            search_by: Some(SearchField::Name),
            ..AccountFilter::default()
        };
        let (items, total) = store.list(&filter).await.unwrap();

        assert_eq!(total, 1);
        assert_eq!(items[0].name, "Ann Lee");
    }

    #[actix_web::test]
    async fn test_soft_deleted_accounts_are_hidden_unless_requested() {
        let store = InMemoryAccountStore::new();
        let ann = account("Ann", "ann@example.com", 0);
        store.insert(&ann).await.unwrap();

        assert!(store.soft_delete(ann.id, Utc::now()).await.unwrap());
        assert!(!store.soft_delete(ann.id, Utc::now()).await.unwrap());

        assert!(store.find_by_id(ann.id, false).await.unwrap().is_none());
        assert!(store.find_by_id(ann.id, true).await.unwrap().unwrap().is_deleted());

        let (_, hidden_total) = store.list(&AccountFilter::default()).await.unwrap();
        let with_deleted = AccountFilter { include_deleted: true, ..AccountFilter::default() };
        let (_, visible_total) = store.list(&with_deleted).await.unwrap();
        assert_eq!((hidden_total, visible_total), (0, 1));
    }

    #[actix_web::test]
    async fn test_restore_only_applies_to_deleted_accounts() {
        let store = InMemoryAccountStore::new();
        let ann = account("Ann", "ann@example.com", 0);
        store.insert(&ann).await.unwrap();

        assert!(!store.restore(ann.id).await.unwrap());

        store.soft_delete(ann.id, Utc::now()).await.unwrap();
        assert!(store.restore(ann.id).await.unwrap());
        assert!(store.find_by_id(ann.id, false).await.unwrap().is_some());
    }

    #[actix_web::test]
    async fn test_hard_delete_removes_record() {
        let store = InMemoryAccountStore::new();
        let ann = account("Ann", "ann@example.com", 0);
        store.insert(&ann).await.unwrap();

        assert!(store.hard_delete(ann.id).await.unwrap());
        assert!(!store.hard_delete(ann.id).await.unwrap());
        assert!(store.find_by_id(ann.id, true).await.unwrap().is_none());
    }
}
