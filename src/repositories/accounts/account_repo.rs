//! # 계정 리포지토리 구현
//!
//! 계정 엔티티의 MongoDB 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **자동 의존성 주입**: `#[repository]` 매크로가 `Arc<Database>` 를 주입
//! - **명시적 매핑**: [`AccountDocument`] ↔ [`Account`] 필드 단위 변환
//! - **데이터 무결성**: `email` 유니크 인덱스가 동시 가입 경쟁의 최종 방어선
//! - **안전한 검색**: 검색 필드 이름은 허용 목록에서만, 검색어는 정규식 이스케이프

use std::sync::Arc;
use std::time::Instant;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, Bson, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::{options::IndexOptions, IndexModel};
use serde::{Deserialize, Serialize};
use singleton_macro::repository;
use uuid::Uuid;
use crate::config::AuthProvider;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::dto::accounts::request::AccountFilter;
use crate::domain::entities::{Account, AccountState, Role};
use super::{offset, AccountStore};

const DUPLICATE_KEY_CODE: i32 = 11000;

/// `users` 컬렉션에 저장되는 문서
///
/// `_id` 는 하이픈이 포함된 UUID 문자열입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    pub role: String,
    pub provider: String,
    pub photo: String,
    pub verified: bool,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
    /// 활성 계정은 null
    #[serde(default)]
    pub deleted_at: Option<bson::DateTime>,
}

fn to_bson_datetime(at: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(at.timestamp_millis())
}

fn to_chrono(at: bson::DateTime) -> AppResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(at.timestamp_millis())
        .ok_or_else(|| AppError::InternalError(format!("저장된 시각이 범위를 벗어났습니다: {}", at)))
}

impl From<&Account> for AccountDocument {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            name: account.name.clone(),
            email: account.email.clone(),
            password_hash: account.password_hash.clone(),
            role: account.role.as_str().to_string(),
            provider: account.provider.as_str().to_string(),
            photo: account.photo.clone(),
            verified: account.verified,
            created_at: to_bson_datetime(account.created_at),
            updated_at: to_bson_datetime(account.updated_at),
            deleted_at: account.deleted_at().map(to_bson_datetime),
        }
    }
}

impl TryFrom<AccountDocument> for Account {
    type Error = AppError;

    /// 저장소에서 읽은 값이 도메인 규칙에 맞지 않으면 내부 오류로 처리합니다.
    fn try_from(document: AccountDocument) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&document.id)
            .map_err(|e| AppError::InternalError(format!("저장된 계정 ID 손상 ({}): {}", document.id, e)))?;
        let role = Role::from_str(&document.role).map_err(AppError::InternalError)?;
        let provider = AuthProvider::from_str(&document.provider).map_err(AppError::InternalError)?;
        let state = match document.deleted_at {
            Some(at) => AccountState::Deleted { at: to_chrono(at)? },
            None => AccountState::Active,
        };

        Ok(Account {
            id,
            name: document.name,
            email: document.email,
            password_hash: document.password_hash,
            role,
            provider,
            photo: document.photo,
            verified: document.verified,
            created_at: to_chrono(document.created_at)?,
            updated_at: to_chrono(document.updated_at)?,
            state,
        })
    }
}

/// 목록 조회 조건 문서
///
/// 동등 조건 → 검색 → 삭제 가시성 순서로 키를 추가합니다.
pub fn build_list_filter(filter: &AccountFilter) -> Document {
    let mut query = Document::new();

    if let Some(role) = filter.role {
        query.insert("role", role.as_str());
    }
    if let Some(provider) = filter.provider {
        query.insert("provider", provider.as_str());
    }
    if let Some(verified) = filter.verified {
        query.insert("verified", verified);
    }

    if let Some((field, term)) = filter.search_term() {
        query.insert(
            field.as_str(),
            doc! { "$regex": regex::escape(term), "$options": "i" },
        );
    }

    if !filter.include_deleted {
        query.insert("deleted_at", Bson::Null);
    }

    query
}

fn id_filter(id: Uuid, include_deleted: bool) -> Document {
    let mut query = doc! { "_id": id.to_string() };
    if !include_deleted {
        query.insert("deleted_at", Bson::Null);
    }
    query
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[repository(name = "account", collection = "users")]
pub struct AccountRepository {
    db: Arc<Database>,
}

impl AccountRepository {
    /// 애플리케이션 기동 시 인덱스를 생성합니다.
    ///
    /// - `email_unique`: 이메일 유니크 제약
    /// - `created_at_desc`: 목록 정렬
    /// - `deleted_at`: 소프트 삭제 필터
    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection::<AccountDocument>();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        let deleted_at_index = IndexModel::builder()
            .keys(doc! { "deleted_at": 1 })
            .options(IndexOptions::builder()
                .name("deleted_at".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, created_at_index, deleted_at_index])
            .await?;

        log::info!("✅ {} 컬렉션 인덱스 생성 완료", self.collection_name());
        Ok(())
    }

    async fn find_one(&self, query: Document) -> AppResult<Option<Account>> {
        self.collection::<AccountDocument>()
            .find_one(query)
            .await?
            .map(Account::try_from)
            .transpose()
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn insert(&self, account: &Account) -> AppResult<()> {
        let document = AccountDocument::from(account);

        match self.collection::<AccountDocument>().insert_one(&document).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => {
                Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, id: Uuid, include_deleted: bool) -> AppResult<Option<Account>> {
        self.find_one(id_filter(id, include_deleted)).await
    }

    async fn find_by_email(&self, email: &str, include_deleted: bool) -> AppResult<Option<Account>> {
        let mut query = doc! { "email": email };
        if !include_deleted {
            query.insert("deleted_at", Bson::Null);
        }
        self.find_one(query).await
    }

    async fn list(&self, filter: &AccountFilter) -> AppResult<(Vec<Account>, u64)> {
        let started = Instant::now();
        let collection = self.collection::<AccountDocument>();
        let query = build_list_filter(filter);

        let total = collection.count_documents(query.clone()).await?;

        let documents: Vec<AccountDocument> = collection
            .find(query)
            .sort(doc! { "created_at": -1, "_id": 1 })
            .skip(offset(filter))
            .limit(filter.per_page)
            .await?
            .try_collect()
            .await?;

        let accounts = documents
            .into_iter()
            .map(Account::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        log::debug!(
            "계정 목록 조회: {}건 / 전체 {}건 ({}ms)",
            accounts.len(),
            total,
            started.elapsed().as_millis()
        );

        Ok((accounts, total))
    }

    async fn update_profile(&self, account: &Account) -> AppResult<bool> {
        let result = self.collection::<AccountDocument>()
            .update_one(
                id_filter(account.id, false),
                doc! { "$set": {
                    "name": account.name.as_str(),
                    "role": account.role.as_str(),
                    "photo": account.photo.as_str(),
                    "verified": account.verified,
                    "updated_at": to_bson_datetime(account.updated_at),
                }},
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn soft_delete(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<bool> {
        let at = to_bson_datetime(at);
        let result = self.collection::<AccountDocument>()
            .update_one(
                id_filter(id, false),
                doc! { "$set": { "deleted_at": at, "updated_at": at } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn restore(&self, id: Uuid) -> AppResult<bool> {
        let result = self.collection::<AccountDocument>()
            .update_one(
                doc! { "_id": id.to_string(), "deleted_at": { "$ne": Bson::Null } },
                doc! { "$set": {
                    "deleted_at": Bson::Null,
                    "updated_at": to_bson_datetime(Utc::now()),
                }},
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn hard_delete(&self, id: Uuid) -> AppResult<bool> {
        let result = self.collection::<AccountDocument>()
            .delete_one(doc! { "_id": id.to_string() })
            .await?;

        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::accounts::request::SearchField;
    use crate::domain::entities::NewAccount;

    fn account() -> Account {
        Account::new(NewAccount {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password_hash: "$2b$04$digest".to_string(),
            role: Role::Admin,
            provider: AuthProvider::Local,
            photo: None,
            verified: true,
        })
    }

    #[test]
    fn test_document_conversion_preserves_fields() {
        let mut original = account();
        original.state = AccountState::Deleted { at: Utc::now() };

        let document = AccountDocument::from(&original);
        assert_eq!(document.id, original.id.to_string());
        assert_eq!(document.role, "admin");
        assert!(document.deleted_at.is_some());

        let restored = Account::try_from(document).unwrap();
        assert_eq!(restored.id, original.id);
        assert_eq!(restored.email, original.email);
        assert_eq!(restored.password_hash, original.password_hash);
        assert!(restored.is_deleted());
        assert_eq!(
            restored.created_at.timestamp_millis(),
            original.created_at.timestamp_millis()
        );
    }

    #[test]
    fn test_unknown_role_in_storage_is_internal_error() {
        let mut document = AccountDocument::from(&account());
        document.role = "superuser".to_string();

        let result = Account::try_from(document);

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_list_filter_excludes_deleted_by_default() {
        let query = build_list_filter(&AccountFilter::default());

        assert_eq!(query, doc! { "deleted_at": Bson::Null });
    }

    #[test]
    fn test_list_filter_orders_predicates_and_escapes_search() {
        let filter = AccountFilter {
            search: Some("a.b+c".to_string()),
            search_by: Some(SearchField::Email),
            role: Some(Role::User),
            verified: Some(false),
            include_deleted: true,
            ..AccountFilter::default()
        };

        let query = build_list_filter(&filter);
        let keys: Vec<&str> = query.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["role", "verified", "email"]);
        assert_eq!(
            query.get_document("email").unwrap(),
            &doc! { "$regex": r"a\.b\+c", "$options": "i" }
        );
    }

    #[test]
    fn test_search_without_allowed_field_is_ignored() {
        let filter = AccountFilter {
            search: Some("admin".to_string()),
            search_by: None,
            ..AccountFilter::default()
        };

        let query = build_list_filter(&filter);

        assert!(!query.contains_key("role"));
        assert!(!query.contains_key("name"));
        assert!(!query.contains_key("email"));
    }
}
