//! # 계정 저장소
//!
//! 서비스 계층은 [`AccountStore`] trait에만 의존합니다.
//!
//! - [`account_repo::AccountRepository`] - MongoDB 구현 (`users` 컬렉션), 운영용 싱글톤
//! - [`memory_repo::InMemoryAccountStore`] - `HashMap` 구현, 개발/테스트용
//!
//! ## 질의 규칙
//!
//! 목록 조회는 두 구현 모두 같은 순서로 조건을 적용합니다.
//!
//! 1. 동등 조건 (role, provider, verified)
//! 2. 허용 목록 필드에 대한 대소문자 무시 부분 일치 검색
//! 3. 소프트 삭제 가시성
//! 4. `created_at` 내림차순, 같은 시각이면 id 오름차순 정렬
//! 5. offset / limit
//!
//! 전체 건수는 페이지네이션 이전에 같은 조건으로 계산합니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::core::errors::AppResult;
use crate::domain::dto::accounts::request::AccountFilter;
use crate::domain::entities::Account;

pub mod account_repo;
pub mod memory_repo;

pub use account_repo::{AccountDocument, AccountRepository};
pub use memory_repo::InMemoryAccountStore;

/// 계정 영속성 계약
///
/// 변경 연산은 조건에 맞는 레코드가 있었는지를 `bool` 로 돌려주며,
/// 서비스는 `false` 를 `NotFound` 로 변환합니다.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// 새 계정 저장. 이메일 유니크 제약 위반은 `ConflictError`.
    async fn insert(&self, account: &Account) -> AppResult<()>;

    async fn find_by_id(&self, id: Uuid, include_deleted: bool) -> AppResult<Option<Account>>;

    /// `email` 은 정규화된 값이어야 합니다.
    async fn find_by_email(&self, email: &str, include_deleted: bool) -> AppResult<Option<Account>>;

    /// 한 페이지의 계정과 페이지네이션 이전 전체 건수
    ///
    /// `filter.page` ≥ 1, `filter.per_page` ≥ 1 로 보정된 값을 받습니다.
    async fn list(&self, filter: &AccountFilter) -> AppResult<(Vec<Account>, u64)>;

    /// name, role, photo, verified, updated_at 만 기록합니다. 삭제된 계정은 대상이 아닙니다.
    async fn update_profile(&self, account: &Account) -> AppResult<bool>;

    /// 활성 계정에 삭제 시각을 기록합니다.
    async fn soft_delete(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<bool>;

    /// 삭제된 계정의 삭제 시각을 지웁니다.
    async fn restore(&self, id: Uuid) -> AppResult<bool>;

    /// 상태와 무관하게 레코드를 영구 삭제합니다.
    async fn hard_delete(&self, id: Uuid) -> AppResult<bool>;
}

/// 목록 조회의 건너뛸 개수. 아주 큰 페이지 번호는 `i64::MAX` 에서 포화됩니다.
pub(crate) fn offset(filter: &AccountFilter) -> u64 {
    let skipped = (filter.page.max(1) - 1).saturating_mul(filter.per_page.max(1));
    u64::try_from(skipped).unwrap_or(0)
}
