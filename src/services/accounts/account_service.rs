//! # 계정 관리 서비스 구현
//!
//! 계정의 전체 생명주기(가입, 로그인, 조회, 수정, 소프트 삭제, 복구, 영구 삭제)를
//! 담당하는 비즈니스 로직입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        AccountService                        │
//! │                                                              │
//! │  register / create ─▶ 검증 ─▶ 중복 확인 ─▶ bcrypt ─▶ insert   │
//! │  authenticate      ─▶ 조회 ─▶ 상태 확인 ─▶ verify ─▶ JWT      │
//! │  update / delete   ─▶ id 파싱 ─▶ 상태 확인 ─▶ 변경            │
//! └──────────────────────────────────────────────────────────────┘
//!          │                    │                    │
//!          ▼                    ▼                    ▼
//!   dyn AccountStore     PasswordService       TokenService
//!   (MongoDB / 메모리)     (bcrypt)              (HS256)
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - 로그인 실패 사유(이메일 없음, 삭제된 계정, 소셜 계정, 비밀번호 불일치)는
//!   응답에서 구분되지 않습니다. 사유는 `warn` 로그에만 남습니다.
//! - 이메일 중복 검사는 삭제된 계정까지 포함합니다. 유니크 인덱스가
//!   동시 가입 경쟁의 최종 방어선입니다.
//! - 비밀번호 해시는 엔티티 밖으로 나가지 않습니다.

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;
use async_trait::async_trait;
use chrono::Utc;
use once_cell::sync::OnceCell;
use uuid::Uuid;
use crate::config::{AccountConfig, AuthProvider, PasswordConfig};
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::dto::accounts::request::AccountFilter;
use crate::domain::entities::{normalize_email, photo_or_default, Account, NewAccount, Role};
use crate::domain::models::accounts::{
    AccountChanges, AccountDraft, AccountPage, AccountStats, Registration,
};
use crate::domain::models::token::IssuedToken;
use crate::repositories::accounts::{AccountRepository, AccountStore};
use crate::services::auth::{PasswordService, TokenService};

const ACCOUNT_SERVICE_NAME: &str = "account_service";

static ACCOUNT_SERVICE: OnceCell<Arc<AccountService>> = OnceCell::new();

/// 계정 관리 비즈니스 로직 서비스
///
/// 저장소는 [`AccountStore`] trait 객체로 받습니다. 운영 싱글톤은
/// [`AccountService::instance`] 가 MongoDB 리포지토리로 조립하고,
/// 테스트는 [`AccountService::new`] 에 메모리 저장소를 넘깁니다.
///
/// ```rust,ignore
/// let accounts = AccountService::instance();
///
/// let account = accounts.register(registration).await?;
/// let (issued, account) = accounts.authenticate("ann@example.com", "longpass1").await?;
/// ```
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    passwords: Arc<PasswordService>,
    tokens: Arc<TokenService>,
}

impl AccountService {
    pub fn new(
        store: Arc<dyn AccountStore>,
        passwords: Arc<PasswordService>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self { store, passwords, tokens }
    }

    /// 싱글톤 인스턴스
    ///
    /// 첫 호출 시 `ServiceLocator` 에서 `AccountRepository` 와 `TokenService` 를
    /// 꺼내 조립합니다. `Database` 가 먼저 등록되어 있어야 합니다.
    pub fn instance() -> Arc<Self> {
        ACCOUNT_SERVICE
            .get_or_init(|| {
                let store: Arc<dyn AccountStore> = ServiceLocator::get::<AccountRepository>();
                let passwords = Arc::new(PasswordService::new(PasswordConfig::bcrypt_cost()));
                let tokens = ServiceLocator::get::<TokenService>();

                Arc::new(Self::new(store, passwords, tokens))
            })
            .clone()
    }

    /// 회원가입
    ///
    /// # 반환값
    ///
    /// * `Ok(Account)` - role=user, provider=local, verified=false 로 생성된 계정
    /// * `Err(AppError::ValidationError)` - 필수 값 누락 또는 비밀번호 길이 부족
    /// * `Err(AppError::PasswordMismatch)` - 비밀번호 확인 불일치
    /// * `Err(AppError::ConflictError)` - 이미 사용 중인 이메일
    pub async fn register(&self, registration: Registration) -> AppResult<Account> {
        let start_time = Instant::now();

        require_non_empty(&registration.name, "이름")?;
        require_non_empty(&registration.email, "이메일")?;
        require_password(&registration.password)?;

        if registration.password != registration.password_confirm {
            return Err(AppError::PasswordMismatch);
        }

        let email = normalize_email(&registration.email);
        self.ensure_email_available(&email).await?;

        let account = Account::new(NewAccount {
            name: registration.name,
            email,
            password_hash: self.hash_password(&registration.password)?,
            role: Role::User,
            provider: AuthProvider::Local,
            photo: registration.photo,
            verified: false,
        });

        self.store.insert(&account).await?;

        log::info!("✅ 회원가입 완료: {} ({})", account.email, account.id);
        log::debug!("Total registration took: {:?}", start_time.elapsed());

        Ok(account)
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 성공 시 액세스 토큰과 계정을 함께 반환합니다. 실패 사유와 무관하게
    /// 항상 같은 `InvalidCredentials` 를 돌려줍니다.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<(IssuedToken, Account)> {
        let email = normalize_email(email);

        let Some(account) = self.store.find_by_email(&email, false).await? else {
            self.passwords.verify_absent(password);
            log::warn!("🔒 로그인 실패 - 등록되지 않은 이메일: {}", email);
            return Err(AppError::InvalidCredentials);
        };

        let password_hash = match account.password_hash.as_deref() {
            Some(digest) if account.can_authenticate_with_password() => digest,
            _ => {
                self.passwords.verify_absent(password);
                log::warn!("🔒 로그인 실패 - 비밀번호 로그인 불가 계정: {}", account.id);
                return Err(AppError::InvalidCredentials);
            }
        };

        if !self.passwords.verify(password, password_hash)? {
            log::warn!("🔒 로그인 실패 - 비밀번호 불일치: {}", account.id);
            return Err(AppError::InvalidCredentials);
        }

        let issued = self.tokens.issue(&account)?;
        log::info!("🔑 로그인 성공: {}", account.id);

        Ok((issued, account))
    }

    /// 활성 계정 조회
    pub async fn get_by_id(&self, id: &str) -> AppResult<Account> {
        let id = parse_id(id)?;

        self.store
            .find_by_id(id, false)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// 삭제된 계정까지 포함한 조회
    pub async fn get_by_id_including_deleted(&self, id: &str) -> AppResult<Account> {
        let id = parse_id(id)?;

        self.store
            .find_by_id(id, true)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// 필터와 페이지네이션을 적용한 목록 조회
    ///
    /// page < 1 은 1로, per_page 가 1..=100 범위를 벗어나면 10으로 보정합니다.
    pub async fn list(&self, filter: AccountFilter) -> AppResult<AccountPage> {
        let start_time = Instant::now();
        let filter = clamp_pagination(filter);

        let (items, total) = self.store.list(&filter).await?;

        log::debug!(
            "계정 목록 조회: page={} per_page={} total={} ({:?})",
            filter.page,
            filter.per_page,
            total,
            start_time.elapsed()
        );

        Ok(AccountPage {
            items,
            total,
            page: filter.page,
            per_page: filter.per_page,
            total_pages: total_pages(total, filter.per_page),
        })
    }

    /// 관리자 계정 생성
    ///
    /// 비밀번호 확인 없이 역할과 출처를 직접 지정할 수 있습니다.
    pub async fn create(&self, draft: AccountDraft) -> AppResult<Account> {
        require_non_empty(&draft.name, "이름")?;
        require_non_empty(&draft.email, "이메일")?;
        require_password(&draft.password)?;

        let email = normalize_email(&draft.email);
        self.ensure_email_available(&email).await?;

        let account = Account::new(NewAccount {
            name: draft.name,
            email,
            password_hash: self.hash_password(&draft.password)?,
            role: draft.role.unwrap_or_default(),
            provider: draft.provider.unwrap_or(AuthProvider::Local),
            photo: draft.photo,
            verified: draft.verified,
        });

        self.store.insert(&account).await?;
        log::info!("✅ 관리자 계정 생성: {} ({}, {})", account.email, account.id, account.role.as_str());

        Ok(account)
    }

    /// 계정 프로필 수정
    ///
    /// 이메일은 다른 계정과의 중복 검사에만 쓰이고 저장되지 않습니다.
    /// 비밀번호도 이 경로로는 바뀌지 않습니다.
    pub async fn update(&self, id: &str, changes: AccountChanges) -> AppResult<Account> {
        let id = parse_id(id)?;

        require_non_empty(&changes.name, "이름")?;
        require_non_empty(&changes.email, "이메일")?;

        let mut account = self
            .store
            .find_by_id(id, false)
            .await?
            .ok_or_else(|| not_found(id))?;

        let email = normalize_email(&changes.email);
        if email != account.email {
            let taken = self
                .store
                .find_by_email(&email, true)
                .await?
                .is_some_and(|other| other.id != account.id);

            if taken {
                return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
            }
        }

        account.name = changes.name.trim().to_string();
        account.role = changes.role.unwrap_or_default();
        account.photo = photo_or_default(changes.photo.as_deref());
        account.verified = changes.verified.unwrap_or(account.verified);
        account.updated_at = Utc::now();

        if !self.store.update_profile(&account).await? {
            return Err(not_found(id));
        }

        log::info!("✏️ 계정 수정: {}", account.id);
        Ok(account)
    }

    /// 소프트 삭제
    ///
    /// 이미 삭제된 계정은 존재하지 않는 계정과 같게 취급합니다.
    pub async fn soft_delete(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id)?;

        if !self.store.soft_delete(id, Utc::now()).await? {
            return Err(not_found(id));
        }

        log::info!("🗑️ 계정 소프트 삭제: {}", id);
        Ok(())
    }

    /// 소프트 삭제된 계정 복구
    pub async fn restore(&self, id: &str) -> AppResult<Account> {
        let id = parse_id(id)?;

        let account = self
            .store
            .find_by_id(id, true)
            .await?
            .ok_or_else(|| not_found(id))?;

        if account.is_active() || !self.store.restore(id).await? {
            return Err(AppError::NotDeleted(format!("삭제되지 않은 계정입니다: {}", id)));
        }

        log::info!("♻️ 계정 복구: {}", id);

        self.store
            .find_by_id(id, false)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// 영구 삭제 (상태와 무관)
    pub async fn hard_delete(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id)?;

        if !self.store.hard_delete(id).await? {
            return Err(not_found(id));
        }

        log::info!("💥 계정 영구 삭제: {}", id);
        Ok(())
    }

    /// 활성 계정 통계
    ///
    /// `per_page = 1` 목록 조회의 전체 건수를 세 번 사용합니다.
    pub async fn stats(&self) -> AppResult<AccountStats> {
        let total_users = self.count(AccountFilter::default()).await?;
        let verified_users = self
            .count(AccountFilter { verified: Some(true), ..AccountFilter::default() })
            .await?;
        let admin_users = self
            .count(AccountFilter { role: Some(Role::Admin), ..AccountFilter::default() })
            .await?;

        Ok(AccountStats {
            total_users,
            verified_users,
            admin_users,
            regular_users: total_users.saturating_sub(admin_users),
            unverified_users: total_users.saturating_sub(verified_users),
        })
    }

    async fn count(&self, filter: AccountFilter) -> AppResult<u64> {
        let page = self.list(AccountFilter { per_page: 1, ..filter }).await?;
        Ok(page.total)
    }

    async fn ensure_email_available(&self, email: &str) -> AppResult<()> {
        if self.store.find_by_email(email, true).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }
        Ok(())
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        let hash_start = Instant::now();
        let digest = self.passwords.hash(password)?;
        log::debug!("Password hashing took: {:?} (cost {})", hash_start.elapsed(), self.passwords.cost());
        Ok(digest)
    }
}

/// 전체 건수와 페이지 크기로 전체 페이지 수를 계산합니다.
///
/// ```rust,ignore
/// assert_eq!(total_pages(0, 10), 0);
/// assert_eq!(total_pages(25, 10), 3);
/// ```
pub fn total_pages(total: u64, per_page: i64) -> u64 {
    if total == 0 || per_page <= 0 {
        return 0;
    }
    total.div_ceil(per_page as u64)
}

fn clamp_pagination(filter: AccountFilter) -> AccountFilter {
    let page = filter.page.max(AccountConfig::DEFAULT_PAGE);
    let per_page = if (1..=AccountConfig::MAX_PER_PAGE).contains(&filter.per_page) {
        filter.per_page
    } else {
        AccountConfig::DEFAULT_PER_PAGE
    };

    AccountFilter { page, per_page, ..filter }
}

fn parse_id(id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(id.trim()).map_err(|_| AppError::InvalidId(id.to_string()))
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("계정을 찾을 수 없습니다: {}", id))
}

fn require_non_empty(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::ValidationError(format!("{}은(는) 필수입니다", field)));
    }
    Ok(())
}

fn require_password(password: &str) -> AppResult<()> {
    if password.trim().is_empty() {
        return Err(AppError::ValidationError("비밀번호는 필수입니다".to_string()));
    }
    if password.chars().count() < AccountConfig::MIN_PASSWORD_LENGTH {
        return Err(AppError::ValidationError(format!(
            "비밀번호는 최소 {}자 이상이어야 합니다",
            AccountConfig::MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

#[async_trait]
impl Service for AccountService {
    fn name(&self) -> &str {
        ACCOUNT_SERVICE_NAME
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        log::info!("Service {} initialized", self.name());
        Ok(())
    }
}

inventory::submit! {
    ServiceRegistration {
        name: ACCOUNT_SERVICE_NAME,
        constructor: || Box::new(AccountService::instance()) as Box<dyn Any + Send + Sync>,
    }
}
