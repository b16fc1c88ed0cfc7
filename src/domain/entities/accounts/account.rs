//! Account Entity Implementation
//!
//! 계정 엔티티의 핵심 구현체입니다.
//! 삭제 여부는 nullable 타임스탬프 대신 [`AccountState`] 합 타입으로 표현하고,
//! "활성 상태"는 파생 술어(`is_active`)로만 노출합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::config::{AccountConfig, AuthProvider};

/// 계정 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 일반 사용자
    #[default]
    User,
    /// 관리자
    Admin,
}

impl Role {
    /// 문자열에서 Role을 생성합니다. (대소문자 무관)
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Unsupported role: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// 계정의 생명주기 상태
///
/// ```text
///   create ──▶ Active ──soft_delete──▶ Deleted { at }
///                ▲                          │
///                └──────── restore ─────────┘
/// ```
///
/// 하드 삭제는 상태 전이가 아니라 레코드 자체의 제거입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountState {
    Active,
    Deleted { at: DateTime<Utc> },
}

/// 계정 엔티티
///
/// 시스템의 유일한 도메인 엔티티입니다. `password_hash` 는 외부로 직렬화되지
/// 않도록 응답 DTO 변환 단계에서 제외됩니다. 엔티티 자체는 `Serialize` 를
/// 구현하지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// 생성 시 할당되며 이후 변경되지 않음
    pub id: Uuid,
    pub name: String,
    /// 정규화된 이메일 (trim + lowercase)
    pub email: String,
    /// bcrypt 해시 (비밀번호 로그인이 불가능한 계정은 None)
    pub password_hash: Option<String>,
    pub role: Role,
    pub provider: AuthProvider,
    pub photo: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub state: AccountState,
}

/// 새 계정 생성에 필요한 값 묶음
///
/// 회원가입과 관리자 생성 경로가 공통으로 사용합니다.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub provider: AuthProvider,
    pub photo: Option<String>,
    pub verified: bool,
}

impl Account {
    /// 새 계정 생성
    ///
    /// 식별자와 타임스탬프를 할당하고, 이메일을 정규화하며,
    /// 비어 있는 프로필 이미지를 기본값으로 채웁니다.
    pub fn new(new_account: NewAccount) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            name: new_account.name.trim().to_string(),
            email: normalize_email(&new_account.email),
            password_hash: Some(new_account.password_hash),
            role: new_account.role,
            provider: new_account.provider,
            photo: photo_or_default(new_account.photo.as_deref()),
            verified: new_account.verified,
            created_at: now,
            updated_at: now,
            state: AccountState::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, AccountState::Active)
    }

    pub fn is_deleted(&self) -> bool {
        !self.is_active()
    }

    /// 삭제 시각 (활성 계정은 None)
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        match self.state {
            AccountState::Active => None,
            AccountState::Deleted { at } => Some(at),
        }
    }

    /// 비밀번호 인증이 가능한 계정인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.is_active()
            && matches!(self.provider, AuthProvider::Local)
            && self.password_hash.is_some()
    }
}

/// 이메일 정규화 (앞뒤 공백 제거 + 소문자 변환)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 비어 있는 프로필 이미지는 기본값으로 대체
pub fn photo_or_default(photo: Option<&str>) -> String {
    match photo.map(str::trim) {
        Some(photo) if !photo.is_empty() => photo.to_string(),
        _ => AccountConfig::DEFAULT_PHOTO.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_account(email: &str, photo: Option<&str>) -> Account {
        Account::new(NewAccount {
            name: " Ann ".to_string(),
            email: email.to_string(),
            password_hash: "$2b$04$hash".to_string(),
            role: Role::User,
            provider: AuthProvider::Local,
            photo: photo.map(str::to_string),
            verified: false,
        })
    }

    #[test]
    fn test_new_account_normalizes_fields() {
        let account = new_account("  ANN@Example.com ", None);

        assert_eq!(account.name, "Ann");
        assert_eq!(account.email, "ann@example.com");
        assert_eq!(account.photo, "default.png");
        assert_eq!(account.created_at, account.updated_at);
        assert!(account.is_active());
        assert_eq!(account.deleted_at(), None);
    }

    #[test]
    fn test_blank_photo_falls_back_to_default() {
        assert_eq!(new_account("a@b.c", Some("   ")).photo, "default.png");
        assert_eq!(new_account("a@b.c", Some("me.png")).photo, "me.png");
    }

    #[test]
    fn test_deleted_state_predicates() {
        let mut account = new_account("a@b.c", None);
        let at = Utc::now();
        account.state = AccountState::Deleted { at };

        assert!(account.is_deleted());
        assert_eq!(account.deleted_at(), Some(at));
        assert!(!account.can_authenticate_with_password());
    }

    #[test]
    fn test_external_provider_cannot_use_password() {
        let mut account = new_account("a@b.c", None);
        account.provider = AuthProvider::Google;

        assert!(!account.can_authenticate_with_password());
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
        assert_eq!(Role::from_str("user").unwrap(), Role::User);
        assert!(Role::from_str("root").is_err());
        assert_eq!(Role::default().as_str(), "user");
    }
}
