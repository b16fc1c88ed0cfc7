use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use crate::config::AuthProvider;
use crate::domain::entities::{Account, Role};
use crate::domain::models::accounts::AccountPage;
use crate::domain::models::token::IssuedToken;

/// 계정 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub provider: AuthProvider,
    pub photo: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// 소프트 삭제된 계정에만 존재
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        let deleted_at = account.deleted_at();
        let Account {
            id,
            name,
            email,
            role,
            provider,
            photo,
            verified,
            created_at,
            updated_at,
            ..
        } = account;

        Self {
            id,
            name,
            email,
            role,
            provider,
            photo,
            verified,
            created_at,
            updated_at,
            deleted_at,
        }
    }
}

/// `{ "user": { ... } }` 형태의 단건 응답
#[derive(Debug, Clone, Serialize)]
pub struct AccountDataResponse {
    pub user: AccountResponse,
}

impl From<Account> for AccountDataResponse {
    fn from(account: Account) -> Self {
        Self {
            user: AccountResponse::from(account),
        }
    }
}

/// 페이지 단위 목록 응답
#[derive(Debug, Clone, Serialize)]
pub struct AccountListResponse {
    pub items: Vec<AccountResponse>,
    pub total: u64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: u64,
}

impl From<AccountPage> for AccountListResponse {
    fn from(page: AccountPage) -> Self {
        Self {
            items: page.items.into_iter().map(AccountResponse::from).collect(),
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }
    }
}

/// 로그인 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    /// 액세스 토큰 만료까지 남은 시간 (초)
    pub expires_in: i64,
    pub user: AccountResponse,
}

impl LoginResponse {
    pub fn new(token: IssuedToken, account: Account) -> Self {
        Self {
            access_token: token.token,
            token_type: "Bearer".to_string(),
            expires_in: token.expires_in,
            user: AccountResponse::from(account),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AccountState, NewAccount};

    fn account() -> Account {
        Account::new(NewAccount {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password_hash: "$2b$04$secret-digest".to_string(),
            role: Role::Admin,
            provider: AuthProvider::Local,
            photo: None,
            verified: true,
        })
    }

    #[test]
    fn test_response_never_contains_password_hash() {
        let json = serde_json::to_string(&AccountResponse::from(account())).unwrap();

        assert!(!json.contains("password"));
        assert!(!json.contains("secret-digest"));
        assert!(!json.contains("deleted_at"));
        assert!(json.contains("\"role\":\"admin\""));
        assert!(json.contains("\"provider\":\"local\""));
    }

    #[test]
    fn test_deleted_account_exposes_deleted_at() {
        let mut account = account();
        account.state = AccountState::Deleted { at: Utc::now() };

        let value = serde_json::to_value(AccountDataResponse::from(account)).unwrap();

        assert!(value["user"]["deleted_at"].is_string());
    }
}
