//! 관리자용 계정 생성/수정 요청 DTO
use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::config::AuthProvider;
use crate::domain::entities::Role;
use crate::domain::models::accounts::{AccountChanges, AccountDraft};

/// 관리자 계정 생성 요청
///
/// `role`, `provider` 는 비어 있으면 각각 `user`, `local` 로 처리됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAccountRequest {
    #[validate(length(min = 2, max = 100, message = "이름은 2-100자 사이여야 합니다"))]
    pub name: String,

    #[serde(deserialize_with = "super::trimmed")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,

    #[serde(default)]
    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_provider"))]
    pub provider: Option<String>,

    #[serde(default)]
    pub photo: Option<String>,

    #[serde(default)]
    pub verified: bool,
}

impl CreateAccountRequest {
    /// 검증을 통과한 요청을 서비스 입력으로 변환합니다.
    pub fn into_draft(self) -> AccountDraft {
        AccountDraft {
            name: self.name,
            email: self.email,
            password: self.password,
            role: parse_role(self.role.as_deref()),
            provider: parse_provider(self.provider.as_deref()),
            photo: self.photo,
            verified: self.verified,
        }
    }
}

/// 관리자 계정 수정 요청
///
/// 이메일은 중복 검사에만 사용되며 저장되지 않습니다.
/// `verified` 를 생략하면 기존 값이 유지됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    #[validate(length(min = 2, max = 100, message = "이름은 2-100자 사이여야 합니다"))]
    pub name: String,

    #[serde(deserialize_with = "super::trimmed")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,

    #[serde(default)]
    pub photo: Option<String>,

    #[serde(default)]
    pub verified: Option<bool>,
}

impl UpdateAccountRequest {
    pub fn into_changes(self) -> AccountChanges {
        AccountChanges {
            name: self.name,
            email: self.email,
            role: parse_role(self.role.as_deref()),
            photo: self.photo,
            verified: self.verified,
        }
    }
}

/// 비어 있거나 알 수 없는 값은 None (검증 단계에서 이미 걸러짐)
fn parse_role(role: Option<&str>) -> Option<Role> {
    role.filter(|r| !r.trim().is_empty())
        .and_then(|r| Role::from_str(r).ok())
}

fn parse_provider(provider: Option<&str>) -> Option<AuthProvider> {
    provider
        .filter(|p| !p.trim().is_empty())
        .and_then(|p| AuthProvider::from_str(p).ok())
}

/// 빈 문자열 또는 user/admin 만 허용
fn validate_role(role: &str) -> Result<(), ValidationError> {
    if role.trim().is_empty() || Role::from_str(role).is_ok() {
        return Ok(());
    }
    Err(ValidationError::new("invalid_role")
        .with_message("역할은 user 또는 admin 이어야 합니다".into()))
}

/// 빈 문자열 또는 local/google/facebook 만 허용
fn validate_provider(provider: &str) -> Result<(), ValidationError> {
    if provider.trim().is_empty() || AuthProvider::from_str(provider).is_ok() {
        return Ok(());
    }
    Err(ValidationError::new("invalid_provider")
        .with_message("provider는 local, google, facebook 중 하나여야 합니다".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update_request(role: Option<&str>) -> UpdateAccountRequest {
        UpdateAccountRequest {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            role: role.map(str::to_string),
            photo: None,
            verified: None,
        }
    }

    #[test]
    fn test_empty_role_is_accepted_and_becomes_none() {
        let request = update_request(Some(""));

        assert!(request.validate().is_ok());
        assert_eq!(request.into_changes().role, None);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!(update_request(Some("root")).validate().is_err());
        assert!(update_request(Some("admin")).validate().is_ok());
    }

    #[test]
    fn test_create_request_defaults() {
        let request: CreateAccountRequest = serde_json::from_str(
            r#"{"name":"Bob","email":"bob@example.com","password":"longpass1","provider":"google"}"#,
        )
        .unwrap();

        assert!(request.validate().is_ok());
        let draft = request.into_draft();
        assert_eq!(draft.role, None);
        assert_eq!(draft.provider, Some(AuthProvider::Google));
        assert!(!draft.verified);
    }

    #[test]
    fn test_create_request_rejects_short_password() {
        let request: CreateAccountRequest = serde_json::from_str(
            r#"{"name":"Bob","email":"bob@example.com","password":"short"}"#,
        )
        .unwrap();

        assert!(request.validate().is_err());
    }
}
