//! 계정 요청 DTO
//!
//! `validator` 로 요청 형태(이메일 형식, 길이)를 먼저 검사하고,
//! 비즈니스 규칙(중복 이메일, 비밀번호 확인 등)은 서비스 계층에서 검사합니다.

pub mod auth_request;
pub mod account_request;
pub mod list_query;

pub use auth_request::{LoginRequest, RegisterRequest};
pub use account_request::{CreateAccountRequest, UpdateAccountRequest};
pub use list_query::{AccountFilter, GetAccountQuery, ListAccountsQuery, SearchField};

use serde::{Deserialize, Deserializer};
use validator::ValidationErrors;
use crate::core::errors::AppError;

/// `validator` 검증 실패를 [`AppError::ValidationError`] 로 변환합니다.
///
/// 필드별 첫 번째 메시지만 모아서 하나의 문장으로 만듭니다.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errors)| {
            errors.first().map(|error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    messages.sort();

    AppError::ValidationError(messages.join(", "))
}

/// 문자열 필드의 앞뒤 공백을 역직렬화 단계에서 제거합니다.
///
/// 이메일 형식 검사가 공백 때문에 실패하지 않도록 `email` 필드에 붙입니다.
pub(crate) fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|value| value.trim().to_string())
}
