//! 인증 요청 DTO
//!
//! 회원가입과 로그인 요청 본문을 매핑합니다.
use serde::Deserialize;
use validator::Validate;
use crate::domain::models::accounts::Registration;

/// 회원가입 요청
///
/// ```json
/// {
///   "name": "Ann",
///   "email": "ann@example.com",
///   "password": "longpass1",
///   "passwordConfirm": "longpass1",
///   "photo": "ann.png"
/// }
/// ```
///
/// 비밀번호 길이와 일치 여부는 서비스에서 검사하므로 여기서는 형식만 확인합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[serde(deserialize_with = "super::trimmed")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    pub password: String,

    #[serde(alias = "passwordConfirm")]
    pub password_confirm: String,

    #[serde(default)]
    pub photo: Option<String>,
}

impl RegisterRequest {
    pub fn into_registration(self) -> Registration {
        Registration {
            name: self.name,
            email: self.email,
            password: self.password,
            password_confirm: self.password_confirm,
            photo: self.photo,
        }
    }
}

/// 로컬 로그인 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(deserialize_with = "super::trimmed")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_accepts_camel_case_confirmation() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"name":"Ann","email":"ann@example.com","password":"longpass1","passwordConfirm":"longpass1"}"#,
        )
        .unwrap();

        assert_eq!(request.password_confirm, "longpass1");
        assert!(request.photo.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_login_request_rejects_malformed_email() {
        let request = LoginRequest {
            email: "not-an-email".to_string(),
            password: "whatever".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_email_whitespace_is_trimmed_before_validation() {
        let request: LoginRequest = serde_json::from_str(
            r#"{"email":"  Ann@Example.com ","password":"longpass1"}"#,
        )
        .unwrap();

        assert_eq!(request.email, "Ann@Example.com");
        assert!(request.validate().is_ok());
    }
}
