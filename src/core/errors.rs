//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 계정 서비스의 모든 실패는 [`AppError`]의 닫힌 집합으로 표현됩니다.
//! 서비스 계층은 에러 *종류*만 결정하고, HTTP 상태 코드 변환은
//! `actix_web::ResponseError` 구현에서 [`ErrorKind`]에 대한 완전 매칭으로 처리합니다.
//! 에러 메시지 문자열을 비교해서 상태 코드를 고르는 코드는 어디에도 없어야 합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn register(name: &str) -> Result<Account, AppError> {
//!     if name.trim().is_empty() {
//!         return Err(AppError::ValidationError("이름은 필수입니다".to_string()));
//!     }
//!     // ...
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 비즈니스 에러(검증, 충돌, 미존재 등)와 인프라 에러(MongoDB, Redis)를
/// 모두 포괄합니다. 인프라 에러의 상세 내용은 로그로만 남기고
/// 클라이언트에게는 일반적인 메시지만 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 값 누락 또는 형식 오류 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 비밀번호 확인 불일치 (400 Bad Request)
    #[error("비밀번호가 일치하지 않습니다")]
    PasswordMismatch,

    /// 유니크 제약 위반, 예: 이메일 중복 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 식별자 형식 오류 (400 Bad Request)
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// 삭제되지 않은 레코드를 찾을 수 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 활성 상태 계정에 대한 복구 요청 (400 Bad Request)
    #[error("Not deleted: {0}")]
    NotDeleted(String),

    /// 로그인 실패 (401 Unauthorized)
    ///
    /// 이메일 미존재와 비밀번호 불일치를 구분하지 않습니다.
    #[error("잘못된 이메일 또는 비밀번호입니다")]
    InvalidCredentials,

    /// 토큰 누락/만료/위조 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// MongoDB 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 그 외 예기치 못한 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// [`AppError`]의 종류 태그
///
/// 경계 계층이 에러를 분류할 때 사용하는 필드 없는 열거형입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Mismatch,
    Conflict,
    InvalidId,
    NotFound,
    NotDeleted,
    InvalidCredentials,
    Authentication,
    Authorization,
    Internal,
}

impl ErrorKind {
    /// 에러 종류에 대응하는 HTTP 상태 코드
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::Validation
            | ErrorKind::Mismatch
            | ErrorKind::InvalidId
            | ErrorKind::NotDeleted => StatusCode::BAD_REQUEST,
            ErrorKind::InvalidCredentials | ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::Authorization => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    /// 에러 종류 태그를 반환합니다.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::ValidationError(_) => ErrorKind::Validation,
            AppError::PasswordMismatch => ErrorKind::Mismatch,
            AppError::ConflictError(_) => ErrorKind::Conflict,
            AppError::InvalidId(_) => ErrorKind::InvalidId,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::NotDeleted(_) => ErrorKind::NotDeleted,
            AppError::InvalidCredentials => ErrorKind::InvalidCredentials,
            AppError::AuthenticationError(_) => ErrorKind::Authentication,
            AppError::AuthorizationError(_) => ErrorKind::Authorization,
            AppError::DatabaseError(_) | AppError::RedisError(_) | AppError::InternalError(_) => {
                ErrorKind::Internal
            }
        }
    }

    /// 클라이언트에게 노출할 메시지
    ///
    /// 내부 에러는 상세 내용을 감추고 고정 문구를 사용합니다.
    pub fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::Internal => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 내부 에러는 `error!` 로 상세 내용을 기록한 뒤 일반 메시지로 응답합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if self.kind() == ErrorKind::Internal {
            log::error!("요청 처리 중 내부 에러: {}", self);
        }

        actix_web::HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "data": null,
            "message": self.public_message()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::RedisError(e.to_string())
    }
}
