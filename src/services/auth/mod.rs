//! 인증 및 보안 서비스 모듈
//!
//! JWT 액세스 토큰과 bcrypt 비밀번호 해시를 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명, `exp`/`nbf` 검증
//! - 토큰마다 고유한 `jti`, 로그아웃 시 Redis 폐기 목록에 등록
//! - 비밀번호는 bcrypt 해시로만 보관
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{PasswordService, TokenService};
//!
//! let digest = PasswordService::default().hash("password123")?;
//! let issued = TokenService::instance().issue(&account)?;
//! ```

pub mod token_service;
pub mod password_service;

pub use token_service::*;
pub use password_service::*;
