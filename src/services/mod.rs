//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로 또는 같은 규약의 수동 등록으로 싱글톤 관리되는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 계정 생명주기 관리 (가입, 조회, 수정, 소프트 삭제, 복구, 영구 삭제)
//! - JWT 액세스 토큰 발급/검증
//! - bcrypt 비밀번호 해시
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{accounts::AccountService, auth::TokenService};
//!
//! let account_service = AccountService::instance();
//! let token_service = TokenService::instance();
//! ```

pub mod accounts;
pub mod auth;
