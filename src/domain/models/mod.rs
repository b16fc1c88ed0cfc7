//! # Domain Models
//!
//! 엔티티나 HTTP DTO가 아닌 값 객체들을 모아 둔 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`accounts`] - 계정 서비스 입력(Registration, AccountDraft, AccountChanges)과
//!   출력(AccountPage, AccountStats)
//! - [`auth`] - 인증 컨텍스트 (AuthenticatedUser, RequiredRole)
//! - [`token`] - JWT 클레임과 발급 결과
//!
//! ## 데이터 흐름
//!
//! ```text
//! HTTP Request ─▶ DTO ─▶ models::accounts::* ─▶ AccountService ─▶ Account
//!                                                    │
//! Authorization ─▶ TokenClaims ─▶ AuthenticatedUser ─┘
//! ```

pub mod accounts;
pub mod auth;
pub mod token;
