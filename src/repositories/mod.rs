//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! `#[repository]` 매크로를 사용하여 싱글톤으로 관리되는 리포지토리들을 제공합니다.
//! 계정은 MongoDB, 토큰 폐기 목록은 Redis 에 저장합니다.
//!
//! # Features
//!
//! - 싱글톤 패턴을 통한 인스턴스 관리
//! - 서비스 계층이 의존하는 [`accounts::AccountStore`] trait 과 MongoDB/메모리 구현
//! - TTL 기반 토큰 폐기 목록
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::accounts::{AccountRepository, AccountStore};
//!
//! let account_repo = AccountRepository::instance();
//! let account = account_repo.find_by_email("ann@example.com", false).await?;
//! ```

pub mod accounts;
pub mod sessions;
